//! Black-body color temperature to RGB
//!
//! Uses the Tanner Helland approximation. The fit coefficients are
//! calibrated against Kelvin / 100 and must not be changed, other devices
//! of the product line produce the same colors for the same mired value.

use super::{Color, LEVEL_MAX};

/// Lowest temperature the approximation accepts
pub const KELVIN_MIN: u32 = 1_000;
/// Highest temperature the approximation accepts
pub const KELVIN_MAX: u32 = 40_000;

const MIRED_SCALE: u32 = 1_000_000;

/// Convert a mired value to Kelvin
///
/// Zero mired is treated as one.
pub const fn mired_to_kelvin(mired: u16) -> u32 {
    let mired = if mired == 0 { 1 } else { mired as u32 };
    MIRED_SCALE / mired
}

/// Convert a Kelvin value to mired, saturating at `u16::MAX`
#[allow(clippy::cast_possible_truncation)]
pub const fn kelvin_to_mired(kelvin: u32) -> u16 {
    if kelvin == 0 {
        return u16::MAX;
    }
    let mired = MIRED_SCALE / kelvin;
    if mired > u16::MAX as u32 {
        u16::MAX
    } else {
        mired as u16
    }
}

#[inline]
/// Convert a color temperature in mired to an RGB color
///
/// The temperature is clamped to 1000K..=40000K. The white channel of the
/// result is always zero.
pub fn temperature_to_rgb(mired: u16) -> Color {
    let temp = mired_to_kelvin(mired).clamp(KELVIN_MIN, KELVIN_MAX) / 100;
    let temp_f = f64::from(temp);

    let red = if temp <= 66 {
        f64::from(LEVEL_MAX)
    } else {
        329.698_727_446 * libm::pow(f64::from(temp - 60), -0.133_204_759_2)
    };

    let green = if temp <= 66 {
        99.470_802_586_1 * libm::log(temp_f) - 161.119_568_166_1
    } else {
        288.122_169_528_3 * libm::pow(temp_f, -0.075_514_849_2)
    };

    let blue = if temp >= 66 {
        f64::from(LEVEL_MAX)
    } else if temp <= 19 {
        0.0
    } else {
        138.517_731_223_1 * libm::log(f64::from(temp - 10)) - 305.044_792_730_7
    };

    Color::from_rgb(to_level(red), to_level(green), to_level(blue))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_level(value: f64) -> u8 {
    value.clamp(0.0, f64::from(LEVEL_MAX)) as u8
}
