use crate::color::LEVEL_MAX;

/// Linearly map an 8-bit level from `0..=255` onto `0..=max`
///
/// Uses integer math and truncates, so `map8(255, max) == max` and
/// `map8(value, 255) == value`.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn map8(value: u8, max: u8) -> u8 {
    ((value as u16 * max as u16) / LEVEL_MAX as u16) as u8
}

/// Saturate a wide level to the 8-bit range
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn clamp8(value: u16) -> u8 {
    if value > LEVEL_MAX as u16 {
        LEVEL_MAX
    } else {
        value as u8
    }
}
