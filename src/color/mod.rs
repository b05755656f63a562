mod temperature;

pub use temperature::{
    KELVIN_MAX, KELVIN_MIN, kelvin_to_mired, mired_to_kelvin, temperature_to_rgb,
};
use smart_leds::{RGB8, RGBW, White};

/// The maximum level used for color channels and brightness
pub const LEVEL_MAX: u8 = u8::MAX;

/// Levels of the four color channels of the bulb
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub white: u8,
}

/// One independently drivable LED output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelRole {
    Red,
    Green,
    Blue,
    White,
}

impl ChannelRole {
    /// All roles in driver write order
    pub const ALL: [ChannelRole; 4] = [
        ChannelRole::Red,
        ChannelRole::Green,
        ChannelRole::Blue,
        ChannelRole::White,
    ];
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8, white: u8) -> Self {
        Self {
            red,
            green,
            blue,
            white,
        }
    }

    /// Create a color with the white channel off
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 0)
    }

    /// Create a color from a u32 value (0xRRGGBB format), white channel off
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_rgb_u32(color: u32) -> Self {
        Self::from_rgb(
            ((color >> 16) & 0xFF) as u8,
            ((color >> 8) & 0xFF) as u8,
            (color & 0xFF) as u8,
        )
    }

    /// Copy of this color with the red, green and blue channels replaced
    #[must_use]
    pub const fn with_rgb(self, red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, self.white)
    }

    /// Copy of this color with the white channel replaced
    #[must_use]
    pub const fn with_white(self, white: u8) -> Self {
        Self::new(self.red, self.green, self.blue, white)
    }

    /// Level of the channel with the given role
    pub const fn channel(self, role: ChannelRole) -> u8 {
        match role {
            ChannelRole::Red => self.red,
            ChannelRole::Green => self.green,
            ChannelRole::Blue => self.blue,
            ChannelRole::White => self.white,
        }
    }

    pub fn set_channel(&mut self, role: ChannelRole, level: u8) {
        match role {
            ChannelRole::Red => self.red = level,
            ChannelRole::Green => self.green = level,
            ChannelRole::Blue => self.blue = level,
            ChannelRole::White => self.white = level,
        }
    }
}

impl From<Color> for RGB8 {
    fn from(color: Color) -> Self {
        RGB8::new(color.red, color.green, color.blue)
    }
}

impl From<RGB8> for Color {
    fn from(rgb: RGB8) -> Self {
        Color::from_rgb(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Color> for RGBW<u8> {
    fn from(color: Color) -> Self {
        Self {
            r: color.red,
            g: color.green,
            b: color.blue,
            a: White(color.white),
        }
    }
}

impl From<RGBW<u8>> for Color {
    fn from(rgbw: RGBW<u8>) -> Self {
        Color::new(rgbw.r, rgbw.g, rgbw.b, rgbw.a.0)
    }
}
