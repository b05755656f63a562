use crate::color::Color;

/// Whether color and brightness writes switch the light on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PowerPolicy {
    /// Only `set_state` changes power
    #[default]
    Explicit,
    /// Every color, white, temperature or brightness write also powers on
    OnWrite,
}

/// Power state to take when restoring a saved state at boot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PowerUpMode {
    /// Always start switched off
    #[default]
    Off,
    /// Always start switched on
    On,
    /// Use the saved power state
    Restore,
}

/// Factory defaults of the light
#[derive(Debug, Clone)]
pub struct LightConfig {
    pub power: bool,
    pub brightness: u8,
    pub color: Color,
    /// Color temperature in mired
    pub color_temperature: u16,
    pub gamma_correction: bool,
    pub policy: PowerPolicy,
}

impl LightConfig {
    /// Quarter brightness, dim neutral color, 2700K setting, switched off
    pub const DEFAULT: Self = Self {
        power: false,
        brightness: u8::MAX >> 2,
        color: Color::from_rgb(u8::MAX >> 2, u8::MAX >> 2, u8::MAX >> 2),
        color_temperature: 370,
        gamma_correction: false,
        policy: PowerPolicy::Explicit,
    };
}

impl Default for LightConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
