//! Batched light changes
//!
//! Network handlers receive commands that touch several fields at once.
//! A [`LightIntent`] carries such a command so it can be applied with a
//! single recomputation of the channel levels.

/// Represents a user intent to change the light state.
///
/// Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LightIntent {
    pub power: Option<bool>,
    /// Brightness level, values above 255 are clamped
    pub brightness: Option<u16>,
    /// Red, green and blue levels. Takes precedence over `color_temperature`.
    pub color: Option<(u8, u8, u8)>,
    pub white: Option<u8>,
    /// Color temperature in mired
    pub color_temperature: Option<u16>,
    pub gamma_correction: Option<bool>,
}

impl LightIntent {
    /// Check if the intent changes nothing
    pub const fn is_empty(&self) -> bool {
        self.power.is_none() && !self.changes_output() && self.gamma_correction.is_none()
    }

    /// Check if the intent writes a color, white, temperature or brightness
    pub const fn changes_output(&self) -> bool {
        self.brightness.is_some()
            || self.color.is_some()
            || self.white.is_some()
            || self.color_temperature.is_some()
    }
}
