use crate::color::Color;
use crate::config::LightConfig;

/// Plain copy of the light fields worth persisting
///
/// The light does not serialize itself. Callers store these values in
/// whatever format their storage uses and hand them back on boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightSnapshot {
    pub power: bool,
    pub brightness: u8,
    pub color: Color,
    /// Color temperature in mired
    pub color_temperature: u16,
    pub gamma_correction: bool,
}

impl From<&LightConfig> for LightSnapshot {
    fn from(config: &LightConfig) -> Self {
        Self {
            power: config.power,
            brightness: config.brightness,
            color: config.color,
            color_temperature: config.color_temperature,
            gamma_correction: config.gamma_correction,
        }
    }
}

impl Default for LightSnapshot {
    fn default() -> Self {
        Self::from(&LightConfig::DEFAULT)
    }
}
