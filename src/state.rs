#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Color, temperature_to_rgb};
use crate::config::{LightConfig, PowerPolicy, PowerUpMode};
use crate::driver::ChannelDriver;
use crate::gamma::gamma8;
use crate::intent::LightIntent;
use crate::math8::{clamp8, map8};
use crate::snapshot::LightSnapshot;

/// State of an RGBW bulb
///
/// Owns the driver and is the only writer of channel levels. Every color
/// or brightness change recomputes all four output levels and pushes them
/// to the driver.
pub struct LightState<D> {
    driver: D,
    color: Color,
    brightness: u8,
    /// Last requested color temperature in mired, as given
    color_temperature: u16,
    gamma_correction: bool,
    power: bool,
    policy: PowerPolicy,
    /// Levels last pushed to the driver
    output: Color,
}

impl<D: ChannelDriver> LightState<D> {
    /// Create a new light and initialize the driver channels
    pub fn new(driver: D, config: &LightConfig) -> Self {
        let mut light = Self {
            driver,
            color: config.color,
            brightness: config.brightness,
            color_temperature: config.color_temperature,
            gamma_correction: config.gamma_correction,
            power: config.power,
            policy: config.policy,
            output: Color::BLACK,
        };
        light.set_rgbw();
        light.driver.set_enabled(light.power);

        light
    }

    /// Returns the current power state
    pub const fn state(&self) -> bool {
        self.power
    }

    /// Switch the output on or off
    ///
    /// Color and brightness are kept.
    pub fn set_state(&mut self, on: bool) {
        #[cfg(feature = "esp32-log")]
        println!("[LightState.set_state] power {:?}", on);
        self.power = on;
        self.driver.set_enabled(on);
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Set the brightness, levels above 255 are clamped
    pub fn set_brightness(&mut self, level: u16) {
        self.brightness = clamp8(level);
        self.refresh();
    }

    /// Returns the raw RGBW levels, before gamma and brightness
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Set the red, green and blue levels. White is not changed.
    pub fn set_color(&mut self, red: u8, green: u8, blue: u8) {
        self.color = self.color.with_rgb(red, green, blue);
        self.refresh();
    }

    /// Set the white level. Red, green and blue are not changed.
    pub fn set_white(&mut self, white: u8) {
        self.color = self.color.with_white(white);
        self.refresh();
    }

    /// Returns the last color temperature set, in mired
    ///
    /// This is not derived from the current color, a later
    /// [`set_color`](Self::set_color) does not change it.
    pub const fn color_temperature(&self) -> u16 {
        self.color_temperature
    }

    /// Set red, green and blue from a color temperature in mired
    pub fn set_color_temperature(&mut self, temperature: u16) {
        let rgb = self.color_temperature_to_rgb(temperature);
        self.color = self.color.with_rgb(rgb.red, rgb.green, rgb.blue);
        self.refresh();
    }

    /// Convert a color temperature in mired to RGB
    ///
    /// Remembers `temperature` as the color temperature setting but does
    /// not touch the color. Only red, green and blue of the result are
    /// meaningful.
    pub fn color_temperature_to_rgb(&mut self, temperature: u16) -> Color {
        self.color_temperature = temperature;
        temperature_to_rgb(temperature)
    }

    pub const fn has_gamma_correction(&self) -> bool {
        self.gamma_correction
    }

    /// Enable or disable gamma correction of the red, green and blue channels
    pub fn use_gamma_correction(&mut self, enabled: bool) {
        self.gamma_correction = enabled;
        self.set_rgbw();
    }

    pub const fn policy(&self) -> PowerPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: PowerPolicy) {
        self.policy = policy;
    }

    /// Levels last pushed to the driver
    pub const fn output(&self) -> Color {
        self.output
    }

    /// Apply several changes with a single driver update
    ///
    /// An explicit `power` in the intent always wins over the power policy.
    pub fn apply(&mut self, intent: &LightIntent) {
        if let Some(enabled) = intent.gamma_correction {
            self.gamma_correction = enabled;
        }
        if let Some(level) = intent.brightness {
            self.brightness = clamp8(level);
        }
        if let Some((red, green, blue)) = intent.color {
            self.color = self.color.with_rgb(red, green, blue);
        } else if let Some(temperature) = intent.color_temperature {
            let rgb = self.color_temperature_to_rgb(temperature);
            self.color = self.color.with_rgb(rgb.red, rgb.green, rgb.blue);
        }
        if let Some(white) = intent.white {
            self.color = self.color.with_white(white);
        }

        if intent.changes_output() || intent.gamma_correction.is_some() {
            self.set_rgbw();
        }

        match intent.power {
            Some(on) => self.set_state(on),
            None if intent.changes_output() && self.policy == PowerPolicy::OnWrite => {
                self.set_state(true);
            }
            None => {}
        }
    }

    /// Copy of the fields worth persisting
    pub const fn snapshot(&self) -> LightSnapshot {
        LightSnapshot {
            power: self.power,
            brightness: self.brightness,
            color: self.color,
            color_temperature: self.color_temperature,
            gamma_correction: self.gamma_correction,
        }
    }

    /// Restore a saved state, picking the power state by `mode`
    pub fn restore(&mut self, snapshot: &LightSnapshot, mode: PowerUpMode) {
        self.brightness = snapshot.brightness;
        self.color = snapshot.color;
        self.color_temperature = snapshot.color_temperature;
        self.gamma_correction = snapshot.gamma_correction;
        self.set_rgbw();

        let power = match mode {
            PowerUpMode::Off => false,
            PowerUpMode::On => true,
            PowerUpMode::Restore => snapshot.power,
        };
        self.set_state(power);
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Push new levels, then power on if the policy asks for it
    fn refresh(&mut self) {
        self.set_rgbw();
        if self.policy == PowerPolicy::OnWrite {
            self.set_state(true);
        }
    }

    /// Derive the output levels and push them to the driver
    ///
    /// Gamma applies to red, green and blue only. All four channels are then
    /// scaled from `0..=255` down to `0..=brightness`.
    fn set_rgbw(&mut self) {
        let gamma_correction = self.gamma_correction;
        let correct = |value: u8| {
            if gamma_correction {
                gamma8(value)
            } else {
                value
            }
        };
        let output = Color::new(
            map8(correct(self.color.red), self.brightness),
            map8(correct(self.color.green), self.brightness),
            map8(correct(self.color.blue), self.brightness),
            map8(self.color.white, self.brightness),
        );
        #[cfg(feature = "esp32-log")]
        println!(
            "[LightState.set_rgbw] color {:?} brightness {:?} -> {:?}",
            self.color, self.brightness, output
        );

        self.output = output;
        self.driver.write(output);
    }
}
