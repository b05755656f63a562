use embedded_hal::pwm::{ErrorType, SetDutyCycle};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::ChannelDriver;
use crate::color::{ChannelRole, Color, LEVEL_MAX};

/// Driver with one PWM output per channel
///
/// Every channel write is applied to its output right away, so
/// [`commit`](ChannelDriver::commit) has nothing to do. All outputs must
/// share one error type.
pub struct PwmDriver<R: ErrorType, G, B, W> {
    red: R,
    green: G,
    blue: B,
    white: W,
    levels: Color,
    enabled: bool,
    error: Option<R::Error>,
}

impl<R, G, B, W> PwmDriver<R, G, B, W>
where
    R: SetDutyCycle,
    G: SetDutyCycle<Error = R::Error>,
    B: SetDutyCycle<Error = R::Error>,
    W: SetDutyCycle<Error = R::Error>,
{
    /// Create a new driver, output starts disabled
    pub const fn new(red: R, green: G, blue: B, white: W) -> Self {
        Self {
            red,
            green,
            blue,
            white,
            levels: Color::BLACK,
            enabled: false,
            error: None,
        }
    }

    /// Last channel levels written, regardless of the enable flag
    pub const fn levels(&self) -> Color {
        self.levels
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Take the last error returned by an output
    pub fn take_error(&mut self) -> Option<R::Error> {
        self.error.take()
    }

    /// Release the PWM outputs
    pub fn release(self) -> (R, G, B, W) {
        (self.red, self.green, self.blue, self.white)
    }

    fn apply(&mut self, role: ChannelRole) {
        let level = if self.enabled {
            u16::from(self.levels.channel(role))
        } else {
            0
        };
        let max = u16::from(LEVEL_MAX);
        let result = match role {
            ChannelRole::Red => self.red.set_duty_cycle_fraction(level, max),
            ChannelRole::Green => self.green.set_duty_cycle_fraction(level, max),
            ChannelRole::Blue => self.blue.set_duty_cycle_fraction(level, max),
            ChannelRole::White => self.white.set_duty_cycle_fraction(level, max),
        };
        if let Err(err) = result {
            #[cfg(feature = "esp32-log")]
            println!("[PwmDriver.apply] failed to set {:?} to {}", role, level);
            self.error = Some(err);
        }
    }
}

impl<R, G, B, W> ChannelDriver for PwmDriver<R, G, B, W>
where
    R: SetDutyCycle,
    G: SetDutyCycle<Error = R::Error>,
    B: SetDutyCycle<Error = R::Error>,
    W: SetDutyCycle<Error = R::Error>,
{
    fn set_channel(&mut self, role: ChannelRole, level: u8) {
        self.levels.set_channel(role, level);
        self.apply(role);
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        for role in ChannelRole::ALL {
            self.apply(role);
        }
    }
}

/// Two physical outputs driven as one channel
///
/// Some boards wire the white LEDs to two driver channels.
#[derive(Debug)]
pub struct DualChannel<A, B> {
    first: A,
    second: B,
}

impl<A, B> DualChannel<A, B> {
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn release(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> ErrorType for DualChannel<A, B>
where
    A: ErrorType,
    B: ErrorType<Error = A::Error>,
{
    type Error = A::Error;
}

impl<A, B> SetDutyCycle for DualChannel<A, B>
where
    A: SetDutyCycle,
    B: SetDutyCycle<Error = A::Error>,
{
    fn max_duty_cycle(&self) -> u16 {
        self.first.max_duty_cycle().min(self.second.max_duty_cycle())
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.first.set_duty_cycle(duty)?;
        self.second.set_duty_cycle(duty)
    }

    // Each output scales the fraction against its own resolution.
    fn set_duty_cycle_fraction(&mut self, num: u16, denom: u16) -> Result<(), Self::Error> {
        self.first.set_duty_cycle_fraction(num, denom)?;
        self.second.set_duty_cycle_fraction(num, denom)
    }
}
