use smart_leds::{RGBW, SmartLedsWrite};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::ChannelDriver;
use crate::color::{ChannelRole, Color};

/// Driver for chips that take the whole RGBW color in one transfer
///
/// Channel writes are buffered and sent as a single pixel on
/// [`commit`](ChannelDriver::commit). While disabled the chip receives a
/// black pixel, the buffered levels are sent again once enabled.
pub struct SmartLedsDriver<W: SmartLedsWrite> {
    writer: W,
    levels: Color,
    enabled: bool,
    error: Option<W::Error>,
}

impl<W> SmartLedsDriver<W>
where
    W: SmartLedsWrite,
    RGBW<u8>: Into<W::Color>,
{
    /// Create a new driver, output starts disabled
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            levels: Color::BLACK,
            enabled: false,
            error: None,
        }
    }

    /// Buffered channel levels
    pub const fn levels(&self) -> Color {
        self.levels
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Take the last error returned by the writer
    pub fn take_error(&mut self) -> Option<W::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn flush(&mut self) {
        let pixel = if self.enabled {
            self.levels
        } else {
            Color::BLACK
        };
        let rgbw: RGBW<u8> = pixel.into();
        if let Err(err) = self.writer.write(core::iter::once(rgbw)) {
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsDriver.flush] failed to write {:?}", pixel);
            self.error = Some(err);
        }
    }
}

impl<W> ChannelDriver for SmartLedsDriver<W>
where
    W: SmartLedsWrite,
    RGBW<u8>: Into<W::Color>,
{
    fn set_channel(&mut self, role: ChannelRole, level: u8) {
        self.levels.set_channel(role, level);
    }

    fn commit(&mut self) {
        if self.enabled {
            self.flush();
        }
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.flush();
    }
}
