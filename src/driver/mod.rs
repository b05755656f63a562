//! Output driver abstraction
//!
//! The light state never talks to hardware directly. It writes per-channel
//! levels to a [`ChannelDriver`] and toggles its output. Two drivers are
//! provided: [`SmartLedsDriver`] buffers the channels and writes one RGBW
//! pixel per commit, [`PwmDriver`] applies every channel immediately to its
//! own PWM output.

mod batched;
mod pwm;

pub use batched::SmartLedsDriver;
pub use pwm::{DualChannel, PwmDriver};

use crate::color::{ChannelRole, Color};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The light state is generic over this trait.
pub trait ChannelDriver {
    /// Set the level of a single channel
    fn set_channel(&mut self, role: ChannelRole, level: u8);

    /// Flush buffered channel writes
    fn commit(&mut self) {}

    /// Enable or disable the output without forgetting channel levels
    fn set_enabled(&mut self, enabled: bool);

    /// Write all four channels and commit them
    fn write(&mut self, levels: Color) {
        for role in ChannelRole::ALL {
            self.set_channel(role, levels.channel(role));
        }
        self.commit();
    }
}

impl<D: ChannelDriver + ?Sized> ChannelDriver for &mut D {
    fn set_channel(&mut self, role: ChannelRole, level: u8) {
        D::set_channel(self, role, level);
    }

    fn commit(&mut self) {
        D::commit(self);
    }

    fn set_enabled(&mut self, enabled: bool) {
        D::set_enabled(self, enabled);
    }

    fn write(&mut self, levels: Color) {
        D::write(self, levels);
    }
}
