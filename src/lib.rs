#![no_std]

pub mod color;
pub mod config;
pub mod driver;
pub mod gamma;
pub mod intent;
pub mod math8;
pub mod shared;
pub mod snapshot;
pub mod state;

pub use color::{ChannelRole, Color, LEVEL_MAX, temperature_to_rgb};
pub use config::{LightConfig, PowerPolicy, PowerUpMode};
pub use driver::{ChannelDriver, DualChannel, PwmDriver, SmartLedsDriver};
pub use gamma::gamma8;
pub use intent::LightIntent;
pub use math8::map8;
pub use shared::SharedLight;
pub use snapshot::LightSnapshot;
pub use state::LightState;
