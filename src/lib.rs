#![no_std]

pub mod bounds;
pub mod clock;
pub mod color;
pub mod decay;
pub mod fader;
pub mod math8;
pub mod pixel_buffer;
pub mod sink;

pub use clock::{BlockingClock, Clock};
pub use decay::{DecayCurve, DecayWeights};
pub use fader::{CrossfadeEngine, FadeOptions};
pub use pixel_buffer::{PixelBuffer, PixelValue, PixelWrite};
pub use sink::{DisplaySink, SmartLedsSink};

pub use color::{Channel, ChannelSelector, Rgb};
pub use embassy_time::Duration;
