mod channel;

pub use channel::{Channel, ChannelSelector};
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Overwrite a single channel of a color
pub const fn set_channel_value(color: &mut Rgb, channel: Channel, value: u8) {
    match channel {
        Channel::Red => color.r = value,
        Channel::Green => color.g = value,
        Channel::Blue => color.b = value,
    }
}
