//! Target frame storage
//!
//! The pixel buffer holds the frame the next fade ends at. Every write is
//! clamped: positions are pinned to the strip and channel values to `0..=255`.

use heapless::Vec;

use crate::bounds::clamp_position;
use crate::color::{BLACK, Channel, ChannelSelector, Rgb, set_channel_value};
use crate::math8::clamp8;

/// Value written by a [`PixelWrite`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelValue {
    /// Same level for every selected channel
    Level(i32),
    /// Per-channel `[r, g, b]` levels
    Triple([i32; 3]),
}

impl PixelValue {
    /// Level to store in `channel`, before clamping
    pub const fn for_channel(self, channel: Channel) -> i32 {
        match self {
            Self::Level(value) => value,
            Self::Triple(values) => values[channel.index()],
        }
    }
}

/// A single pixel write
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelWrite {
    /// Pixel position, clamped to the strip
    pub position: i32,
    pub value: PixelValue,
    pub channel: ChannelSelector,
}

impl PixelWrite {
    /// Full white on all channels of `position`
    pub const fn new(position: i32) -> Self {
        Self {
            position,
            value: PixelValue::Level(255),
            channel: ChannelSelector::All,
        }
    }

    #[must_use]
    pub const fn with_value(mut self, value: i32) -> Self {
        self.value = PixelValue::Level(value);
        self
    }

    #[must_use]
    pub const fn with_rgb(mut self, values: [i32; 3]) -> Self {
        self.value = PixelValue::Triple(values);
        self
    }

    #[must_use]
    pub const fn with_channel(mut self, channel: ChannelSelector) -> Self {
        self.channel = channel;
        self
    }
}

/// Fixed-length frame of colors
///
/// `MAX_LEDS` is the storage capacity; the strip length is picked on
/// creation and never changes afterwards.
#[derive(Debug, Clone)]
pub struct PixelBuffer<const MAX_LEDS: usize> {
    pixels: Vec<Rgb, MAX_LEDS>,
}

impl<const MAX_LEDS: usize> PixelBuffer<MAX_LEDS> {
    /// Create a black buffer of `num_leds` pixels, capped at `MAX_LEDS`
    pub fn new(num_leds: usize) -> Self {
        let mut pixels = Vec::new();
        // Length is capped to the capacity, so resize cannot fail
        let _ = pixels.resize(num_leds.min(MAX_LEDS), BLACK);
        Self { pixels }
    }

    /// Number of pixels in the strip
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Borrow the whole frame
    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Write one pixel
    ///
    /// Does nothing on an empty buffer.
    pub fn set_pixel(&mut self, write: PixelWrite) -> &mut Self {
        let Some(index) = clamp_position(write.position, self.pixels.len()) else {
            return self;
        };
        let pixel = &mut self.pixels[index];
        for &channel in write.channel.channels() {
            set_channel_value(pixel, channel, clamp8(write.value.for_channel(channel)));
        }
        self
    }

    /// Read one pixel
    ///
    /// The position is clamped like in [`PixelBuffer::set_pixel`]. The
    /// reference borrows the buffer, so it cannot outlive the next write.
    pub fn get_pixel(&self, position: i32) -> Option<&Rgb> {
        let index = clamp_position(position, self.pixels.len())?;
        self.pixels.get(index)
    }

    /// Load a whole frame of `[r, g, b]` levels
    ///
    /// Pixels past the end of `frame` keep their value, extra entries
    /// in `frame` are ignored.
    pub fn set_frame(&mut self, frame: &[[i32; 3]]) -> &mut Self {
        for (pixel, values) in self.pixels.iter_mut().zip(frame) {
            *pixel = Rgb {
                r: clamp8(values[0]),
                g: clamp8(values[1]),
                b: clamp8(values[2]),
            };
        }
        self
    }

    /// Fill every pixel with one color
    pub fn fill(&mut self, color: Rgb) -> &mut Self {
        for pixel in &mut self.pixels {
            *pixel = color;
        }
        self
    }

    /// Set every pixel to black
    pub fn clear(&mut self) -> &mut Self {
        self.fill(BLACK)
    }
}
