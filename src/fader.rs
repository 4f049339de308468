//! Cross-fading engine
//!
//! Blends the frame currently shown by a [`DisplaySink`] into the target
//! frame held by a [`PixelBuffer`], one weighted intermediate frame per step.

use embassy_time::Duration;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::clock::Clock;
use crate::color::Rgb;
use crate::decay::DecayCurve;
use crate::pixel_buffer::{PixelBuffer, PixelWrite};
use crate::sink::DisplaySink;

/// Default duration of a fade
pub const DEFAULT_FADE_DURATION: Duration = Duration::from_millis(100);

/// Default number of fade steps
pub const DEFAULT_FADE_STEPS: i32 = 10;

/// Parameters of a single fade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeOptions {
    /// Total time spent fading
    pub duration: Duration,
    /// Number of intermediate frames, the last one being the target frame
    pub steps: i32,
    /// Weighting applied over the steps
    pub curve: DecayCurve,
}

impl Default for FadeOptions {
    fn default() -> Self {
        Self {
            duration: DEFAULT_FADE_DURATION,
            steps: DEFAULT_FADE_STEPS,
            curve: DecayCurve::Logarithmic,
        }
    }
}

impl FadeOptions {
    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub const fn with_steps(mut self, steps: i32) -> Self {
        self.steps = steps;
        self
    }

    #[must_use]
    pub const fn with_curve(mut self, curve: DecayCurve) -> Self {
        self.curve = curve;
        self
    }

    /// Delay between two presented frames
    ///
    /// Zero when there is nothing to pace (`steps <= 0`).
    pub fn step_delay(&self) -> Duration {
        if self.steps <= 0 {
            return Duration::from_millis(0);
        }
        Duration::from_millis(self.duration.as_millis() / u64::from(self.steps.unsigned_abs()))
    }
}

/// Cross-fading pixel buffer bound to a display and a clock
pub struct CrossfadeEngine<S: DisplaySink, C: Clock, const MAX_LEDS: usize> {
    buffer: PixelBuffer<MAX_LEDS>,
    sink: S,
    clock: C,
}

impl<S: DisplaySink, C: Clock, const MAX_LEDS: usize> CrossfadeEngine<S, C, MAX_LEDS> {
    /// Bind a black frame of `num_leds` pixels to the sink
    ///
    /// Both the target frame and the sink's current frame start black.
    /// The black frame is not presented.
    pub fn bind(mut sink: S, clock: C, num_leds: usize) -> Self {
        let buffer = PixelBuffer::new(num_leds);
        sink.set_current_frame(buffer.as_slice());
        #[cfg(feature = "esp32-log")]
        println!("[CrossfadeEngine.bind] bound {} LEDs", buffer.len());
        Self {
            buffer,
            sink,
            clock,
        }
    }

    /// Replace the buffer with a black frame of `num_leds` pixels
    ///
    /// The sink's current frame is replaced by the same black frame, so both
    /// take the new length together.
    pub fn rebind(&mut self, num_leds: usize) -> &mut Self {
        self.buffer = PixelBuffer::new(num_leds);
        self.sink.set_current_frame(self.buffer.as_slice());
        self
    }

    /// Number of pixels in the strip
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True when bound to a strip without pixels
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Target frame of the next fade
    pub const fn pixels(&self) -> &PixelBuffer<MAX_LEDS> {
        &self.buffer
    }

    pub const fn pixels_mut(&mut self) -> &mut PixelBuffer<MAX_LEDS> {
        &mut self.buffer
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Release the sink and the clock
    pub fn into_parts(self) -> (S, C) {
        (self.sink, self.clock)
    }

    /// Set the target frame to black
    pub fn clear(&mut self) -> &mut Self {
        self.buffer.clear();
        self
    }

    /// Write one pixel of the target frame
    pub fn set_pixel(&mut self, write: PixelWrite) -> &mut Self {
        self.buffer.set_pixel(write);
        self
    }

    /// Read one pixel of the target frame
    pub fn get_pixel(&self, position: i32) -> Option<&Rgb> {
        self.buffer.get_pixel(position)
    }

    /// Load the whole target frame
    pub fn set_frame(&mut self, frame: &[[i32; 3]]) -> &mut Self {
        self.buffer.set_frame(frame);
        self
    }

    /// Fade from the shown frame to the target frame.
    ///
    /// Blocks for about `options.duration`. Every step writes one blended
    /// frame to the sink, presents it and then sleeps for
    /// [`FadeOptions::step_delay`]. The last step always shows the target
    /// frame.
    ///
    /// With a single step the target frame is presented directly and the
    /// whole duration is slept afterwards. With zero or negative steps the
    /// target frame is presented without any delay.
    pub fn push(&mut self, options: &FadeOptions) -> &mut Self {
        #[cfg(feature = "esp32-log")]
        println!(
            "[CrossfadeEngine.push] fading {} ms in {} steps ({})",
            options.duration.as_millis(),
            options.steps,
            options.curve.as_str()
        );

        if options.steps <= 1 {
            #[cfg(feature = "esp32-log")]
            println!("[CrossfadeEngine.push] degenerate step count, writing target frame");
            self.sink.set_current_frame(self.buffer.as_slice());
            self.sink.present();
            if options.steps == 1 {
                self.clock.sleep(options.duration);
            }
            return self;
        }

        let start = self.snapshot();
        let step_delay = options.step_delay();

        for step in 1..=options.steps {
            let weights = options.curve.weights(step, options.steps);
            let frame: Vec<Rgb, MAX_LEDS> = start
                .iter()
                .zip(self.buffer.as_slice())
                .map(|(start, target)| weights.blend(*start, *target))
                .collect();

            self.sink.set_current_frame(&frame);
            self.sink.present();
            self.clock.sleep(step_delay);
        }

        self
    }

    /// Copy the shown frame, padded with black to the buffer length
    fn snapshot(&self) -> Vec<Rgb, MAX_LEDS> {
        let current = self.sink.current_frame();
        (0..self.buffer.len())
            .map(|index| current.get(index).copied().unwrap_or_default())
            .collect()
    }
}
