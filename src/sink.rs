//! Display sinks
//!
//! A sink owns the frame currently shown on the strip. The fader reads it
//! once at the start of a fade and overwrites it on every step.

use heapless::Vec;
use smart_leds::SmartLedsWrite;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;

/// Abstract LED output
///
/// Implement this trait to support different hardware platforms.
/// The fader is generic over this trait.
pub trait DisplaySink {
    /// Frame currently shown on the strip
    fn current_frame(&self) -> &[Rgb];

    /// Replace the current frame, length included, without flushing it
    fn set_current_frame(&mut self, frame: &[Rgb]);

    /// Flush the current frame to the hardware
    fn present(&mut self);
}

impl<T: ?Sized + DisplaySink> DisplaySink for &mut T {
    fn current_frame(&self) -> &[Rgb] {
        T::current_frame(self)
    }

    fn set_current_frame(&mut self, frame: &[Rgb]) {
        T::set_current_frame(self, frame);
    }

    fn present(&mut self) {
        T::present(self);
    }
}

/// [`DisplaySink`] on top of a `smart-leds` driver
///
/// Keeps a copy of the shown frame, since LED drivers are write-only. The
/// frame takes the length of the last frame written to it, so it always
/// matches the strip the fader is bound to.
/// Driver errors do not interrupt a fade: the last one is kept and can be
/// read with [`SmartLedsSink::last_error`].
pub struct SmartLedsSink<D: SmartLedsWrite, const MAX_LEDS: usize> {
    driver: D,
    frame: Vec<Rgb, MAX_LEDS>,
    last_error: Option<D::Error>,
}

impl<D, const MAX_LEDS: usize> SmartLedsSink<D, MAX_LEDS>
where
    D: SmartLedsWrite,
    D::Color: From<Rgb>,
{
    /// Wrap a driver, starting with an empty frame
    pub const fn new(driver: D) -> Self {
        Self {
            driver,
            frame: Vec::new(),
            last_error: None,
        }
    }

    /// Error of the most recent failed write, cleared by a successful one
    pub const fn last_error(&self) -> Option<&D::Error> {
        self.last_error.as_ref()
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub const fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Release the driver
    pub fn into_inner(self) -> D {
        self.driver
    }
}

impl<D, const MAX_LEDS: usize> DisplaySink for SmartLedsSink<D, MAX_LEDS>
where
    D: SmartLedsWrite,
    D::Color: From<Rgb>,
{
    fn current_frame(&self) -> &[Rgb] {
        &self.frame
    }

    /// Replace the frame, taking the length of `frame` capped at `MAX_LEDS`
    fn set_current_frame(&mut self, frame: &[Rgb]) {
        self.frame.clear();
        // Length is capped to the capacity, so extend cannot fail
        let _ = self
            .frame
            .extend_from_slice(&frame[..frame.len().min(MAX_LEDS)]);
    }

    fn present(&mut self) {
        match self.driver.write(self.frame.iter().copied()) {
            Ok(()) => self.last_error = None,
            Err(err) => {
                #[cfg(feature = "esp32-log")]
                println!("[SmartLedsSink.present] driver write failed");
                self.last_error = Some(err);
            }
        }
    }
}
