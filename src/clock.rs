use embassy_time::Duration;

/// Blocking delay source used to pace fade steps
pub trait Clock {
    /// Block the calling thread for `duration`
    fn sleep(&mut self, duration: Duration);
}

impl<T: ?Sized + Clock> Clock for &mut T {
    fn sleep(&mut self, duration: Duration) {
        T::sleep(self, duration);
    }
}

/// [`Clock`] that busy-waits on the `embassy-time` driver
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingClock;

impl Clock for BlockingClock {
    fn sleep(&mut self, duration: Duration) {
        embassy_time::block_for(duration);
    }
}
