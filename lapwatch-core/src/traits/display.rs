//! Display driver trait for the four-digit clock display

use crate::time::Reading;

/// A display that can show minutes and seconds with a colon
///
/// Rendering is fire-and-forget: the bus has no acknowledgement path,
/// so there is nothing to report back.
pub trait TimeDisplay {
    /// Show `MM:SS`, with the colon lit if `colon` is set
    fn render_time(&mut self, minutes: u8, seconds: u8, colon: bool);

    /// Show a stopwatch reading
    fn show(&mut self, reading: &Reading) {
        self.render_time(reading.time.minutes, reading.time.seconds, reading.colon);
    }
}

impl<T: TimeDisplay + ?Sized> TimeDisplay for &mut T {
    fn render_time(&mut self, minutes: u8, seconds: u8, colon: bool) {
        T::render_time(self, minutes, seconds, colon)
    }
}
