//! Timebase: the once-per-second periodic callback
//!
//! On the target a hardware timer at interrupt priority fires the
//! callback. Tests invoke [`TickHandler::on_tick`] directly.

use crate::stopwatch::Stopwatch;
use crate::time::Reading;
use crate::traits::TimeDisplay;

/// Tick interval in milliseconds (fixed for the lifetime of the system)
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Periodic callback driven by the timebase
pub trait TickHandler {
    /// Called once per tick interval
    ///
    /// Must complete well within the interval. Returns what was put on
    /// the display, if anything.
    fn on_tick(&mut self) -> Option<Reading>;
}

/// Everything the tick context owns: the shared stopwatch and the display
///
/// The display is only ever driven from here, so bus transactions from
/// a tick and from a Reset redisplay can never interleave.
pub struct TickContext<'a, D> {
    stopwatch: &'a Stopwatch,
    display: D,
}

impl<'a, D: TimeDisplay> TickContext<'a, D> {
    /// Bind a display to the shared stopwatch
    pub fn new(stopwatch: &'a Stopwatch, display: D) -> Self {
        Self { stopwatch, display }
    }

    /// Show the current reading regardless of run state
    ///
    /// Used for the power-on display and for Reset.
    pub fn refresh(&mut self) -> Reading {
        let reading = self.stopwatch.reading();
        self.display.show(&reading);
        reading
    }

    /// Get access to the underlying display
    pub fn display(&self) -> &D {
        &self.display
    }
}

impl<D: TimeDisplay> TickHandler for TickContext<'_, D> {
    fn on_tick(&mut self) -> Option<Reading> {
        let reading = self.stopwatch.tick()?;
        self.display.show(&reading);
        Some(reading)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::state::{Command, RunState};
    use crate::time::ElapsedTime;
    use heapless::Vec;

    /// Display that remembers every reading it was asked to show
    pub(crate) struct RecordingDisplay {
        pub shown: Vec<Reading, 128>,
    }

    impl RecordingDisplay {
        pub fn new() -> Self {
            Self { shown: Vec::new() }
        }
    }

    impl TimeDisplay for RecordingDisplay {
        fn render_time(&mut self, minutes: u8, seconds: u8, colon: bool) {
            self.shown
                .push(Reading::new(ElapsedTime::new(minutes, seconds), colon))
                .unwrap();
        }
    }

    #[test]
    fn test_stopped_tick_does_not_render() {
        let sw = Stopwatch::new();
        let mut ctx = TickContext::new(&sw, RecordingDisplay::new());

        for _ in 0..10 {
            assert_eq!(ctx.on_tick(), None);
        }

        assert!(ctx.display().shown.is_empty());
        assert_eq!(sw.reading(), Reading::new(ElapsedTime::ZERO, true));
    }

    #[test]
    fn test_running_tick_renders_once() {
        let sw = Stopwatch::new();
        sw.apply(Command::Start);
        let mut ctx = TickContext::new(&sw, RecordingDisplay::new());

        let reading = ctx.on_tick().unwrap();

        assert_eq!(ctx.display().shown.as_slice(), &[reading]);
        assert_eq!(reading, Reading::new(ElapsedTime::new(0, 1), false));
    }

    #[test]
    fn test_refresh_renders_current_reading() {
        let sw = Stopwatch::new();
        let mut ctx = TickContext::new(&sw, RecordingDisplay::new());

        let reading = ctx.refresh();

        assert_eq!(reading, Reading::new(ElapsedTime::ZERO, true));
        assert_eq!(ctx.display().shown.as_slice(), &[reading]);
        assert_eq!(sw.run_state(), RunState::Stopped);
    }

    #[test]
    fn test_display_by_reference() {
        let sw = Stopwatch::new();
        sw.apply(Command::Start);
        let mut display = RecordingDisplay::new();
        {
            let mut ctx = TickContext::new(&sw, &mut display);
            ctx.on_tick();
            ctx.on_tick();
        }
        assert_eq!(display.shown.len(), 2);
    }
}
