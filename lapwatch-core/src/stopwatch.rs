//! Shared stopwatch state
//!
//! One instance lives in a static and is touched from two contexts: the
//! tick handler (interrupt priority) and the control loop (thread mode).
//! Every field is its own atomic scalar; there is no multi-field lock.
//!
//! Access discipline:
//! - `minutes`, `seconds`, `colon` are written by [`Stopwatch::tick`].
//!   [`Stopwatch::apply`] also zeroes the time on Reset, but only after it
//!   has cleared `running`, so any tick that preempts it afterwards is a
//!   no-op.
//! - `running` is written only by [`Stopwatch::apply`] (control loop).
//!
//! The tick context is never preempted by the control loop, so a tick's
//! read-modify-write of the time fields cannot interleave with Reset.

use portable_atomic::{AtomicBool, AtomicU8, Ordering};

use crate::state::{Command, RunState};
use crate::time::{ElapsedTime, Reading};

/// Elapsed time, run flag and colon phase shared between contexts
#[derive(Debug)]
pub struct Stopwatch {
    minutes: AtomicU8,
    seconds: AtomicU8,
    running: AtomicBool,
    colon: AtomicBool,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// Power-on state: stopped at 00:00 with the colon lit
    pub const fn new() -> Self {
        Self {
            minutes: AtomicU8::new(0),
            seconds: AtomicU8::new(0),
            running: AtomicBool::new(false),
            colon: AtomicBool::new(true),
        }
    }

    /// Current run state
    pub fn run_state(&self) -> RunState {
        RunState::from(self.running.load(Ordering::SeqCst))
    }

    /// Current elapsed time
    ///
    /// The two fields are read separately. From thread mode the result can
    /// straddle a tick while running; it is exact once stopped.
    pub fn elapsed(&self) -> ElapsedTime {
        ElapsedTime::new(
            self.minutes.load(Ordering::SeqCst),
            self.seconds.load(Ordering::SeqCst),
        )
    }

    /// Current colon phase
    pub fn colon(&self) -> bool {
        self.colon.load(Ordering::SeqCst)
    }

    /// Snapshot for the display
    pub fn reading(&self) -> Reading {
        Reading::new(self.elapsed(), self.colon())
    }

    /// Tick transition, called once per timebase interval
    ///
    /// While running, advances the time by one second and flips the colon,
    /// returning the reading to display. While stopped, nothing changes and
    /// `None` is returned so no display transaction happens.
    ///
    /// Tick context only.
    pub fn tick(&self) -> Option<Reading> {
        if !self.running.load(Ordering::SeqCst) {
            return None;
        }

        let next = self.elapsed().advanced();
        self.seconds.store(next.seconds, Ordering::SeqCst);
        self.minutes.store(next.minutes, Ordering::SeqCst);

        let colon = !self.colon.load(Ordering::SeqCst);
        self.colon.store(colon, Ordering::SeqCst);

        Some(Reading::new(next, colon))
    }

    /// Apply a command from the keypad
    ///
    /// Returns the reading to redisplay immediately, which only Reset asks
    /// for.
    ///
    /// Control loop only.
    pub fn apply(&self, command: Command) -> Option<Reading> {
        let next = self.run_state().transition(command);
        self.running.store(next.is_running(), Ordering::SeqCst);

        if command.clears_time() {
            self.seconds.store(0, Ordering::SeqCst);
            self.minutes.store(0, Ordering::SeqCst);
            return Some(self.reading());
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_at(minutes: u8, seconds: u8) -> Stopwatch {
        let sw = Stopwatch::new();
        sw.minutes.store(minutes, Ordering::SeqCst);
        sw.seconds.store(seconds, Ordering::SeqCst);
        sw.apply(Command::Start);
        sw
    }

    #[test]
    fn test_power_on_state() {
        let sw = Stopwatch::new();
        assert_eq!(sw.run_state(), RunState::Stopped);
        assert_eq!(sw.elapsed(), ElapsedTime::ZERO);
        assert!(sw.colon());
    }

    #[test]
    fn test_tick_while_stopped_is_noop() {
        let sw = Stopwatch::new();
        sw.minutes.store(3, Ordering::SeqCst);
        sw.seconds.store(14, Ordering::SeqCst);
        let before = sw.reading();

        for _ in 0..5 {
            assert_eq!(sw.tick(), None);
        }

        assert_eq!(sw.reading(), before);
    }

    #[test]
    fn test_first_tick_before_any_key_is_noop() {
        let sw = Stopwatch::new();
        assert_eq!(sw.tick(), None);
        assert_eq!(sw.reading(), Reading::new(ElapsedTime::ZERO, true));
    }

    #[test]
    fn test_tick_while_running() {
        let sw = running_at(0, 0);
        let reading = sw.tick().unwrap();
        assert_eq!(reading, Reading::new(ElapsedTime::new(0, 1), false));
        assert_eq!(sw.reading(), reading);

        let reading = sw.tick().unwrap();
        assert_eq!(reading, Reading::new(ElapsedTime::new(0, 2), true));
    }

    #[test]
    fn test_tick_rollover() {
        let sw = running_at(0, 59);
        assert_eq!(sw.tick().unwrap().time, ElapsedTime::new(1, 0));

        let sw = running_at(59, 59);
        assert_eq!(sw.tick().unwrap().time, ElapsedTime::ZERO);
    }

    #[test]
    fn test_stop_keeps_time() {
        let sw = running_at(2, 30);
        sw.tick();
        assert_eq!(sw.apply(Command::Stop), None);
        assert_eq!(sw.run_state(), RunState::Stopped);
        assert_eq!(sw.elapsed(), ElapsedTime::new(2, 31));
    }

    #[test]
    fn test_reset_from_any_state() {
        for keep_running in [false, true] {
            let sw = running_at(42, 17);
            if !keep_running {
                sw.apply(Command::Stop);
            }
            let colon = sw.colon();

            let redisplay = sw.apply(Command::Reset);

            assert_eq!(redisplay, Some(Reading::new(ElapsedTime::ZERO, colon)));
            assert_eq!(sw.elapsed(), ElapsedTime::ZERO);
            assert_eq!(sw.run_state(), RunState::Stopped);
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let sw = running_at(1, 1);
        let first = sw.apply(Command::Reset);
        let second = sw.apply(Command::Reset);
        assert_eq!(first, second);
        assert_eq!(sw.elapsed(), ElapsedTime::ZERO);
    }
}
