//! Elapsed time model
//!
//! Minutes and seconds only. Hours are not tracked: 59:59 rolls over
//! to 00:00.

/// Seconds per minute, and minutes per rollover
pub const ROLLOVER: u8 = 60;

/// Elapsed stopwatch time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ElapsedTime {
    /// Minutes (0-59)
    pub minutes: u8,
    /// Seconds (0-59)
    pub seconds: u8,
}

impl ElapsedTime {
    /// 00:00
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new elapsed time
    pub const fn new(minutes: u8, seconds: u8) -> Self {
        Self { minutes, seconds }
    }

    /// Time one second later
    ///
    /// Seconds wrap into minutes at 60; minutes wrap to 0 at 60. Fields
    /// already out of range wrap the same way, so the result is always a
    /// valid time.
    pub fn advanced(self) -> Self {
        let mut next = self;
        next.seconds = next.seconds.saturating_add(1);
        if next.seconds >= ROLLOVER {
            next.seconds = 0;
            next.minutes = next.minutes.saturating_add(1);
        }
        if next.minutes >= ROLLOVER {
            next.minutes = 0;
        }
        next
    }

    /// Decimal digits in display order: minute tens, minute ones,
    /// second tens, second ones
    pub fn digits(&self) -> [u8; 4] {
        [
            self.minutes / 10,
            self.minutes % 10,
            self.seconds / 10,
            self.seconds % 10,
        ]
    }
}

/// What the display should show: elapsed time plus colon phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Elapsed time
    pub time: ElapsedTime,
    /// Colon segment lit
    pub colon: bool,
}

impl Reading {
    /// Create a new reading
    pub const fn new(time: ElapsedTime, colon: bool) -> Self {
        Self { time, colon }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_second_rollover() {
        let t = ElapsedTime::new(0, 59).advanced();
        assert_eq!(t, ElapsedTime::new(1, 0));
    }

    #[test]
    fn test_full_rollover() {
        let t = ElapsedTime::new(59, 59).advanced();
        assert_eq!(t, ElapsedTime::ZERO);
    }

    #[test]
    fn test_plain_advance() {
        let t = ElapsedTime::new(12, 34).advanced();
        assert_eq!(t, ElapsedTime::new(12, 35));
    }

    #[test]
    fn test_digits() {
        assert_eq!(ElapsedTime::new(7, 42).digits(), [0, 7, 4, 2]);
        assert_eq!(ElapsedTime::new(59, 5).digits(), [5, 9, 0, 5]);
        assert_eq!(ElapsedTime::ZERO.digits(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_hour_of_ticks_returns_to_zero() {
        let mut t = ElapsedTime::ZERO;
        for _ in 0..3600 {
            t = t.advanced();
        }
        assert_eq!(t, ElapsedTime::ZERO);
    }

    #[test]
    fn test_out_of_range_fields_wrap_without_overflow() {
        assert_eq!(ElapsedTime::new(0, 255).advanced(), ElapsedTime::new(1, 0));
        assert_eq!(ElapsedTime::new(255, 59).advanced(), ElapsedTime::ZERO);
        assert_eq!(ElapsedTime::new(200, 7).advanced(), ElapsedTime::new(0, 8));
        assert_eq!(ElapsedTime::new(255, 255).advanced(), ElapsedTime::ZERO);
    }

    fn seconds_since_zero(t: ElapsedTime) -> u32 {
        t.minutes as u32 * 60 + t.seconds as u32
    }

    proptest! {
        #[test]
        fn prop_advance_adds_one_second(m in 0u8..60, s in 0u8..60) {
            let t = ElapsedTime::new(m, s);
            let next = t.advanced();

            prop_assert!(next.minutes < 60);
            prop_assert!(next.seconds < 60);
            prop_assert_eq!(seconds_since_zero(next), (seconds_since_zero(t) + 1) % 3600);
        }

        #[test]
        fn prop_advance_always_lands_in_range(m in any::<u8>(), s in any::<u8>()) {
            let next = ElapsedTime::new(m, s).advanced();

            prop_assert!(next.minutes < ROLLOVER);
            prop_assert!(next.seconds < ROLLOVER);
        }
    }
}
