//! Timing configuration type definitions

#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::timebase::TICK_INTERVAL_MS;

/// A full render may use at most this share of the tick interval
pub const MAX_RENDER_SHARE_PERCENT: u64 = 10;

/// Settle delays in one framed bus transaction carrying `bytes` bytes
///
/// Start condition (2), per byte 8 bits x 3 plus the acknowledge pulse (2),
/// stop condition (2).
pub const fn frame_settles(bytes: u32) -> u32 {
    2 + bytes * 26 + 2
}

/// Settle delays in one time render: mode command, address command with
/// four digits, display control command
pub const RENDER_SETTLES: u32 = frame_settles(1) + frame_settles(5) + frame_settles(1);

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Bus settle delay is zero
    ZeroSettleDelay,
    /// Keypad debounce wait is zero
    ZeroDebounce,
    /// Core clock frequency is zero
    ZeroClock,
    /// One render would take too large a share of the tick interval
    RenderTooSlow,
}

/// Two-wire display bus timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct BusTiming {
    /// Busy-wait between line transitions, in core clock cycles
    pub settle_cycles: u32,
}

impl Default for BusTiming {
    fn default() -> Self {
        Self {
            settle_cycles: 4_700, // ~37.6us at 125 MHz
        }
    }
}

/// Matrix keypad timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct KeypadTiming {
    /// Busy-wait after a detected press, in core clock cycles
    pub debounce_cycles: u32,
}

impl Default for KeypadTiming {
    fn default() -> Self {
        Self {
            debounce_cycles: 37_500_000, // 300ms at 125 MHz
        }
    }
}

/// Complete timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct TimingConfig {
    /// Core clock frequency the cycle counts are calibrated against
    pub clock_hz: u32,
    /// Display bus timing
    pub bus: BusTiming,
    /// Keypad timing
    pub keypad: KeypadTiming,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            clock_hz: 125_000_000,
            bus: BusTiming::default(),
            keypad: KeypadTiming::default(),
        }
    }
}

impl TimingConfig {
    /// Core clock cycles in one tick interval
    pub fn tick_cycles(&self) -> u64 {
        self.clock_hz as u64 * TICK_INTERVAL_MS / 1000
    }

    /// Core clock cycles spent busy-waiting in one time render
    pub fn render_cycles(&self) -> u64 {
        self.bus.settle_cycles as u64 * RENDER_SETTLES as u64
    }

    /// Microseconds spent busy-waiting in one time render
    pub fn render_us(&self) -> u64 {
        if self.clock_hz == 0 {
            return 0;
        }
        self.render_cycles() * 1_000_000 / self.clock_hz as u64
    }

    /// Milliseconds of keypad debounce
    pub fn debounce_ms(&self) -> u64 {
        if self.clock_hz == 0 {
            return 0;
        }
        self.keypad.debounce_cycles as u64 * 1000 / self.clock_hz as u64
    }

    /// Check the configuration is usable
    ///
    /// The render runs inside the tick context, so it must stay well
    /// inside the tick interval.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clock_hz == 0 {
            return Err(ConfigError::ZeroClock);
        }
        if self.bus.settle_cycles == 0 {
            return Err(ConfigError::ZeroSettleDelay);
        }
        if self.keypad.debounce_cycles == 0 {
            return Err(ConfigError::ZeroDebounce);
        }
        if self.render_cycles() * 100 > self.tick_cycles() * MAX_RENDER_SHARE_PERCENT {
            return Err(ConfigError::RenderTooSlow);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_settle_count() {
        assert_eq!(frame_settles(1), 30);
        assert_eq!(frame_settles(5), 134);
        assert_eq!(RENDER_SETTLES, 194);
    }

    #[test]
    fn test_default_is_valid() {
        let config = TimingConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.debounce_ms(), 300);
        // 194 * 4700 cycles at 125 MHz
        assert_eq!(config.render_us(), 7294);
    }

    #[test]
    fn test_zero_values_rejected() {
        let mut config = TimingConfig::default();
        config.clock_hz = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroClock));
        assert_eq!(config.render_us(), 0);

        let mut config = TimingConfig::default();
        config.bus.settle_cycles = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroSettleDelay));

        let mut config = TimingConfig::default();
        config.keypad.debounce_cycles = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroDebounce));
    }

    #[test]
    fn test_slow_render_rejected() {
        let mut config = TimingConfig::default();
        // 10% of 125M cycles is 12.5M; 194 * 65_000 = 12.61M
        config.bus.settle_cycles = 65_000;
        assert_eq!(config.validate(), Err(ConfigError::RenderTooSlow));

        config.bus.settle_cycles = 64_000;
        assert_eq!(config.validate(), Ok(()));
    }
}
