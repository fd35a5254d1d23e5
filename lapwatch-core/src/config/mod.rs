//! Configuration types
//!
//! Timing parameters for the bit-banged bus and the keypad debounce.
//! The firmware reads them from `lapwatch.toml` at build time; the
//! defaults here are the shipped values.

pub mod types;

pub use types::{
    frame_settles, BusTiming, ConfigError, KeypadTiming, TimingConfig, MAX_RENDER_SHARE_PERCENT,
    RENDER_SETTLES,
};
