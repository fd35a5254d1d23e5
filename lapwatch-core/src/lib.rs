//! Board-agnostic core logic for the stopwatch firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Elapsed time model and 7-segment encoding
//! - Run state machine and keypad command mapping
//! - Shared stopwatch state for the tick interrupt and the control loop
//! - Timebase tick handler and control-loop step
//! - Hardware abstraction traits (display, keypad)
//! - Timing configuration and validation

#![no_std]
#![deny(unsafe_code)]

// proptest expands to std paths
#[cfg(test)]
extern crate std;

pub mod config;
pub mod control;
pub mod keys;
pub mod segment;
pub mod state;
pub mod stopwatch;
pub mod time;
pub mod timebase;
pub mod traits;

pub use keys::Key;
pub use stopwatch::Stopwatch;
pub use time::{ElapsedTime, Reading};
