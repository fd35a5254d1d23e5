//! RP2040-specific HAL for the stopwatch firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `lapwatch-hal` traits on top of embassy-rp:
//!
//! - Push-pull output and pulled input pins ([`gpio`])
//! - Cycle-counted busy-wait ([`delay`])

#![no_std]

pub mod delay;
pub mod gpio;

pub use delay::CycleDelay;
pub use gpio::{RpInput, RpOutput};

// Re-export shared traits from lapwatch-hal for convenience
pub use lapwatch_hal::{BusyWait, InputPin, OutputPin};
