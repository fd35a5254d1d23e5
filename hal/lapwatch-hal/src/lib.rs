//! Lapwatch Hardware Abstraction Layer
//!
//! This crate defines the handful of hardware primitives the stopwatch
//! logic needs from a chip. Drivers are written against these traits, so
//! they can be exercised on the host with mock pins and a recording wait.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  lapwatch-drivers (display, keypad)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lapwatch-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ lapwatch-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`delay::BusyWait`] - Cycle-counted busy-wait used for bus timing and debounce

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use delay::BusyWait;
pub use gpio::{InputPin, OutputPin};
