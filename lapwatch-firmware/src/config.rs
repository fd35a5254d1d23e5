//! Timing configuration baked in at build time
//!
//! `build.rs` validates `lapwatch.toml` and generates the `TIMING` constant.

use lapwatch_core::config::{BusTiming, KeypadTiming, TimingConfig};

include!(concat!(env!("OUT_DIR"), "/timing.rs"));
