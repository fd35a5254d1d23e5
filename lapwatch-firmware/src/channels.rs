//! State shared between the tick and control tasks
//!
//! The stopwatch itself is lock-free; the redisplay request goes through
//! an embassy-sync signal so the tick context stays the only display owner.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use lapwatch_core::Stopwatch;

/// The one stopwatch, written from both contexts
pub static STOPWATCH: Stopwatch = Stopwatch::new();

/// Ask the tick context to show the current reading now (after Reset)
pub static REDISPLAY: Signal<CriticalSectionRawMutex, ()> = Signal::new();
