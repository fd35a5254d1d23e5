//! Hardware abstraction traits
//!
//! These traits define the interface between the stopwatch logic
//! and the display and keypad drivers.

pub mod display;
pub mod keypad;

pub use display::TimeDisplay;
pub use keypad::KeyScanner;
