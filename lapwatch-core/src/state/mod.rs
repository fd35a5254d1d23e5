//! Run state machine
//!
//! The stopwatch is either counting or not. Keypad commands move it
//! between the two; the timebase only reads it.

pub mod events;
pub mod machine;

pub use events::Command;
pub use machine::RunState;
