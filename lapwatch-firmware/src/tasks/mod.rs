//! Embassy async tasks
//!
//! Each task runs independently and communicates via the statics in
//! `channels`.

pub mod control;
pub mod tick;

pub use control::control_task;
pub use tick::tick_task;
