//! Busy-wait delay primitive
//!
//! The display bus needs short settle delays between line transitions and
//! the keypad needs a long debounce pause. Both are plain spin loops on the
//! target; abstracting them lets tests record the waits instead of sleeping.

/// Blocking, cycle-counted delay
///
/// Must not yield or sleep: it is called from the tick context, which runs
/// at interrupt priority.
pub trait BusyWait {
    /// Spin for approximately `cycles` core clock cycles
    fn wait_cycles(&mut self, cycles: u32);
}
