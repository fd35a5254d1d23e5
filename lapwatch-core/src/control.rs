//! Control loop step
//!
//! The foreground loop is `poll_once` forever. It scans the keypad,
//! feeds the key to the stopwatch and reports what happened so the caller
//! can log it and forward a redisplay request to the tick context.

use crate::keys::Key;
use crate::state::{Command, RunState};
use crate::stopwatch::Stopwatch;
use crate::time::Reading;
use crate::traits::KeyScanner;

/// Outcome of one detected keypress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dispatch {
    /// Key that was detected
    pub key: Key,
    /// Command it mapped to, if any
    pub command: Option<Command>,
    /// Run state after the command
    pub state: RunState,
    /// Reading to display immediately (Reset only)
    pub redisplay: Option<Reading>,
}

/// Scan the keypad once and dispatch the result
///
/// Returns `None` when no key is down.
pub fn poll_once<K: KeyScanner>(scanner: &mut K, stopwatch: &Stopwatch) -> Option<Dispatch> {
    let key = scanner.scan()?;
    let command = Command::from_key(key);
    let redisplay = command.and_then(|command| stopwatch.apply(command));

    Some(Dispatch {
        key,
        command,
        state: stopwatch.run_state(),
        redisplay,
    })
}
