//! Control task: keypad polling in thread mode
//!
//! Scans the keypad as fast as the executor allows. A detected press
//! blocks for the debounce period, which only delays this task; the tick
//! context preempts it.

use defmt::*;
use embassy_futures::yield_now;

use lapwatch_core::control::poll_once;

use crate::board::Keypad;
use crate::channels::{REDISPLAY, STOPWATCH};

/// Control task - feeds keypresses to the stopwatch
#[embassy_executor::task]
pub async fn control_task(mut keypad: Keypad) {
    info!("Control task started");

    loop {
        if let Some(dispatch) = poll_once(&mut keypad, &STOPWATCH) {
            let legend = dispatch.key.as_char();
            match dispatch.command {
                Some(command) => info!("Key '{}' -> {} ({})", legend, command, dispatch.state),
                None => debug!("Key '{}' ignored", legend),
            }

            if dispatch.redisplay.is_some() {
                REDISPLAY.signal(());
            }
        }

        yield_now().await;
    }
}
