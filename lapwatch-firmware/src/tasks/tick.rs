//! Tick task: the one-second timebase
//!
//! Runs on the interrupt executor and is the only code that touches the
//! display. Each tick advances the stopwatch if it is running; a Reset
//! from the control task arrives as a redisplay request.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Ticker};

use lapwatch_core::timebase::{TickContext, TickHandler, TICK_INTERVAL_MS};

use crate::board::Display;
use crate::channels::{REDISPLAY, STOPWATCH};

/// Tick task - advances the stopwatch and redraws the display
#[embassy_executor::task]
pub async fn tick_task(display: Display) {
    info!("Tick task started");

    let mut context = TickContext::new(&STOPWATCH, display);

    // Power-on display: 00:00 with the colon lit
    let reading = context.refresh();
    debug!("Initial display {}", reading);

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        match select(ticker.next(), REDISPLAY.wait()).await {
            Either::First(()) => {
                if let Some(reading) = context.on_tick() {
                    trace!("Tick {}", reading);
                }
            }
            Either::Second(()) => {
                let reading = context.refresh();
                debug!("Redisplay {}", reading);
            }
        }
    }
}
