//! Lapwatch - Keypad Stopwatch Firmware
//!
//! Main firmware binary for RP2040-based boards with a 4x4 matrix keypad
//! and a four-digit two-wire segment display.
//!
//! Two contexts share one stopwatch: the tick task runs once per second
//! on an interrupt-priority executor and owns the display, while the
//! control task polls the keypad in thread mode.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use crate::config::TIMING;

mod board;
mod channels;
mod config;
mod tasks;

/// Executor for the tick context, preempts everything in thread mode
static EXECUTOR_TICK: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_TICK.on_interrupt()
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Lapwatch firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    info!(
        "Timing: {} Hz core, settle {} cycles ({}us per render), debounce {}ms",
        TIMING.clock_hz,
        TIMING.bus.settle_cycles,
        TIMING.render_us(),
        TIMING.debounce_ms()
    );

    // Display bus: CLK=GPIO2, DIO=GPIO3
    let display = board::display(p.PIN_2.into(), p.PIN_3.into(), TIMING.bus);
    info!("Display bus initialized");

    // Keypad: rows GPIO6-9 driven, columns GPIO10-13 pulled down
    let keypad = board::keypad(
        [p.PIN_6.into(), p.PIN_7.into(), p.PIN_8.into(), p.PIN_9.into()],
        [p.PIN_10.into(), p.PIN_11.into(), p.PIN_12.into(), p.PIN_13.into()],
        TIMING.keypad,
    );
    info!("Keypad initialized");

    // Tick context runs above thread mode so keypad debounce never delays it
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let tick_spawner = EXECUTOR_TICK.start(interrupt::SWI_IRQ_1);
    tick_spawner.spawn(tasks::tick_task(display)).unwrap();

    spawner.spawn(tasks::control_task(keypad)).unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
