//! Board wiring
//!
//! Concrete driver types for the RP2040 pins. The pin numbers themselves
//! are chosen in `main`; this module only fixes how each line is set up.

use embassy_rp::gpio::{AnyPin, Level};
use embassy_rp::Peri;

use lapwatch_core::config::{BusTiming, KeypadTiming};
use lapwatch_drivers::{MatrixKeypad, Tm1637};
use lapwatch_hal_rp2040::{CycleDelay, RpInput, RpOutput};

/// Segment display on two push-pull lines
pub type Display = Tm1637<RpOutput<'static>, RpOutput<'static>, CycleDelay>;

/// Keypad with driven rows and pulled-down columns
pub type Keypad = MatrixKeypad<RpOutput<'static>, RpInput<'static>, CycleDelay>;

/// Set up the display bus, both lines idle high
pub fn display(clk: Peri<'static, AnyPin>, dio: Peri<'static, AnyPin>, timing: BusTiming) -> Display {
    let clk = RpOutput::new(clk, Level::High);
    let dio = RpOutput::new(dio, Level::High);
    Tm1637::new(clk, dio, CycleDelay, timing)
}

/// Set up the keypad matrix, rows released
pub fn keypad(
    rows: [Peri<'static, AnyPin>; 4],
    cols: [Peri<'static, AnyPin>; 4],
    timing: KeypadTiming,
) -> Keypad {
    let rows = RpOutput::new_array(rows);
    let cols = RpInput::new_array_pull_down(cols);
    MatrixKeypad::new(rows, cols, CycleDelay, timing)
}
