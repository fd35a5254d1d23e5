//! GPIO pins for the display bus and the keypad matrix
//!
//! Thin wrappers so embassy-rp pins can implement the `lapwatch-hal`
//! traits. Pin access on the RP2040 cannot fail.

use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::Peri;

/// Push-pull output pin
pub struct RpOutput<'d>(Output<'d>);

impl<'d> RpOutput<'d> {
    /// Configure a pin as a push-pull output at the given level
    pub fn new(pin: Peri<'d, AnyPin>, initial: Level) -> Self {
        Self(Output::new(pin, initial))
    }

    /// Configure several pins as outputs, all low
    pub fn new_array<const N: usize>(pins: [Peri<'d, AnyPin>; N]) -> [Self; N] {
        pins.map(|pin| Self::new(pin, Level::Low))
    }
}

impl lapwatch_hal::OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Input pin with an internal pull resistor
pub struct RpInput<'d>(Input<'d>);

impl<'d> RpInput<'d> {
    /// Configure a pin as an input
    pub fn new(pin: Peri<'d, AnyPin>, pull: Pull) -> Self {
        Self(Input::new(pin, pull))
    }

    /// Configure several pins as pulled-down inputs (idle low, active high)
    pub fn new_array_pull_down<const N: usize>(pins: [Peri<'d, AnyPin>; N]) -> [Self; N] {
        pins.map(|pin| Self::new(pin, Pull::Down))
    }
}

impl lapwatch_hal::InputPin for RpInput<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}
