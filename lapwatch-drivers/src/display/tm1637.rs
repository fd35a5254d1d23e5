//! TM1637 four-digit display over a bit-banged two-wire bus
//!
//! The bus looks like I2C but is not: bytes go out LSB first, there is no
//! device address, and the chip's acknowledge is never read here. Every
//! transaction is fire-and-forget, so a corrupted transfer cannot be
//! detected. That is a known limitation of this driver.
//!
//! # Waveform
//!
//! ```text
//! start:  CLK ‾‾‾‾‾‾‾‾‾‾‾      DIO ‾‾‾‾‾\______
//! bit:    CLK \_____/‾‾‾‾      DIO ==X=========   (data changes while CLK low)
//! ack:    CLK \_____/‾‾‾‾      DIO unread
//! stop:   CLK \_____/‾‾‾‾‾‾    DIO \_______/‾‾   (DIO rises while CLK high)
//! ```
//!
//! Each line transition is followed by one settle delay.
//!
//! # Usage
//!
//! ```ignore
//! let mut display = Tm1637::new(clk, dio, CycleDelay, BusTiming::default());
//! display.render_time(12, 34, true); // "12:34"
//! ```

use lapwatch_core::config::BusTiming;
use lapwatch_core::segment::DigitFrame;
use lapwatch_core::traits::TimeDisplay;
use lapwatch_hal::{BusyWait, OutputPin};

/// Data command: write to display registers, auto-increment address
pub const DATA_COMMAND: u8 = 0x40;

/// Address command: start at digit register 0
pub const ADDRESS_COMMAND: u8 = 0xC0;

/// Display control command: display on, fixed brightness
pub const CONTROL_COMMAND: u8 = 0x8F;

/// TM1637 display driver
pub struct Tm1637<CLK, DIO, W> {
    clk: CLK,
    dio: DIO,
    wait: W,
    settle_cycles: u32,
}

impl<CLK: OutputPin, DIO: OutputPin, W: BusyWait> Tm1637<CLK, DIO, W> {
    /// Create a new driver and put the bus in its idle state (both lines high)
    pub fn new(clk: CLK, dio: DIO, wait: W, timing: BusTiming) -> Self {
        let mut display = Self {
            clk,
            dio,
            wait,
            settle_cycles: timing.settle_cycles,
        };
        display.clk.set_high();
        display.dio.set_high();
        display
    }

    /// Release the pins and the wait primitive
    pub fn release(self) -> (CLK, DIO, W) {
        (self.clk, self.dio, self.wait)
    }

    fn settle(&mut self) {
        self.wait.wait_cycles(self.settle_cycles);
    }

    /// Start condition: DIO falls while CLK is high
    pub fn start(&mut self) {
        self.clk.set_high();
        self.dio.set_high();
        self.settle();
        self.dio.set_low();
        self.settle();
    }

    /// Stop condition: DIO rises while CLK is high
    pub fn stop(&mut self) {
        self.clk.set_low();
        self.dio.set_low();
        self.settle();
        self.clk.set_high();
        self.settle();
        self.dio.set_high();
    }

    /// Clock out one byte, LSB first, then pulse the (unread) acknowledge slot
    pub fn write_byte(&mut self, byte: u8) {
        for bit in 0..8 {
            self.clk.set_low();
            self.settle();
            self.dio.set_state(byte & (1 << bit) != 0);
            self.settle();
            self.clk.set_high();
            self.settle();
        }

        self.clk.set_low();
        self.settle();
        self.clk.set_high();
        self.settle();
    }

    /// Send a command byte in its own framed transaction
    pub fn send_frame(&mut self, command: u8) {
        self.send_frame_with_data(command, &[]);
    }

    /// Send a command byte followed by data bytes in one framed transaction
    pub fn send_frame_with_data(&mut self, command: u8, data: &[u8]) {
        self.start();
        self.write_byte(command);
        for &byte in data {
            self.write_byte(byte);
        }
        self.stop();
    }

    /// Write four segment bytes and switch the display on
    ///
    /// The addressing mode has to be set before the data burst, and the
    /// display-on command needs its own transaction after the data is
    /// latched.
    pub fn write_digits(&mut self, frame: &DigitFrame) {
        self.send_frame(DATA_COMMAND);
        self.send_frame_with_data(ADDRESS_COMMAND, frame.bytes());
        self.send_frame(CONTROL_COMMAND);
    }
}

impl<CLK: OutputPin, DIO: OutputPin, W: BusyWait> TimeDisplay for Tm1637<CLK, DIO, W> {
    fn render_time(&mut self, minutes: u8, seconds: u8, colon: bool) {
        self.write_digits(&DigitFrame::new(minutes, seconds, colon));
    }
}
