//! 4x4 matrix keypad scanner
//!
//! Rows are outputs, driven active-high one at a time. Columns are inputs
//! with pull-downs; a pressed key connects its row to its column.
//!
//! Known limitations:
//! - Only the first active row and its lowest active column are reported.
//!   Ghosting with several keys down across rows is not handled.
//! - After a detection the scanner spins for the whole debounce wait. That
//!   blocks the caller (the control loop) and is the only repeat
//!   suppression: a key still held afterwards is detected again.

use lapwatch_core::config::KeypadTiming;
use lapwatch_core::keys::{Key, COLS, ROWS};
use lapwatch_core::traits::KeyScanner;
use lapwatch_hal::{BusyWait, InputPin, OutputPin};

/// Matrix keypad scanner
pub struct MatrixKeypad<R, C, W> {
    rows: [R; ROWS],
    cols: [C; COLS],
    wait: W,
    debounce_cycles: u32,
}

impl<R: OutputPin, C: InputPin, W: BusyWait> MatrixKeypad<R, C, W> {
    /// Create a new scanner with all rows inactive
    pub fn new(rows: [R; ROWS], cols: [C; COLS], wait: W, timing: KeypadTiming) -> Self {
        let mut keypad = Self {
            rows,
            cols,
            wait,
            debounce_cycles: timing.debounce_cycles,
        };
        keypad.release_rows();
        keypad
    }

    /// Drive every row inactive
    fn release_rows(&mut self) {
        for row in self.rows.iter_mut() {
            row.set_low();
        }
    }

    /// Drive one row active and every other row inactive
    fn drive_row(&mut self, active: usize) {
        for (index, row) in self.rows.iter_mut().enumerate() {
            row.set_state(index == active);
        }
    }

    /// Column levels as a bitmask, bit n = column n
    fn sample_columns(&self) -> u8 {
        self.cols
            .iter()
            .enumerate()
            .filter(|(_, col)| col.is_high())
            .fold(0, |mask, (index, _)| mask | (1 << index))
    }

    /// Scan the matrix once
    ///
    /// Returns promptly with `None` when nothing is pressed. On a press,
    /// releases the rows, waits out the debounce and returns the key.
    pub fn scan(&mut self) -> Option<Key> {
        for row in 0..ROWS {
            self.drive_row(row);

            let columns = self.sample_columns();
            if columns != 0 {
                let col = columns.trailing_zeros() as usize;
                self.release_rows();
                self.wait.wait_cycles(self.debounce_cycles);
                return Key::at(row, col);
            }
        }

        self.release_rows();
        None
    }
}

impl<R: OutputPin, C: InputPin, W: BusyWait> KeyScanner for MatrixKeypad<R, C, W> {
    fn scan(&mut self) -> Option<Key> {
        MatrixKeypad::scan(self)
    }
}
