//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in lapwatch-core, written against the pin and delay traits of
//! lapwatch-hal:
//!
//! - Two-wire 4-digit segment display (TM1637 protocol, bit-banged)
//! - 4x4 matrix keypad scanner with blocking debounce

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod keypad;

pub use display::Tm1637;
pub use keypad::MatrixKeypad;
