#![cfg_attr(not(test), no_std)]

//! pio-blink - blink an LED from a PIO state machine on the Raspberry Pi Pico
//!
//! The main core computes a divider from the system clock and the requested
//! frequency, pushes it into a state machine's TX FIFO once, and then has
//! nothing left to do: the toggle program keeps the pin blinking on its own.

pub mod logging;

pub mod error;
pub mod config;
pub mod program;
pub mod timing;
pub mod status;

// Hardware abstraction (RP2040 backend on target, mock in tests)
pub mod peripheral;

pub mod blink;

pub use blink::{configure_and_start, start, Blink};
pub use config::BlinkConfig;
pub use error::{BlinkError, Result};
pub use peripheral::{LaneId, PioBackend};
