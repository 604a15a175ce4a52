//! Human-readable startup messages

use core::fmt;

/// First line printed at boot
pub const BANNER: &str = "PIO Blink Example - RP2040";

/// `Blinking pin <pin> at <frequency> Hz`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    pub pin: u8,
    pub frequency_hz: u32,
}

impl StatusLine {
    pub fn new(pin: u8, frequency_hz: u32) -> Self {
        Self { pin, frequency_hz }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blinking pin {} at {} Hz", self.pin, self.frequency_hz)
    }
}

// Rendered through `Display` so both outputs carry the same text
#[cfg(target_os = "none")]
impl defmt::Format for StatusLine {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", defmt::Display2Format(self))
    }
}
