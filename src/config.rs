//! Blink configuration

use crate::error::{BlinkError, Result};
use crate::timing;

/// Highest GPIO number on the RP2040 user bank
pub const MAX_GPIO: u8 = 29;

/// GPIO wired to the on-board LED of the Pico
pub const ONBOARD_LED_PIN: u8 = 25;

/// Default full on/off cycle rate
pub const DEFAULT_FREQUENCY_HZ: u32 = 3;

/// Which pin to toggle and how fast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct BlinkConfig {
    /// GPIO to drive from the state machine, `0..=MAX_GPIO`.
    ///
    /// The caller must already have switched the pin to the PIO function.
    pub pin: u8,
    /// Full on/off cycles per second, `1..=system_clock_hz / 6`.
    pub frequency_hz: u32,
}

impl BlinkConfig {
    /// On-board LED at 3 Hz
    pub const ONBOARD_LED: BlinkConfig = BlinkConfig {
        pin: ONBOARD_LED_PIN,
        frequency_hz: DEFAULT_FREQUENCY_HZ,
    };

    pub const fn new(pin: u8, frequency_hz: u32) -> Self {
        Self { pin, frequency_hz }
    }

    /// Check the pin and the frequency against the current system clock.
    ///
    /// # Errors
    ///
    /// - `BlinkError::InvalidPin` if `pin` is above `MAX_GPIO`
    /// - `BlinkError::ZeroFrequency` / `BlinkError::FrequencyOutOfRange` if
    ///   the divider cannot be computed
    pub fn validate(&self, system_clock_hz: u32) -> Result<()> {
        if self.pin > MAX_GPIO {
            return Err(BlinkError::InvalidPin(self.pin));
        }
        timing::divider(system_clock_hz, self.frequency_hz).map(|_| ())
    }
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self::ONBOARD_LED
    }
}
