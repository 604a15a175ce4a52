//! Divider arithmetic for the toggle program
//!
//! The toggle program spends `divider + CYCLE_OVERHEAD` system clock cycles
//! in each half of the blink period, so for a full on/off cycle at
//! `frequency_hz`:
//!
//! `divider = system_clock_hz / (2 * frequency_hz) - CYCLE_OVERHEAD`
//!
//! Integer division truncates; the state machine counter is integral anyway.

use crate::error::{BlinkError, Result};
use crate::program::CYCLE_OVERHEAD;

/// Unchecked divider, which may be negative for frequencies that are too high.
///
/// Returns `None` for a frequency of 0 Hz.
pub fn raw_divider(system_clock_hz: u32, frequency_hz: u32) -> Option<i64> {
    let half_period = u64::from(system_clock_hz).checked_div(2 * u64::from(frequency_hz))?;
    Some(half_period as i64 - i64::from(CYCLE_OVERHEAD))
}

/// Divider value to push into the lane's TX FIFO.
///
/// # Errors
///
/// - `BlinkError::ZeroFrequency` if `frequency_hz` is 0
/// - `BlinkError::FrequencyOutOfRange` if the divider would be negative
pub fn divider(system_clock_hz: u32, frequency_hz: u32) -> Result<u32> {
    let raw = raw_divider(system_clock_hz, frequency_hz).ok_or(BlinkError::ZeroFrequency)?;
    u32::try_from(raw).map_err(|_| BlinkError::FrequencyOutOfRange {
        frequency_hz,
        max_hz: max_frequency_hz(system_clock_hz),
    })
}

/// Highest frequency whose divider is still non-negative.
pub fn max_frequency_hz(system_clock_hz: u32) -> u32 {
    system_clock_hz / (2 * CYCLE_OVERHEAD)
}

/// System clock cycles in one full on/off period for a given divider.
pub fn blink_period_cycles(divider: u32) -> u64 {
    2 * (u64::from(divider) + u64::from(CYCLE_OVERHEAD))
}

/// Frequency actually produced by `divider`, truncated to whole Hz.
pub fn actual_frequency_hz(system_clock_hz: u32, divider: u32) -> u32 {
    (u64::from(system_clock_hz) / blink_period_cycles(divider)) as u32
}
