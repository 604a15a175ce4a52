//! Blink timing configurator
//!
//! Hands the blink period to a PIO state machine. After [`configure_and_start`]
//! returns, the state machine toggles the pin on its own and the main core
//! has nothing left to do.

use crate::config::BlinkConfig;
use crate::error::Result;
use crate::log_info;
use crate::peripheral::{LaneId, PioBackend};
use crate::status::StatusLine;
use crate::timing;

/// A running blink, owning its state machine.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct Blink {
    lane: LaneId,
    program_offset: u8,
    config: BlinkConfig,
    divider: u32,
}

impl Blink {
    pub fn lane(&self) -> LaneId {
        self.lane
    }

    pub fn program_offset(&self) -> u8 {
        self.program_offset
    }

    pub fn config(&self) -> BlinkConfig {
        self.config
    }

    /// Value pushed into the TX FIFO
    pub fn divider(&self) -> u32 {
        self.divider
    }

    /// Stop the state machine. The pin keeps its last level.
    pub fn halt<B: PioBackend>(self, backend: &mut B) -> Result<()> {
        backend.set_enabled(self.lane, false)
    }
}

/// Initialize `lane`, enable it, and push the divider for `frequency_hz`.
///
/// The frequency is checked against the backend's system clock before
/// anything is written, so a rejected configuration leaves the lane
/// untouched. On success the divider is pushed exactly once, after the lane
/// has been enabled, and its value is returned.
///
/// # Errors
///
/// - `BlinkError::ZeroFrequency` / `BlinkError::FrequencyOutOfRange` for an
///   unusable frequency
/// - any error reported by the backend
pub fn configure_and_start<B: PioBackend>(
    backend: &mut B,
    lane: LaneId,
    program_offset: u8,
    pin: u8,
    frequency_hz: u32,
) -> Result<u32> {
    let divider = timing::divider(backend.system_clock_hz(), frequency_hz)?;

    backend.init_lane(lane, program_offset, pin)?;
    backend.set_enabled(lane, true)?;

    log_info!("{}", StatusLine::new(pin, frequency_hz));

    // The FIFO is empty: the program has only just reached `pull block`.
    backend.push_value(lane, divider)?;
    Ok(divider)
}

/// Load the toggle program, claim a lane and start blinking.
///
/// # Errors
///
/// Returns the first error from validation, loading, claiming or
/// [`configure_and_start`].
pub fn start<B: PioBackend>(backend: &mut B, config: &BlinkConfig) -> Result<Blink> {
    config.validate(backend.system_clock_hz())?;

    let program_offset = backend.load_program()?;
    let lane = backend.claim_lane()?;
    let divider = configure_and_start(
        backend,
        lane,
        program_offset,
        config.pin,
        config.frequency_hz,
    )?;

    Ok(Blink {
        lane,
        program_offset,
        config: *config,
        divider,
    })
}
