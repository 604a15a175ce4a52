//! Error types for blink configuration and PIO lane management

use core::fmt;

/// Result type for blink operations
pub type Result<T> = core::result::Result<T, BlinkError>;

/// Everything that can stop the blink from being configured.
///
/// Hardware backends map their HAL-specific failures to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum BlinkError {
    /// A frequency of 0 Hz was requested
    ZeroFrequency,
    /// The requested frequency would push the divider below zero
    FrequencyOutOfRange { frequency_hz: u32, max_hz: u32 },
    /// Pin number is not a GPIO on this chip
    InvalidPin(u8),
    /// Every state machine of the PIO block is already claimed
    NoFreeLane,
    /// The toggle program does not fit in instruction memory
    ProgramSpace,
    /// `init_lane` was given an offset where the toggle program is not loaded
    ProgramNotLoaded,
    /// Lane index does not exist on this PIO block
    InvalidLane(u8),
    /// Lane was not claimed before use
    LaneNotClaimed(u8),
    /// Lane was enabled or written before `init_lane`
    LaneNotInitialized(u8),
    /// Lane already runs a program and cannot be initialized again
    LaneBusy(u8),
}

impl fmt::Display for BlinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlinkError::ZeroFrequency => write!(f, "frequency must be at least 1 Hz"),
            BlinkError::FrequencyOutOfRange {
                frequency_hz,
                max_hz,
            } => write!(
                f,
                "frequency out of supported range: {} Hz (max {} Hz)",
                frequency_hz, max_hz
            ),
            BlinkError::InvalidPin(pin) => write!(f, "GPIO {} does not exist", pin),
            BlinkError::NoFreeLane => write!(f, "no free PIO state machine"),
            BlinkError::ProgramSpace => write!(f, "PIO instruction memory full"),
            BlinkError::ProgramNotLoaded => write!(f, "toggle program not loaded at offset"),
            BlinkError::InvalidLane(lane) => write!(f, "state machine {} does not exist", lane),
            BlinkError::LaneNotClaimed(lane) => write!(f, "state machine {} not claimed", lane),
            BlinkError::LaneNotInitialized(lane) => {
                write!(f, "state machine {} not initialized", lane)
            }
            BlinkError::LaneBusy(lane) => {
                write!(f, "state machine {} already initialized", lane)
            }
        }
    }
}
