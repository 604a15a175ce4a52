//! PIO peripheral abstraction
//!
//! The blink logic only talks to hardware through [`PioBackend`]. The RP2040
//! implementation drives a real PIO block; the mock records every call for
//! tests.

#[cfg(target_os = "none")]
pub mod rp2040;

#[cfg(test)]
pub mod mock;

use crate::error::Result;

/// Number of state machines in one PIO block
pub const LANES_PER_BLOCK: u8 = 4;

/// A claimed state machine within a PIO block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct LaneId(u8);

impl LaneId {
    /// Only backends hand out lane ids, after a successful claim.
    pub(crate) const fn new(index: u8) -> Self {
        Self(index)
    }

    pub const fn index(self) -> u8 {
        self.0
    }
}

/// Register-level access to one PIO block.
///
/// # Safety Invariants
///
/// - A lane is used only by whoever claimed it
/// - `init_lane` must receive the offset returned by `load_program`
/// - A lane must be initialized before it is enabled or written
pub trait PioBackend {
    /// Current system clock frequency in Hz
    fn system_clock_hz(&self) -> u32;

    /// Load the toggle program into instruction memory.
    ///
    /// Returns the offset the program was placed at.
    ///
    /// # Errors
    ///
    /// Returns `BlinkError::ProgramSpace` if instruction memory is full.
    fn load_program(&mut self) -> Result<u8>;

    /// Claim a free state machine.
    ///
    /// # Errors
    ///
    /// Returns `BlinkError::NoFreeLane` if all state machines are taken.
    fn claim_lane(&mut self) -> Result<LaneId>;

    /// Map `pin` as the set/output pin, make it an output and point the
    /// program counter at `offset`.
    fn init_lane(&mut self, lane: LaneId, offset: u8, pin: u8) -> Result<()>;

    /// Start or stop execution of the lane.
    fn set_enabled(&mut self, lane: LaneId, enabled: bool) -> Result<()>;

    /// Write one word into the lane's TX FIFO, waiting while it is full.
    fn push_value(&mut self, lane: LaneId, value: u32) -> Result<()>;
}
