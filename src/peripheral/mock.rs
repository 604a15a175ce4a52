//! Mock PIO backend for testing

use super::{LaneId, PioBackend, LANES_PER_BLOCK};
use crate::error::{BlinkError, Result};

/// A call made against the mock, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    LoadProgram,
    ClaimLane,
    InitLane { lane: LaneId, offset: u8, pin: u8 },
    SetEnabled { lane: LaneId, enabled: bool },
    PushValue { lane: LaneId, value: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LaneState {
    Free,
    Claimed,
    Initialized,
}

/// Mock PIO block
///
/// Tracks lane ownership and records every call for test verification.
#[derive(Debug)]
pub struct MockPio {
    system_clock_hz: u32,
    program_offset: Option<u8>,
    load_offset: u8,
    program_space: bool,
    lanes: [LaneState; LANES_PER_BLOCK as usize],
    enabled: [bool; LANES_PER_BLOCK as usize],
    calls: Vec<Call>,
}

impl MockPio {
    /// Create a mock with all lanes free, loading the program at offset 0
    pub fn new(system_clock_hz: u32) -> Self {
        Self {
            system_clock_hz,
            program_offset: None,
            load_offset: 0,
            program_space: true,
            lanes: [LaneState::Free; LANES_PER_BLOCK as usize],
            enabled: [false; LANES_PER_BLOCK as usize],
            calls: Vec::new(),
        }
    }

    /// Place the program at `offset` on the next load
    pub fn with_load_offset(mut self, offset: u8) -> Self {
        self.load_offset = offset;
        self
    }

    /// Simulate full instruction memory
    pub fn without_program_space(mut self) -> Self {
        self.program_space = false;
        self
    }

    /// Mark `count` lanes as taken by someone else
    pub fn with_lanes_taken(mut self, count: u8) -> Self {
        for lane in self.lanes.iter_mut().take(count as usize) {
            *lane = LaneState::Claimed;
        }
        self
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Values pushed into any TX FIFO, in order
    pub fn pushed_values(&self) -> Vec<(LaneId, u32)> {
        self.calls
            .iter()
            .filter_map(|call| match *call {
                Call::PushValue { lane, value } => Some((lane, value)),
                _ => None,
            })
            .collect()
    }

    pub fn is_enabled(&self, lane: LaneId) -> bool {
        self.enabled
            .get(lane.index() as usize)
            .copied()
            .unwrap_or(false)
    }

    fn lane_state(&self, lane: LaneId) -> Result<LaneState> {
        self.lanes
            .get(lane.index() as usize)
            .copied()
            .ok_or(BlinkError::InvalidLane(lane.index()))
    }

    fn require_initialized(&self, lane: LaneId) -> Result<()> {
        match self.lane_state(lane)? {
            LaneState::Free => Err(BlinkError::LaneNotClaimed(lane.index())),
            LaneState::Claimed => Err(BlinkError::LaneNotInitialized(lane.index())),
            LaneState::Initialized => Ok(()),
        }
    }
}

impl PioBackend for MockPio {
    fn system_clock_hz(&self) -> u32 {
        self.system_clock_hz
    }

    fn load_program(&mut self) -> Result<u8> {
        self.calls.push(Call::LoadProgram);
        if !self.program_space {
            return Err(BlinkError::ProgramSpace);
        }
        self.program_offset = Some(self.load_offset);
        Ok(self.load_offset)
    }

    fn claim_lane(&mut self) -> Result<LaneId> {
        self.calls.push(Call::ClaimLane);
        let index = self
            .lanes
            .iter()
            .position(|state| *state == LaneState::Free)
            .ok_or(BlinkError::NoFreeLane)?;
        self.lanes[index] = LaneState::Claimed;
        Ok(LaneId::new(index as u8))
    }

    fn init_lane(&mut self, lane: LaneId, offset: u8, pin: u8) -> Result<()> {
        self.calls.push(Call::InitLane { lane, offset, pin });
        match self.lane_state(lane)? {
            LaneState::Free => return Err(BlinkError::LaneNotClaimed(lane.index())),
            LaneState::Initialized => return Err(BlinkError::LaneBusy(lane.index())),
            LaneState::Claimed => {}
        }
        if self.program_offset != Some(offset) {
            return Err(BlinkError::ProgramNotLoaded);
        }
        self.lanes[lane.index() as usize] = LaneState::Initialized;
        Ok(())
    }

    fn set_enabled(&mut self, lane: LaneId, enabled: bool) -> Result<()> {
        self.calls.push(Call::SetEnabled { lane, enabled });
        self.require_initialized(lane)?;
        self.enabled[lane.index() as usize] = enabled;
        Ok(())
    }

    fn push_value(&mut self, lane: LaneId, value: u32) -> Result<()> {
        self.calls.push(Call::PushValue { lane, value });
        self.require_initialized(lane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_claims_lanes_in_order() {
        let mut pio = MockPio::new(125_000_000);
        for expected in 0..LANES_PER_BLOCK {
            assert_eq!(pio.claim_lane().unwrap().index(), expected);
        }
        assert_eq!(pio.claim_lane(), Err(BlinkError::NoFreeLane));
    }

    #[test]
    fn test_mock_skips_taken_lanes() {
        let mut pio = MockPio::new(125_000_000).with_lanes_taken(2);
        assert_eq!(pio.claim_lane().unwrap().index(), 2);
    }

    #[test]
    fn test_mock_init_requires_loaded_offset() {
        let mut pio = MockPio::new(125_000_000).with_load_offset(5);
        let lane = pio.claim_lane().unwrap();
        assert_eq!(
            pio.init_lane(lane, 5, 25),
            Err(BlinkError::ProgramNotLoaded)
        );

        let offset = pio.load_program().unwrap();
        assert_eq!(offset, 5);
        assert!(pio.init_lane(lane, 0, 25).is_err());
        assert!(pio.init_lane(lane, offset, 25).is_ok());
        assert_eq!(pio.init_lane(lane, offset, 25), Err(BlinkError::LaneBusy(0)));
    }

    #[test]
    fn test_mock_rejects_unclaimed_lane() {
        let mut pio = MockPio::new(125_000_000);
        let lane = LaneId::new(1);
        assert_eq!(
            pio.set_enabled(lane, true),
            Err(BlinkError::LaneNotClaimed(1))
        );
        assert_eq!(pio.push_value(lane, 1), Err(BlinkError::LaneNotClaimed(1)));
        assert_eq!(
            pio.set_enabled(LaneId::new(9), true),
            Err(BlinkError::InvalidLane(9))
        );
    }

    #[test]
    fn test_mock_enable_tracks_state() {
        let mut pio = MockPio::new(125_000_000);
        let offset = pio.load_program().unwrap();
        let lane = pio.claim_lane().unwrap();
        assert_eq!(
            pio.set_enabled(lane, true),
            Err(BlinkError::LaneNotInitialized(0))
        );
        pio.init_lane(lane, offset, 25).unwrap();
        pio.set_enabled(lane, true).unwrap();
        assert!(pio.is_enabled(lane));
        pio.set_enabled(lane, false).unwrap();
        assert!(!pio.is_enabled(lane));
    }

    #[test]
    fn test_mock_out_of_program_space() {
        let mut pio = MockPio::new(125_000_000).without_program_space();
        assert_eq!(pio.load_program(), Err(BlinkError::ProgramSpace));
    }
}
