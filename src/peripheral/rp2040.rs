//! RP2040 PIO backend
//!
//! Owns one PIO block and its four state machines. Each state machine moves
//! through `Free -> Claimed -> Stopped <-> Running` using the typestate API of
//! `rp2040-hal`.

use core::mem;

use rp_pico::hal::pac::RESETS;
use rp_pico::hal::pio::{
    InstalledProgram, PIOBuilder, PIOExt, PinDir, Running, StateMachine, StateMachineIndex,
    Stopped, Tx, UninitStateMachine, PIO, SM0, SM1, SM2, SM3,
};

use super::{LaneId, PioBackend};
use crate::error::{BlinkError, Result};
use crate::log_debug;
use crate::program;

enum LaneSlot<P: PIOExt, SM: StateMachineIndex> {
    Free(UninitStateMachine<(P, SM)>),
    Claimed(UninitStateMachine<(P, SM)>),
    Stopped(StateMachine<(P, SM), Stopped>, Tx<(P, SM)>),
    Running(StateMachine<(P, SM), Running>, Tx<(P, SM)>),
    // Only observable if a transition is interrupted
    Poisoned,
}

impl<P: PIOExt, SM: StateMachineIndex> LaneSlot<P, SM> {
    fn not_ready(&self, index: u8) -> BlinkError {
        match self {
            LaneSlot::Free(_) => BlinkError::LaneNotClaimed(index),
            LaneSlot::Claimed(_) | LaneSlot::Poisoned => BlinkError::LaneNotInitialized(index),
            LaneSlot::Stopped(..) | LaneSlot::Running(..) => BlinkError::LaneBusy(index),
        }
    }

    fn claim(&mut self) -> bool {
        match mem::replace(self, LaneSlot::Poisoned) {
            LaneSlot::Free(sm) => {
                *self = LaneSlot::Claimed(sm);
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }

    fn init(&mut self, index: u8, program: &InstalledProgram<P>, pin: u8) -> Result<()> {
        match mem::replace(self, LaneSlot::Poisoned) {
            LaneSlot::Claimed(uninit) => {
                // SAFETY: the toggle program is never uninstalled, so every
                // lane sharing it keeps valid instruction memory.
                let program = unsafe { program.share() };
                let (mut sm, _rx, tx) = PIOBuilder::from_installed_program(program)
                    .set_pins(pin, 1)
                    // Full system clock speed, the divider does the timing
                    .clock_divisor_fixed_point(1, 0)
                    .build(uninit);
                sm.set_pindirs([(pin, PinDir::Output)]);
                *self = LaneSlot::Stopped(sm, tx);
                Ok(())
            }
            other => {
                let err = other.not_ready(index);
                *self = other;
                Err(err)
            }
        }
    }

    fn set_enabled(&mut self, index: u8, enabled: bool) -> Result<()> {
        match (mem::replace(self, LaneSlot::Poisoned), enabled) {
            (LaneSlot::Stopped(sm, tx), true) => {
                *self = LaneSlot::Running(sm.start(), tx);
                Ok(())
            }
            (LaneSlot::Running(sm, tx), false) => {
                *self = LaneSlot::Stopped(sm.stop(), tx);
                Ok(())
            }
            (state @ (LaneSlot::Stopped(..) | LaneSlot::Running(..)), _) => {
                *self = state;
                Ok(())
            }
            (other, _) => {
                let err = other.not_ready(index);
                *self = other;
                Err(err)
            }
        }
    }

    fn push(&mut self, index: u8, value: u32) -> Result<()> {
        let tx = match self {
            LaneSlot::Stopped(_, tx) | LaneSlot::Running(_, tx) => tx,
            other => return Err(other.not_ready(index)),
        };
        while !tx.write(value) {
            core::hint::spin_loop();
        }
        Ok(())
    }
}

/// One PIO block driven through `rp2040-hal`.
pub struct PioLanes<P: PIOExt> {
    pio: PIO<P>,
    program: Option<InstalledProgram<P>>,
    sm0: LaneSlot<P, SM0>,
    sm1: LaneSlot<P, SM1>,
    sm2: LaneSlot<P, SM2>,
    sm3: LaneSlot<P, SM3>,
    system_clock_hz: u32,
}

impl<P: PIOExt> PioLanes<P> {
    /// Take the PIO block out of reset and split it into its state machines.
    pub fn new(block: P, resets: &mut RESETS, system_clock_hz: u32) -> Self {
        let (pio, sm0, sm1, sm2, sm3) = block.split(resets);
        Self {
            pio,
            program: None,
            sm0: LaneSlot::Free(sm0),
            sm1: LaneSlot::Free(sm1),
            sm2: LaneSlot::Free(sm2),
            sm3: LaneSlot::Free(sm3),
            system_clock_hz,
        }
    }
}

/// Run `$body` against the slot selected by a lane index.
macro_rules! on_lane {
    ($lanes:expr, $index:expr, $slot:ident => $body:expr) => {
        match $index {
            0 => {
                let $slot = &mut $lanes.sm0;
                $body
            }
            1 => {
                let $slot = &mut $lanes.sm1;
                $body
            }
            2 => {
                let $slot = &mut $lanes.sm2;
                $body
            }
            3 => {
                let $slot = &mut $lanes.sm3;
                $body
            }
            n => Err(BlinkError::InvalidLane(n)),
        }
    };
}

impl<P: PIOExt> PioBackend for PioLanes<P> {
    fn system_clock_hz(&self) -> u32 {
        self.system_clock_hz
    }

    fn load_program(&mut self) -> Result<u8> {
        if let Some(installed) = &self.program {
            return Ok(installed.offset());
        }
        let installed = self
            .pio
            .install(&program::blink_program())
            .map_err(|_| BlinkError::ProgramSpace)?;
        let offset = installed.offset();
        log_debug!("toggle program loaded at offset {}", offset);
        self.program = Some(installed);
        Ok(offset)
    }

    fn claim_lane(&mut self) -> Result<LaneId> {
        let index = if self.sm0.claim() {
            0
        } else if self.sm1.claim() {
            1
        } else if self.sm2.claim() {
            2
        } else if self.sm3.claim() {
            3
        } else {
            return Err(BlinkError::NoFreeLane);
        };
        Ok(LaneId::new(index))
    }

    fn init_lane(&mut self, lane: LaneId, offset: u8, pin: u8) -> Result<()> {
        let program = self
            .program
            .as_ref()
            .filter(|installed| installed.offset() == offset)
            .ok_or(BlinkError::ProgramNotLoaded)?;
        let index = lane.index();
        on_lane!(self, index, slot => slot.init(index, program, pin))
    }

    fn set_enabled(&mut self, lane: LaneId, enabled: bool) -> Result<()> {
        let index = lane.index();
        on_lane!(self, index, slot => slot.set_enabled(index, enabled))
    }

    fn push_value(&mut self, lane: LaneId, value: u32) -> Result<()> {
        let index = lane.index();
        on_lane!(self, index, slot => slot.push(index, value))
    }
}
