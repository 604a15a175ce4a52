//! The toggle program run by the PIO state machine
//!
//! Source lives in `src/blink.pio`. The program pulls the half period once,
//! keeps it in `y`, then loops: copy `y` into `x`, drive the pin, count `x`
//! down to zero, and repeat with the pin driven the other way.

use pio::{Program, RP2040_MAX_PROGRAM_SIZE};

/// Cycles each half period spends outside the countdown loop.
///
/// `mov x, y` + `set pins` + the final fall-through of `jmp x--`. This is a
/// property of `blink.pio` and must be re-derived if that program changes.
pub const CYCLE_OVERHEAD: u32 = 3;

/// Assembled toggle program.
pub fn blink_program() -> Program<RP2040_MAX_PROGRAM_SIZE> {
    pio_proc::pio_file!(
        "src/blink.pio",
        select_program("blink"),
        options(max_program_size = 32)
    )
    .program
}
