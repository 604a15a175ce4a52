//! # Pico PIO Blink
//!
//! Blinks the LED on a Pico board without involving the CPU.
//!
//! GP25, the pin the Pico uses for the on-board LED, is handed to a PIO state
//! machine running `src/blink.pio`. Once the blink period has been pushed the
//! main core just sleeps.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod firmware {
    use cortex_m::asm::wfi;
    // The macro for our start-up function
    use rp_pico::entry;

    use defmt_rtt as _;
    use panic_probe as _;

    use rp_pico::hal::gpio::{FunctionPio0, Pin};
    // Pull in any important traits
    use rp_pico::hal::prelude::*;

    // A shorter alias for the Peripheral Access Crate, which provides low-level
    // register access
    use rp_pico::hal::pac;

    // A shorter alias for the Hardware Abstraction Layer, which provides
    // higher-level drivers.
    use rp_pico::hal;

    use pio_blink::peripheral::rp2040::PioLanes;
    use pio_blink::status::BANNER;
    use pio_blink::{log_error, log_info, timing, BlinkConfig};

    #[entry]
    fn main() -> ! {
        log_info!("{}", BANNER);

        // Grab our singleton objects
        let mut pac = pac::Peripherals::take().unwrap();

        // Set up the watchdog driver - needed by the clock setup code
        let mut watchdog = hal::Watchdog::new(pac.WATCHDOG);

        // Configure the clocks
        //
        // The default is to generate a 125 MHz system clock
        let clocks = hal::clocks::init_clocks_and_plls(
            rp_pico::XOSC_CRYSTAL_FREQ,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();

        // The single-cycle I/O block controls our GPIO pins
        let sio = hal::Sio::new(pac.SIO);

        // Set the pins up according to their function on this particular board
        let pins = rp_pico::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let config = BlinkConfig::ONBOARD_LED;

        // Hand the LED over to PIO0
        let led: Pin<_, FunctionPio0, _> = pins.led.into_function();
        debug_assert_eq!(led.id().num, config.pin);

        let system_clock_hz = clocks.system_clock.freq().to_Hz();
        let mut pio = PioLanes::new(pac.PIO0, &mut pac.RESETS, system_clock_hz);

        let blink = match pio_blink::start(&mut pio, &config) {
            Ok(blink) => blink,
            Err(err) => {
                log_error!("failed to start blink: {}", err);
                panic!("blink configuration rejected");
            }
        };
        log_info!(
            "state machine {} running, divider {} ({} Hz actual)",
            blink.lane().index(),
            blink.divider(),
            timing::actual_frequency_hz(system_clock_hz, blink.divider())
        );

        // The PIO handles the blinking
        loop {
            wfi();
        }
    }
}

/// Host builds only exist so `cargo build` and `cargo test` work off-target.
#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("pio-blink is firmware; build with --target thumbv6m-none-eabi");
}

// End of file
