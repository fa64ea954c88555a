//! ptt-timer firmware entry point (nRF52840).
//!
//! One task, one loop: sample the PTT line and buttons, advance the pure
//! state machine, render the clock and banner, drive the buzzer, sleep one
//! poll period. No channels, no spawned workers - there is only one input
//! source and one output surface, so a flat poll loop is the whole program.

#![no_std]
#![no_main]

mod buzzer;
mod ui;

use defmt::{info, unwrap};
use defmt_rtt as _;
use panic_probe as _;

use embassy_executor::Spawner;
use embassy_nrf::gpio::Pin as _;
use embassy_nrf::pwm::SimplePwm;
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{Duration, Instant, Ticker};

use ptt_timer::clock::{ClockReadout, WallClock};
use ptt_timer::config;
use ptt_timer::timer::TimerState;

use crate::buzzer::Buzzer;
use crate::ui::inputs::InputPins;

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("ptt-timer starting");

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let mut display = unwrap!(ui::display::init(i2c));

    let inputs = InputPins::new(p.P0_03.degrade(), p.P0_11.degrade(), p.P0_12.degrade());
    let mut buzzer = Buzzer::new(SimplePwm::new_1ch(p.PWM0, p.P0_08));

    // Empty timeout list is a build misconfiguration: abort and let the
    // supervisor restart us once it is fixed.
    let mut state = unwrap!(TimerState::new(
        &config::TIMEOUT_CYCLE_SECS,
        config::SOUND_DEFAULT_ON,
        config::DEBOUNCE_POLLS,
    ));
    let wall = WallClock::new(config::CLOCK_SEED_UNIX, Instant::now().as_millis());

    let mut ticker = Ticker::every(Duration::from_millis(config::POLL_PERIOD_MS));
    let mut last_phase = state.phase();
    loop {
        let now_ms = Instant::now().as_millis();
        let out = state.tick(inputs.sample(), now_ms);

        if state.phase() != last_phase {
            info!("phase {} -> {}", last_phase, state.phase());
            last_phase = state.phase();
        }

        buzzer.set(out.buzzer_on);

        let clock = ClockReadout::from_unix(wall.unix_now(now_ms), config::UTC_OFFSET_MINUTES);
        ui::display::draw_frame(&mut display, &clock, out.banner);

        ticker.next().await;
    }
}
