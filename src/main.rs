// we are in an environment with constrained resources, so we do not use the standard library and we define a different entry point.
#![no_std]
#![no_main]

use busylight::config::ALARM_PERIOD_TICKS;
use busylight::state::{DeviceState, SteadyFill};
use defmt::{debug, info};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::{self, Spi};
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

mod task;

use task::buttons::ButtonSampler;
use task::light_effects::Renderer;

/// Nominal tick period of the main loop, the sole unit of scheduling
/// granularity. The alarm repeat interval is `ALARM_PERIOD_TICKS` of these.
const TICK_PERIOD: Duration = Duration::from_millis(500);

/// Settle time between the startup self test and the first idle fill.
const STARTUP_SETTLE: Duration = Duration::from_secs(1);

// Entry point. Everything runs in this one task: sample the buttons,
// advance the state machine, render its requests, sleep one tick, repeat.
// The renderer sequences block the loop while they run; input is only
// sampled between ticks.
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("busylight start");

    let p = embassy_rp::init(Default::default());

    // Buttons are wired active-high: pressed reads high.
    let sampler = ButtonSampler::new(
        Input::new(p.PIN_16, Pull::Down),
        Input::new(p.PIN_17, Pull::Down),
    );

    // The buzzer is edge-toggled by the alarm pulse, so force a known low
    // level at boot; a restart mid-pulse must not leave it sounding.
    let buzzer = Output::new(p.PIN_18, Level::Low);

    // The WS2812 data stream is generated on the SPI TX line. The clock
    // pin is claimed by the peripheral but goes nowhere.
    let mut spi_config = spi::Config::default();
    spi_config.frequency = 3_800_000;
    let spi = Spi::new_txonly(p.SPI0, p.PIN_22, p.PIN_19, p.DMA_CH1, spi_config);

    let mut renderer = Renderer::new(spi, buzzer);

    // Boot sequence: ring off, wipe through the palette as a hardware
    // sanity check, settle, then the idle steady state.
    renderer.clear().await;
    renderer.startup_self_test().await;
    Timer::after(STARTUP_SETTLE).await;
    renderer.steady_fill(SteadyFill::Idle).await;

    let mut device = DeviceState::new(ALARM_PERIOD_TICKS);
    info!("entering main loop");

    loop {
        let sample = sampler.sample();
        let output = device.tick(sample);
        debug!("tick: sample {}, output {}", sample, output);

        if let Some(fill) = output.steady_fill {
            info!("steady fill, busy={} panic={}", device.busy, device.panic);
            renderer.steady_fill(fill).await;
        }
        if output.alarm_pulse {
            info!("alarm pulse");
            renderer.alarm_pulse().await;
        }

        Timer::after(TICK_PERIOD).await;
    }
}
