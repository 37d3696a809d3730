//! # Output renderer
//! Drives the WS2812 ring and the buzzer pin. Each request is a one-shot
//! awaited sequence; nothing here is cancellable, a sequence always runs
//! to completion before the main loop samples input again.
//!
//! Ring writes cannot be meaningfully recovered at this layer, so their
//! results are discarded; a failing strip shows up as a frozen indicator.

use busylight::config::{
    self, ALARM_PRIMARY, ALARM_SECONDARY, ALERT, IDLE, NUM_LEDS, OFF, SELF_TEST_PALETTE,
};
use busylight::state::SteadyFill;
use defmt::info;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::Spi;
use embassy_time::{Duration, Timer};
use smart_leds::{RGB8, SmartLedsWriteAsync, brightness};
use ws2812_async::{Grb, Ws2812};

/// Hold after clearing the ring and per color phase of an alarm pulse.
const PHASE_HOLD: Duration = Duration::from_millis(500);

/// Pause between pixels during a wipe, making the fill visibly animated.
const WIPE_STEP: Duration = Duration::from_millis(10);

/// Hold on each palette color during the startup self test.
const SELF_TEST_HOLD: Duration = Duration::from_millis(100);

/// The ws2812 driver over the SPI TX channel; 12 SPI bytes encode one pixel.
type Ring = Ws2812<Spi<'static, SPI0, embassy_rp::spi::Async>, Grb, { 12 * NUM_LEDS }>;

/// Exclusive owner of the ring and the buzzer output.
pub struct Renderer {
    /// WS2812 driver handle.
    ring: Ring,
    /// Frame buffer; `show` flushes it to the hardware.
    frame: [RGB8; NUM_LEDS],
    /// Active buzzer drive pin, toggled once per alarm color phase.
    buzzer: Output<'static>,
}

impl Renderer {
    /// Wrap the SPI channel and the buzzer pin.
    pub fn new(spi: Spi<'static, SPI0, embassy_rp::spi::Async>, buzzer: Output<'static>) -> Self {
        Self {
            ring: Ws2812::new(spi),
            frame: [RGB8::default(); NUM_LEDS],
            buzzer,
        }
    }

    /// Flush the frame buffer to the ring.
    async fn show(&mut self) {
        self.ring
            .write(brightness(
                self.frame.iter().copied(),
                config::RING_BRIGHTNESS,
            ))
            .await
            .ok();
    }

    /// Set one pixel and flush, with the wipe pause in between.
    async fn wipe_pixel(&mut self, index: usize, color: RGB8) {
        self.frame[index] = color;
        Timer::after(WIPE_STEP).await;
        self.show().await;
    }

    /// Wipe the whole ring to a single color, pixel by pixel in index order.
    async fn wipe(&mut self, color: RGB8) {
        for index in 0..NUM_LEDS {
            self.wipe_pixel(index, color).await;
        }
    }

    /// Fill the whole ring with one color in a single flush.
    async fn fill(&mut self, color: RGB8) {
        self.frame = [color; NUM_LEDS];
        self.show().await;
    }

    /// Turn the ring off and keep it dark for one phase hold.
    pub async fn clear(&mut self) {
        self.fill(OFF).await;
        Timer::after(PHASE_HOLD).await;
    }

    /// Steady fill: clear the ring, then wipe to the mode color.
    pub async fn steady_fill(&mut self, fill: SteadyFill) {
        let color = match fill {
            SteadyFill::Idle => IDLE,
            SteadyFill::Alert => ALERT,
        };
        self.clear().await;
        self.wipe(color).await;
    }

    /// One alarm pulse: primary color with a buzzer toggle, hold, then the
    /// secondary color with the buzzer toggled back, hold. The color and
    /// buzzer phases are deliberately one operation; they are never driven
    /// separately.
    pub async fn alarm_pulse(&mut self) {
        self.fill(ALARM_PRIMARY).await;
        self.buzzer.toggle();
        Timer::after(PHASE_HOLD).await;

        self.fill(ALARM_SECONDARY).await;
        self.buzzer.toggle();
        Timer::after(PHASE_HOLD).await;
    }

    /// Boot hardware sanity check: wipe the ring through the whole palette,
    /// ending on the off color.
    pub async fn startup_self_test(&mut self) {
        info!("ring self test");
        for color in SELF_TEST_PALETTE {
            self.wipe(color).await;
            Timer::after(SELF_TEST_HOLD).await;
        }
    }
}
