//! # Build-time configuration
//! Every parameter of the device is a fixed constant: ring geometry, the
//! color palette and the alarm repeat interval. There is no CLI, no
//! environment and no configuration file; changing any of these means
//! reflashing.

use smart_leds::RGB8;

/// Number of pixels on the ring.
pub const NUM_LEDS: usize = 8;

/// Ticks between automatic alarm pulses while panic mode stays active.
/// With the 500 ms tick period this repeats roughly every 10 seconds.
pub const ALARM_PERIOD_TICKS: u32 = 20;

/// Global brightness for every ring write. Full scale, so the palette
/// values below reach the pixels unchanged.
pub const RING_BRIGHTNESS: u8 = 255;

/// Ring color while the device is idle.
pub const IDLE: RGB8 = RGB8::new(0, 255, 0);

/// Ring color while the device signals busy.
pub const ALERT: RGB8 = RGB8::new(255, 0, 0);

/// First color phase of an alarm pulse. The buzzer toggles on entering
/// this phase, so with a buzzer that idles low this is the audible phase.
pub const ALARM_PRIMARY: RGB8 = RGB8::new(0, 0, 255);

/// Second color phase of an alarm pulse, buzzer toggled back.
pub const ALARM_SECONDARY: RGB8 = RGB8::new(255, 0, 0);

/// All pixels dark.
pub const OFF: RGB8 = RGB8::new(0, 0, 0);

/// Palette order for the startup self test wipe.
pub const SELF_TEST_PALETTE: [RGB8; 5] = [IDLE, ALERT, ALARM_PRIMARY, ALARM_SECONDARY, OFF];
