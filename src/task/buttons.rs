//! # Input sampler
//! Reads the two button pins. One raw level read per pin per tick, no
//! debouncing and no edge detection; all downstream logic works from the
//! returned [`ButtonSample`] alone.

use busylight::state::ButtonSample;
use embassy_rp::gpio::Input;

/// Owns the two button input pins for the lifetime of the firmware.
pub struct ButtonSampler<'a> {
    /// Button 1, the busy toggle.
    button1: Input<'a>,
    /// Button 2, the panic trigger.
    button2: Input<'a>,
}

impl<'a> ButtonSampler<'a> {
    /// Bundle the two configured input pins into a sampler.
    pub const fn new(button1: Input<'a>, button2: Input<'a>) -> Self {
        Self { button1, button2 }
    }

    /// Read both pins exactly once. GPIO reads cannot fail at this layer;
    /// the level at the instant of the read stands for the whole tick.
    pub fn sample(&self) -> ButtonSample {
        ButtonSample {
            button1: self.button1.is_high(),
            button2: self.button2.is_high(),
        }
    }
}
