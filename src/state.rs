//! # State of the device
//! This module describes the state of the device and the single tick
//! transition that is applied to it. The transition is pure: it consumes
//! one button sample, mutates the state through an exclusive reference and
//! reports which renderer actions the tick asks for. All hardware side
//! effects happen outside this module.

/// The instantaneous levels of both buttons, read exactly once per tick.
///
/// Raw levels, no debouncing and no edge detection: a high level counts as
/// pressed for the whole tick. A sample is never stored beyond the tick
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSample {
    /// Button 1, the busy toggle (highest priority).
    pub button1: bool,
    /// Button 2, the panic trigger (only honored when button 1 is not held).
    pub button2: bool,
}

impl ButtonSample {
    /// A sample with neither button pressed.
    pub const fn released() -> Self {
        Self {
            button1: false,
            button2: false,
        }
    }
}

/// The steady ring fill a tick can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SteadyFill {
    /// Wipe the ring to the idle color.
    Idle,
    /// Wipe the ring to the alert color.
    Alert,
}

/// The renderer actions requested by one tick.
///
/// At most one steady fill and at most one alarm pulse per tick; when both
/// are set the fill is rendered first, matching the evaluation order of the
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutput {
    /// Steady fill to render this tick, if any.
    pub steady_fill: Option<SteadyFill>,
    /// Whether one alarm pulse must be rendered this tick.
    pub alarm_pulse: bool,
}

/// All the state of the device. Created once at startup and mutated only
/// by [`DeviceState::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceState {
    /// Busy mode: the ring shows the alert color instead of the idle color.
    pub busy: bool,
    /// Panic mode: alarm pulses repeat until cleared via button 1.
    /// Whenever this is true, `busy` is true as well.
    pub panic: bool,
    /// Set when panic is (re)activated; forces an immediate alarm pulse on
    /// the next bookkeeping pass instead of waiting for the counter.
    alarm_first_pulse: bool,
    /// Ticks since the last alarm pulse while in panic mode.
    alarm_ticks: u32,
    /// Ticks between automatic alarm pulses, fixed at construction.
    alarm_period_ticks: u32,
}

impl DeviceState {
    /// Create the startup state: idle, no panic, first-pulse armed.
    pub const fn new(alarm_period_ticks: u32) -> Self {
        Self {
            busy: false,
            panic: false,
            alarm_first_pulse: true,
            alarm_ticks: 0,
            alarm_period_ticks,
        }
    }

    /// Apply one tick of the mode state machine.
    ///
    /// Evaluation order is fixed: button 1 first, button 2 only when button
    /// 1 is not held, then the alarm bookkeeping. Clearing panic via button
    /// 1 therefore never fires a pulse on the same tick, because panic is
    /// already false by the time the bookkeeping runs.
    pub fn tick(&mut self, sample: ButtonSample) -> TickOutput {
        let mut output = TickOutput::default();

        if sample.button1 {
            if self.panic {
                // Exiting panic always lands in busy, never in idle.
                self.panic = false;
                self.busy = true;
            } else {
                self.busy = !self.busy;
            }
            output.steady_fill = Some(if self.busy {
                SteadyFill::Alert
            } else {
                SteadyFill::Idle
            });
        } else if sample.button2 {
            // (Re)arm the alarm; the pulse below supersedes any steady fill.
            self.busy = true;
            self.panic = true;
            self.alarm_first_pulse = true;
            self.alarm_ticks = 0;
        }

        // Alarm bookkeeping. Software counting stands in for a hardware
        // timer; cancellation on mode exit is free because the counter is
        // simply not evaluated while panic is false.
        if self.panic {
            if self.alarm_first_pulse {
                self.alarm_first_pulse = false;
                output.alarm_pulse = true;
            } else {
                self.alarm_ticks += 1;
                if self.alarm_ticks >= self.alarm_period_ticks {
                    self.alarm_ticks = 0;
                    output.alarm_pulse = true;
                }
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: u32 = 20;

    fn button1() -> ButtonSample {
        ButtonSample {
            button1: true,
            button2: false,
        }
    }

    fn button2() -> ButtonSample {
        ButtonSample {
            button1: false,
            button2: true,
        }
    }

    #[test]
    fn starts_idle_without_panic() {
        let state = DeviceState::new(PERIOD);
        assert!(!state.busy);
        assert!(!state.panic);
    }

    #[test]
    fn button1_toggles_busy_and_requests_fill() {
        let mut state = DeviceState::new(PERIOD);

        let output = state.tick(button1());
        assert!(state.busy);
        assert_eq!(output.steady_fill, Some(SteadyFill::Alert));
        assert!(!output.alarm_pulse);

        let output = state.tick(button1());
        assert!(!state.busy);
        assert_eq!(output.steady_fill, Some(SteadyFill::Idle));
        assert!(!output.alarm_pulse);
    }

    #[test]
    fn button2_enters_panic_with_immediate_pulse() {
        let mut state = DeviceState::new(PERIOD);

        let output = state.tick(button2());
        assert!(state.busy);
        assert!(state.panic);
        assert_eq!(output.steady_fill, None);
        assert!(output.alarm_pulse);
    }

    #[test]
    fn button1_wins_when_both_buttons_are_held() {
        let both = ButtonSample {
            button1: true,
            button2: true,
        };

        let mut with_both = DeviceState::new(PERIOD);
        let mut with_b1_only = DeviceState::new(PERIOD);
        let out_both = with_both.tick(both);
        let out_b1 = with_b1_only.tick(button1());

        assert_eq!(with_both, with_b1_only);
        assert_eq!(out_both, out_b1);
    }

    #[test]
    fn leaving_panic_lands_in_busy_without_a_pulse() {
        let mut state = DeviceState::new(PERIOD);
        state.tick(button2());

        let output = state.tick(button1());
        assert!(state.busy);
        assert!(!state.panic);
        assert_eq!(output.steady_fill, Some(SteadyFill::Alert));
        assert!(!output.alarm_pulse);
    }

    #[test]
    fn idle_ticks_never_pulse_outside_panic() {
        let mut state = DeviceState::new(PERIOD);
        for _ in 0..(PERIOD * 3) {
            let output = state.tick(ButtonSample::released());
            assert_eq!(output, TickOutput::default());
        }
    }
}
