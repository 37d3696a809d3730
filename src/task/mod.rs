//! Hardware-facing halves of the firmware: the input sampler and the
//! output renderer. Both are driven from the single main-loop task.
pub mod buttons;
pub mod light_effects;
