//! # Busylight core
//! Control logic for a two-button busy light: a WS2812 ring that shows an
//! idle or alert color, and a panic mode that repeats an audible alarm
//! pulse on a fixed tick schedule.
//!
//! This library half is pure: it holds the device state machine and the
//! build-time configuration, and it compiles for the host so the tick
//! semantics can be exercised with `cargo test`. The firmware binary
//! (`src/main.rs`, behind the `embedded` feature) samples the buttons,
//! feeds the state machine once per tick and renders its requests on the
//! ring and buzzer.
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod state;
