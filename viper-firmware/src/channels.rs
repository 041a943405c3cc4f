//! State shared between tasks
//!
//! The button task is the only writer of both. The game task reads the
//! direction once per move and drains the press signal while waiting to
//! restart.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use viper_core::input::{ButtonState, DirectionSlot};

/// Latest accepted movement direction
pub static DIRECTION: DirectionSlot = DirectionSlot::new();

/// Button levels sampled at the last press
pub static BUTTON_PRESS: Signal<CriticalSectionRawMutex, ButtonState> = Signal::new();
