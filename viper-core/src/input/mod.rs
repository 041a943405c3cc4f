//! Button input handling
//!
//! Buttons are sampled on a falling edge. The controller applies a
//! global debounce window, picks one button by fixed priority, rejects
//! reversals and publishes the result through a lock-free slot that the
//! game loop reads once per tick.

pub mod buttons;
pub mod controller;
pub mod slot;

pub use buttons::ButtonState;
pub use controller::{Debouncer, InputController, InputOutcome};
pub use slot::DirectionSlot;
