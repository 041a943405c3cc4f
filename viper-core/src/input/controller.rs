//! Debounce and direction arbitration

use super::buttons::ButtonState;
use super::slot::DirectionSlot;
use crate::game::Direction;

/// Result of one raw button signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputOutcome {
    /// Inside the debounce window of the previous accepted signal
    Debounced,
    /// Accepted, but no button was held when sampled
    NoButton,
    /// Reversal of the current direction, ignored
    Rejected(Direction),
    /// Direction slot updated
    Accepted(Direction),
}

/// Timestamp debounce over a wrapping millisecond clock
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    window_ms: u32,
    last_accepted_ms: Option<u32>,
}

impl Debouncer {
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            last_accepted_ms: None,
        }
    }

    /// Accept a signal at `now_ms` if the window since the last accepted
    /// one has passed; accepting restarts the window
    pub fn accept(&mut self, now_ms: u32) -> bool {
        if let Some(last) = self.last_accepted_ms {
            if now_ms.wrapping_sub(last) < self.window_ms {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }
}

/// Turns button edges into direction changes
#[derive(Debug, Clone, Copy)]
pub struct InputController {
    debouncer: Debouncer,
}

impl InputController {
    pub const fn new(debounce_ms: u32) -> Self {
        Self {
            debouncer: Debouncer::new(debounce_ms),
        }
    }

    /// Handle one falling edge sampled at `now_ms`
    pub fn on_edge(
        &mut self,
        now_ms: u32,
        buttons: ButtonState,
        slot: &DirectionSlot,
    ) -> InputOutcome {
        if !self.debouncer.accept(now_ms) {
            return InputOutcome::Debounced;
        }

        let Some(requested) = buttons.first_pressed() else {
            return InputOutcome::NoButton;
        };

        match slot.turn(requested) {
            Ok(dir) => InputOutcome::Accepted(dir),
            Err(_) => InputOutcome::Rejected(requested),
        }
    }
}
