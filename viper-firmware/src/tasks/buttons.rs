//! Button task
//!
//! Sleeps until any of the four inputs falls, samples all four, and runs
//! the sample through the input controller.

use defmt::*;
use embassy_futures::select::select4;
use embassy_time::Instant;

use viper_core::input::{ButtonState, InputController, InputOutcome};
use viper_hal::gpio::ActiveLow;
use viper_hal_rp2040::RpInput;

use crate::channels::{BUTTON_PRESS, DIRECTION};

/// The four direction buttons (active-low, pulled up)
pub struct Buttons {
    pub up: ActiveLow<RpInput<'static>>,
    pub down: ActiveLow<RpInput<'static>>,
    pub left: ActiveLow<RpInput<'static>>,
    pub right: ActiveLow<RpInput<'static>>,
}

impl Buttons {
    /// Current levels of all four buttons
    pub fn sample(&self) -> ButtonState {
        ButtonState {
            up: self.up.is_asserted(),
            down: self.down.is_asserted(),
            left: self.left.is_asserted(),
            right: self.right.is_asserted(),
        }
    }

    /// Wait until any button is pressed
    async fn wait_for_press(&mut self) {
        select4(
            self.up.inner_mut().wait_for_falling_edge(),
            self.down.inner_mut().wait_for_falling_edge(),
            self.left.inner_mut().wait_for_falling_edge(),
            self.right.inner_mut().wait_for_falling_edge(),
        )
        .await;
    }
}

/// Button task - turns presses into direction changes
#[embassy_executor::task]
pub async fn button_task(mut buttons: Buttons, debounce_ms: u32) {
    info!("Button task started");

    let mut input = InputController::new(debounce_ms);

    loop {
        buttons.wait_for_press().await;

        let state = buttons.sample();
        let now_ms = Instant::now().as_millis() as u32;

        match input.on_edge(now_ms, state, &DIRECTION) {
            InputOutcome::Accepted(dir) => debug!("Direction -> {}", dir),
            InputOutcome::Rejected(dir) => debug!("Reversal to {} ignored", dir),
            InputOutcome::NoButton => trace!("Edge with no button held"),
            InputOutcome::Debounced => trace!("Edge debounced"),
        }

        // Restart requests are level-based and bypass the debounce window
        if state.any() {
            BUTTON_PRESS.signal(state);
        }
    }
}
