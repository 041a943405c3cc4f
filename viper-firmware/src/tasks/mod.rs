//! Embassy async tasks
//!
//! The game loop owns all game state; the button task only touches the
//! shared direction slot and the press signal.

pub mod buttons;
pub mod game;

pub use buttons::{button_task, Buttons};
pub use game::game_task;
