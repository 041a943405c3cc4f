//! Snake game engine
//!
//! The board is a 16x16 torus. One call to [`Engine::advance`] is one
//! tick: the snake moves one cell in the given direction, may eat, and
//! may collide with itself.

pub mod engine;
pub mod grid;
pub mod snake;

pub use engine::{Engine, GameState, StateError, TickOutcome};
pub use grid::{Coord, Direction};
pub use snake::Snake;
