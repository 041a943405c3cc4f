//! Board-agnostic core logic for the snake firmware
//!
//! This crate contains all game logic that does not depend on specific
//! hardware:
//!
//! - Grid, snake buffer and the tick-driven game engine
//! - Input arbitration (debounce, priority, atomic direction slot)
//! - Move scheduling (movement delay, game-over reset polling)
//! - Configuration constants and board wiring types
//! - The page-display trait the renderer draws through

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod game;
pub mod input;
pub mod scheduler;
pub mod traits;
