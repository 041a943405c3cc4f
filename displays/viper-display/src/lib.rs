//! Game rendering for page-addressed OLED panels
//!
//! This crate provides:
//! - `Renderer` that draws a `GameState` through any `PageDisplay`
//! - The 5x7 glyphs used for the score line
//! - `MidpointCircle` for the food marker
//! - `PageRam`, an in-memory panel for tests and simulation
//!
//! # Drawing model
//!
//! Nothing is buffered. Each pixel is a cursor move plus one data byte,
//! and that byte replaces the whole 8-row column slice in panel RAM. Two
//! pixels in the same page and column therefore overwrite each other; the
//! last one drawn wins. Frames are always drawn in the same order (clear,
//! partition line, snake, food, score) so the result is stable.

#![cfg_attr(not(test), no_std)]

pub mod circle;
pub mod font;
pub mod ram;
pub mod renderer;

pub use circle::MidpointCircle;
pub use font::{glyph, GLYPH_WIDTH};
pub use ram::PageRam;
pub use renderer::Renderer;
