//! Configuration types
//!
//! Fixed game and panel geometry lives here as constants; the handful of
//! values a board may tune (timing, contrast, wiring) are plain structs
//! with defaults.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
