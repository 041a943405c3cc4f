//! Hardware abstraction traits
//!
//! The renderer draws through these; drivers implement them.

pub mod display;

pub use display::{DisplayError, PageDisplay, PageDisplayExt};
