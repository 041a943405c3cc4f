//! Viper Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the game firmware is
//! written against. Chip-specific crates (RP2040 today) implement them, and
//! tests implement them with plain structs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  viper-firmware / viper-drivers         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  viper-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!          ┌──────────┴──────────┐
//!          ▼                     ▼
//! ┌─────────────────┐   ┌─────────────────┐
//! │ viper-hal-rp2040│   │  BitBangSpi     │
//! │ (hardware SPI)  │   │ (viper-drivers) │
//! └─────────────────┘   └─────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`spi::SpiBus`] - Write-only synchronous serial transport

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use spi::{SpiBus, SpiConfig, SpiError};
