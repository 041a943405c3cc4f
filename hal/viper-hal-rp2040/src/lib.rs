//! RP2040-specific HAL for the snake firmware
//!
//! This crate provides RP2040 implementations of the shared `viper-hal`
//! traits:
//!
//! - GPIO wrappers for embassy-rp inputs and outputs
//! - Blocking TX-only SPI on the SPI0 block
//! - Pin allocation by number for config-driven setup

#![no_std]

pub mod gpio;
pub mod pins;
pub mod spi;

pub use gpio::{RpInput, RpOutput};
pub use pins::{PinBank, PinError, RemainingPeripherals};
pub use spi::RpSpi;
