//! Hardware driver implementations
//!
//! Concrete implementations of the traits in viper-core and viper-hal:
//!
//! - SH1107 page-addressed OLED over SPI
//! - Bit-banged SPI transport for boards without a free SPI block

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod transport;

pub use display::Sh1107;
pub use transport::BitBangSpi;
