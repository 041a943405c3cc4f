//! Blocking SPI transport on an RP2040 SPI block

use embassy_rp::spi::{self, Blocking, ClkPin, Instance, MosiPin, Spi};
use embassy_rp::Peri;
use viper_hal::spi::{Phase, Polarity};
use viper_hal::{SpiBus, SpiConfig, SpiError};

/// TX-only SPI master
pub struct RpSpi<'d, T: Instance> {
    spi: Spi<'d, T, Blocking>,
}

impl<'d, T: Instance> RpSpi<'d, T> {
    /// Claim the block with its clock and data pins
    pub fn new(
        inner: Peri<'d, T>,
        clk: Peri<'d, impl ClkPin<T> + 'd>,
        mosi: Peri<'d, impl MosiPin<T> + 'd>,
        config: &SpiConfig,
    ) -> Self {
        Self {
            spi: Spi::new_blocking_txonly(inner, clk, mosi, rp_config(config)),
        }
    }
}

impl<T: Instance> SpiBus for RpSpi<'_, T> {
    type Error = SpiError;

    fn write(&mut self, data: &[u8]) -> Result<(), SpiError> {
        self.spi.blocking_write(data).map_err(|_| SpiError::Bus)
    }
}

fn rp_config(config: &SpiConfig) -> spi::Config {
    let (polarity, phase) = config.mode.into();
    let mut rp = spi::Config::default();
    rp.frequency = config.frequency;
    rp.polarity = match polarity {
        Polarity::IdleLow => spi::Polarity::IdleLow,
        Polarity::IdleHigh => spi::Polarity::IdleHigh,
    };
    rp.phase = match phase {
        Phase::CaptureOnFirstTransition => spi::Phase::CaptureOnFirstTransition,
        Phase::CaptureOnSecondTransition => spi::Phase::CaptureOnSecondTransition,
    };
    rp
}
