//! Display wiring
//!
//! The panel talks over either the SPI0 block or two bit-banged GPIOs,
//! chosen in game.toml. Both end up behind one bus type so the game task
//! stays concrete.

use embassy_rp::peripherals::SPI0;
use embassy_time::Delay;
use viper_drivers::{BitBangSpi, Sh1107};
use viper_hal::{SpiBus, SpiError};
use viper_hal_rp2040::{RpOutput, RpSpi};

/// Whichever transport the board uses
pub enum DisplayBus {
    Hardware(RpSpi<'static, SPI0>),
    BitBang(BitBangSpi<RpOutput<'static>, RpOutput<'static>>),
}

impl SpiBus for DisplayBus {
    type Error = SpiError;

    fn write(&mut self, data: &[u8]) -> Result<(), SpiError> {
        match self {
            DisplayBus::Hardware(spi) => spi.write(data),
            DisplayBus::BitBang(spi) => spi.write(data).map_err(|never| match never {}),
        }
    }
}

/// The SH1107 as wired on this board
pub type Panel = Sh1107<DisplayBus, RpOutput<'static>, RpOutput<'static>, RpOutput<'static>, Delay>;
