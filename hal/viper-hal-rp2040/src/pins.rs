//! Dynamic pin allocation for config-driven hardware setup
//!
//! Buttons and display control lines are assigned by GPIO number in
//! `game.toml`, so the firmware takes them from a bank at runtime. The
//! SPI0 clock and data pins are held back as typed peripherals for the
//! hardware transport.

use embassy_rp::gpio::AnyPin;
use embassy_rp::peripherals::{PIN_18, PIN_19, SPI0};
use embassy_rp::{Peri, Peripherals};

/// Number of user GPIOs on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// GPIOs wired to SPI0 SCK/TX
pub const SPI_PINS: [u8; 2] = [18, 19];

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already taken
    AlreadyTaken,
    /// Pin reserved for the SPI block
    Reserved,
}

/// Pin bank that holds GPIO pins and allows taking them by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT as usize],
    taken: u32,
}

impl PinBank {
    /// Split the peripherals into the pin bank and everything else
    pub fn from_peripherals(p: Peripherals) -> (Self, RemainingPeripherals) {
        let bank = Self {
            pins: [
                Some(p.PIN_0.into()),
                Some(p.PIN_1.into()),
                Some(p.PIN_2.into()),
                Some(p.PIN_3.into()),
                Some(p.PIN_4.into()),
                Some(p.PIN_5.into()),
                Some(p.PIN_6.into()),
                Some(p.PIN_7.into()),
                Some(p.PIN_8.into()),
                Some(p.PIN_9.into()),
                Some(p.PIN_10.into()),
                Some(p.PIN_11.into()),
                Some(p.PIN_12.into()),
                Some(p.PIN_13.into()),
                Some(p.PIN_14.into()),
                Some(p.PIN_15.into()),
                Some(p.PIN_16.into()),
                Some(p.PIN_17.into()),
                None, // SPI0 SCK
                None, // SPI0 TX
                Some(p.PIN_20.into()),
                Some(p.PIN_21.into()),
                Some(p.PIN_22.into()),
                Some(p.PIN_23.into()),
                Some(p.PIN_24.into()),
                Some(p.PIN_25.into()),
                Some(p.PIN_26.into()),
                Some(p.PIN_27.into()),
                Some(p.PIN_28.into()),
                Some(p.PIN_29.into()),
            ],
            taken: 0,
        };
        let remaining = RemainingPeripherals {
            spi0: p.SPI0,
            spi_sck: p.PIN_18,
            spi_mosi: p.PIN_19,
        };
        (bank, remaining)
    }

    /// Take a pin by number
    ///
    /// Returns the pin if available, or an error if:
    /// - Pin number is invalid (>= 30)
    /// - Pin was already taken
    /// - Pin belongs to the SPI block and was not handed back
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        if pin_num >= GPIO_COUNT {
            return Err(PinError::InvalidPin);
        }
        match self.pins[pin_num as usize].take() {
            Some(pin) => {
                self.taken |= 1 << pin_num;
                Ok(pin)
            }
            None if self.taken & (1 << pin_num) != 0 => Err(PinError::AlreadyTaken),
            None if SPI_PINS.contains(&pin_num) => Err(PinError::Reserved),
            None => Err(PinError::AlreadyTaken),
        }
    }

    /// Return a pin to the bank
    ///
    /// Also used to hand the SPI pins over when the display is bit-banged.
    pub fn return_pin(&mut self, pin_num: u8, pin: Peri<'static, AnyPin>) {
        if pin_num < GPIO_COUNT {
            self.pins[pin_num as usize] = Some(pin);
            self.taken &= !(1 << pin_num);
        }
    }
}

/// Peripherals that stay typed after creating the PinBank
pub struct RemainingPeripherals {
    pub spi0: Peri<'static, SPI0>,
    pub spi_sck: Peri<'static, PIN_18>,
    pub spi_mosi: Peri<'static, PIN_19>,
}
