//! Bit-banged SPI transport
//!
//! Mode 0, MSB first, TX only. Useful when the SPI block is taken or the
//! display is wired to arbitrary GPIOs.

use core::convert::Infallible;

use viper_hal::{OutputPin, SpiBus};

/// Software SPI master on two GPIOs
pub struct BitBangSpi<SCK, MOSI> {
    sck: SCK,
    mosi: MOSI,
}

impl<SCK: OutputPin, MOSI: OutputPin> BitBangSpi<SCK, MOSI> {
    /// Take the pins and park the clock low
    pub fn new(mut sck: SCK, mosi: MOSI) -> Self {
        sck.set_low();
        Self { sck, mosi }
    }

    pub fn release(self) -> (SCK, MOSI) {
        (self.sck, self.mosi)
    }

    fn shift_out(&mut self, byte: u8) {
        for bit in (0..8).rev() {
            self.mosi.set_state(byte & (1 << bit) != 0);
            // Sampled on the rising edge
            self.sck.set_high();
            self.sck.set_low();
        }
    }
}

impl<SCK: OutputPin, MOSI: OutputPin> SpiBus for BitBangSpi<SCK, MOSI> {
    type Error = Infallible;

    fn write(&mut self, data: &[u8]) -> Result<(), Infallible> {
        for &byte in data {
            self.shift_out(byte);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shared wire state: current MOSI level and bits latched on rising SCK
    #[derive(Default)]
    struct Wire {
        mosi: bool,
        sck: bool,
        latched: Vec<bool>,
    }

    struct Sck(Rc<RefCell<Wire>>);
    struct Mosi(Rc<RefCell<Wire>>);

    impl OutputPin for Sck {
        fn set_high(&mut self) {
            let mut wire = self.0.borrow_mut();
            if !wire.sck {
                let bit = wire.mosi;
                wire.latched.push(bit);
            }
            wire.sck = true;
        }

        fn set_low(&mut self) {
            self.0.borrow_mut().sck = false;
        }

        fn is_set_high(&self) -> bool {
            self.0.borrow().sck
        }
    }

    impl OutputPin for Mosi {
        fn set_high(&mut self) {
            self.0.borrow_mut().mosi = true;
        }

        fn set_low(&mut self) {
            self.0.borrow_mut().mosi = false;
        }

        fn is_set_high(&self) -> bool {
            self.0.borrow().mosi
        }
    }

    fn bus() -> (BitBangSpi<Sck, Mosi>, Rc<RefCell<Wire>>) {
        let wire = Rc::new(RefCell::new(Wire::default()));
        let spi = BitBangSpi::new(Sck(wire.clone()), Mosi(wire.clone()));
        (spi, wire)
    }

    fn received(wire: &Rc<RefCell<Wire>>) -> Vec<u8> {
        wire.borrow()
            .latched
            .chunks(8)
            .map(|bits| bits.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8))
            .collect()
    }

    #[test]
    fn test_msb_first() {
        let (mut spi, wire) = bus();
        spi.write_byte(0xA1).unwrap();
        assert_eq!(wire.borrow().latched.len(), 8);
        assert_eq!(received(&wire), [0xA1]);
    }

    #[test]
    fn test_clock_idles_low() {
        let (mut spi, wire) = bus();
        assert!(!wire.borrow().sck);
        spi.write(&[0xFF, 0x00]).unwrap();
        assert!(!wire.borrow().sck);
    }

    #[test]
    fn test_multi_byte() {
        let (mut spi, wire) = bus();
        spi.write(&[0xB0, 0x00, 0x10, 0x5A]).unwrap();
        assert_eq!(received(&wire), [0xB0, 0x00, 0x10, 0x5A]);
    }
}
