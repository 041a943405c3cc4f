//! SPI bus abstractions
//!
//! The display link is write-only: MOSI and SCK are wired, MISO is not.
//! Chip select and data/command lines are plain GPIO owned by the device
//! driver, not by the bus.

/// Errors a transport can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiError {
    /// Peripheral reported an overrun or mode fault
    Bus,
    /// Transfer did not complete
    Timeout,
}

/// Synchronous serial transport (SPI master, TX only)
///
/// Every call blocks until the last bit has left the shift register.
/// There is no queue.
pub trait SpiBus {
    /// Error type for transfer operations
    type Error;

    /// Write all bytes, MSB first
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Write a single byte
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write(&[byte])
    }
}

impl<T: SpiBus + ?Sized> SpiBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(data)
    }
}

/// SPI configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock polarity and phase
    pub mode: Mode,
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self {
            frequency: 8_000_000, // SH1107 tops out at 10 MHz
            mode: Mode::Mode0,
        }
    }
}

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl From<Mode> for (Polarity, Phase) {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Mode0 => (Polarity::IdleLow, Phase::CaptureOnFirstTransition),
            Mode::Mode1 => (Polarity::IdleLow, Phase::CaptureOnSecondTransition),
            Mode::Mode2 => (Polarity::IdleHigh, Phase::CaptureOnFirstTransition),
            Mode::Mode3 => (Polarity::IdleHigh, Phase::CaptureOnSecondTransition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        bytes: usize,
    }

    impl SpiBus for Counter {
        type Error = SpiError;

        fn write(&mut self, data: &[u8]) -> Result<(), SpiError> {
            self.bytes += data.len();
            Ok(())
        }
    }

    #[test]
    fn test_write_byte_goes_through_write() {
        let mut bus = Counter { bytes: 0 };
        bus.write_byte(0xAE).unwrap();
        bus.write(&[0xD5, 0x80]).unwrap();
        assert_eq!(bus.bytes, 3);
    }

    fn send_init<B: SpiBus>(mut bus: B) -> Result<(), B::Error> {
        bus.write(&[0xAE, 0xAF])
    }

    #[test]
    fn test_mut_ref_is_a_bus() {
        let mut bus = Counter { bytes: 0 };
        send_init(&mut bus).unwrap();
        send_init(&mut bus).unwrap();
        assert_eq!(bus.bytes, 4);
    }

    #[test]
    fn test_mode_split() {
        let (pol, pha): (Polarity, Phase) = Mode::Mode3.into();
        assert_eq!(pol, Polarity::IdleHigh);
        assert_eq!(pha, Phase::CaptureOnSecondTransition);
    }
}
