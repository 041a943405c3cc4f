//! SH1107 OLED Display Driver
//!
//! Driver for 128x128 SH1107-based OLED panels over 4-wire SPI.
//! There is no frame buffer here: each data byte goes straight to panel
//! RAM at the current page/column.

use embedded_hal::delay::DelayNs;
use viper_core::config::DEFAULT_CONTRAST;
use viper_core::traits::{DisplayError, PageDisplay};
use viper_hal::{OutputPin, SpiBus};

/// Reset pulse timing (ms)
const RESET_LOW_MS: u32 = 10;
const RESET_SETTLE_MS: u32 = 10;

/// SH1107 commands
///
/// Page and column addressing live with [`PageDisplay`].
pub mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_ADDRESS_MODE: u8 = 0x20;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const ENTIRE_DISPLAY_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
}

/// Power-up sequence, sent in order after the reset pulse
pub const INIT_SEQUENCE: [u8; 25] = [
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80, // Default clock
    cmd::SET_MUX_RATIO,
    0x7F, // 128 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::SET_CHARGE_PUMP,
    0x14, // Enable charge pump
    cmd::SET_ADDRESS_MODE,
    0x00, // Horizontal
    cmd::SET_SEG_REMAP,    // Flip horizontally
    cmd::SET_COM_SCAN_DEC, // Flip vertically
    cmd::SET_COM_PINS,
    0x12, // Alternative COM config
    cmd::SET_CONTRAST,
    DEFAULT_CONTRAST,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::ENTIRE_DISPLAY_RAM,
    cmd::SET_NORMAL,
    cmd::DISPLAY_ON,
];

/// SH1107 OLED driver
///
/// `dc` selects command (low) or data (high); `cs` is pulled low around
/// every byte.
pub struct Sh1107<SPI, DC, CS, RST, D> {
    spi: SPI,
    dc: DC,
    cs: CS,
    rst: RST,
    delay: D,
    initialized: bool,
}

impl<SPI, DC, CS, RST, D> Sh1107<SPI, DC, CS, RST, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    /// Create a new SH1107 driver; the panel stays untouched until `init`
    pub fn new(spi: SPI, dc: DC, mut cs: CS, rst: RST, delay: D) -> Self {
        cs.set_high();
        Self {
            spi,
            dc,
            cs,
            rst,
            delay,
            initialized: false,
        }
    }

    /// Set panel contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        self.write_command(cmd::SET_CONTRAST)?;
        self.write_command(contrast)
    }

    /// Switch the panel on or off (RAM is kept)
    pub fn set_display_on(&mut self, on: bool) -> Result<(), DisplayError> {
        self.write_command(if on { cmd::DISPLAY_ON } else { cmd::DISPLAY_OFF })
    }

    /// Invert all pixels
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), DisplayError> {
        self.write_command(if inverted {
            cmd::SET_INVERSE
        } else {
            cmd::SET_NORMAL
        })
    }

    /// Give back the bus and pins
    pub fn release(self) -> (SPI, DC, CS, RST, D) {
        (self.spi, self.dc, self.cs, self.rst, self.delay)
    }

    fn hardware_reset(&mut self) {
        self.rst.set_low();
        self.delay.delay_ms(RESET_LOW_MS);
        self.rst.set_high();
        self.delay.delay_ms(RESET_SETTLE_MS);
    }

    /// Clock one byte out with DC at `data`
    fn send(&mut self, byte: u8, data: bool) -> Result<(), DisplayError> {
        self.dc.set_state(data);
        self.cs.set_low();
        let result = self.spi.write_byte(byte);
        self.cs.set_high();
        result.map_err(|_| DisplayError::Transport)
    }
}

impl<SPI, DC, CS, RST, D> PageDisplay for Sh1107<SPI, DC, CS, RST, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    fn init(&mut self) -> Result<(), DisplayError> {
        self.initialized = false;
        self.hardware_reset();

        for &c in INIT_SEQUENCE.iter() {
            self.send(c, false)?;
        }

        self.initialized = true;
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn write_command(&mut self, byte: u8) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        self.send(byte, false)
    }

    fn write_data(&mut self, byte: u8) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        self.send(byte, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use viper_core::traits::PageDisplayExt;
    use viper_hal::SpiError;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Dc(bool),
        Cs(bool),
        Rst(bool),
        Byte(u8),
        DelayMs(u32),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    struct MockPin {
        log: Log,
        make: fn(bool) -> Event,
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
            self.log.borrow_mut().push((self.make)(true));
        }

        fn set_low(&mut self) {
            self.high = false;
            self.log.borrow_mut().push((self.make)(false));
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    struct MockSpi {
        log: Log,
        fail: bool,
    }

    impl SpiBus for MockSpi {
        type Error = SpiError;

        fn write(&mut self, data: &[u8]) -> Result<(), SpiError> {
            if self.fail {
                return Err(SpiError::Bus);
            }
            let mut log = self.log.borrow_mut();
            for &b in data {
                log.push(Event::Byte(b));
            }
            Ok(())
        }
    }

    struct MockDelay {
        log: Log,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_ms(&mut self, ms: u32) {
            self.log.borrow_mut().push(Event::DelayMs(ms));
        }
    }

    type TestDriver = Sh1107<MockSpi, MockPin, MockPin, MockPin, MockDelay>;

    fn driver(fail: bool) -> (TestDriver, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let pin = |make: fn(bool) -> Event| MockPin {
            log: log.clone(),
            make,
            high: false,
        };
        let display = Sh1107::new(
            MockSpi {
                log: log.clone(),
                fail,
            },
            pin(Event::Dc),
            pin(Event::Cs),
            pin(Event::Rst),
            MockDelay { log: log.clone() },
        );
        log.borrow_mut().clear();
        (display, log)
    }

    /// Bytes sent with DC at `data`
    fn bytes(log: &Log, data: bool) -> Vec<u8> {
        let mut dc = false;
        let mut out = Vec::new();
        for event in log.borrow().iter() {
            match *event {
                Event::Dc(level) => dc = level,
                Event::Byte(b) if dc == data => out.push(b),
                _ => {}
            }
        }
        out
    }

    #[test]
    fn test_init_resets_then_sends_sequence() {
        let (mut display, log) = driver(false);
        display.init().unwrap();

        let events = log.borrow();
        assert_eq!(
            &events[..4],
            &[
                Event::Rst(false),
                Event::DelayMs(10),
                Event::Rst(true),
                Event::DelayMs(10)
            ]
        );
        drop(events);

        assert_eq!(bytes(&log, false), INIT_SEQUENCE);
        assert!(bytes(&log, true).is_empty());
        assert!(display.is_initialized());
    }

    #[test]
    fn test_init_sequence_contents() {
        assert_eq!(INIT_SEQUENCE[0], 0xAE);
        assert_eq!(INIT_SEQUENCE[4], 0x7F);
        assert_eq!(INIT_SEQUENCE[17], 0xCF);
        assert_eq!(INIT_SEQUENCE[24], 0xAF);
    }

    #[test]
    fn test_each_byte_framed_by_cs() {
        let (mut display, log) = driver(false);
        display.init().unwrap();
        log.borrow_mut().clear();

        display.write_data(0x55).unwrap();

        assert_eq!(
            *log.borrow(),
            [
                Event::Dc(true),
                Event::Cs(false),
                Event::Byte(0x55),
                Event::Cs(true)
            ]
        );
    }

    #[test]
    fn test_addressing_commands() {
        let (mut display, log) = driver(false);
        display.init().unwrap();
        log.borrow_mut().clear();

        display.set_cursor(2, 0x23).unwrap();
        display.write_data(0x01).unwrap();

        assert_eq!(bytes(&log, false), [0xB2, 0x03, 0x12]);
        assert_eq!(bytes(&log, true), [0x01]);
    }

    #[test]
    fn test_writes_before_init_rejected() {
        let (mut display, log) = driver(false);
        assert_eq!(display.write_data(0xFF), Err(DisplayError::NotInitialized));
        assert_eq!(display.write_command(0xAF), Err(DisplayError::NotInitialized));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_transport_error_mapped_and_cs_released() {
        let (mut display, log) = driver(true);
        assert_eq!(display.init(), Err(DisplayError::Transport));
        assert!(!display.is_initialized());
        assert_eq!(log.borrow().last(), Some(&Event::Cs(true)));
    }

    #[test]
    fn test_panel_controls() {
        let (mut display, log) = driver(false);
        display.init().unwrap();
        log.borrow_mut().clear();

        display.set_contrast(0x40).unwrap();
        display.set_inverted(true).unwrap();
        display.set_inverted(false).unwrap();
        display.set_display_on(false).unwrap();

        assert_eq!(bytes(&log, false), [0x81, 0x40, 0xA7, 0xA6, 0xAE]);
    }
}
