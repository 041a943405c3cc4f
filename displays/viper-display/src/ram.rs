//! In-memory page display
//!
//! Behaves like the panel's display RAM as seen through its command set:
//! a page register, a column register that advances after each data byte,
//! and whole-byte writes. Used by tests and by host-side simulation.

use viper_core::config::{DISPLAY_HEIGHT, DISPLAY_PAGES, DISPLAY_WIDTH, PAGE_HEIGHT};
use viper_core::traits::{DisplayError, PageDisplay};

const WIDTH: usize = DISPLAY_WIDTH as usize;
const PAGES: usize = DISPLAY_PAGES as usize;

/// Commands followed by one argument byte
const TWO_BYTE_COMMANDS: [u8; 9] = [0x20, 0x81, 0x8D, 0xA8, 0xD3, 0xD5, 0xD9, 0xDA, 0xDB];

/// Emulated panel RAM
#[derive(Clone)]
pub struct PageRam {
    ram: [[u8; WIDTH]; PAGES],
    page: u8,
    column: u8,
    awaiting_argument: bool,
    initialized: bool,
    data_writes: usize,
}

impl Default for PageRam {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRam {
    /// Blank RAM; `init` must be called before drawing
    pub fn new() -> Self {
        Self {
            ram: [[0; WIDTH]; PAGES],
            page: 0,
            column: 0,
            awaiting_argument: false,
            initialized: false,
            data_writes: 0,
        }
    }

    /// Whether the pixel at (`x`, `y`) is lit
    pub fn pixel(&self, x: u8, y: u8) -> bool {
        if x >= DISPLAY_WIDTH || y >= DISPLAY_HEIGHT {
            return false;
        }
        let byte = self.ram[(y / PAGE_HEIGHT) as usize][x as usize];
        byte & (1 << (y % PAGE_HEIGHT)) != 0
    }

    /// Raw RAM byte
    pub fn byte(&self, page: u8, column: u8) -> u8 {
        self.ram
            .get(page as usize)
            .and_then(|p| p.get(column as usize))
            .copied()
            .unwrap_or(0)
    }

    /// Current (page, column) registers
    pub fn cursor(&self) -> (u8, u8) {
        (self.page, self.column)
    }

    /// Data bytes written since `init`
    pub fn data_writes(&self) -> usize {
        self.data_writes
    }

    /// Number of lit pixels in the rectangle `x0..x1`, `y0..y1`
    pub fn lit_in(&self, x0: u8, y0: u8, x1: u8, y1: u8) -> usize {
        (y0..y1)
            .flat_map(|y| (x0..x1).map(move |x| (x, y)))
            .filter(|&(x, y)| self.pixel(x, y))
            .count()
    }
}

impl PageDisplay for PageRam {
    fn init(&mut self) -> Result<(), DisplayError> {
        *self = Self::new();
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
        if self.awaiting_argument {
            self.awaiting_argument = false;
            return Ok(());
        }

        match byte {
            0x00..=0x0F => self.column = (self.column & 0xF0) | byte,
            0x10..=0x17 => self.column = (self.column & 0x0F) | ((byte & 0x07) << 4),
            0xB0..=0xBF => self.page = byte - 0xB0,
            _ if TWO_BYTE_COMMANDS.contains(&byte) => self.awaiting_argument = true,
            _ => {}
        }
        Ok(())
    }

    fn write_data(&mut self, byte: u8) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        if let Some(slot) = self
            .ram
            .get_mut(self.page as usize)
            .and_then(|p| p.get_mut(self.column as usize))
        {
            *slot = byte;
        }
        self.column = self.column.saturating_add(1);
        self.data_writes += 1;
        Ok(())
    }
}
