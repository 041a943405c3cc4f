//! Page-addressed display trait
//!
//! The panel RAM is organised as pages of 8 rows. A data byte covers one
//! column of one page, LSB at the top. Every data write replaces the whole
//! byte and advances the column pointer.

use crate::config::{DISPLAY_PAGES, DISPLAY_WIDTH};

/// Page address command, OR'd with the page number
pub const SET_PAGE_ADDR: u8 = 0xB0;
/// Lower column nibble command
pub const SET_LOW_COLUMN: u8 = 0x00;
/// Upper column nibble command
pub const SET_HIGH_COLUMN: u8 = 0x10;

/// Errors that can occur talking to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus write failed
    Transport,
    /// Page index past the last page
    InvalidPage,
    /// Column past the right edge
    InvalidColumn,
    /// Drawing before `init`
    NotInitialized,
}

/// Low-level access to a page-addressed monochrome panel
pub trait PageDisplay {
    /// Reset the panel and run its power-up sequence
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Whether the last `init` completed
    fn is_initialized(&self) -> bool;

    /// Send one command byte
    fn write_command(&mut self, byte: u8) -> Result<(), DisplayError>;

    /// Send one data byte at the current page/column
    fn write_data(&mut self, byte: u8) -> Result<(), DisplayError>;

    /// Select the page (0-15) for subsequent data writes
    fn select_page(&mut self, page: u8) -> Result<(), DisplayError> {
        if page >= DISPLAY_PAGES {
            return Err(DisplayError::InvalidPage);
        }
        self.write_command(SET_PAGE_ADDR | page)
    }

    /// Select the column for subsequent data writes
    fn select_column(&mut self, column: u8) -> Result<(), DisplayError> {
        if column >= DISPLAY_WIDTH {
            return Err(DisplayError::InvalidColumn);
        }
        self.write_command(SET_LOW_COLUMN | (column & 0x0F))?;
        self.write_command(SET_HIGH_COLUMN | (column >> 4))
    }
}

/// Helpers built on the raw page interface
pub trait PageDisplayExt: PageDisplay {
    /// Select page then column
    fn set_cursor(&mut self, page: u8, column: u8) -> Result<(), DisplayError> {
        self.select_page(page)?;
        self.select_column(column)
    }

    /// Write `byte` across every column of `page`
    fn fill_page(&mut self, page: u8, byte: u8) -> Result<(), DisplayError> {
        self.set_cursor(page, 0)?;
        for _ in 0..DISPLAY_WIDTH {
            self.write_data(byte)?;
        }
        Ok(())
    }
}

impl<T: PageDisplay + ?Sized> PageDisplayExt for T {}
