//! Frame renderer
//!
//! Layout (128x128 panel):
//! - rows 0-7: `SCORE:<n>`
//! - row 15: partition line
//! - rows 16-127: the board, one `CELL_SIZE` square per cell

use core::fmt::Write;

use heapless::String;
use viper_core::config::{
    CELL_SIZE, DISPLAY_HEIGHT, DISPLAY_PAGES, DISPLAY_WIDTH, PAGE_HEIGHT, PARTITION_LINE_Y,
    SCORE_AREA_HEIGHT,
};
use viper_core::game::{Coord, GameState};
use viper_core::traits::{DisplayError, PageDisplay, PageDisplayExt};

use crate::circle::MidpointCircle;
use crate::font::{glyph, CHAR_ADVANCE};

const SCORE_LABEL: &str = "SCORE:";

/// Up to five digits for a `u16`
type ScoreText = String<5>;

/// Draws game frames through a [`PageDisplay`]
pub struct Renderer<D> {
    display: D,
}

impl<D: PageDisplay> Renderer<D> {
    pub fn new(display: D) -> Self {
        Self { display }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Blank the whole panel, then draw the first frame of a game
    pub fn draw_initial(&mut self, state: &GameState) -> Result<(), DisplayError> {
        for page in 0..DISPLAY_PAGES {
            self.display.fill_page(page, 0x00)?;
        }
        self.draw_frame(state)
    }

    /// Retry after a failed draw
    ///
    /// A panel that never finished `init` is initialised again and gets a
    /// full initial draw. Returns `true` when `init` ran.
    pub fn recover(&mut self, state: &GameState) -> Result<bool, DisplayError> {
        if self.display.is_initialized() {
            self.draw_frame(state)?;
            return Ok(false);
        }
        self.display.init()?;
        self.draw_initial(state)?;
        Ok(true)
    }

    /// Redraw the board, partition line and score
    pub fn draw_frame(&mut self, state: &GameState) -> Result<(), DisplayError> {
        self.clear_play_area()?;
        self.draw_hline(PARTITION_LINE_Y)?;

        for &segment in state.snake().segments() {
            self.draw_block(segment)?;
        }

        self.draw_food(state.food())?;
        self.draw_score(state.score())
    }

    /// Zero every page below the partition line
    pub fn clear_play_area(&mut self) -> Result<(), DisplayError> {
        for page in (PARTITION_LINE_Y / PAGE_HEIGHT + 1)..DISPLAY_PAGES {
            self.display.fill_page(page, 0x00)?;
        }
        Ok(())
    }

    /// Light one pixel (replaces the rest of its page byte)
    ///
    /// Off-panel coordinates are ignored.
    pub fn draw_pixel(&mut self, x: u8, y: u8) -> Result<(), DisplayError> {
        if x >= DISPLAY_WIDTH || y >= DISPLAY_HEIGHT {
            return Ok(());
        }
        self.display.set_cursor(y / PAGE_HEIGHT, x)?;
        self.display.write_data(1 << (y % PAGE_HEIGHT))
    }

    /// Full-width line on row `y`
    pub fn draw_hline(&mut self, y: u8) -> Result<(), DisplayError> {
        if y >= DISPLAY_HEIGHT {
            return Ok(());
        }
        self.display.fill_page(y / PAGE_HEIGHT, 1 << (y % PAGE_HEIGHT))
    }

    /// Draw `c` with its top-left corner at (`x`, `y`)
    ///
    /// Characters the font lacks are skipped.
    pub fn draw_char(&mut self, x: u8, y: u8, c: char) -> Result<(), DisplayError> {
        let Some(columns) = glyph(c) else {
            return Ok(());
        };
        let page = y / PAGE_HEIGHT;
        let shift = y % PAGE_HEIGHT;
        for (i, &bits) in columns.iter().enumerate() {
            let column = x.saturating_add(i as u8);
            if column >= DISPLAY_WIDTH {
                break;
            }
            self.display.set_cursor(page, column)?;
            self.display.write_data(bits << shift)?;
        }
        Ok(())
    }

    /// Clear the score band and write `SCORE:<n>`
    pub fn draw_score(&mut self, score: u16) -> Result<(), DisplayError> {
        self.display.fill_page(0, 0x00)?;

        let mut x = 0;
        for c in SCORE_LABEL.chars() {
            self.draw_char(x, 0, c)?;
            x += CHAR_ADVANCE;
        }

        let mut digits = ScoreText::new();
        // A u16 never needs more than five digits
        let _ = write!(digits, "{}", score);
        for c in digits.chars() {
            self.draw_char(x, 0, c)?;
            x += CHAR_ADVANCE;
        }
        Ok(())
    }

    /// Filled square for one snake segment, inset by one pixel
    pub fn draw_block(&mut self, cell: Coord) -> Result<(), DisplayError> {
        let x = cell.x * CELL_SIZE + 1;
        let y = cell.y * CELL_SIZE + 1 + SCORE_AREA_HEIGHT;
        for dy in 0..CELL_SIZE - 2 {
            for dx in 0..CELL_SIZE - 2 {
                self.draw_pixel(x + dx, y + dy)?;
            }
        }
        Ok(())
    }

    /// Circle outline centred at (`cx`, `cy`)
    pub fn draw_circle(&mut self, cx: u8, cy: u8, radius: u8) -> Result<(), DisplayError> {
        for (x, y) in MidpointCircle::new(cx as i16, cy as i16, radius as i16) {
            if let (Ok(x), Ok(y)) = (u8::try_from(x), u8::try_from(y)) {
                self.draw_pixel(x, y)?;
            }
        }
        Ok(())
    }

    /// Food marker centred in its cell
    pub fn draw_food(&mut self, cell: Coord) -> Result<(), DisplayError> {
        let cx = cell.x * CELL_SIZE + CELL_SIZE / 2;
        let cy = cell.y * CELL_SIZE + CELL_SIZE / 2 + SCORE_AREA_HEIGHT;
        self.draw_circle(cx, cy, CELL_SIZE / 2 - 1)
    }
}
