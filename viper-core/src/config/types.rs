//! Game configuration
//!
//! The board is fixed at 16x16 cells. Everything that depends on that
//! (capacity, panel layout) is a constant so the buffers can be sized at
//! compile time.

use crate::game::{Coord, Direction};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cells per side of the (square, wrapping) board
pub const GRID_SIZE: u8 = 16;

/// Maximum number of snake segments
pub const SNAKE_CAPACITY: usize = 50;

/// Starting snake, head first
pub const INITIAL_SNAKE: [Coord; 3] = [Coord::new(3, 4), Coord::new(2, 4), Coord::new(1, 4)];

/// Starting length
pub const INITIAL_SNAKE_LENGTH: usize = INITIAL_SNAKE.len();

/// Direction at the start of every game
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Score at the start of every game
pub const INITIAL_SCORE: u16 = 0;

/// Time between two snake moves
pub const MOVE_DELAY_MS: u32 = 250;

/// Minimum spacing between two accepted button signals
pub const DEBOUNCE_MS: u32 = 50;

/// Panel width in pixels
pub const DISPLAY_WIDTH: u8 = 128;

/// Panel height in pixels
pub const DISPLAY_HEIGHT: u8 = 128;

/// Rows per display page
pub const PAGE_HEIGHT: u8 = 8;

/// Number of 8-row pages on the panel
pub const DISPLAY_PAGES: u8 = DISPLAY_HEIGHT / PAGE_HEIGHT;

/// Pixel size of one board cell
pub const CELL_SIZE: u8 = 7;

/// Height of the score band at the top of the panel
pub const SCORE_AREA_HEIGHT: u8 = 16;

/// Row of the line separating the score band from the board
pub const PARTITION_LINE_Y: u8 = SCORE_AREA_HEIGHT - 1;

/// Default panel contrast
pub const DEFAULT_CONTRAST: u8 = 0xCF;

// Food placement retries until it finds a free cell; that only terminates
// while the snake cannot cover the whole board.
const _: () = assert!(SNAKE_CAPACITY < GRID_SIZE as usize * GRID_SIZE as usize);

// The board must fit below the score band, otherwise page addresses run
// past the last page and alias other commands.
const _: () = assert!(
    SCORE_AREA_HEIGHT as usize + GRID_SIZE as usize * CELL_SIZE as usize
        <= DISPLAY_HEIGHT as usize
);
const _: () = assert!(GRID_SIZE as usize * CELL_SIZE as usize <= DISPLAY_WIDTH as usize);
const _: () = assert!(INITIAL_SNAKE_LENGTH <= SNAKE_CAPACITY);

/// Runtime-tunable game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    /// Milliseconds between snake moves
    pub move_delay_ms: u32,
    /// Debounce window for button signals (ms)
    pub debounce_ms: u32,
    /// Panel contrast (0-255)
    pub contrast: u8,
    /// Mixed into the RNG seed
    pub seed_salt: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            move_delay_ms: MOVE_DELAY_MS,
            debounce_ms: DEBOUNCE_MS,
            contrast: DEFAULT_CONTRAST,
            seed_salt: 0x5EED_0F_5A4E,
        }
    }
}
