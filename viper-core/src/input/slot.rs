//! Single-writer direction slot shared with the game loop

use portable_atomic::{AtomicU8, Ordering};

use crate::config::INITIAL_DIRECTION;
use crate::game::Direction;

/// Current movement direction
///
/// Written from the button handler, read by the game loop. A read never
/// sees a torn value since the direction is a single byte.
pub struct DirectionSlot {
    raw: AtomicU8,
}

impl Default for DirectionSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectionSlot {
    /// Slot holding the starting direction
    pub const fn new() -> Self {
        Self {
            raw: AtomicU8::new(INITIAL_DIRECTION as u8),
        }
    }

    /// Direction as last published
    pub fn load(&self) -> Direction {
        Direction::from_u8(self.raw.load(Ordering::Acquire)).unwrap_or(INITIAL_DIRECTION)
    }

    /// Overwrite unconditionally (used on reset)
    pub fn force(&self, dir: Direction) {
        self.raw.store(dir as u8, Ordering::Release);
    }

    /// Change direction unless `dir` reverses the current one
    ///
    /// Returns the new direction, or the unchanged current direction when
    /// the turn was rejected.
    pub fn turn(&self, dir: Direction) -> Result<Direction, Direction> {
        self.raw
            .fetch_update(Ordering::Release, Ordering::Acquire, |raw| {
                match Direction::from_u8(raw) {
                    Some(current) if current.is_opposite(dir) => None,
                    _ => Some(dir as u8),
                }
            })
            .map(|_| dir)
            .map_err(|raw| Direction::from_u8(raw).unwrap_or(INITIAL_DIRECTION))
    }
}
