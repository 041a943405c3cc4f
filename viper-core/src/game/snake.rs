//! Fixed-capacity snake body
//!
//! Index 0 is the head. Moving is a shift register: every segment takes
//! its predecessor's cell and the head is written last. Growing keeps the
//! old tail cell by extending the buffer before the shift.

use heapless::Vec;

use super::grid::Coord;
use crate::config::{INITIAL_SNAKE, INITIAL_SNAKE_LENGTH, SNAKE_CAPACITY};

/// Snake segments, head first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    segments: Vec<Coord, SNAKE_CAPACITY>,
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

impl Snake {
    /// Snake in its starting position
    pub fn new() -> Self {
        let mut snake = Self {
            segments: Vec::new(),
        };
        snake.reset();
        snake
    }

    /// Build a snake from explicit segments (head first)
    ///
    /// Returns `None` if the snake would be shorter than it starts out or
    /// longer than the buffer holds.
    pub fn from_segments(segments: &[Coord]) -> Option<Self> {
        if segments.len() < INITIAL_SNAKE_LENGTH {
            return None;
        }
        Vec::from_slice(segments).ok().map(|segments| Self { segments })
    }

    /// Put the snake back in its starting position
    pub fn reset(&mut self) {
        self.segments.clear();
        for cell in INITIAL_SNAKE {
            let _ = self.segments.push(cell);
        }
    }

    /// Current head cell
    pub fn head(&self) -> Coord {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether another segment can be added
    pub fn is_full(&self) -> bool {
        self.segments.is_full()
    }

    /// All live segments, head first
    pub fn segments(&self) -> &[Coord] {
        &self.segments
    }

    /// Whether any live segment sits on `cell`
    pub fn occupies(&self, cell: Coord) -> bool {
        self.segments.contains(&cell)
    }

    /// Whether any segment other than the head sits on `cell`
    pub fn body_contains(&self, cell: Coord) -> bool {
        self.segments.iter().skip(1).any(|&c| c == cell)
    }

    /// Move without growing: shift every segment back by one, then write
    /// the new head at index 0
    pub fn slide(&mut self, head: Coord) {
        let len = self.segments.len();
        if len == 0 {
            return;
        }
        self.segments.copy_within(0..len - 1, 1);
        self.segments[0] = head;
    }

    /// Move and keep the tail, adding one segment
    ///
    /// At capacity this degrades to [`Snake::slide`].
    pub fn grow(&mut self, head: Coord) {
        if let Some(&tail) = self.segments.last() {
            let _ = self.segments.push(tail);
        }
        self.slide(head);
    }

    /// Whether two live segments share a cell
    pub fn has_overlap(&self) -> bool {
        self.segments
            .iter()
            .enumerate()
            .any(|(i, c)| self.segments[i + 1..].contains(c))
    }
}
