//! Sampled button levels

use crate::game::Direction;

/// Which buttons are held, sampled at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl ButtonState {
    /// Convert raw active-low line levels (`true` = high = released)
    pub const fn from_levels(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self {
            up: !up,
            down: !down,
            left: !left,
            right: !right,
        }
    }

    /// The held button that wins arbitration (Up, Down, Left, Right)
    pub fn first_pressed(&self) -> Option<Direction> {
        Direction::ALL.into_iter().find(|&dir| self.is_pressed(dir))
    }

    pub fn is_pressed(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Whether any button is held
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}
