//! Ship geometry and damage tracking.

use core::fmt;

use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Unit step (row, col) applied from the bow.
    pub const fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }

    /// Map a step vector back to an orientation. The zero vector and
    /// anything that is not a unit axis step has none.
    pub fn from_step(dr: i32, dc: i32) -> Option<Self> {
        match (dr, dc) {
            (0, 1) => Some(Orientation::Horizontal),
            (1, 0) => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

/// A ship anchored at its bow.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    lives: usize,
}

impl Ship {
    /// Build an undamaged ship. No bounds checks happen here; the board
    /// validates placement.
    pub fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Self {
        Ship {
            bow,
            length,
            orientation,
            lives: length,
        }
    }

    /// Occupied coordinates, bow first.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (dr, dc) = self.orientation.step();
        let bow = self.bow;
        (0..self.length as i32).map(move |i| bow.offset(i * dr, i * dc))
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        self.cells().any(|c| c == at)
    }

    /// Register a hit at `at`. Returns `true` if the ship is sunk afterwards.
    ///
    /// A coordinate outside the ship leaves it untouched, and lives stop at
    /// zero.
    pub fn register_hit(&mut self, at: Coordinate) -> bool {
        if self.contains(at) {
            self.lives = self.lives.saturating_sub(1);
        }
        self.is_sunk()
    }

    pub fn is_sunk(&self) -> bool {
        self.lives == 0
    }

    pub fn lives(&self) -> usize {
        self.lives
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ bow: ({}, {}), length: {}, orientation: {:?}, lives: {} }}",
            self.bow.row, self.bow.col, self.length, self.orientation, self.lives,
        )
    }
}
