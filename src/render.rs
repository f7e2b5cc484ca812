//! Text rendering of boards.
//!
//! ```text
//!    | 1 | 2 | 3 | 4 | 5 | 6 |
//!  1 | ■ | ■ | . | O | O | O |
//!  2 | X | . | . | T | O | O |
//! ```

use core::fmt;

use crate::board::{Board, Cell};
use crate::coordinate::Coordinate;

pub const EMPTY: char = 'O';
pub const SHIP: char = '■';
pub const HIT: char = 'X';
pub const MISS: char = 'T';
pub const BUFFER: char = '.';

/// Symbol for `cell`; intact ship cells read as water when `masked`.
pub fn symbol(cell: Cell, masked: bool) -> char {
    match cell {
        Cell::Empty => EMPTY,
        Cell::Ship if masked => EMPTY,
        Cell::Ship => SHIP,
        Cell::Hit => HIT,
        Cell::Miss => MISS,
        Cell::Buffer => BUFFER,
    }
}

/// Write a labelled grid, one row per line, without a trailing newline.
pub(crate) fn write_grid(f: &mut fmt::Formatter<'_>, board: &Board, masked: bool) -> fmt::Result {
    let size = board.size();
    write!(f, "   |")?;
    for c in 1..=size {
        write!(f, " {} |", c)?;
    }
    for r in 0..size {
        write!(f, "\n{:2} |", r + 1)?;
        for c in 0..size {
            let cell = board
                .cell(Coordinate::new(r as i32, c as i32))
                .unwrap_or(Cell::Empty);
            write!(f, " {} |", symbol(cell, masked))?;
        }
    }
    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self, self.is_hidden())
    }
}
