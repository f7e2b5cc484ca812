//! Board state: ship placements, buffers, hits and misses.

use alloc::vec::Vec;
use core::fmt;
use log::debug;

use crate::bitboard::{BitBoard, BitBoardError};
use crate::common::{PlacementError, ShotError, ShotOutcome};
use crate::coordinate::Coordinate;
use crate::ship::Ship;

type BB = BitBoard<u128>;

/// What a single grid cell currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
    /// Buffer around a sunk ship, known to be empty.
    Buffer,
}

/// One side's grid.
///
/// Placement and shooting use separate busy sets. `reserved` holds ship cells
/// plus their one-cell buffer and only constrains placement; shots are blocked
/// by `hits | misses | revealed`.
#[derive(Clone)]
pub struct Board {
    hidden: bool,
    ships: Vec<Ship>,
    ship_map: BB,
    reserved: BB,
    hits: BB,
    misses: BB,
    revealed: BB,
}

impl Board {
    /// Create an empty `size`×`size` board. Hidden boards mask ship cells
    /// when rendered.
    pub fn new(size: usize, hidden: bool) -> Result<Self, BitBoardError> {
        let empty = BB::try_new(size)?;
        Ok(Board {
            hidden,
            ships: Vec::new(),
            ship_map: empty,
            reserved: empty,
            hits: empty,
            misses: empty,
            revealed: empty,
        })
    }

    pub fn size(&self) -> usize {
        self.ship_map.size()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether `at` lies on the grid.
    pub fn contains(&self, at: Coordinate) -> bool {
        self.ship_map.in_bounds(at)
    }

    /// All ships, sunk ones included.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    /// Ships still afloat.
    pub fn remaining_ship_count(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.remaining_ship_count() == 0
    }

    pub fn ship_at(&self, at: Coordinate) -> Option<&Ship> {
        if !self.ship_map.contains(at) {
            return None;
        }
        self.ships.iter().find(|s| s.contains(at))
    }

    /// Cell state at `at`, or `None` off the grid.
    pub fn cell(&self, at: Coordinate) -> Option<Cell> {
        if !self.contains(at) {
            return None;
        }
        let cell = if self.hits.contains(at) {
            Cell::Hit
        } else if self.misses.contains(at) {
            Cell::Miss
        } else if self.revealed.contains(at) {
            Cell::Buffer
        } else if self.ship_map.contains(at) {
            Cell::Ship
        } else {
            Cell::Empty
        };
        Some(cell)
    }

    /// Whether a shot at `at` has already been resolved, either by firing at
    /// it or by the buffer reveal around a sunk ship.
    pub fn is_resolved(&self, at: Coordinate) -> bool {
        self.shot_busy().contains(at)
    }

    /// In-grid coordinates that can still be shot, row-major.
    pub fn unresolved(&self) -> impl Iterator<Item = Coordinate> {
        let open = !self.shot_busy();
        let cells: Vec<Coordinate> = open.iter_set_bits().collect();
        cells.into_iter()
    }

    fn shot_busy(&self) -> BB {
        self.hits | self.misses | self.revealed
    }

    /// Place `ship`, reserving its cells and the surrounding buffer.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), PlacementError> {
        if ship.length() == 0 {
            return Err(PlacementError::EmptyShip);
        }
        if ship.cells().any(|c| !self.contains(c)) {
            return Err(PlacementError::OutOfBounds);
        }
        if ship.cells().any(|c| self.reserved.contains(c)) {
            return Err(PlacementError::Overlap);
        }
        for cell in ship.cells() {
            self.ship_map
                .set(cell)
                .map_err(|_| PlacementError::OutOfBounds)?;
            for near in cell.neighbourhood() {
                // buffer cells past the edge are simply dropped
                let _ = self.reserved.set(near);
            }
        }
        debug!("placed {:?}", ship);
        self.ships.push(ship);
        Ok(())
    }

    /// Fire at `at` and report what happened.
    pub fn shoot(&mut self, at: Coordinate) -> Result<ShotOutcome, ShotError> {
        if !self.contains(at) {
            return Err(ShotError::OutOfBounds);
        }
        if self.is_resolved(at) {
            return Err(ShotError::AlreadyShot);
        }

        let hit = self.ships.iter().position(|s| s.contains(at));
        let outcome = match hit {
            Some(idx) => {
                self.hits.set(at).map_err(|_| ShotError::OutOfBounds)?;
                if self.ships[idx].register_hit(at) {
                    let ship = self.ships[idx];
                    self.reveal_buffer(&ship);
                    ShotOutcome::Sunk
                } else {
                    ShotOutcome::Hit
                }
            }
            None => {
                self.misses.set(at).map_err(|_| ShotError::OutOfBounds)?;
                ShotOutcome::Miss
            }
        };
        debug!("shot at ({}, {}): {:?}", at.row, at.col, outcome);
        Ok(outcome)
    }

    /// Mark the empty cells around a sunk ship so they cannot be targeted.
    fn reveal_buffer(&mut self, ship: &Ship) {
        for cell in ship.cells() {
            for near in cell.neighbourhood() {
                if self.contains(near) && !self.ship_map.contains(near) && !self.is_resolved(near) {
                    let _ = self.revealed.set(near);
                }
            }
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  hidden: {},\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?},\n  revealed: {:?},\n  ships: {:?}\n}}",
            self.hidden, self.ship_map, self.hits, self.misses, self.revealed, self.ships
        )
    }
}
