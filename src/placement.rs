//! Random fleet placement.

use log::{debug, warn};
use rand::Rng;

use crate::board::Board;
use crate::common::{ConfigError, PlacementError};
use crate::config::Fleet;
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship};

pub const DEFAULT_MAX_ATTEMPTS: usize = 2000;
pub const DEFAULT_MAX_RESTARTS: usize = 100;

/// Random placement with bounded retries.
///
/// `max_attempts` caps ship proposals on one board; once reached the board
/// is thrown away and [`generate`](Self::generate) starts over, at most
/// `max_restarts` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomPlacement {
    pub max_attempts: usize,
    pub max_restarts: usize,
}

impl Default for RandomPlacement {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_restarts: DEFAULT_MAX_RESTARTS,
        }
    }
}

impl RandomPlacement {
    /// Sample a ship of `length` with a random bow in `[0, size)²` and a
    /// random step in `{0, 1}²`. Degenerate steps (zero or diagonal) give
    /// `None`.
    pub fn propose_ship<R: Rng + ?Sized>(&self, rng: &mut R, size: usize, length: usize) -> Option<Ship> {
        if size == 0 {
            return None;
        }
        let bow = Coordinate::new(
            rng.random_range(0..size as i32),
            rng.random_range(0..size as i32),
        );
        let orientation = Orientation::from_step(rng.random_range(0..=1), rng.random_range(0..=1))?;
        Some(Ship::new(bow, length, orientation))
    }

    /// Place every ship of `fleet` onto `board`, longest first.
    pub fn place_fleet<R: Rng + ?Sized>(
        &self,
        board: &mut Board,
        fleet: &Fleet,
        rng: &mut R,
    ) -> Result<(), PlacementError> {
        let mut attempts = 0;
        for &length in fleet.lengths() {
            loop {
                if attempts >= self.max_attempts {
                    return Err(PlacementError::Exhausted { attempts });
                }
                attempts += 1;
                let Some(ship) = self.propose_ship(rng, board.size(), length) else {
                    continue;
                };
                match board.place_ship(ship) {
                    Ok(()) => break,
                    Err(e) => debug!("rejected {:?}: {}", ship, e),
                }
            }
        }
        Ok(())
    }

    /// Build a fully populated board for `fleet`.
    ///
    /// The fleet is checked against the board size before any placement.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        size: usize,
        hidden: bool,
        fleet: &Fleet,
        rng: &mut R,
    ) -> Result<Board, ConfigError> {
        fleet.validate(size)?;
        for restart in 0..=self.max_restarts {
            let mut board = Board::new(size, hidden)?;
            match self.place_fleet(&mut board, fleet, rng) {
                Ok(()) => return Ok(board),
                Err(e) => debug!("restart {}: {}", restart, e),
            }
        }
        warn!("giving up on fleet {:?} for a {}x{} board", fleet.lengths(), size, size);
        Err(ConfigError::PlacementFailed {
            restarts: self.max_restarts,
        })
    }
}
