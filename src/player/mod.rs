//! Player trait and implementations
//!
//! This module defines the Player trait, the seam through which the game asks
//! an actor for its next shot, and provides concrete implementations:
//! - AiPlayer: uniform random choice among open cells
//! - CliPlayer: interactive line-oriented player

use core::fmt;

use crate::board::Board;
use crate::common::{InputError, ShotError, ShotOutcome};
use crate::coordinate::Coordinate;
use rand::rngs::SmallRng;

/// What a shooter may know about the board it fires at.
#[derive(Clone, Copy)]
pub struct TargetView<'a> {
    board: &'a Board,
}

impl<'a> TargetView<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Whether a shot at `at` would be accepted.
    pub fn is_open(&self, at: Coordinate) -> bool {
        self.board.contains(at) && !self.board.is_resolved(at)
    }

    /// Every cell that can still be shot, row-major.
    pub fn open_cells(&self) -> impl Iterator<Item = Coordinate> {
        self.board.unresolved()
    }

    /// Enemy ships still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.board.remaining_ship_count()
    }
}

/// Always masked, whatever the board's own visibility flag says.
impl fmt::Display for TargetView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::render::write_grid(f, self.board, true)
    }
}

/// Interface implemented by the two sides of a game.
///
/// A Player is responsible for:
/// - Selecting targets to attack
/// - Handling feedback on its shots and its opponent's
pub trait Player {
    /// Short label used in logs and announcements.
    fn name(&self) -> &str;

    /// Choose the next target. `own` is the player's own board.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        own: &Board,
        enemy: &TargetView<'_>,
    ) -> Result<Coordinate, InputError>;

    /// The last input could not be understood; another will be requested.
    fn handle_input_error(&mut self, _err: &InputError) {}

    /// The board refused the last target; another will be requested.
    fn handle_shot_error(&mut self, _target: Coordinate, _err: ShotError) {}

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}
}

pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;
