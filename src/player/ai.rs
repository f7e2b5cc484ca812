use alloc::vec::Vec;
use log::trace;
use rand::rngs::SmallRng;
use rand::Rng;

use super::{Player, TargetView};
use crate::board::Board;
use crate::common::InputError;
use crate::coordinate::Coordinate;

/// Computer player that fires uniformly at random among the cells still open.
pub struct AiPlayer {
    name: &'static str,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self { name: "Computer" }
    }

    /// Same behaviour under a different label, for computer-vs-computer games.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        self.name
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        _own: &Board,
        enemy: &TargetView<'_>,
    ) -> Result<Coordinate, InputError> {
        let open: Vec<Coordinate> = enemy.open_cells().collect();
        if open.is_empty() {
            return Err(InputError::Unavailable);
        }
        let target = open[rng.random_range(0..open.len())];
        trace!("{} picks {:?} out of {} open cells", self.name, target, open.len());
        Ok(target)
    }
}
