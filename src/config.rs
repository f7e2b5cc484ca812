use alloc::vec::Vec;

use crate::bitboard::BitBoard;
use crate::common::ConfigError;

pub const BOARD_SIZE: usize = 6;
/// Standard fleet, longest ship first.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Ship lengths making up one side's fleet, kept longest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    lengths: Vec<usize>,
}

impl Fleet {
    pub fn new(lengths: &[usize]) -> Self {
        let mut lengths = lengths.to_vec();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        Self { lengths }
    }

    /// One 3, two 2s and four 1s.
    pub fn standard() -> Self {
        Self::new(&FLEET)
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn ship_count(&self) -> usize {
        self.lengths.len()
    }

    /// Total number of ship cells.
    pub fn cells(&self) -> usize {
        self.lengths.iter().sum()
    }

    /// Reject fleets that can never fit an `size`×`size` board.
    ///
    /// Growing every ship by one cell right and down gives pairwise disjoint
    /// 2×(L+1) blocks inside an (N+1)×(N+1) grid, so their total area is a
    /// hard upper bound.
    pub fn validate(&self, size: usize) -> Result<(), ConfigError> {
        BitBoard::<u128>::try_new(size)?;
        if self.lengths.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if self.lengths.contains(&0) {
            return Err(ConfigError::ZeroLengthShip);
        }
        if let Some(&length) = self.lengths.iter().find(|&&l| l > size) {
            return Err(ConfigError::ShipTooLong { length, size });
        }
        let required: usize = self.lengths.iter().map(|l| 2 * (l + 1)).sum();
        let capacity = (size + 1) * (size + 1);
        if required > capacity {
            return Err(ConfigError::FleetTooLarge { required, capacity });
        }
        Ok(())
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::standard()
    }
}

/// Board size and fleet shared by both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub fleet: Fleet,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fleet.validate(self.board_size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            fleet: Fleet::standard(),
        }
    }
}
