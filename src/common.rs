//! Common types for the game: shot outcomes and the error taxonomy.

use alloc::string::String;
use core::fmt;

use crate::bitboard::BitBoardError;

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot struck the last intact cell of a ship.
    Sunk,
}

impl ShotOutcome {
    /// Whether the shooter keeps the turn.
    pub fn repeats_turn(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors returned by `Board::place_ship`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A ship cell lies outside the grid.
    OutOfBounds,
    /// A ship cell touches another ship or its buffer.
    Overlap,
    /// Ship has no cells.
    EmptyShip,
    /// Random placement gave up on the current board.
    Exhausted { attempts: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlacementError::Overlap => {
                write!(f, "Ship placement overlaps or touches another ship")
            }
            PlacementError::EmptyShip => write!(f, "Ship has no cells"),
            PlacementError::Exhausted { attempts } => {
                write!(f, "Unable to place fleet after {} attempts", attempts)
            }
        }
    }
}

/// Errors returned by `Board::shoot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Target lies outside the grid.
    OutOfBounds,
    /// Target was already shot at or is a revealed buffer cell.
    AlreadyShot,
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfBounds => write!(f, "Target is off the board"),
            ShotError::AlreadyShot => write!(f, "That cell has already been shot at"),
        }
    }
}

/// Errors reported by an actor asked for a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Input could not be read as a coordinate; ask again.
    Malformed(String),
    /// The actor cannot produce any more targets (closed input, no moves).
    Unavailable,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Malformed(reason) => write!(f, "Malformed input: {}", reason),
            InputError::Unavailable => write!(f, "No more input available"),
        }
    }
}

/// Game setup errors. These are fatal: the game cannot start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board size does not fit the backing bitboard.
    BitBoard(BitBoardError),
    /// Fleet has no ships.
    EmptyFleet,
    /// Fleet lists a ship of length zero.
    ZeroLengthShip,
    /// A ship cannot fit the board at all.
    ShipTooLong { length: usize, size: usize },
    /// Ships plus buffers cannot be packed onto the board.
    FleetTooLarge { required: usize, capacity: usize },
    /// Random placement kept dead-ending.
    PlacementFailed { restarts: usize },
}

impl From<BitBoardError> for ConfigError {
    fn from(err: BitBoardError) -> Self {
        ConfigError::BitBoard(err)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            ConfigError::EmptyFleet => write!(f, "Fleet has no ships"),
            ConfigError::ZeroLengthShip => write!(f, "Fleet contains a ship of length 0"),
            ConfigError::ShipTooLong { length, size } => write!(
                f,
                "Ship of length {} does not fit a {}x{} board",
                length, size, size
            ),
            ConfigError::FleetTooLarge { required, capacity } => write!(
                f,
                "Fleet needs {} cells including buffers, board offers {}",
                required, capacity
            ),
            ConfigError::PlacementFailed { restarts } => {
                write!(f, "Fleet placement failed after {} restarts", restarts)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for ShotError {}
#[cfg(feature = "std")]
impl std::error::Error for InputError {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
