#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
mod coordinate;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placement;
pub mod player;
pub mod render;
mod ship;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, log_level_from_env};
pub use placement::*;
pub use player::{AiPlayer, Player, TargetView};
#[cfg(feature = "std")]
pub use player::CliPlayer;
pub use ship::*;
