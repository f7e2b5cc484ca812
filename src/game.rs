//! Turn controller: alternates two players until one fleet is sunk.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, info};
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{ConfigError, InputError, ShotOutcome};
use crate::config::GameConfig;
use crate::coordinate::Coordinate;
use crate::placement::RandomPlacement;
use crate::player::{Player, TargetView};

/// One of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// A shot the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotRecord {
    pub shooter: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
}

/// Errors that stop the turn loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A winner has already been declared.
    Finished,
    /// The player on this side cannot provide any more targets.
    PlayerGaveUp(Side),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Finished => write!(f, "The game is already over"),
            GameError::PlayerGaveUp(side) => write!(f, "{:?} player stopped providing targets", side),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// Two players, each owning one board and firing at the other's.
pub struct Game {
    players: [Box<dyn Player>; 2],
    boards: [Board; 2],
    current: Side,
    winner: Option<Side>,
    shots: Vec<ShotRecord>,
    rng: SmallRng,
}

impl Game {
    /// Start a game on already populated boards. `first` moves first.
    pub fn new(
        first: Box<dyn Player>,
        second: Box<dyn Player>,
        first_board: Board,
        second_board: Board,
        rng: SmallRng,
    ) -> Self {
        Self {
            players: [first, second],
            boards: [first_board, second_board],
            current: Side::First,
            winner: None,
            shots: Vec::new(),
            rng,
        }
    }

    /// Randomly place both fleets from `config` and start a game. The second
    /// side's board is hidden.
    pub fn setup(
        config: &GameConfig,
        first: Box<dyn Player>,
        second: Box<dyn Player>,
        mut rng: SmallRng,
    ) -> Result<Self, ConfigError> {
        let placement = RandomPlacement::default();
        let first_board = placement.generate(config.board_size, false, &config.fleet, &mut rng)?;
        let second_board = placement.generate(config.board_size, true, &config.fleet, &mut rng)?;
        Ok(Self::new(first, second, first_board, second_board, rng))
    }

    /// Side whose turn it is.
    pub fn current(&self) -> Side {
        self.current
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// The board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// What `side` may see of the board it fires at.
    pub fn target_view(&self, side: Side) -> TargetView<'_> {
        TargetView::new(self.board(side.other()))
    }

    /// Every accepted shot, in order.
    pub fn shots(&self) -> &[ShotRecord] {
        &self.shots
    }

    pub fn shots_by(&self, side: Side) -> impl Iterator<Item = &ShotRecord> {
        self.shots.iter().filter(move |s| s.shooter == side)
    }

    /// Let the current player fire until one shot is accepted.
    ///
    /// Malformed input and refused targets are reported back to the player
    /// and asked again without passing the turn. After the shot the winner
    /// is checked; a miss hands the turn to the other side.
    pub fn play_shot(&mut self) -> Result<ShotRecord, GameError> {
        if self.winner.is_some() {
            return Err(GameError::Finished);
        }
        let shooter = self.current;
        let (own, enemy) = match shooter {
            Side::First => {
                let [a, b] = &mut self.boards;
                (a, b)
            }
            Side::Second => {
                let [a, b] = &mut self.boards;
                (b, a)
            }
        };
        let player = &mut self.players[shooter.index()];

        let (target, outcome) = loop {
            let target = match player.select_target(&mut self.rng, own, &TargetView::new(enemy)) {
                Ok(target) => target,
                Err(InputError::Unavailable) => return Err(GameError::PlayerGaveUp(shooter)),
                Err(err) => {
                    debug!("{:?}: {}", shooter, err);
                    player.handle_input_error(&err);
                    continue;
                }
            };
            match enemy.shoot(target) {
                Ok(outcome) => break (target, outcome),
                Err(err) => {
                    debug!("{:?} shot at {:?} refused: {}", shooter, target, err);
                    player.handle_shot_error(target, err);
                }
            }
        };

        let record = ShotRecord {
            shooter,
            target,
            outcome,
        };
        self.shots.push(record);
        self.players[shooter.index()].handle_shot_result(target, outcome);
        self.players[shooter.other().index()].handle_opponent_shot(target, outcome);

        if self.board(shooter.other()).remaining_ship_count() == 0 {
            info!(
                "{} wins after {} shots",
                self.players[shooter.index()].name(),
                self.shots_by(shooter).count()
            );
            self.winner = Some(shooter);
        } else if !outcome.repeats_turn() {
            self.current = shooter.other();
        }
        Ok(record)
    }

    /// Play until a winner is declared and return it.
    pub fn run(&mut self) -> Result<Side, GameError> {
        loop {
            if let Some(winner) = self.winner {
                return Ok(winner);
            }
            self.play_shot()?;
        }
    }
}
