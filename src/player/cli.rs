#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::{String, ToString};

use crate::board::Board;
use crate::common::{InputError, ShotError, ShotOutcome};
use crate::coordinate::Coordinate;
use rand::rngs::SmallRng;

use super::{Player, TargetView};

/// Human player reading `row col` targets line by line.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    // A broken terminal must not abort the game, so write errors are dropped.
    fn say(&mut self, line: &str) {
        let _ = writeln!(self.output, "{}", line);
    }
}

/// Parse a 1-based `row col` pair into a zero-based coordinate.
///
/// Only the shape is checked here; whether the cell is on the board is up to
/// the board, so `0 7` parses fine and is rejected later as off the grid.
pub fn parse_coord(input: &str) -> Result<Coordinate, String> {
    let parts: std::vec::Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 2 {
        return Err("Enter two numbers separated by a space (e.g. 1 3)".to_string());
    }
    let row: i32 = parts[0]
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number", parts[0]))?;
    let col: i32 = parts[1]
        .parse()
        .map_err(|_| format!("Invalid column '{}' - must be a number", parts[1]))?;
    let row = row
        .checked_sub(1)
        .ok_or_else(|| format!("Row '{}' is out of range", parts[0]))?;
    let col = col
        .checked_sub(1)
        .ok_or_else(|| format!("Column '{}' is out of range", parts[1]))?;
    Ok(Coordinate::new(row, col))
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn name(&self) -> &str {
        "You"
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        own: &Board,
        enemy: &TargetView<'_>,
    ) -> Result<Coordinate, InputError> {
        self.say("--------------------");
        self.say("Your board:");
        self.say(&own.to_string());
        self.say("--------------------");
        self.say("Enemy board:");
        self.say(&enemy.to_string());
        self.say("--------------------");
        let _ = write!(self.output, "Your move! Enter target (row col): ");
        let _ = self.output.flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => Err(InputError::Unavailable),
            Ok(_) => parse_coord(line.trim()).map_err(InputError::Malformed),
        }
    }

    fn handle_input_error(&mut self, err: &InputError) {
        if let InputError::Malformed(reason) = err {
            self.say(&format!("✗ {}", reason));
        }
    }

    fn handle_shot_error(&mut self, target: Coordinate, err: ShotError) {
        match err {
            ShotError::OutOfBounds => {
                self.say(&format!("✗ {} is off the board! Choose another target.", target))
            }
            ShotError::AlreadyShot => {
                self.say(&format!("✗ You already shot at {}! Choose another target.", target))
            }
        }
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Hit => self.say(&format!("🎯 HIT at {}! Fire again.", target)),
            ShotOutcome::Sunk => self.say(&format!("💥 SUNK! Your shot at {} destroyed a ship.", target)),
            ShotOutcome::Miss => self.say(&format!("💧 Miss at {}.", target)),
        }
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Hit => self.say(&format!("⚠️  Enemy hit your ship at {}", target)),
            ShotOutcome::Sunk => self.say(&format!("💀 Enemy sank your ship at {}", target)),
            ShotOutcome::Miss => self.say(&format!("✓ Enemy missed at {}", target)),
        }
    }
}
