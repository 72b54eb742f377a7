#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::{
    agent::Agent,
    board::{Board, BoardView},
    common::{GameError, HitResult, ShotError},
    coord::Coordinate,
    ui,
};
use log::warn;
use rand::rngs::SmallRng;

/// Source of raw target coordinates for the human player.
pub trait CoordinateInput {
    /// Block until the user supplies an `(x, y)` pair.
    fn read_coordinate(&mut self) -> io::Result<(i32, i32)>;

    /// Show a message to the user.
    fn notify(&mut self, _message: &str) {}
}

/// Line-oriented input: one `x y` pair per line, prompts and messages
/// written to `out`.
pub struct LineInput<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Consume the input source and return what was written to the user.
    pub fn into_output(self) -> W {
        self.out
    }
}

impl LineInput<StdinLock<'static>, Stdout> {
    /// Interactive console input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

/// Parse `"x y"` or `"x,y"` into a pair of integers.
pub fn parse_coordinate(line: &str) -> Result<(i32, i32), String> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err("Expected two numbers: x y (e.g. 3 5)".to_string());
    };
    let x = x
        .parse()
        .map_err(|_| format!("Invalid x '{}' - must be a whole number", x))?;
    let y = y
        .parse()
        .map_err(|_| format!("Invalid y '{}' - must be a whole number", y))?;
    Ok((x, y))
}

impl<R: BufRead, W: Write> CoordinateInput for LineInput<R, W> {
    fn read_coordinate(&mut self) -> io::Result<(i32, i32)> {
        loop {
            write!(self.out, "Enter target x y: ")?;
            self.out.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed",
                ));
            }
            match parse_coordinate(line.trim()) {
                Ok(pair) => return Ok(pair),
                Err(e) => writeln!(self.out, "✗ {}", e)?,
            }
        }
    }

    fn notify(&mut self, message: &str) {
        let _ = writeln!(self.out, "{}", message);
    }
}

/// The human player, fed by a [`CoordinateInput`].
///
/// Input is passed through unchecked; the enemy board rejects bad targets
/// and the controller asks again.
pub struct CliAgent<I> {
    input: I,
}

impl<I: CoordinateInput> CliAgent<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn into_input(self) -> I {
        self.input
    }
}

impl<I: CoordinateInput> Agent for CliAgent<I> {
    fn name(&self) -> &str {
        "Player"
    }

    fn choose_target(
        &mut self,
        _rng: &mut SmallRng,
        _own: &Board,
        _enemy: &BoardView,
    ) -> Result<Coordinate, GameError> {
        self.input
            .read_coordinate()
            .map(Coordinate::from)
            .map_err(|e| {
                warn!("reading target failed: {}", e);
                GameError::InputClosed
            })
    }

    fn handle_rejected_shot(&mut self, target: Coordinate, err: ShotError) {
        self.input
            .notify(&format!("✗ {}: {}. Choose another target.", target, err));
    }

    fn handle_shot_result(&mut self, target: Coordinate, result: HitResult) {
        self.input.notify(&ui::describe_shot("You", target, result));
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, result: HitResult) {
        self.input
            .notify(&ui::describe_shot("Enemy", target, result));
    }
}
