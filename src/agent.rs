//! The agent capability: anything that can pick a target for the turn
//! controller.

use crate::{
    board::{Board, BoardView},
    common::{GameError, HitResult, ShotError},
    coord::Coordinate,
};
use rand::rngs::SmallRng;

/// Interface implemented by the human and automated players.
///
/// The board re-validates every target, so an agent may return anything.
/// Rejected targets are reported through [`Agent::handle_rejected_shot`] and
/// the agent is asked again without losing its turn.
pub trait Agent {
    /// Name shown when announcing the winner.
    fn name(&self) -> &str;

    /// Choose the next target given the agent's own board and what it can
    /// see of the enemy board.
    fn choose_target(
        &mut self,
        rng: &mut SmallRng,
        own: &Board,
        enemy: &BoardView,
    ) -> Result<Coordinate, GameError>;

    /// The last target was rejected by the enemy board.
    fn handle_rejected_shot(&mut self, _target: Coordinate, _err: ShotError) {}

    /// The last target was accepted with `result`.
    fn handle_shot_result(&mut self, _target: Coordinate, _result: HitResult) {}

    /// The opponent fired at our board.
    fn handle_opponent_shot(&mut self, _target: Coordinate, _result: HitResult) {}
}
