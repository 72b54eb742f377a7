//! Turn controller: strict alternation between two agents, each firing at
//! the other's board.

use crate::{
    agent::Agent,
    board::Board,
    common::{GameError, HitResult},
    coord::Coordinate,
};
use log::{debug, info};
use rand::rngs::SmallRng;

/// One of the two seats at the table. `First` moves first and is the human
/// by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// The opposing seat.
    pub fn other(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// `Side` must fire next.
    AwaitingShot(Side),
    /// `side` just landed a shot; [`TurnController::advance`] decides what
    /// comes next.
    Resolved { side: Side, hit: bool, sunk: bool },
    /// The winner sank the whole enemy fleet.
    GameOver(Side),
}

/// An accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    pub side: Side,
    pub target: Coordinate,
    pub result: HitResult,
}

struct Seat<A> {
    agent: A,
    board: Board,
    shots: usize,
}

/// Drives a game between two agents.
///
/// Every turn is exactly one accepted shot; control then passes to the
/// other side whether the shot hit or not. Rejected targets are handed back
/// to the same agent until it picks a legal one.
pub struct TurnController<A, B> {
    first: Seat<A>,
    second: Seat<B>,
    state: TurnState,
    last_turn: Option<Turn>,
}

impl<A: Agent, B: Agent> TurnController<A, B> {
    /// Seat two agents with their already populated boards.
    pub fn new(first: A, first_board: Board, second: B, second_board: Board) -> Self {
        Self {
            first: Seat {
                agent: first,
                board: first_board,
                shots: 0,
            },
            second: Seat {
                agent: second,
                board: second_board,
                shots: 0,
            },
            state: TurnState::AwaitingShot(Side::First),
            last_turn: None,
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// The board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::First => &self.first.board,
            Side::Second => &self.second.board,
        }
    }

    /// Show or hide `side`'s ships to the other viewer.
    pub fn set_ships_visible(&mut self, side: Side, visible: bool) {
        match side {
            Side::First => self.first.board.set_ships_visible(visible),
            Side::Second => self.second.board.set_ships_visible(visible),
        }
    }

    pub fn agent_name(&self, side: Side) -> &str {
        match side {
            Side::First => self.first.agent.name(),
            Side::Second => self.second.agent.name(),
        }
    }

    pub fn first_agent(&self) -> &A {
        &self.first.agent
    }

    pub fn second_agent(&self) -> &B {
        &self.second.agent
    }

    /// Hand the agents back, first seat first.
    pub fn into_agents(self) -> (A, B) {
        (self.first.agent, self.second.agent)
    }

    /// Accepted shots fired by `side`.
    pub fn shots(&self, side: Side) -> usize {
        match side {
            Side::First => self.first.shots,
            Side::Second => self.second.shots,
        }
    }

    pub fn last_turn(&self) -> Option<Turn> {
        self.last_turn
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            TurnState::GameOver(side) => Some(side),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Let the active agent fire until the enemy board accepts a target.
    pub fn take_shot(&mut self, rng: &mut SmallRng) -> Result<Turn, GameError> {
        let side = match self.state {
            TurnState::AwaitingShot(side) => side,
            TurnState::Resolved { .. } => return Err(GameError::OutOfTurn),
            TurnState::GameOver(_) => return Err(GameError::GameOver),
        };
        let turn = match side {
            Side::First => fire(side, &mut self.first, &mut self.second, rng)?,
            Side::Second => fire(side, &mut self.second, &mut self.first, rng)?,
        };
        self.state = TurnState::Resolved {
            side,
            hit: turn.result.is_hit(),
            sunk: turn.result.is_sunk(),
        };
        self.last_turn = Some(turn);
        Ok(turn)
    }

    /// Leave the resolved state: end the game if the enemy fleet is gone,
    /// otherwise hand the turn over.
    pub fn advance(&mut self) -> Result<TurnState, GameError> {
        let side = match self.state {
            TurnState::Resolved { side, .. } => side,
            TurnState::AwaitingShot(_) => return Err(GameError::OutOfTurn),
            TurnState::GameOver(_) => return Err(GameError::GameOver),
        };
        self.state = if self.board(side.other()).any_ship_alive() {
            debug!("turn passes to {:?}", side.other());
            TurnState::AwaitingShot(side.other())
        } else {
            info!(
                "{} wins after {} shots",
                self.agent_name(side),
                self.shots(side)
            );
            TurnState::GameOver(side)
        };
        Ok(self.state)
    }

    /// One full turn: a shot followed by the hand-over.
    pub fn play_turn(&mut self, rng: &mut SmallRng) -> Result<Turn, GameError> {
        let turn = self.take_shot(rng)?;
        self.advance()?;
        Ok(turn)
    }

    /// Play until one fleet is destroyed and return the winner.
    pub fn run(&mut self, rng: &mut SmallRng) -> Result<Side, GameError> {
        loop {
            if let Some(winner) = self.winner() {
                return Ok(winner);
            }
            self.play_turn(rng)?;
        }
    }
}

fn fire<X: Agent, Y: Agent>(
    side: Side,
    attacker: &mut Seat<X>,
    defender: &mut Seat<Y>,
    rng: &mut SmallRng,
) -> Result<Turn, GameError> {
    loop {
        let view = defender.board.fog_view();
        let target = attacker
            .agent
            .choose_target(rng, &attacker.board, &view)?;
        match defender.board.fire_at(target) {
            Ok(result) => {
                attacker.shots += 1;
                debug!("{} fires at {}: {:?}", attacker.agent.name(), target, result);
                attacker.agent.handle_shot_result(target, result);
                defender.agent.handle_opponent_shot(target, result);
                return Ok(Turn {
                    side,
                    target,
                    result,
                });
            }
            Err(err) => {
                debug!("{} target {} rejected: {}", attacker.agent.name(), target, err);
                attacker.agent.handle_rejected_shot(target, err);
            }
        }
    }
}
