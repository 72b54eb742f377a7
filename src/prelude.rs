//! Commonly used types and utilities for ease of import.

pub use crate::{
    place_fleet, random_board, Agent, AiAgent, Board, Coordinate, HitResult, Orientation, Ship,
    ShotError, Side, TurnController, TurnState,
};

#[cfg(feature = "std")]
pub use crate::{CliAgent, CoordinateInput, LineInput};
