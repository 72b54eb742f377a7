//! Random fleet placement.
//!
//! Each ship is drawn with a random orientation and a random bow anywhere on
//! the board, probed with [`Board::is_placement_free`] and committed once it
//! fits. A layout that paints itself into a corner is thrown away and the
//! whole fleet is laid out again on a fresh board.

use crate::board::Board;
use crate::common::GameError;
use crate::config::{fleet_lengths, BOARD_SIZE, MAX_FLEET_RESTARTS, MAX_PLACEMENT_ATTEMPTS};
use crate::coord::Coordinate;
use crate::ship::{Orientation, Ship};
use log::{debug, warn};
use rand::Rng;

/// Draw a candidate ship of `length` with uniform orientation and bow.
///
/// The candidate may hang off the board; the board rejects it on probing.
pub fn random_ship<R: Rng + ?Sized>(rng: &mut R, length: u8) -> Ship {
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let size = i32::from(BOARD_SIZE);
    let bow = Coordinate::new(rng.random_range(1..=size), rng.random_range(1..=size));
    Ship::new(length, bow, orientation)
}

/// Returns a random free placement for a ship of `length` on `board`.
pub fn random_placement<R: Rng + ?Sized>(
    rng: &mut R,
    board: &Board,
    length: u8,
) -> Result<Ship, GameError> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let ship = random_ship(rng, length);
        if board.is_placement_free(&ship) {
            return Ok(ship);
        }
    }
    Err(GameError::UnableToPlaceFleet)
}

fn try_layout<R: Rng + ?Sized>(rng: &mut R) -> Result<Board, GameError> {
    let mut board = Board::new();
    for length in fleet_lengths() {
        let ship = random_placement(rng, &board, length)?;
        board.place_ship(ship)?;
    }
    Ok(board)
}

/// Fill an empty `board` with the standard fleet.
pub fn place_fleet<R: Rng + ?Sized>(rng: &mut R, board: &mut Board) -> Result<(), GameError> {
    if board.ship_count() > 0 {
        return Err(GameError::FleetAlreadyPlaced);
    }
    for restart in 0..MAX_FLEET_RESTARTS {
        match try_layout(rng) {
            Ok(layout) => {
                for ship in layout.ships() {
                    board.place_ship(*ship)?;
                }
                debug!("fleet placed after {} restarts", restart);
                return Ok(());
            }
            Err(GameError::UnableToPlaceFleet) => continue,
            Err(e) => return Err(e),
        }
    }
    warn!("gave up placing the fleet after {} layouts", MAX_FLEET_RESTARTS);
    Err(GameError::UnableToPlaceFleet)
}

/// A new board holding a random standard fleet.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R) -> Result<Board, GameError> {
    let mut board = Board::new();
    place_fleet(rng, &mut board)?;
    Ok(board)
}
