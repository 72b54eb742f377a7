use crate::bitboard::BitBoard;

/// Cells along each side of the square board.
pub const BOARD_SIZE: u8 = 6;

/// Standard fleet as (ship length, number of ships), longest first.
pub const FLEET: [(u8, usize); 3] = [(3, 1), (2, 2), (1, 3)];

/// Number of ships each player places.
pub const FLEET_SIZE: usize = 1 + 2 + 3;

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 * 2 + 3;

/// Random draws allowed for a single ship before the fleet is laid out again.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Fresh layouts tried before fleet placement gives up.
pub const MAX_FLEET_RESTARTS: usize = 100;

/// Occupancy grid sized for the standard board.
pub type Grid = BitBoard<u64, { BOARD_SIZE as usize }>;

/// Ship lengths in placement order, one entry per ship.
pub fn fleet_lengths() -> impl Iterator<Item = u8> {
    FLEET
        .into_iter()
        .flat_map(|(length, count)| core::iter::repeat(length).take(count))
}
