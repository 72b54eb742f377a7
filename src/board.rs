//! Board state: the cell grid, the placed ships, and the placement and shot
//! rules that keep them consistent.

use crate::common::{HitResult, PlacementError, ShotError};
use crate::config::{Grid, BOARD_SIZE, FLEET_SIZE};
use crate::coord::Coordinate;
use crate::ship::Ship;
use core::fmt;
use log::{debug, trace};

const N: usize = BOARD_SIZE as usize;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Open water, never fired upon.
    Empty,
    /// Part of a ship, never fired upon. Hidden from the opponent.
    ShipOccupied,
    /// Fired upon, no ship.
    Missed,
    /// Fired upon, ship struck.
    Hit,
    /// Open water next to a sunk ship, marked when the ship went down.
    DestroyedAdjacent,
}

impl CellState {
    /// Whether a shot at this cell would be accepted.
    pub fn is_fireable(&self) -> bool {
        match self {
            CellState::Empty | CellState::ShipOccupied => true,
            CellState::Missed | CellState::Hit | CellState::DestroyedAdjacent => false,
        }
    }
}

/// What a viewer is allowed to see of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Empty,
    Ship,
    Hit,
    Miss,
}

impl CellView {
    /// Display symbol used by the console board.
    pub fn symbol(&self) -> char {
        match self {
            CellView::Empty => 'O',
            CellView::Ship => '■',
            CellView::Hit => 'X',
            CellView::Miss => 'T',
        }
    }
}

/// Projection of a board for display, indexed `[row][col]`.
pub type BoardView = [[CellView; N]; N];

/// One player's board.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[CellState; N]; N],
    ships: [Option<Ship>; FLEET_SIZE],
    ship_map: Grid,
    ships_visible: bool,
}

impl Board {
    /// Create an empty board with hidden ships.
    pub fn new() -> Self {
        Board {
            cells: [[CellState::Empty; N]; N],
            ships: [None; FLEET_SIZE],
            ship_map: Grid::new(),
            ships_visible: false,
        }
    }

    /// Cells along each side.
    pub fn size(&self) -> u8 {
        BOARD_SIZE
    }

    /// Placed ships in placement order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    pub fn ship_count(&self) -> usize {
        self.ships().count()
    }

    /// Occupancy mask of all ships.
    pub fn ship_map(&self) -> Grid {
        self.ship_map
    }

    /// State of the cell at `at`, or `None` when off the board.
    pub fn cell(&self, at: Coordinate) -> Option<CellState> {
        at.to_index(BOARD_SIZE).map(|(r, c)| self.cells[r][c])
    }

    /// Whether ships are shown to viewers other than the owner.
    pub fn ships_visible(&self) -> bool {
        self.ships_visible
    }

    pub fn set_ships_visible(&mut self, visible: bool) {
        self.ships_visible = visible;
    }

    /// Grid mask of the ship's cells, failing if any falls off the board.
    fn footprint(ship: &Ship) -> Result<Grid, PlacementError> {
        let mut mask = Grid::new();
        for dot in ship.dots() {
            let (r, c) = dot.to_index(BOARD_SIZE).ok_or(PlacementError::OutOfBounds)?;
            mask.set(r, c).map_err(|_| PlacementError::OutOfBounds)?;
        }
        Ok(mask)
    }

    fn check_placement(&self, ship: &Ship) -> Result<Grid, PlacementError> {
        let mask = Self::footprint(ship)?;
        // the dilated ship map covers both direct overlap and touching cells
        if !(self.ship_map.dilate() & mask).is_empty() {
            return Err(PlacementError::Overlap);
        }
        if self.ships.iter().all(Option::is_some) {
            return Err(PlacementError::FleetFull);
        }
        Ok(mask)
    }

    /// Whether `ship` could be placed right now. Never mutates.
    pub fn is_placement_free(&self, ship: &Ship) -> bool {
        self.check_placement(ship).is_ok()
    }

    /// Add `ship` to the board, enforcing bounds and the no-touch rule.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), PlacementError> {
        let mask = self.check_placement(&ship)?;
        let slot = self
            .ships
            .iter_mut()
            .find(|slot| slot.is_none())
            .ok_or(PlacementError::FleetFull)?;
        *slot = Some(ship);
        self.ship_map |= mask;
        for (r, c) in mask.iter_set_bits() {
            self.cells[r][c] = CellState::ShipOccupied;
        }
        debug!("placed {:?}", ship);
        Ok(())
    }

    /// Resolve a shot at `target`.
    ///
    /// A rejected shot leaves the board untouched. Sinking a ship marks its
    /// untouched surroundings as [`CellState::DestroyedAdjacent`].
    pub fn fire_at(&mut self, target: Coordinate) -> Result<HitResult, ShotError> {
        let (row, col) = target
            .to_index(BOARD_SIZE)
            .ok_or(ShotError::OutOfBounds)?;
        if !self.cells[row][col].is_fireable() {
            return Err(ShotError::AlreadyTargeted);
        }

        let struck = self
            .ships
            .iter_mut()
            .flatten()
            .find(|ship| ship.occupies(target))
            .map(|ship| {
                let sunk = ship.register_hit();
                (*ship, sunk)
            });

        let result = match struck {
            Some((ship, true)) => {
                self.cells[row][col] = CellState::Hit;
                self.mark_surroundings(&ship);
                HitResult::Sunk(ship.length())
            }
            Some(_) => {
                self.cells[row][col] = CellState::Hit;
                HitResult::Hit
            }
            None => {
                self.cells[row][col] = CellState::Missed;
                HitResult::Miss
            }
        };
        trace!("shot at {} -> {:?}", target, result);
        Ok(result)
    }

    fn mark_surroundings(&mut self, ship: &Ship) {
        let Ok(mask) = Self::footprint(ship) else {
            return;
        };
        let ring = mask.dilate() & !mask;
        for (r, c) in ring.iter_set_bits() {
            if self.cells[r][c] == CellState::Empty {
                self.cells[r][c] = CellState::DestroyedAdjacent;
            }
        }
    }

    /// `true` while at least one ship has hit points left.
    pub fn any_ship_alive(&self) -> bool {
        self.ships().any(|ship| !ship.is_sunk())
    }

    /// Lengths of ships that have been sunk, in placement order.
    pub fn sunk_lengths(&self) -> impl Iterator<Item = u8> + '_ {
        self.ships()
            .filter(|ship| ship.is_sunk())
            .map(|ship| ship.length())
    }

    /// Projection for display. Ships show when the viewer owns the board or
    /// the board's ships are visible.
    pub fn render(&self, viewer_is_owner: bool) -> BoardView {
        self.project(viewer_is_owner || self.ships_visible)
    }

    /// What an opponent may know: ships always hidden.
    pub fn fog_view(&self) -> BoardView {
        self.project(false)
    }

    fn project(&self, reveal: bool) -> BoardView {
        core::array::from_fn(|r| {
            core::array::from_fn(|c| match self.cells[r][c] {
                CellState::ShipOccupied if reveal => CellView::Ship,
                CellState::Hit => CellView::Hit,
                CellState::Missed => CellView::Miss,
                CellState::Empty
                | CellState::ShipOccupied
                | CellState::DestroyedAdjacent => CellView::Empty,
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{\n  ship_map: {:?},\n  ships: {:?},\n  ships_visible: {}\n}}",
            self.ship_map, self.ships, self.ships_visible
        )
    }
}
