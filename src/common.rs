//! Common types for Warships: shot results and the engine's error kinds.

use core::fmt;

/// Outcome of a shot accepted by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum HitResult {
    /// Shot landed in open water.
    Miss,
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot took the last hit point of a ship, carrying its length.
    Sunk(u8),
}

impl HitResult {
    /// `true` for both `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, HitResult::Miss)
    }

    pub fn is_sunk(&self) -> bool {
        matches!(self, HitResult::Sunk(_))
    }
}

/// Reasons a ship cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A ship cell falls outside the board.
    OutOfBounds,
    /// A ship cell is occupied or touches another ship.
    Overlap,
    /// The board already holds a full fleet.
    FleetFull,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Ship does not fit on the board"),
            PlacementError::Overlap => write!(f, "Ship overlaps or touches another ship"),
            PlacementError::FleetFull => write!(f, "Board already holds a full fleet"),
        }
    }
}

/// Reasons a shot is rejected. The shooter may always try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Target lies outside the board.
    OutOfBounds,
    /// Target was already fired upon or lies next to a sunk ship.
    AlreadyTargeted,
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfBounds => write!(f, "Target is off the board"),
            ShotError::AlreadyTargeted => write!(f, "That cell was already targeted"),
        }
    }
}

/// Errors outside normal play: setup failures, closed input, misuse of the
/// turn controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A committed placement was rejected.
    Placement(PlacementError),
    /// Random placement ran out of attempts.
    UnableToPlaceFleet,
    /// Fleet placement was asked to fill a board that already has ships.
    FleetAlreadyPlaced,
    /// The human input source reached end of input.
    InputClosed,
    /// An agent has no cell left to fire at.
    NoTargetsLeft,
    /// The controller was driven out of order.
    OutOfTurn,
    /// The game already has a winner.
    GameOver,
}

impl From<PlacementError> for GameError {
    fn from(err: PlacementError) -> Self {
        GameError::Placement(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Placement(e) => write!(f, "Placement failed: {}", e),
            GameError::UnableToPlaceFleet => write!(f, "Unable to place the fleet"),
            GameError::FleetAlreadyPlaced => write!(f, "Board already has ships placed"),
            GameError::InputClosed => write!(f, "Input closed before a target was chosen"),
            GameError::NoTargetsLeft => write!(f, "No cells left to fire at"),
            GameError::OutOfTurn => write!(f, "Turn step called out of order"),
            GameError::GameOver => write!(f, "Game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for ShotError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
