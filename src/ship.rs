//! Ship definitions: orientation, derived cells and hit points.

use core::fmt;

use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells extend along +x from the bow.
    Horizontal,
    /// Cells extend along +y from the bow.
    Vertical,
}

impl Orientation {
    /// Unit step from one ship cell to the next.
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// A ship of `length` cells anchored at its bow.
///
/// Occupied cells are always derived from `(bow, orientation, length)`.
/// Nothing else about the footprint is stored.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: u8,
    orientation: Orientation,
    bow: Coordinate,
    hit_points: u8,
}

impl Ship {
    /// Create an undamaged ship. Bounds are checked by the board at placement.
    pub fn new(length: u8, bow: Coordinate, orientation: Orientation) -> Self {
        Self {
            length,
            orientation,
            bow,
            hit_points: length,
        }
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    /// Remaining hit points, `0` once sunk.
    pub fn hit_points(&self) -> u8 {
        self.hit_points
    }

    /// Cells covered by the ship, bow first.
    pub fn dots(&self) -> impl Iterator<Item = Coordinate> {
        let (dx, dy) = self.orientation.step();
        let bow = self.bow;
        (0..i32::from(self.length)).map(move |i| bow.offset(dx * i, dy * i))
    }

    /// Whether `target` is one of the ship's cells.
    pub fn occupies(&self, target: Coordinate) -> bool {
        self.dots().any(|dot| dot == target)
    }

    /// Take one hit. Returns `true` if this hit sank the ship.
    pub fn register_hit(&mut self) -> bool {
        if self.hit_points == 0 {
            return false;
        }
        self.hit_points -= 1;
        self.hit_points == 0
    }

    pub fn is_sunk(&self) -> bool {
        self.hit_points == 0
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ length: {}, bow: {}, orientation: {:?}, hit_points: {} }}",
            self.length, self.bow, self.orientation, self.hit_points,
        )
    }
}
