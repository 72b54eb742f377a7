//! Board coordinates.

use core::fmt;

/// A 1-indexed board position: `x` is the column, `y` the row.
///
/// Any pair of integers can be represented so that untrusted input reaches
/// the board, which decides whether the position is on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether the position lies on a `size`×`size` board.
    pub fn in_bounds(&self, size: u8) -> bool {
        let size = i32::from(size);
        (1..=size).contains(&self.x) && (1..=size).contains(&self.y)
    }

    /// Zero-based `(row, col)` grid index, or `None` when off the board.
    pub fn to_index(&self, size: u8) -> Option<(usize, usize)> {
        if self.in_bounds(size) {
            Some(((self.y - 1) as usize, (self.x - 1) as usize))
        } else {
            None
        }
    }

    /// Inverse of [`Coordinate::to_index`].
    pub fn from_index(row: usize, col: usize) -> Self {
        Self::new(col as i32 + 1, row as i32 + 1)
    }

    /// Position shifted by `(dx, dy)`.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Chebyshev (king-move) distance between two positions.
    pub fn chebyshev(&self, other: &Coordinate) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
