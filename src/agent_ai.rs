use crate::{
    agent::Agent,
    board::{Board, BoardView, CellView},
    common::GameError,
    config::{Grid, BOARD_SIZE},
    coord::Coordinate,
};
use rand::{rngs::SmallRng, Rng};

/// Computer opponent that fires uniformly at random.
///
/// With memory enabled it draws only among cells it has not tried and that
/// the enemy view does not already show as hit or missed, so it never draws
/// the same cell twice.
pub struct AiAgent {
    name: &'static str,
    memory: bool,
    tried: Grid,
}

impl AiAgent {
    pub fn new() -> Self {
        Self {
            name: "Computer",
            memory: true,
            tried: Grid::new(),
        }
    }

    /// Draw over the whole board every time and rely on the board to reject
    /// repeats.
    pub fn forgetful() -> Self {
        Self {
            name: "Computer",
            memory: false,
            tried: Grid::new(),
        }
    }

    /// Same agent announced under another name.
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Cells this agent will not draw again.
    pub fn tried(&self) -> Grid {
        self.tried
    }

    fn open_cells(&self, enemy: &BoardView) -> Grid {
        let fired =
            Grid::from_fn(|r, c| matches!(enemy[r][c], CellView::Hit | CellView::Miss));
        !(self.tried | fired)
    }
}

impl Default for AiAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for AiAgent {
    fn name(&self) -> &str {
        self.name
    }

    fn choose_target(
        &mut self,
        rng: &mut SmallRng,
        _own: &Board,
        enemy: &BoardView,
    ) -> Result<Coordinate, GameError> {
        if !self.memory {
            let size = i32::from(BOARD_SIZE);
            return Ok(Coordinate::new(
                rng.random_range(1..=size),
                rng.random_range(1..=size),
            ));
        }
        let open = self.open_cells(enemy);
        let count = open.count_ones();
        if count == 0 {
            return Err(GameError::NoTargetsLeft);
        }
        let (r, c) = open
            .nth_set_bit(rng.random_range(0..count))
            .ok_or(GameError::NoTargetsLeft)?;
        self.tried |= Grid::from_fn(|row, col| (row, col) == (r, c));
        Ok(Coordinate::from_index(r, c))
    }
}
