use serde::{Deserialize, Serialize};

use super::lines::line_winner;
use super::player::{Cell, Player};

/// The settled state of a 3x3 grid. An undecided grid is represented by `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won(Player),
    Drawn,
}

impl Outcome {
    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            Outcome::Drawn => None,
        }
    }
}

/// A single 3x3 tic-tac-toe grid, addressed by `(row, col)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubBoard {
    cells: [[Cell; 3]; 3],
}

impl SubBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn from_cells(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn cells(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Returns a copy of this grid with `(row, col)` set to `cell`. No legality checks.
    #[must_use]
    pub fn with_cell(mut self, row: usize, col: usize, cell: Cell) -> Self {
        self.cells[row][col] = cell;
        self
    }

    /// Scans the lines in canonical order; a full grid without a line is drawn.
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(winner) = line_winner(&self.cells, |cell| cell.player()) {
            return Some(Outcome::Won(winner));
        }
        if self.is_full() {
            return Some(Outcome::Drawn);
        }
        None
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    #[inline]
    pub fn is_decided(&self) -> bool {
        self.outcome().is_some()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..3)
            .flat_map(|row| (0..3).map(move |col| (row, col)))
            .filter(move |&(row, col)| self.cells[row][col].is_empty())
    }
}

