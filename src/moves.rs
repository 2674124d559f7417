use std::fmt;

use serde::{Deserialize, Serialize};

/// A placement target: a sub-board index (`0..9`) and a cell inside it. The player is
/// supplied separately when the move is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub sub_board: usize,
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(sub_board: usize, row: usize, col: usize) -> Self {
        Self {
            sub_board,
            row,
            col,
        }
    }

    /// Builds a move from super-grid and cell coordinates.
    pub const fn from_coordinates(big_row: usize, big_col: usize, row: usize, col: usize) -> Self {
        Self::new(big_row * 3 + big_col, row, col)
    }

    /// `[big_row, big_col, row, col]`.
    pub const fn coordinates(&self) -> [usize; 4] {
        [self.sub_board / 3, self.sub_board % 3, self.row, self.col]
    }

    /// The sub-board the opponent is sent to: the cell position mirrored onto the super-grid.
    #[inline]
    pub const fn target_sub_board(&self) -> usize {
        self.row * 3 + self.col
    }

    pub const fn is_in_bounds(&self) -> bool {
        self.sub_board < 9 && self.row < 3 && self.col < 3
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.sub_board, self.row, self.col)
    }
}
