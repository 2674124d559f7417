use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::BoardParseError;
use super::lines::{line_counts, line_winner, LineCount, LineEntry};
use super::player::{Cell, Player};
use super::sub_board::{Outcome, SubBoard};

pub const SUB_BOARD_COUNT: usize = 9;

/// The full game board: nine sub-boards indexed row-major over the 3x3 super-grid
/// (`index = big_row * 3 + big_col`).
///
/// The board is a plain `Copy` value. Placing a symbol returns a new board, so
/// positions explored by the search never share writable state.
///
/// On the wire it is a nested array of symbols: nine sub-boards, each a 3x3 grid of
/// `"X"`, `"O"` or `" "`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobalBoard {
    sub_boards: [SubBoard; SUB_BOARD_COUNT],
}

impl GlobalBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn from_sub_boards(sub_boards: [SubBoard; SUB_BOARD_COUNT]) -> Self {
        Self { sub_boards }
    }

    #[inline]
    pub fn sub_boards(&self) -> &[SubBoard; SUB_BOARD_COUNT] {
        &self.sub_boards
    }

    /// Panics if `index` is not in `0..9`; callers validate external input first.
    #[inline]
    pub fn sub_board(&self, index: usize) -> &SubBoard {
        &self.sub_boards[index]
    }

    #[inline]
    pub fn cell(&self, sub_board: usize, row: usize, col: usize) -> Cell {
        self.sub_boards[sub_board].get(row, col)
    }

    /// Returns a copy of this board with one cell replaced. No legality checks.
    #[must_use]
    pub fn with_cell(mut self, sub_board: usize, row: usize, col: usize, cell: Cell) -> Self {
        self.sub_boards[sub_board] = self.sub_boards[sub_board].with_cell(row, col, cell);
        self
    }

    #[inline]
    pub fn is_decided(&self, sub_board: usize) -> bool {
        self.sub_boards[sub_board].is_decided()
    }

    /// Derives the 3x3 grid of sub-board outcomes.
    pub fn meta_board(&self) -> MetaBoard {
        let mut outcomes = [[None; 3]; 3];
        for (index, sub_board) in self.sub_boards.iter().enumerate() {
            outcomes[index / 3][index % 3] = sub_board.outcome();
        }
        MetaBoard { outcomes }
    }

    /// Builds a board from a 9x9 character layout read row by row across the whole
    /// board: `X`, `O`, and `.` for empty. Whitespace and `|` `-` `+` separators are
    /// ignored, so a layout may be drawn with sub-board borders.
    pub fn from_layout(layout: &str) -> Result<Self, BoardParseError> {
        let symbols: Vec<char> = layout
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '|' | '-' | '+'))
            .collect();

        if symbols.len() != 81 {
            return Err(BoardParseError::InvalidLayoutLength {
                length: symbols.len(),
            });
        }

        let mut board = Self::new();
        for (i, &symbol) in symbols.iter().enumerate() {
            let cell = match symbol {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '.' => Cell::Empty,
                other => return Err(BoardParseError::InvalidSymbol { symbol: other }),
            };
            let (global_row, global_col) = (i / 9, i % 9);
            let sub_board = (global_row / 3) * 3 + global_col / 3;
            board = board.with_cell(sub_board, global_row % 3, global_col % 3, cell);
        }
        Ok(board)
    }
}

impl FromStr for GlobalBoard {
    type Err = BoardParseError;

    /// Accepts either the JSON wire form or a character layout (see [`GlobalBoard::from_layout`]).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim_start().starts_with('[') {
            Ok(serde_json::from_str(s)?)
        } else {
            Self::from_layout(s)
        }
    }
}

/// The outcome of each sub-board, laid out on the super-grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetaBoard {
    outcomes: [[Option<Outcome>; 3]; 3],
}

impl MetaBoard {
    #[inline]
    pub fn outcomes(&self) -> &[[Option<Outcome>; 3]; 3] {
        &self.outcomes
    }

    #[inline]
    pub fn get(&self, sub_board: usize) -> Option<Outcome> {
        self.outcomes[sub_board / 3][sub_board % 3]
    }

    /// The player holding a full line of won sub-boards. Drawn sub-boards belong to nobody.
    pub fn winner(&self) -> Option<Player> {
        line_winner(&self.outcomes, |outcome| outcome.and_then(Outcome::winner))
    }

    pub fn is_fully_decided(&self) -> bool {
        self.outcomes.iter().flatten().all(Option::is_some)
    }

    pub fn won_count(&self, player: Player) -> usize {
        self.outcomes
            .iter()
            .flatten()
            .filter(|outcome| **outcome == Some(Outcome::Won(player)))
            .count()
    }

    /// Per-line tallies: won sub-boards count for their winner, undecided ones are open,
    /// drawn ones are neither.
    pub fn line_counts(&self) -> impl Iterator<Item = LineCount> + '_ {
        line_counts(&self.outcomes, |outcome| match outcome {
            Some(Outcome::Won(player)) => LineEntry::Owned(*player),
            Some(Outcome::Drawn) => LineEntry::Blocked,
            None => LineEntry::Open,
        })
    }
}
