use thiserror::Error;

/// Why a placement was refused. All of these are recoverable: the board is unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("Must play in the specified board")]
    WrongBoard { required: usize, attempted: usize },
    #[error("This board is already completed")]
    BoardAlreadyDecided { sub_board: usize },
    #[error("Cell already taken")]
    CellOccupied {
        sub_board: usize,
        row: usize,
        col: usize,
    },
    #[error("Move is off the board: sub-board {sub_board}, cell ({row}, {col})")]
    OutOfBounds {
        sub_board: usize,
        row: usize,
        col: usize,
    },
    #[error("Active board {constraint} does not exist")]
    InvalidConstraint { constraint: usize },
}
