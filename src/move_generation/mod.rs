//! Legal move enumeration. The order here is the order the search explores moves in,
//! so it is fixed: sub-boards by index, cells row-major.

use smallvec::SmallVec;

use crate::board::{GlobalBoard, SUB_BOARD_COUNT};
use crate::moves::Move;
use crate::rules::{resolve_constraint, ActiveConstraint};

/// At most 81 moves exist on an empty board.
pub type MoveList = SmallVec<[Move; 81]>;

/// All legal placements for the player to move. A constraint naming a decided
/// sub-board is treated as a free move. Nothing is cached between calls.
pub fn legal_moves(board: &GlobalBoard, constraint: ActiveConstraint) -> MoveList {
    let mut moves = MoveList::new();

    match resolve_constraint(board, constraint) {
        Some(sub_board) => push_sub_board_moves(&mut moves, board, sub_board),
        None => {
            for sub_board in 0..SUB_BOARD_COUNT {
                if !board.is_decided(sub_board) {
                    push_sub_board_moves(&mut moves, board, sub_board);
                }
            }
        }
    }

    moves
}

fn push_sub_board_moves(moves: &mut MoveList, board: &GlobalBoard, sub_board: usize) {
    moves.extend(
        board
            .sub_board(sub_board)
            .empty_cells()
            .map(|(row, col)| Move::new(sub_board, row, col)),
    );
}
