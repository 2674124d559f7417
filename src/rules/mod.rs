//! Move legality and application. Every operation here is pure: applying a move
//! returns a new board together with the resulting game state.

pub mod error;


use log::{debug, trace};

use crate::board::{GlobalBoard, Player, SUB_BOARD_COUNT};
use crate::moves::Move;
use error::MoveError;

/// The sub-board the player to move is forced into, or `None` for a free choice.
pub type ActiveConstraint = Option<usize>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The game continues; the opponent plays under this constraint.
    InProgress(ActiveConstraint),
    /// A full line of sub-boards.
    Won(Player),
    /// Every sub-board is decided without a line; the player with more sub-boards wins.
    DrawnByMajority(Player),
    Draw,
}

impl GameResult {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameResult::InProgress(_))
    }

    #[inline]
    pub fn next_constraint(&self) -> ActiveConstraint {
        match self {
            GameResult::InProgress(constraint) => *constraint,
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Won(player) | GameResult::DrawnByMajority(player) => Some(*player),
            _ => None,
        }
    }

    /// Human-readable text for a finished game.
    pub fn message(&self) -> Option<String> {
        match self {
            GameResult::InProgress(_) => None,
            GameResult::Won(player) => Some(format!("Player {} wins the game!", player)),
            GameResult::DrawnByMajority(player) => {
                Some(format!("Player {} wins by majority!", player))
            }
            GameResult::Draw => Some("Game is a draw!".to_string()),
        }
    }
}

/// A successfully applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppliedMove {
    pub board: GlobalBoard,
    pub result: GameResult,
}

/// Drops a constraint that points at a decided sub-board: the player gets a free move.
#[inline]
pub fn resolve_constraint(board: &GlobalBoard, constraint: ActiveConstraint) -> ActiveConstraint {
    constraint.filter(|&index| index < SUB_BOARD_COUNT && !board.is_decided(index))
}

/// Refuses a constraint naming a sub-board that does not exist.
pub fn validate_constraint(constraint: ActiveConstraint) -> Result<ActiveConstraint, MoveError> {
    match constraint {
        Some(index) if index >= SUB_BOARD_COUNT => {
            Err(MoveError::InvalidConstraint { constraint: index })
        }
        _ => Ok(constraint),
    }
}

/// Places `player`'s symbol at `game_move`, enforcing the constraint and the
/// sub-board rules. The input board is never modified.
pub fn apply_move(
    board: &GlobalBoard,
    game_move: Move,
    player: Player,
    constraint: ActiveConstraint,
) -> Result<AppliedMove, MoveError> {
    let Move {
        sub_board,
        row,
        col,
    } = game_move;

    if !game_move.is_in_bounds() {
        return Err(MoveError::OutOfBounds {
            sub_board,
            row,
            col,
        });
    }

    if let Some(required) = validate_constraint(constraint)? {
        if required != sub_board && !board.is_decided(required) {
            trace!("{} refused: must play in sub-board {}", game_move, required);
            return Err(MoveError::WrongBoard {
                required,
                attempted: sub_board,
            });
        }
    }

    if board.is_decided(sub_board) {
        return Err(MoveError::BoardAlreadyDecided { sub_board });
    }

    if !board.cell(sub_board, row, col).is_empty() {
        return Err(MoveError::CellOccupied {
            sub_board,
            row,
            col,
        });
    }

    let new_board = board.with_cell(sub_board, row, col, player.into());
    let next_constraint = resolve_constraint(&new_board, Some(game_move.target_sub_board()));
    let result = game_result(&new_board, next_constraint);

    if result.is_terminal() {
        debug!("{} by {} ends the game: {:?}", game_move, player, result);
    }

    Ok(AppliedMove {
        board: new_board,
        result,
    })
}

/// Classifies a board: a meta-board line wins; a fully decided meta-board goes to the
/// player with more won sub-boards (drawn sub-boards count for nobody); otherwise the
/// game continues under `next_constraint`.
pub fn game_result(board: &GlobalBoard, next_constraint: ActiveConstraint) -> GameResult {
    let meta_board = board.meta_board();

    if let Some(winner) = meta_board.winner() {
        return GameResult::Won(winner);
    }

    if meta_board.is_fully_decided() {
        let x_wins = meta_board.won_count(Player::X);
        let o_wins = meta_board.won_count(Player::O);
        return match x_wins.cmp(&o_wins) {
            std::cmp::Ordering::Greater => GameResult::DrawnByMajority(Player::X),
            std::cmp::Ordering::Less => GameResult::DrawnByMajority(Player::O),
            std::cmp::Ordering::Equal => GameResult::Draw,
        };
    }

    GameResult::InProgress(next_constraint)
}
