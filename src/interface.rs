//! The stateless game API: every call takes the full position and returns a new one.

use crate::board::{GlobalBoard, Player};
use crate::moves::Move;
use crate::rules::{self, ActiveConstraint};

pub use crate::engine_search::{choose_move, MoveChoice};

/// A fresh game: an empty board, a free first move, X to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NewGame {
    pub board: GlobalBoard,
    pub constraint: ActiveConstraint,
    pub current_player: Player,
    pub game_over: bool,
}

pub fn new_game() -> NewGame {
    NewGame {
        board: GlobalBoard::new(),
        constraint: None,
        current_player: Player::X,
        game_over: false,
    }
}

/// The outcome of submitting a move.
///
/// A refused move reports `success = false`, the unchanged board and the reason in
/// `message`. An accepted move carries the next constraint while the game continues, and
/// a message once it has ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub success: bool,
    pub board: GlobalBoard,
    pub next_constraint: ActiveConstraint,
    pub message: Option<String>,
}

pub fn play_move(
    board: &GlobalBoard,
    game_move: Move,
    player: Player,
    constraint: ActiveConstraint,
) -> MoveReport {
    match rules::apply_move(board, game_move, player, constraint) {
        Ok(applied) => MoveReport {
            success: true,
            board: applied.board,
            next_constraint: applied.result.next_constraint(),
            message: applied.result.message(),
        },
        Err(error) => MoveReport {
            success: false,
            board: *board,
            next_constraint: None,
            message: Some(error.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::uttt_board;

    #[test]
    fn test_new_game() {
        let game = new_game();
        assert_eq!(game.board, GlobalBoard::new());
        assert_eq!(game.constraint, None);
        assert_eq!(game.current_player, Player::X);
        assert!(!game.game_over);
    }

    #[test]
    fn test_play_move_success() {
        let game = new_game();
        let report = play_move(&game.board, Move::new(0, 1, 2), Player::X, None);
        assert!(report.success);
        assert_eq!(report.board.cell(0, 1, 2), Cell::X);
        assert_eq!(report.next_constraint, Some(5));
        assert_eq!(report.message, None);
    }

    #[test]
    fn test_play_move_failure_echoes_board() {
        let board = GlobalBoard::new().with_cell(0, 0, 0, Cell::O);
        let report = play_move(&board, Move::new(0, 0, 0), Player::X, Some(0));
        assert!(!report.success);
        assert_eq!(report.board, board);
        assert_eq!(report.next_constraint, None);
        assert_eq!(report.message.as_deref(), Some("Cell already taken"));
    }

    #[test]
    fn test_play_move_reports_the_end() {
        let board = uttt_board! {
            XXX|...|...
            ...|...|...
            ...|...|...
            XXX|...|...
            ...|...|...
            ...|...|...
            XX.|...|...
            ...|...|...
            ...|...|...
        };
        let report = play_move(&board, Move::new(6, 0, 2), Player::X, Some(6));
        assert!(report.success);
        assert_eq!(report.next_constraint, None);
        assert_eq!(report.message.as_deref(), Some("Player X wins the game!"));
    }
}
