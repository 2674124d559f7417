//! Static evaluation. Scores are from O's perspective: positive favors O,
//! negative favors X.

use crate::board::lines::{line_counts, LineEntry};
use crate::board::{GlobalBoard, Outcome, Player, SubBoard};

pub use self::weights::{GAME_WON, META_THREAT, SUB_BOARD_THREAT, SUB_BOARD_WON};

mod weights;

#[inline]
fn sign(player: Player) -> i32 {
    match player {
        Player::O => 1,
        Player::X => -1,
    }
}

/// Heuristic score of `board`.
///
/// A won game is worth `GAME_WON` and short-circuits everything else. Otherwise each won
/// sub-board counts `SUB_BOARD_WON`, each line of an open sub-board holding two of one
/// player's symbols and an empty cell counts `SUB_BOARD_THREAT`, and each meta-board
/// line holding two won sub-boards and an undecided one counts `META_THREAT`.
pub fn evaluate(board: &GlobalBoard) -> i32 {
    let meta_board = board.meta_board();

    if let Some(winner) = meta_board.winner() {
        return sign(winner) * GAME_WON;
    }

    let mut score: i32 = board.sub_boards().iter().map(sub_board_score).sum();

    for count in meta_board.line_counts() {
        for player in [Player::O, Player::X] {
            if count.is_threat_for(player) {
                score += sign(player) * META_THREAT;
            }
        }
    }

    score
}

fn sub_board_score(sub_board: &SubBoard) -> i32 {
    match sub_board.outcome() {
        Some(Outcome::Won(player)) => sign(player) * SUB_BOARD_WON,
        Some(Outcome::Drawn) => 0,
        None => line_counts(sub_board.cells(), |cell| match cell.player() {
            Some(player) => LineEntry::Owned(player),
            None => LineEntry::Open,
        })
        .map(|count| {
            [Player::O, Player::X]
                .iter()
                .filter(|&&player| count.is_threat_for(player))
                .map(|&player| sign(player) * SUB_BOARD_THREAT)
                .sum::<i32>()
        })
        .sum(),
    }
}
