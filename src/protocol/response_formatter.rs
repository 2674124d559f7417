//! Response formatting for stdout

use std::time::Duration;

use serde::Serialize;

use crate::board::{GlobalBoard, Player};
use crate::engine_search::MoveChoice;
use crate::interface::{MoveReport, NewGame};
use crate::rules::ActiveConstraint;

#[derive(Debug, Serialize)]
struct ResetResponse {
    board: GlobalBoard,
    active_board: ActiveConstraint,
    current_player: Player,
    game_over: bool,
}

#[derive(Debug, Serialize)]
struct MoveResponse<'a> {
    success: bool,
    new_board: GlobalBoard,
    next_board: ActiveConstraint,
    message: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct AiMoveResponse {
    #[serde(rename = "move")]
    best_move: Option<[usize; 4]>,
    simulations: u64,
    win_prob: i32,
    time_spent: f64,
}

#[derive(Debug, Serialize)]
struct ErrorResponse<'a> {
    error: &'a str,
}

/// Format protocol responses to send to stdout, one JSON object per line
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Format the `reset` response
    pub fn format_reset_response(game: &NewGame) -> String {
        to_json(&ResetResponse {
            board: game.board,
            active_board: game.constraint,
            current_player: game.current_player,
            game_over: game.game_over,
        })
    }

    /// Format the `move` response
    pub fn format_move_response(report: &MoveReport) -> String {
        to_json(&MoveResponse {
            success: report.success,
            new_board: report.board,
            next_board: report.next_constraint,
            message: report.message.as_deref(),
        })
    }

    /// Format the `ai_move` response. The move is `[big_row, big_col, small_row, small_col]`.
    pub fn format_ai_move_response(choice: &MoveChoice) -> String {
        to_json(&AiMoveResponse {
            best_move: choice.best_move.map(|game_move| game_move.coordinates()),
            simulations: choice.simulation_count,
            win_prob: choice.win_probability,
            time_spent: round_seconds(choice.elapsed),
        })
    }

    /// Format error message
    pub fn format_error(message: &str) -> String {
        to_json(&ErrorResponse { error: message })
    }
}

/// Seconds, rounded to two decimals.
fn round_seconds(duration: Duration) -> f64 {
    (duration.as_secs_f64() * 100.0).round() / 100.0
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|error| {
        format!(r#"{{"error":{:?}}}"#, error.to_string())
    })
}
