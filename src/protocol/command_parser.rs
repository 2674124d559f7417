//! Request parsing from stdin

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::board::{GlobalBoard, Player};
use crate::moves::Move;
use crate::rules::error::MoveError;
use crate::rules::{validate_constraint, ActiveConstraint};

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] serde_json::Error),
}

/// Requests the protocol understands, tagged by their `"command"` field.
#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ProtocolCommand {
    /// Start a new game
    Reset,
    /// Validate and apply a human move
    Move(MoveRequest),
    /// Let the engine pick a move for O
    AiMove(AiMoveRequest),
    /// End the session
    Quit,
}

#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct MoveRequest {
    pub board: GlobalBoard,
    pub big_row: usize,
    pub big_col: usize,
    pub small_row: usize,
    pub small_col: usize,
    pub player: Player,
    #[serde(default)]
    pub active_board: ActiveConstraint,
}

impl MoveRequest {
    /// The requested placement. Super-grid coordinates outside `0..3` would alias another
    /// sub-board index, so they are refused here; cell bounds are left to the rules.
    pub fn to_move(&self) -> Result<Move, MoveError> {
        if self.big_row >= 3 || self.big_col >= 3 {
            return Err(MoveError::OutOfBounds {
                sub_board: self.big_row.saturating_mul(3).saturating_add(self.big_col),
                row: self.small_row,
                col: self.small_col,
            });
        }
        Ok(Move::from_coordinates(
            self.big_row,
            self.big_col,
            self.small_row,
            self.small_col,
        ))
    }
}

#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct AiMoveRequest {
    pub board: GlobalBoard,
    #[serde(default)]
    pub active_board: ActiveConstraint,
    pub depth: i32,
}

impl AiMoveRequest {
    /// The active sub-board, refused with the same error a `move` request would get.
    pub fn constraint(&self) -> Result<ActiveConstraint, MoveError> {
        validate_constraint(self.active_board)
    }
}

impl FromStr for ProtocolCommand {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s.trim())?)
    }
}
