//! Move input parsing and validation.
//!
//! A move is typed either as `sub_board row col` (`4 1 1`) or as
//! `big_row big_col row col` (`1 1 1 1`). Numbers may be separated by spaces or commas.

use std::io;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;

use crate::moves::Move;

static SUB_BOARD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-8])[\s,]+([0-2])[\s,]+([0-2])$").expect("SUB_BOARD_RE regex should be valid")
});
static COORDINATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-2])[\s,]+([0-2])[\s,]+([0-2])[\s,]+([0-2])$")
        .expect("COORDINATE_RE regex should be valid")
});

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user exit")]
    UserExit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    Placement(Move),
    UseEngine,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        if matches!(trimmed.to_lowercase().as_str(), "q" | "quit" | "exit") {
            return Err(InputError::UserExit);
        }

        if let Some(caps) = SUB_BOARD_RE.captures(trimmed) {
            return Ok(MoveInput::Placement(Move::new(
                digit(&caps, 1),
                digit(&caps, 2),
                digit(&caps, 3),
            )));
        }

        if let Some(caps) = COORDINATE_RE.captures(trimmed) {
            return Ok(MoveInput::Placement(Move::from_coordinates(
                digit(&caps, 1),
                digit(&caps, 2),
                digit(&caps, 3),
                digit(&caps, 4),
            )));
        }

        Err(InputError::InvalidInput {
            input: trimmed.to_string(),
        })
    }
}

// Groups only ever match a single ASCII digit.
fn digit(caps: &Captures, group: usize) -> usize {
    usize::from(caps[group].as_bytes()[0] - b'0')
}

/// Reads one move from stdin. End of input counts as the user leaving.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    let mut input = String::new();
    let bytes_read = io::stdin()
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;

    if bytes_read == 0 {
        return Err(InputError::UserExit);
    }

    input.parse()
}
