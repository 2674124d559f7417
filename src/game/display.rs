use std::fmt::Write;

use termion::{clear, cursor};

use crate::board::{GlobalBoard, Player};
use crate::moves::Move;
use crate::rules::ActiveConstraint;

pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        let _ = write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All);
    }

    /// Builds a full frame in the buffer without printing it.
    pub fn compose_game_state(
        &mut self,
        board: &GlobalBoard,
        constraint: ActiveConstraint,
        current_turn: Player,
        last_move: Option<Move>,
        stats: Option<&str>,
    ) {
        self.clear();

        let _ = writeln!(self.buffer, "{}", board);

        // Game info
        let _ = writeln!(self.buffer, "Turn: {}", current_turn);
        match constraint {
            Some(sub_board) => {
                let _ = writeln!(
                    self.buffer,
                    "Play in sub-board {} (row {}, col {})",
                    sub_board,
                    sub_board / 3,
                    sub_board % 3
                );
            }
            None => self.buffer.push_str("Play in any open sub-board\n"),
        }

        if let Some(game_move) = last_move {
            let _ = writeln!(self.buffer, "Last move: {}", game_move);
        }

        if let Some(stats) = stats {
            let _ = writeln!(self.buffer, "\n{}", stats);
        }
    }

    pub fn render_game_state(
        &mut self,
        board: &GlobalBoard,
        constraint: ActiveConstraint,
        current_turn: Player,
        last_move: Option<Move>,
        stats: Option<&str>,
    ) {
        self.compose_game_state(board, constraint, current_turn, last_move, stats);

        // Print the complete frame
        print!("{}", self.buffer);
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}
