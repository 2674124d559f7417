//! Protocol loop and command execution

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::engine_search::choose_move;
use crate::interface::{new_game, play_move, MoveReport};

use super::command_parser::{AiMoveRequest, MoveRequest, ProtocolCommand};
use super::response_formatter::ResponseFormatter;

/// JSON protocol handler. Every request carries the full position, so the handler keeps
/// no game state of its own.
#[derive(Debug, Default)]
pub struct Protocol {
    should_quit: bool,
}

impl Protocol {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the protocol should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Execute a command and return the response
    pub fn execute_command(&mut self, command: ProtocolCommand) -> Option<String> {
        match command {
            ProtocolCommand::Reset => Some(ResponseFormatter::format_reset_response(&new_game())),

            ProtocolCommand::Move(request) => {
                let report = self.handle_move(&request);
                Some(ResponseFormatter::format_move_response(&report))
            }

            ProtocolCommand::AiMove(request) => Some(self.handle_ai_move(&request)),

            ProtocolCommand::Quit => {
                self.should_quit = true;
                None
            }
        }
    }

    /// Parse and execute one input line. Blank lines are ignored.
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        if line.trim().is_empty() {
            return None;
        }

        match line.parse::<ProtocolCommand>() {
            Ok(command) => self.execute_command(command),
            Err(error) => {
                debug!("rejected request {:?}: {}", line.trim(), error);
                Some(ResponseFormatter::format_error(&error.to_string()))
            }
        }
    }

    fn handle_move(&self, request: &MoveRequest) -> MoveReport {
        match request.to_move() {
            Ok(game_move) => play_move(
                &request.board,
                game_move,
                request.player,
                request.active_board,
            ),
            Err(error) => MoveReport {
                success: false,
                board: request.board,
                next_constraint: None,
                message: Some(error.to_string()),
            },
        }
    }

    fn handle_ai_move(&self, request: &AiMoveRequest) -> String {
        let constraint = match request.constraint() {
            Ok(constraint) => constraint,
            Err(error) => return ResponseFormatter::format_error(&error.to_string()),
        };
        let choice = choose_move(&request.board, constraint, request.depth);
        info!(
            "ai move {:?} at depth {} (score {}, {:?})",
            choice.best_move, request.depth, choice.score, choice.elapsed
        );
        ResponseFormatter::format_ai_move_response(&choice)
    }

    /// Run the protocol over `input` and `output` until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            if let Some(response) = self.handle_line(&line) {
                writeln!(output, "{}", response)?;
                output.flush()?;
            }

            if self.should_quit() {
                break;
            }
        }
        Ok(())
    }

    /// Run the protocol loop, reading from stdin and writing to stdout
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::board::GlobalBoard;

    fn board_json(board: &GlobalBoard) -> String {
        serde_json::to_string(board).unwrap()
    }

    fn respond(protocol: &mut Protocol, line: &str) -> Value {
        serde_json::from_str(&protocol.handle_line(line).unwrap()).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let protocol = Protocol::new();
        assert!(!protocol.should_quit());
    }

    #[test]
    fn test_reset_command() {
        let mut protocol = Protocol::new();
        let response = respond(&mut protocol, r#"{"command":"reset"}"#);
        assert_eq!(response["current_player"], "X");
        assert_eq!(response["game_over"], false);
        assert_eq!(response["active_board"], Value::Null);
    }

    #[test]
    fn test_move_command() {
        let mut protocol = Protocol::new();
        let line = format!(
            r#"{{"command":"move","board":{},"big_row":1,"big_col":1,"small_row":0,"small_col":2,"player":"X","active_board":null}}"#,
            board_json(&GlobalBoard::new())
        );
        let response = respond(&mut protocol, &line);
        assert_eq!(response["success"], true);
        assert_eq!(response["next_board"], 2);
        assert_eq!(response["message"], Value::Null);
        assert_eq!(response["new_board"][4][0][2], "X");
    }

    #[test]
    fn test_move_command_wrong_board() {
        let mut protocol = Protocol::new();
        let line = format!(
            r#"{{"command":"move","board":{},"big_row":0,"big_col":0,"small_row":0,"small_col":0,"player":"O","active_board":4}}"#,
            board_json(&GlobalBoard::new())
        );
        let response = respond(&mut protocol, &line);
        assert_eq!(response["success"], false);
        assert_eq!(response["message"], "Must play in the specified board");
        assert_eq!(response["next_board"], Value::Null);
    }

    #[test]
    fn test_move_command_off_the_board() {
        let mut protocol = Protocol::new();
        let line = format!(
            r#"{{"command":"move","board":{},"big_row":3,"big_col":0,"small_row":0,"small_col":0,"player":"O"}}"#,
            board_json(&GlobalBoard::new())
        );
        let response = respond(&mut protocol, &line);
        assert_eq!(response["success"], false);
    }

    #[test]
    fn test_ai_move_command() {
        let mut protocol = Protocol::new();
        let board = GlobalBoard::new().with_cell(4, 1, 1, crate::board::Cell::X);
        let line = format!(
            r#"{{"command":"ai_move","board":{},"active_board":4,"depth":2}}"#,
            board_json(&board)
        );
        let response = respond(&mut protocol, &line);
        let best_move = response["move"].as_array().unwrap();
        assert_eq!(best_move.len(), 4);
        assert_eq!(best_move[0], 1);
        assert_eq!(best_move[1], 1);
        assert_eq!(response["simulations"], 9);
        let win_prob = response["win_prob"].as_i64().unwrap();
        assert!((5..=95).contains(&win_prob));
        assert!(response["time_spent"].as_f64().unwrap() >= 0.0);
    }

    #[test]
    fn test_ai_move_command_refuses_missing_sub_board() {
        let mut protocol = Protocol::new();
        let line = format!(
            r#"{{"command":"ai_move","board":{},"active_board":9,"depth":2}}"#,
            board_json(&GlobalBoard::new())
        );
        let response = respond(&mut protocol, &line);
        assert_eq!(response["error"], "Active board 9 does not exist");
        assert_eq!(response.get("move"), None);

        let line = format!(
            r#"{{"command":"move","board":{},"big_row":0,"big_col":0,"small_row":0,"small_col":0,"player":"X","active_board":9}}"#,
            board_json(&GlobalBoard::new())
        );
        let response = respond(&mut protocol, &line);
        assert_eq!(response["success"], false);
        assert_eq!(response["message"], "Active board 9 does not exist");
    }

    #[test]
    fn test_malformed_line_reports_error() {
        let mut protocol = Protocol::new();
        let response = respond(&mut protocol, "{not json");
        assert!(response["error"].as_str().unwrap().starts_with("invalid request"));
        assert!(!protocol.should_quit());
        assert_eq!(protocol.handle_line("   "), None);
    }

    #[test]
    fn test_run_until_quit() {
        let mut protocol = Protocol::new();
        let input = "{\"command\":\"reset\"}\n\nbogus\n{\"command\":\"quit\"}\n{\"command\":\"reset\"}\n";
        let mut output = Vec::new();

        protocol.run_with(input.as_bytes(), &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"current_player\":\"X\""));
        assert!(lines[1].contains("\"error\""));
        assert!(protocol.should_quit());
    }
}
