use crate::board::Player;
use crate::input_handler::{parse_move_input, InputError, MoveInput};

pub trait InputSource {
    fn get_move(&self, current_turn: Player) -> Result<Option<MoveInput>, InputError>;
}

fn read_human_move() -> Result<Option<MoveInput>, InputError> {
    match parse_move_input() {
        Ok(move_input) => Ok(Some(move_input)),
        Err(InputError::UserExit) => Err(InputError::UserExit),
        Err(_) => Ok(None), // Other errors treated as invalid input
    }
}

pub struct HumanInput;

impl InputSource for HumanInput {
    fn get_move(&self, _current_turn: Player) -> Result<Option<MoveInput>, InputError> {
        read_human_move()
    }
}

pub struct EngineInput;

impl InputSource for EngineInput {
    fn get_move(&self, _current_turn: Player) -> Result<Option<MoveInput>, InputError> {
        Ok(Some(MoveInput::UseEngine))
    }
}

pub struct ConditionalInput {
    pub human_player: Player,
}

impl InputSource for ConditionalInput {
    fn get_move(&self, current_turn: Player) -> Result<Option<MoveInput>, InputError> {
        if current_turn == self.human_player {
            read_human_move()
        } else {
            Ok(Some(MoveInput::UseEngine))
        }
    }
}
