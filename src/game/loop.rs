use log::debug;

use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, EngineConfig};
use crate::game::input_source::InputSource;
use crate::game::renderer::GameRenderer;
use crate::input_handler::InputError;

pub struct GameLoop<I: InputSource, R: GameRenderer> {
    engine: Engine,
    ui: GameDisplay,
    input_source: I,
    renderer: R,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    pub fn new(input_source: I, renderer: R, config: EngineConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
            ui: GameDisplay::new(),
            input_source,
            renderer,
        }
    }

    pub fn run(&mut self) {
        loop {
            let current_turn = self.engine.to_move();
            self.renderer
                .render(&mut self.ui, &self.engine, current_turn);

            if let Some(message) = self.engine.result().message() {
                println!("{}", message);
                break;
            }

            match self.input_source.get_move(current_turn) {
                Ok(Some(input)) => match self.engine.make_move_from_input(input) {
                    Ok(game_move) => {
                        debug!("{} played {}", current_turn, game_move);
                        if let Some(delay) = self.renderer.frame_delay() {
                            std::thread::sleep(delay);
                        }
                    }
                    Err(error) => println!("error: {}", error),
                },
                Ok(None) => println!("Invalid input"),
                Err(InputError::UserExit) => break,
                Err(error) => println!("error: {}", error),
            }
        }
    }
}
