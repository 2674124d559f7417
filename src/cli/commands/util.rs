//! Shared utilities for CLI commands.

use uttt::board::{GlobalBoard, Player};
use uttt::game::engine::EngineConfig;
use uttt::game::input_source::InputSource;
use uttt::game::r#loop::GameLoop;
use uttt::game::renderer::GameRenderer;

pub(crate) fn run_game_loop<I, R>(input_source: I, renderer: R, config: EngineConfig)
where
    I: InputSource,
    R: GameRenderer,
{
    let mut game = GameLoop::new(input_source, renderer, config);
    game.run();
}

pub(crate) fn create_config(depth: u8, parallel: bool) -> EngineConfig {
    EngineConfig {
        search_depth: depth,
        parallel,
        starting_position: GlobalBoard::new(),
        starting_player: Player::X,
    }
}
