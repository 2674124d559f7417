//! Play command - play a game against the computer.

use structopt::StructOpt;
use uttt::board::Player;
use uttt::game::input_source::ConditionalInput;
use uttt::game::renderer::ConditionalStatsRenderer;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short = "p", long = "player", default_value = "x")]
    pub player: Player,
    #[structopt(long, help = "Search root moves in parallel")]
    pub parallel: bool,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config(self.depth, self.parallel);
        run_game_loop(
            ConditionalInput {
                human_player: self.player,
            },
            ConditionalStatsRenderer {
                human_player: self.player,
            },
            config,
        );
    }
}
