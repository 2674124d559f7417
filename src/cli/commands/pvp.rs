//! PvP command - play a game against another human.

use structopt::StructOpt;
use uttt::game::input_source::HumanInput;
use uttt::game::renderer::SimpleRenderer;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {}

impl Command for PvpArgs {
    fn execute(self) {
        let config = create_config(0, false);
        run_game_loop(HumanInput, SimpleRenderer, config);
    }
}
