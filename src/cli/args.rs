//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, play::PlayArgs, protocol::ProtocolArgs,
    pvp::PvpArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "uttt",
    about = "An Ultimate Tic-Tac-Toe engine implemented in Rust"
)]
pub enum Uttt {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which will search for the best move using alpha-beta pruning at the given `--depth` (default: 4). You play X unless you specify otherwise with `--player` (`x`, `o` or `random`). X always moves first."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself at the given `--depth` (default: 4)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Use the engine to determine O's best move from a given position, provided as a JSON nested array with `--board` (required). The active sub-board can be given with `--constraint` and the search depth with `--depth` (default: 4)."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
    #[structopt(
        name = "protocol",
        about = "Start the JSON line protocol: one request per line on stdin (`reset`, `move`, `ai_move`, `quit`), one response per line on stdout."
    )]
    Protocol(ProtocolArgs),
}

impl crate::cli::commands::Command for Uttt {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Pvp(cmd),
            Watch(cmd),
            CalculateBestMove(cmd),
            Protocol(cmd),
        }
    }
}
