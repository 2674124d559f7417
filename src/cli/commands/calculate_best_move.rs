//! Calculate best move command - determine O's best move from a position.

use structopt::StructOpt;
use uttt::board::GlobalBoard;
use uttt::engine_search::choose_move;
use uttt::rules::validate_constraint;

use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: i32,
    #[structopt(long = "board")]
    pub board: GlobalBoard,
    #[structopt(long = "constraint", help = "Sub-board O must play in (0-8)")]
    pub constraint: Option<usize>,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let constraint = match validate_constraint(self.constraint) {
            Ok(constraint) => constraint,
            Err(error) => {
                eprintln!("{}", error);
                std::process::exit(1);
            }
        };
        let choice = choose_move(&self.board, constraint, self.depth);

        match choice.best_move {
            Some(best_move) => {
                let [big_row, big_col, row, col] = best_move.coordinates();
                println!(
                    "{} (big_row {}, big_col {}, row {}, col {})",
                    best_move, big_row, big_col, row, col
                );
                println!(
                    "score {}, win probability {}%, {} simulations, {:.2}s",
                    choice.score,
                    choice.win_probability,
                    choice.simulation_count,
                    choice.elapsed.as_secs_f64()
                );
            }
            None => eprintln!("There are no valid moves in the given position."),
        }
    }
}
