use structopt::StructOpt;

mod cli;

use cli::commands::Command;
use cli::Uttt;

fn main() {
    env_logger::init();

    #[cfg(feature = "instrumentation")]
    uttt::instrumentation::init_tracing();

    Uttt::from_args().execute();

    #[cfg(feature = "instrumentation")]
    uttt::instrumentation::print_timing_statistics();
}
