//! Protocol command - JSON requests on stdin, responses on stdout

use uttt::protocol::Protocol;

use super::Command;

/// JSON line protocol mode
#[derive(structopt::StructOpt)]
pub struct ProtocolArgs {
    // No arguments needed for protocol mode
}

impl Command for ProtocolArgs {
    fn execute(self) {
        let mut protocol = Protocol::new();
        if let Err(error) = protocol.run() {
            eprintln!("protocol error: {}", error);
            std::process::exit(1);
        }
    }
}
