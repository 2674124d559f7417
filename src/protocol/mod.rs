//! Line-oriented JSON protocol: one request object per input line, one response object
//! per output line.

pub mod command_parser;
pub mod protocol;
pub mod response_formatter;

pub use command_parser::{AiMoveRequest, MoveRequest, ProtocolCommand, ProtocolError};
pub use protocol::Protocol;
pub use response_formatter::ResponseFormatter;
