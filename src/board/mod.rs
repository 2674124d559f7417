//! The board model: cells, 3x3 sub-boards, and the nested global board with its
//! derived meta-board of sub-board outcomes.

pub mod error;
pub mod lines;

mod display;
mod global_board;
mod player;
mod sub_board;


pub use global_board::{GlobalBoard, MetaBoard, SUB_BOARD_COUNT};
pub use player::{Cell, Player};
pub use sub_board::{Outcome, SubBoard};
