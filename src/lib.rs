//! Ultimate Tic-Tac-Toe: the board model, the rules, a static evaluator and an
//! alpha-beta searching opponent, plus the game session, terminal display and JSON
//! protocol built on top of them.

pub mod alpha_beta_searcher;
pub mod board;
pub mod engine_search;
pub mod evaluate;
pub mod game;
pub mod input_handler;
pub mod interface;
pub mod move_generation;
pub mod moves;
pub mod protocol;
pub mod rules;

#[cfg(feature = "instrumentation")]
pub mod instrumentation;
