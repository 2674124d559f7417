//! Ultimate Tic-Tac-Toe implementation of the alpha-beta search traits.

pub mod implementation;


pub use implementation::{
    alpha_beta, choose_move, choose_move_with, clamp_depth, simulation_estimate,
    win_probability, MoveChoice, Position, UtttEvaluator, UtttMoveGenerator, MAX_SEARCH_DEPTH,
};
