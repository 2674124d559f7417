//! Generic alpha-beta search over any two-player, zero-sum, perfect-information game.
//!
//! The game plugs in through the traits in [`traits`]; [`search`] holds the algorithm.

mod search;
mod traits;

#[cfg(test)]
mod tests;

pub use search::{
    alpha_beta, alpha_beta_search, minimax, SearchContext, NEGATIVE_INFINITY, POSITIVE_INFINITY,
};
pub use traits::{Evaluator, GameMove, GameState, MoveCollection, MoveGenerator};
