//! Core traits for generic alpha-beta search.

use std::fmt::Debug;

/// Represents the state of a two-player zero-sum game.
pub trait GameState: Clone + Send + Sync {
    /// Returns true if the player to move is the maximizing player.
    fn is_maximizing_player(&self) -> bool;
}

/// An action that produces a new state from an existing one. States are values:
/// applying a move never modifies the state it was applied to.
pub trait GameMove: Clone + Send + Sync + PartialEq + Debug {
    type State: GameState;
    type Error: Debug;

    /// Returns the state reached by playing this move from `state`.
    fn apply(&self, state: &Self::State) -> Result<Self::State, Self::Error>;
}

/// Generates all legal moves from a given game state.
pub trait MoveGenerator<S: GameState>: Clone + Send + Sync {
    type Move: GameMove<State = S>;
    type MoveList: MoveCollection<Self::Move>;

    /// Generates all legal moves for the player to move, in search order.
    fn generate_moves(&self, state: &S) -> Self::MoveList;
}

/// Evaluates a game position and returns a score.
pub trait Evaluator<S: GameState>: Clone + Send + Sync {
    /// Evaluates the given state. Higher scores favor the maximizing player.
    /// `remaining_depth` is the search depth left when the state was reached.
    fn evaluate(&self, state: &S, remaining_depth: u8) -> i32;
}

/// Abstraction over move collections (Vec, SmallVec, etc.)
pub trait MoveCollection<M>: AsRef<[M]> + Send {
    #[inline]
    fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_ref().len()
    }
}

impl<M: Send> MoveCollection<M> for Vec<M> {}

impl<A> MoveCollection<A::Item> for smallvec::SmallVec<A>
where
    A: smallvec::Array + Send,
    A::Item: Send,
{
}
