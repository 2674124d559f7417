//! Ultimate Tic-Tac-Toe implementation of the alpha-beta search traits.

use std::time::{Duration, Instant};

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::alpha_beta_searcher::{
    self, alpha_beta_search, Evaluator, GameMove, GameState, MoveGenerator, SearchContext,
};
use crate::board::{GlobalBoard, Player};
use crate::evaluate;
use crate::move_generation::{legal_moves, MoveList};
use crate::moves::Move;
use crate::rules::{self, error::MoveError, game_result, resolve_constraint, ActiveConstraint};

/// No game lasts longer than 81 moves, so deeper searches see nothing new.
pub const MAX_SEARCH_DEPTH: u8 = 81;

/// A search node: the board, the constraint for the player to move, and whether the
/// game is already over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    board: GlobalBoard,
    constraint: ActiveConstraint,
    to_move: Player,
    game_over: bool,
}

impl Position {
    pub fn new(board: GlobalBoard, constraint: ActiveConstraint, to_move: Player) -> Self {
        let constraint = resolve_constraint(&board, constraint);
        let game_over = game_result(&board, constraint).is_terminal();
        Self {
            board,
            constraint,
            to_move,
            game_over,
        }
    }

    pub fn board(&self) -> &GlobalBoard {
        &self.board
    }

    pub fn constraint(&self) -> ActiveConstraint {
        self.constraint
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}

impl GameState for Position {
    #[inline]
    fn is_maximizing_player(&self) -> bool {
        self.to_move.maximize_score()
    }
}

impl GameMove for Move {
    type State = Position;
    type Error = MoveError;

    #[inline]
    fn apply(&self, state: &Position) -> Result<Position, MoveError> {
        let applied = rules::apply_move(&state.board, *self, state.to_move, state.constraint)?;
        Ok(Position {
            board: applied.board,
            constraint: applied.result.next_constraint(),
            to_move: state.to_move.opposite(),
            game_over: applied.result.is_terminal(),
        })
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct UtttMoveGenerator;

impl MoveGenerator<Position> for UtttMoveGenerator {
    type Move = Move;
    type MoveList = MoveList;

    /// Play continues while an undecided sub-board remains, even past a won game.
    #[inline]
    fn generate_moves(&self, state: &Position) -> MoveList {
        legal_moves(&state.board, state.constraint)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct UtttEvaluator;

impl Evaluator<Position> for UtttEvaluator {
    #[inline]
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    fn evaluate(&self, state: &Position, _remaining_depth: u8) -> i32 {
        evaluate::evaluate(&state.board)
    }
}

/// The engine's pick for a position, with the figures reported alongside it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveChoice {
    pub best_move: Option<Move>,
    pub score: i32,
    /// `3^depth`; an estimate of the tree size, not a count of searched nodes.
    pub simulation_count: u64,
    /// Percent, in `5..=95` for a searched move.
    pub win_probability: i32,
    pub elapsed: Duration,
}

/// Negative depths search nothing; depths past the longest possible game are capped.
pub fn clamp_depth(depth: i32) -> u8 {
    depth.clamp(0, MAX_SEARCH_DEPTH as i32) as u8
}

/// `50 + score / 10` rounded toward negative infinity, kept within `5..=95`.
pub fn win_probability(score: i32) -> i32 {
    (50 + score.div_euclid(10)).clamp(5, 95)
}

pub fn simulation_estimate(depth: u8) -> u64 {
    3u64.saturating_pow(depth as u32)
}

/// Alpha-beta over the board with `O` maximizing. The player to move is `O` when
/// `maximizing` is set and `X` otherwise.
///
/// Returns the score and the first move reaching it, or no move at depth 0 and when no
/// legal move exists.
pub fn alpha_beta(
    board: &GlobalBoard,
    depth: i32,
    constraint: ActiveConstraint,
    alpha: i32,
    beta: i32,
    maximizing: bool,
) -> (i32, Option<Move>) {
    let depth = clamp_depth(depth);
    let to_move = if maximizing { Player::O } else { Player::X };
    let context = SearchContext::new(depth);
    let position = Position::new(*board, constraint, to_move);

    alpha_beta_searcher::alpha_beta(
        &context,
        &position,
        &UtttMoveGenerator,
        &UtttEvaluator,
        depth,
        alpha,
        beta,
        maximizing,
    )
}

/// Picks a move for `O`, searching `depth` plies.
#[must_use = "choose_move returns the engine's move"]
pub fn choose_move(board: &GlobalBoard, constraint: ActiveConstraint, depth: i32) -> MoveChoice {
    let mut context = SearchContext::new(clamp_depth(depth));
    choose_move_with(
        &mut context,
        board,
        constraint,
        Player::O,
        &mut rand::thread_rng(),
    )
}

/// Picks a move for `player` at the context's depth.
///
/// When the search yields no move but legal moves exist (depth 0), one of them is picked
/// uniformly with `rng`. The win probability is from `player`'s point of view.
pub fn choose_move_with<R: Rng + ?Sized>(
    context: &mut SearchContext,
    board: &GlobalBoard,
    constraint: ActiveConstraint,
    player: Player,
    rng: &mut R,
) -> MoveChoice {
    let position = Position::new(*board, constraint, player);
    let depth = context.search_depth();

    let start = Instant::now();
    let (score, best_move) =
        alpha_beta_search(context, &position, &UtttMoveGenerator, &UtttEvaluator);
    let elapsed = start.elapsed();

    if let Some(best_move) = best_move {
        let perspective_score = if player.maximize_score() { score } else { -score };
        debug!(
            "{} chooses {} (score {}, depth {}, {:?})",
            player, best_move, score, depth, elapsed
        );
        return MoveChoice {
            best_move: Some(best_move),
            score,
            simulation_count: simulation_estimate(depth),
            win_probability: win_probability(perspective_score),
            elapsed,
        };
    }

    let candidates = UtttMoveGenerator.generate_moves(&position);
    match candidates.choose(rng) {
        Some(&random_move) => {
            debug!("search returned no move, playing {} at random", random_move);
            MoveChoice {
                best_move: Some(random_move),
                score,
                simulation_count: 0,
                win_probability: 50,
                elapsed: Duration::ZERO,
            }
        }
        None => MoveChoice {
            best_move: None,
            score,
            simulation_count: 0,
            win_probability: 0,
            elapsed: Duration::ZERO,
        },
    }
}
