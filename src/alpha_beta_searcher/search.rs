//! Alpha-beta search algorithm implementation.
//!
//! # Core Algorithm
//!
//! Alpha-beta pruning is an optimization of minimax search that maintains a window [alpha, beta]
//! representing the range of scores that matter. Once `beta <= alpha` at a node, the remaining
//! moves there cannot change the result and are skipped. The algorithm returns the same score as
//! minimax over the same move ordering but explores fewer nodes.
//!
//! Moves are explored in generator order and the first move reaching the best score is kept,
//! so a search is fully deterministic for a given position and depth.
//!
//! # Value semantics
//!
//! Applying a move yields a new state. Sibling branches each start from their parent's
//! unchanged state, so there is nothing to undo after a recursive call returns.
//!
//! ## Parallel Search
//! Root moves can be searched in parallel, each on its own copy of the state and with a full
//! window. The first move with the best exact score is chosen, which is the move the
//! sequential search picks.

use std::cmp::{max, min};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use log::debug;
use rayon::prelude::*;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::{Evaluator, GameMove, GameState, MoveCollection, MoveGenerator};

/// Initial `alpha`, and the running best of a maximizing node before any move is scored.
pub const NEGATIVE_INFINITY: i32 = i32::MIN;
/// Initial `beta`, and the running best of a minimizing node before any move is scored.
pub const POSITIVE_INFINITY: i32 = i32::MAX;

/// Search configuration parameters.
struct SearchConfig {
    depth: u8,
    parallel: bool,
}

impl SearchConfig {
    fn new(depth: u8, parallel: bool) -> Self {
        Self { depth, parallel }
    }
}

/// Statistics collected during search.
struct SearchStats {
    position_count: AtomicUsize,
    cutoff_count: AtomicUsize,
    last_score: Option<i32>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn new() -> Self {
        Self {
            position_count: AtomicUsize::new(0),
            cutoff_count: AtomicUsize::new(0),
            last_score: None,
            last_duration: None,
        }
    }

    fn increment(&self) {
        self.position_count.fetch_add(1, Ordering::Relaxed);
    }

    fn increment_cutoffs(&self) {
        self.cutoff_count.fetch_add(1, Ordering::Relaxed);
    }

    fn reset(&mut self) {
        self.last_score = None;
        self.last_duration = None;
        self.position_count.store(0, Ordering::Relaxed);
        self.cutoff_count.store(0, Ordering::Relaxed);
    }

    fn record_result(&mut self, score: i32, duration: Duration) {
        self.last_score = Some(score);
        self.last_duration = Some(duration);
    }

    fn count(&self) -> usize {
        self.position_count.load(Ordering::Relaxed)
    }

    fn cutoffs(&self) -> usize {
        self.cutoff_count.load(Ordering::Relaxed)
    }
}

pub struct SearchContext {
    config: SearchConfig,
    stats: SearchStats,
}

impl SearchContext {
    pub fn new(depth: u8) -> Self {
        Self::with_parallel(depth, false)
    }

    pub fn with_parallel(depth: u8, parallel: bool) -> Self {
        Self {
            config: SearchConfig::new(depth, parallel),
            stats: SearchStats::new(),
        }
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.config.parallel = parallel;
    }

    pub fn is_parallel(&self) -> bool {
        self.config.parallel
    }

    pub fn set_search_depth(&mut self, depth: u8) {
        self.config.depth = depth;
    }

    pub fn search_depth(&self) -> u8 {
        self.config.depth
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.count()
    }

    pub fn cutoff_count(&self) -> usize {
        self.stats.cutoffs()
    }

    pub fn last_score(&self) -> Option<i32> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }

    fn increment_position_count(&self) {
        self.stats.increment();
    }

    fn increment_cutoffs(&self) {
        self.stats.increment_cutoffs();
    }
}

/// Updates best score and move if new score is better.
/// Returns true if best_score was updated. Ties keep the earlier move.
fn update_best<M: Clone>(
    score: i32,
    candidate_move: &M,
    maximizing_player: bool,
    best_score: &mut i32,
    best_move: &mut Option<M>,
) -> bool {
    let is_better = if maximizing_player {
        score > *best_score
    } else {
        score < *best_score
    };

    if is_better {
        *best_score = score;
        *best_move = Some(candidate_move.clone());
    }
    is_better
}

#[inline]
fn worst_score(maximizing_player: bool) -> i32 {
    if maximizing_player {
        NEGATIVE_INFINITY
    } else {
        POSITIVE_INFINITY
    }
}

/// Searches the position to the context's depth, for the player to move.
///
/// This is the main entry point for the search algorithm. It resets the context's
/// statistics, runs the search (in parallel at the root when the context asks for it) and
/// records the score and duration.
///
/// # Returns
///
/// `(score, best_move)`. `best_move` is `None` when the depth is 0 or there is no legal
/// move; the score is then the static evaluation of the position.
///
/// # Examples
///
/// ```ignore
/// let mut context = SearchContext::new(4);
/// let (score, best_move) = alpha_beta_search(&mut context, &position, &move_gen, &evaluator);
/// ```
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn alpha_beta_search<S, G, E>(
    context: &mut SearchContext,
    state: &S,
    move_generator: &G,
    evaluator: &E,
) -> (i32, Option<G::Move>)
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    context.reset_stats();
    let depth = context.search_depth();
    let maximizing_player = state.is_maximizing_player();
    debug!("alpha-beta search depth: {}", depth);

    let start = Instant::now();
    let (score, best_move) = if context.is_parallel() && depth > 0 {
        search_root_parallel(
            context,
            state,
            move_generator,
            evaluator,
            depth,
            maximizing_player,
        )
    } else {
        alpha_beta(
            context,
            state,
            move_generator,
            evaluator,
            depth,
            NEGATIVE_INFINITY,
            POSITIVE_INFINITY,
            maximizing_player,
        )
    };
    let elapsed = start.elapsed();

    context.stats.record_result(score, elapsed);
    debug!(
        "searched {} positions ({} cutoffs) in {:?}, score {}",
        context.searched_position_count(),
        context.cutoff_count(),
        elapsed,
        score
    );

    (score, best_move)
}

fn search_root_parallel<S, G, E>(
    context: &SearchContext,
    state: &S,
    move_generator: &G,
    evaluator: &E,
    depth: u8,
    maximizing_player: bool,
) -> (i32, Option<G::Move>)
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    context.increment_position_count();

    let candidates = move_generator.generate_moves(state);
    if candidates.is_empty() {
        return (evaluator.evaluate(state, depth), None);
    }

    let results: Vec<Option<(i32, G::Move)>> = candidates
        .as_ref()
        .par_iter()
        .map(|game_move| {
            let child = game_move.apply(state).ok()?;
            let (score, _) = alpha_beta(
                context,
                &child,
                move_generator,
                evaluator,
                depth - 1,
                NEGATIVE_INFINITY,
                POSITIVE_INFINITY,
                !maximizing_player,
            );
            Some((score, game_move.clone()))
        })
        .collect();

    let mut best_score = worst_score(maximizing_player);
    let mut best_move = None;

    for (score, game_move) in results.into_iter().flatten() {
        update_best(
            score,
            &game_move,
            maximizing_player,
            &mut best_score,
            &mut best_move,
        );
    }

    (best_score, best_move)
}

/// Core alpha-beta minimax search with pruning.
///
/// Recursively searches the game tree using alpha-beta pruning. The [alpha, beta] window
/// represents the range of scores that matter - once it closes, the remaining moves at this
/// node are pruned.
///
/// # Parameters
///
/// - `depth` - Remaining search depth (decrements each ply)
/// - `alpha` - Lower bound of search window
/// - `beta` - Upper bound of search window
/// - `maximizing_player` - True if the player to move wants to maximize score
///
/// # Returns
///
/// The score of this position and the first move reaching it. At depth 0, or when the
/// player to move has no legal move, the position is evaluated and no move is returned.
/// Moves that fail to apply are skipped.
#[allow(clippy::too_many_arguments)]
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn alpha_beta<S, G, E>(
    context: &SearchContext,
    state: &S,
    move_generator: &G,
    evaluator: &E,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing_player: bool,
) -> (i32, Option<G::Move>)
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    context.increment_position_count();

    if depth == 0 {
        return (evaluator.evaluate(state, 0), None);
    }

    let candidates = move_generator.generate_moves(state);
    if candidates.is_empty() {
        return (evaluator.evaluate(state, depth), None);
    }

    let mut best_score = worst_score(maximizing_player);
    let mut best_move = None;

    for game_move in candidates.as_ref().iter() {
        let child = match game_move.apply(state) {
            Ok(child) => child,
            Err(error) => {
                debug!("skipping {:?}: {:?}", game_move, error);
                continue;
            }
        };

        let (score, _) = alpha_beta(
            context,
            &child,
            move_generator,
            evaluator,
            depth - 1,
            alpha,
            beta,
            !maximizing_player,
        );

        update_best(
            score,
            game_move,
            maximizing_player,
            &mut best_score,
            &mut best_move,
        );

        if maximizing_player {
            alpha = max(alpha, score);
        } else {
            beta = min(beta, score);
        }

        if beta <= alpha {
            context.increment_cutoffs();
            break;
        }
    }

    (best_score, best_move)
}

/// Plain minimax over the same move ordering, without pruning. Visits every node up to
/// `depth`; useful as a reference for the pruned search.
pub fn minimax<S, G, E>(
    state: &S,
    move_generator: &G,
    evaluator: &E,
    depth: u8,
    maximizing_player: bool,
) -> (i32, Option<G::Move>)
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    if depth == 0 {
        return (evaluator.evaluate(state, 0), None);
    }

    let candidates = move_generator.generate_moves(state);
    if candidates.is_empty() {
        return (evaluator.evaluate(state, depth), None);
    }

    let mut best_score = worst_score(maximizing_player);
    let mut best_move = None;

    for game_move in candidates.as_ref().iter() {
        if let Ok(child) = game_move.apply(state) {
            let (score, _) = minimax(
                &child,
                move_generator,
                evaluator,
                depth - 1,
                !maximizing_player,
            );
            update_best(
                score,
                game_move,
                maximizing_player,
                &mut best_score,
                &mut best_move,
            );
        }
    }

    (best_score, best_move)
}
