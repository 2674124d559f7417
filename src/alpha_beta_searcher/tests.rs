//! Domain-agnostic tests for the alpha-beta search algorithm using Nim.
//!
//! Test coverage:
//! - Basic search functionality (winning moves, losing positions, game completion)
//! - Edge cases (zero depth, no moves, moves that fail to apply)
//! - Alpha-beta pruning against plain minimax
//! - Tie-breaking in move order
//! - Parallel vs sequential search consistency

use super::*;

/// State of a Nim game: players take 1-3 objects, last to take wins.
#[derive(Clone, Debug, PartialEq)]
struct NimState {
    pile: u8,
    is_player_one_turn: bool,
}

impl NimState {
    fn new(pile: u8) -> Self {
        Self {
            pile,
            is_player_one_turn: true,
        }
    }
}

impl GameState for NimState {
    fn is_maximizing_player(&self) -> bool {
        self.is_player_one_turn
    }
}

#[derive(Clone, Debug, PartialEq)]
struct NimMove {
    take: u8,
}

impl GameMove for NimMove {
    type State = NimState;
    type Error = &'static str;

    fn apply(&self, state: &NimState) -> Result<NimState, Self::Error> {
        if self.take > state.pile || self.take == 0 || self.take > 3 {
            return Err("Invalid move");
        }
        Ok(NimState {
            pile: state.pile - self.take,
            is_player_one_turn: !state.is_player_one_turn,
        })
    }
}

#[derive(Clone)]
struct NimMoveGenerator;

impl MoveGenerator<NimState> for NimMoveGenerator {
    type Move = NimMove;
    type MoveList = Vec<NimMove>;

    fn generate_moves(&self, state: &NimState) -> Vec<NimMove> {
        if state.pile == 0 {
            return vec![];
        }
        (1..=std::cmp::min(3, state.pile))
            .map(|take| NimMove { take })
            .collect()
    }
}

#[derive(Clone)]
struct NimEvaluator;

impl Evaluator<NimState> for NimEvaluator {
    fn evaluate(&self, state: &NimState, remaining_depth: u8) -> i32 {
        if state.pile == 0 {
            // Current player has no moves - previous player took the last piece and won
            if state.is_player_one_turn {
                -1000 - remaining_depth as i32
            } else {
                1000 + remaining_depth as i32
            }
        } else if state.pile % 4 == 0 {
            // pile % 4 == 0 is a losing position for the player to move
            if state.is_player_one_turn {
                -100
            } else {
                100
            }
        } else if state.is_player_one_turn {
            100
        } else {
            -100
        }
    }
}

fn search(state: &NimState, depth: u8) -> (i32, Option<NimMove>) {
    let mut context = SearchContext::new(depth);
    alpha_beta_search(&mut context, state, &NimMoveGenerator, &NimEvaluator)
}

#[test]
fn test_nim_finds_winning_move_from_5() {
    let (_, best_move) = search(&NimState::new(5), 10);
    assert_eq!(
        best_move.unwrap().take,
        1,
        "From pile of 5, should take 1 to leave opponent with 4"
    );
}

#[test]
fn test_nim_finds_winning_move_from_6() {
    let (_, best_move) = search(&NimState::new(6), 10);
    assert_eq!(best_move.unwrap().take, 2);
}

#[test]
fn test_nim_finds_winning_move_from_7() {
    let (score, best_move) = search(&NimState::new(7), 10);
    assert_eq!(best_move.unwrap().take, 3);
    assert!(score > 1000, "forced win should score as a win, got {}", score);
}

#[test]
fn test_nim_losing_position() {
    let (score, best_move) = search(&NimState::new(8), 10);
    assert!(best_move.is_some(), "a losing side still has to move");
    assert!(score < -1000, "forced loss should score as a loss, got {}", score);
}

#[test]
fn test_nim_exhaustive_winning_positions() {
    for pile in 1..=12u8 {
        if pile % 4 == 0 {
            continue;
        }
        let (_, best_move) = search(&NimState::new(pile), 12);
        assert_eq!(
            best_move.unwrap().take,
            pile % 4,
            "wrong move from pile of {}",
            pile
        );
    }
}

#[test]
fn test_nim_faster_win_is_preferred() {
    // Taking all three wins now; any other move lets the game go on.
    let (score, best_move) = search(&NimState::new(3), 5);
    assert_eq!(best_move.unwrap().take, 3);
    assert_eq!(score, 1004);
}

#[test]
fn test_nim_game_to_completion() {
    let mut state = NimState::new(10);
    let mut moves_played = 0;

    while state.pile > 0 {
        let (_, best_move) = search(&state, 10);
        state = best_move.unwrap().apply(&state).unwrap();
        moves_played += 1;
        assert!(moves_played < 20, "game should terminate");
    }

    assert!(
        !state.is_player_one_turn,
        "player one starts on a winning pile and should take the last object"
    );
}

#[test]
fn test_search_at_zero_depth_evaluates() {
    let state = NimState::new(5);
    let (score, best_move) = search(&state, 0);
    assert_eq!(score, 100);
    assert!(best_move.is_none());
}

#[test]
fn test_search_without_moves_evaluates() {
    let state = NimState::new(0);
    let (score, best_move) = search(&state, 3);
    assert_eq!(score, -1003);
    assert!(best_move.is_none());
}

#[test]
fn test_search_leaves_state_untouched() {
    let state = NimState::new(9);
    let snapshot = state.clone();
    search(&state, 6);
    assert_eq!(state, snapshot);
}

#[test]
fn test_alpha_beta_matches_minimax() {
    for pile in 1..=10u8 {
        for depth in 1..=6u8 {
            for is_player_one_turn in [true, false] {
                let state = NimState {
                    pile,
                    is_player_one_turn,
                };
                let mut context = SearchContext::new(depth);
                let pruned =
                    alpha_beta_search(&mut context, &state, &NimMoveGenerator, &NimEvaluator);
                let full = minimax(
                    &state,
                    &NimMoveGenerator,
                    &NimEvaluator,
                    depth,
                    is_player_one_turn,
                );
                assert_eq!(
                    pruned, full,
                    "pile {} depth {} player one {}",
                    pile, depth, is_player_one_turn
                );
            }
        }
    }
}

#[test]
fn test_alpha_beta_prunes() {
    let mut context = SearchContext::new(8);
    alpha_beta_search(
        &mut context,
        &NimState::new(10),
        &NimMoveGenerator,
        &NimEvaluator,
    );
    assert!(context.cutoff_count() > 0);
    assert!(context.searched_position_count() > 0);
}

#[test]
fn test_alpha_beta_depth_1() {
    // Every reply from 6 leaves a non-multiple of 4 except taking 2.
    let (score, best_move) = search(&NimState::new(6), 1);
    assert_eq!(best_move.unwrap().take, 2);
    assert_eq!(score, 100);
}

#[test]
fn test_alpha_beta_ties_keep_first_move() {
    #[derive(Clone)]
    struct FlatEvaluator;

    impl Evaluator<NimState> for FlatEvaluator {
        fn evaluate(&self, _state: &NimState, _remaining_depth: u8) -> i32 {
            0
        }
    }

    for depth in 1..=4u8 {
        let mut context = SearchContext::new(depth);
        let (score, best_move) = alpha_beta_search(
            &mut context,
            &NimState::new(9),
            &NimMoveGenerator,
            &FlatEvaluator,
        );
        assert_eq!(score, 0);
        assert_eq!(best_move, Some(NimMove { take: 1 }));
    }
}

#[test]
fn test_alpha_beta_skips_moves_that_fail_to_apply() {
    #[derive(Clone)]
    struct SloppyMoveGenerator;

    impl MoveGenerator<NimState> for SloppyMoveGenerator {
        type Move = NimMove;
        type MoveList = Vec<NimMove>;

        fn generate_moves(&self, state: &NimState) -> Vec<NimMove> {
            if state.pile == 0 {
                return vec![];
            }
            let mut moves = vec![NimMove { take: 0 }, NimMove { take: 4 }];
            moves.extend(NimMoveGenerator.generate_moves(state));
            moves
        }
    }

    let mut context = SearchContext::new(6);
    let sloppy = alpha_beta_search(
        &mut context,
        &NimState::new(7),
        &SloppyMoveGenerator,
        &NimEvaluator,
    );
    assert_eq!(sloppy, search(&NimState::new(7), 6));
}

#[test]
fn test_search_records_stats() {
    let mut context = SearchContext::new(4);
    let (score, _) = alpha_beta_search(
        &mut context,
        &NimState::new(6),
        &NimMoveGenerator,
        &NimEvaluator,
    );
    assert_eq!(context.last_score(), Some(score));
    assert!(context.last_search_duration().is_some());

    context.reset_stats();
    assert_eq!(context.last_score(), None);
    assert_eq!(context.searched_position_count(), 0);
    assert_eq!(context.cutoff_count(), 0);
}

#[test]
fn test_parallel_vs_sequential_same_result() {
    for pile in 1..=12u8 {
        let state = NimState::new(pile);
        let mut context1 = SearchContext::with_parallel(5, false);
        let mut context2 = SearchContext::with_parallel(5, true);

        let sequential_result =
            alpha_beta_search(&mut context1, &state, &NimMoveGenerator, &NimEvaluator);
        let parallel_result =
            alpha_beta_search(&mut context2, &state, &NimMoveGenerator, &NimEvaluator);

        assert_eq!(
            sequential_result, parallel_result,
            "Parallel and sequential search should find the same move from pile {}",
            pile
        );
    }
}
