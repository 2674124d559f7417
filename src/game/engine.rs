use std::time::Duration;

use log::info;
use thiserror::Error;

use crate::alpha_beta_searcher::SearchContext;
use crate::board::{GlobalBoard, Player};
use crate::engine_search::choose_move_with;
use crate::evaluate;
use crate::input_handler::MoveInput;
use crate::move_generation::{legal_moves, MoveList};
use crate::moves::Move;
use crate::rules::{self, error::MoveError, game_result, ActiveConstraint, GameResult};

/// Core engine state and configuration
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub search_depth: u8,
    /// Search root moves on the rayon thread pool.
    pub parallel: bool,
    pub starting_position: GlobalBoard,
    pub starting_player: Player,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: 4, // Default search depth
            parallel: false,
            starting_position: GlobalBoard::new(),
            starting_player: Player::X,
        }
    }
}

/// Game state and runtime info
#[derive(Clone, Debug)]
struct GameState {
    board: GlobalBoard,
    constraint: ActiveConstraint,
    to_move: Player,
    result: GameResult,
    move_history: Vec<(Player, Move)>,
    last_score: Option<i32>,
}

impl GameState {
    fn new(starting_position: GlobalBoard, starting_player: Player) -> Self {
        Self {
            board: starting_position,
            constraint: None,
            to_move: starting_player,
            result: game_result(&starting_position, None),
            move_history: Vec::new(),
            last_score: None,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    InvalidMove(#[from] MoveError),
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("the game is already over")]
    GameOver,
}

/// A running game: the board, whose turn it is, and the search used for engine moves.
pub struct Engine {
    state: GameState,
    search_context: SearchContext,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: GameState::new(config.starting_position, config.starting_player),
            search_context: SearchContext::with_parallel(config.search_depth, config.parallel),
        }
    }

    /// Starts over from an empty board with X to move, keeping the search settings.
    pub fn new_game(&mut self) {
        self.state = GameState::new(GlobalBoard::new(), Player::X);
    }

    pub fn board(&self) -> &GlobalBoard {
        &self.state.board
    }

    pub fn constraint(&self) -> ActiveConstraint {
        self.state.constraint
    }

    pub fn to_move(&self) -> Player {
        self.state.to_move
    }

    pub fn result(&self) -> GameResult {
        self.state.result
    }

    pub fn is_game_over(&self) -> bool {
        self.state.result.is_terminal()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.state.move_history.last().map(|&(_, game_move)| game_move)
    }

    pub fn move_history(&self) -> &[(Player, Move)] {
        &self.state.move_history
    }

    pub fn valid_moves(&self) -> MoveList {
        if self.is_game_over() {
            return MoveList::new();
        }
        legal_moves(&self.state.board, self.state.constraint)
    }

    /// Plays `game_move` for the player to move.
    pub fn make_move(&mut self, game_move: Move) -> Result<GameResult, EngineError> {
        if self.is_game_over() {
            return Err(EngineError::GameOver);
        }

        let player = self.state.to_move;
        let applied =
            rules::apply_move(&self.state.board, game_move, player, self.state.constraint)?;

        self.state.board = applied.board;
        self.state.result = applied.result;
        self.state.constraint = applied.result.next_constraint();
        self.state.to_move = player.opposite();
        self.state.move_history.push((player, game_move));

        if let Some(message) = applied.result.message() {
            info!("{}", message);
        }

        Ok(applied.result)
    }

    pub fn get_best_move(&mut self) -> Result<Move, EngineError> {
        if self.is_game_over() {
            return Err(EngineError::GameOver);
        }

        let choice = choose_move_with(
            &mut self.search_context,
            &self.state.board,
            self.state.constraint,
            self.state.to_move,
            &mut rand::thread_rng(),
        );
        self.state.last_score = Some(choice.score);

        choice.best_move.ok_or(EngineError::NoAvailableMoves)
    }

    pub fn make_best_move(&mut self) -> Result<Move, EngineError> {
        let best_move = self.get_best_move()?;
        self.make_move(best_move)?;
        Ok(best_move)
    }

    pub fn make_move_from_input(&mut self, input: MoveInput) -> Result<Move, EngineError> {
        match input {
            MoveInput::Placement(game_move) => {
                self.make_move(game_move)?;
                Ok(game_move)
            }
            MoveInput::UseEngine => self.make_best_move(),
        }
    }

    pub fn get_score(&self) -> i32 {
        evaluate::evaluate(&self.state.board)
    }

    pub fn get_search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.search_context.searched_position_count(),
            cutoffs: self.search_context.cutoff_count(),
            depth: self.search_context.search_depth(),
            last_score: self.state.last_score,
            last_search_duration: self.search_context.last_search_duration(),
        }
    }
}

/// Search performance statistics
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub cutoffs: usize,
    pub depth: u8,
    pub last_score: Option<i32>,
    pub last_search_duration: Option<Duration>,
}
