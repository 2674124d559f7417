use std::time::Duration;

use crate::board::Player;
use crate::game::display::GameDisplay;
use crate::game::engine::Engine;

pub trait GameRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_turn: Player);
    fn frame_delay(&self) -> Option<Duration>;
}

fn format_stats(engine: &Engine) -> String {
    let stats = engine.get_search_stats();
    format!(
        "* Score: {}\n* Positions searched: {} ({} cutoffs, depth: {})\n* Move took: {}",
        stats.last_score.map_or("-".to_string(), |s| s.to_string()),
        stats.positions_searched,
        stats.cutoffs,
        stats.depth,
        stats
            .last_search_duration
            .map_or("-".to_string(), |d| format!("{:?}", d))
    )
}

fn render_with_stats(ui: &mut GameDisplay, engine: &Engine, current_turn: Player) {
    let stats_display = format_stats(engine);
    ui.render_game_state(
        engine.board(),
        engine.constraint(),
        current_turn,
        engine.last_move(),
        Some(&stats_display),
    );
}

pub struct SimpleRenderer;

impl GameRenderer for SimpleRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_turn: Player) {
        ui.render_game_state(
            engine.board(),
            engine.constraint(),
            current_turn,
            engine.last_move(),
            None,
        );
        println!("Enter your move (sub-board row col):");
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

pub struct StatsRenderer {
    pub delay_between_moves: Option<Duration>,
}

impl GameRenderer for StatsRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_turn: Player) {
        render_with_stats(ui, engine, current_turn);
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

pub struct ConditionalStatsRenderer {
    pub human_player: Player,
}

impl GameRenderer for ConditionalStatsRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_turn: Player) {
        render_with_stats(ui, engine, current_turn);
        if current_turn == self.human_player {
            println!("Enter your move (sub-board row col):");
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}
