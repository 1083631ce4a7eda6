//! Headless rendering collaborator: counts draw calls and traces them.
//!
//! Stands in for a real rasterizer so missions can run (and be
//! asserted on) without a window.

use tracing::trace;

use cannonade_core::enums::{GamePhase, Shape};
use cannonade_core::render::Renderer;
use cannonade_core::state::ScoreBoard;
use cannonade_core::types::{Color, Position};

/// Cumulative draw-call counters.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawStats {
    pub shapes: u64,
    pub cannons: u64,
    pub score_panels: u64,
    pub game_over_panels: u64,
}

#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub stats: DrawStats,
}

impl Renderer for HeadlessRenderer {
    fn draw_shape(&mut self, position: Position, _color: Color, size: f64, shape: Shape) {
        self.stats.shapes += 1;
        trace!(x = position.x, y = position.y, size, ?shape, "draw_shape");
    }

    fn draw_cannon(&mut self, position: Position, angle: f64, power: f64, _color: Color) {
        self.stats.cannons += 1;
        trace!(x = position.x, y = position.y, angle, power, "draw_cannon");
    }

    fn draw_score_panel(&mut self, score: &ScoreBoard, chosen_shape: Shape, player_health: i32) {
        self.stats.score_panels += 1;
        trace!(
            destroyed = score.targets_destroyed,
            used = score.projectiles_used,
            score = score.score(),
            ?chosen_shape,
            player_health,
            "draw_score_panel"
        );
    }

    fn draw_game_over(&mut self, phase: GamePhase, score: i64) {
        self.stats.game_over_panels += 1;
        trace!(?phase, score, "draw_game_over");
    }
}
