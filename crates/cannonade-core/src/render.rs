//! The rendering collaborator interface.
//!
//! The simulation calls these once per tick per live entity and never
//! queries back. Window/surface management and actual rasterization live
//! entirely behind this trait.

use crate::enums::{GamePhase, Shape};
use crate::state::ScoreBoard;
use crate::types::{Color, Position};

pub trait Renderer {
    /// Draw one shaped entity.
    fn draw_shape(&mut self, position: Position, color: Color, size: f64, shape: Shape);

    /// Draw a cannon sprite: barrel along `angle`, length scaled by the
    /// current charge `power`.
    fn draw_cannon(&mut self, position: Position, angle: f64, power: f64, color: Color);

    /// Draw the score panel.
    fn draw_score_panel(&mut self, score: &ScoreBoard, chosen_shape: Shape, player_health: i32);

    /// Draw the end-of-game panel. Only called once the phase is over.
    fn draw_game_over(&mut self, phase: GamePhase, score: i64);
}
