//! The per-tick input snapshot handed to the simulation.
//!
//! The platform layer collapses its event stream (key state, mouse
//! events, WASD/arrow aliases) into one flat `InputFrame` per tick; the
//! core treats it as valid for that tick only and holds no input state
//! of its own.

use serde::{Deserialize, Serialize};

use crate::enums::Shape;
use crate::types::Position;

/// Flat snapshot of everything the player did since the last tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InputFrame {
    pub move_left: bool,
    pub move_right: bool,
    pub move_up: bool,
    pub move_down: bool,
    /// Projectile-shape selection, already decoded by the platform layer
    /// via `Shape::from_key`; unrecognized keys never reach the core.
    pub select_shape: Option<Shape>,
    /// Cursor position, absent while the window is unfocused.
    pub cursor: Option<Position>,
    /// Fire-button-down edge: starts the charge.
    pub charge_pressed: bool,
    /// Fire-button-up edge: releases the shot.
    pub fire_released: bool,
    /// Quit signal; observed by the outer loop, ignored by the engine.
    pub quit: bool,
}

impl InputFrame {
    /// Horizontal steering multiplier (-1, 0, or 1).
    pub fn steer_x(&self) -> f64 {
        (self.move_right as i8 - self.move_left as i8) as f64
    }

    /// Vertical steering multiplier (-1, 0, or 1). Up is negative y.
    pub fn steer_y(&self) -> f64 {
        (self.move_down as i8 - self.move_up as i8) as f64
    }
}
