//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Sprite shape. Also the projectile/target matching key: a target only
/// takes damage from a projectile of the same shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    #[default]
    Circle,
    Square,
    Triangle,
}

impl Shape {
    /// Map a selection key to a shape. Unrecognized keys return `None`,
    /// which callers treat as "keep the previous choice".
    pub fn from_key(key: char) -> Option<Shape> {
        match key.to_ascii_lowercase() {
            'c' => Some(Shape::Circle),
            's' => Some(Shape::Square),
            't' => Some(Shape::Triangle),
            _ => None,
        }
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation running.
    #[default]
    Active,
    /// All enemy cannons destroyed.
    Won,
    /// Player cannon destroyed.
    Lost,
}

impl GamePhase {
    pub fn is_over(&self) -> bool {
        !matches!(self, GamePhase::Active)
    }
}

/// Behavior mode of an autonomous cannon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentMode {
    /// Closing on the player, one step per axis per tick.
    #[default]
    Pursue,
    /// Inside standoff range: stationary, firing on a repeating schedule.
    Siege,
}

/// Which control scheme drives a cannon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CannonKind {
    Player,
    Autonomous,
}
