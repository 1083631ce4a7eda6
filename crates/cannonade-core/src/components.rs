//! ECS components for hecs entities.
//!
//! Components are data structs; game logic lives in the sim crate's
//! kernels and systems. The capability split (position, velocity, sprite,
//! health) replaces the source material's diamond inheritance: an entity
//! is whatever bundle of these it was spawned with.

use serde::{Deserialize, Serialize};

use crate::enums::{AgentMode, Shape};
use crate::types::Color;

/// Visual identity: what the rendering collaborator needs to draw the
/// entity, and the hitbox radius used by the circular collision test.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sprite {
    pub shape: Shape,
    pub color: Color,
    /// Side length, radius, or triangle edge depending on shape; always
    /// the collision radius.
    pub size: f64,
}

/// Hit points. Zero or below means dead and eligible for pruning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub hp: i32,
}

impl Health {
    pub fn new(hp: i32) -> Self {
        Self { hp }
    }

    pub fn deal(&mut self, damage: i32) {
        self.hp -= damage;
    }

    pub fn heal(&mut self, amount: i32) {
        self.hp += amount;
    }

    /// Explicit kill, e.g. a settled projectile or a bomb at the floor.
    pub fn kill(&mut self) {
        self.hp = 0;
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

/// Per-kind boundary restitution. Entities without this component do not
/// rebound at all (bombs).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Restitution {
    /// Scale applied to the velocity component perpendicular to the
    /// struck edge (negated).
    pub orthogonal: f64,
    /// Scale applied to the component parallel to the struck edge.
    pub parallel: f64,
}

/// Cannon firing state: the charge state machine plus aim.
///
/// `active == true` is the Charging state; Idle and Cooldown collapse to
/// `active == false`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CannonState {
    /// Facing angle in radians.
    pub angle: f64,
    /// Current charge power.
    pub pow: f64,
    pub min_pow: f64,
    pub max_pow: f64,
    /// Whether the charge is currently gaining power.
    pub active: bool,
    /// Projectile shape fired by this cannon.
    pub chosen_shape: Shape,
    /// Per-axis movement step size.
    pub step_size: f64,
}

/// Autonomous-cannon behavior state: pursue/siege mode and the
/// cooperative fire schedule. `next_fire_tick == None` is the
/// "schedule not running" sentinel; cancellation just stores it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AgentCannon {
    pub mode: AgentMode,
    /// Tick at which the next siege shot is due, if the schedule runs.
    pub next_fire_tick: Option<u64>,
    /// Ticks between siege shots.
    pub fire_interval_ticks: u64,
    /// Fixed muzzle velocity of siege shots.
    pub siege_velocity: f64,
    /// Per-tick chance of placing a target while pursuing.
    pub target_spawn_chance: f64,
}

/// Per-tick movement intent, written by the decision phase and consumed
/// (and zeroed) by the movement phase. Components are -1, 0, or 1.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Steering {
    pub dx: f64,
    pub dy: f64,
}

/// Marks the player's cannon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerCannon;

/// Marks an autonomous enemy cannon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyCannon;

/// Marks a target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target;

/// Marks a projectile and records the cannon that fired it. Projectiles
/// never outlive their cannon.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub fired_by: hecs::Entity,
}

/// Marks a bomb and records the target that dropped it. Bombs never
/// outlive their target.
#[derive(Debug, Clone, Copy)]
pub struct Bomb {
    pub dropped_by: hecs::Entity,
}
