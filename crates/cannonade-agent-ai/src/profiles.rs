//! Per-kind cannon tunables.
//!
//! Consolidates the parameters that distinguish the player cannon from
//! autonomous ones.

use cannonade_core::constants::*;
use cannonade_core::enums::CannonKind;

/// Tunables for one kind of cannon.
pub struct CannonProfile {
    /// Per-axis movement step size.
    pub step_size: f64,
    pub min_pow: f64,
    pub max_pow: f64,
    pub health: i32,
    /// Delay between repeated siege shots (seconds), `None` for cannons
    /// that never besiege.
    pub fire_delay_secs: Option<f64>,
    /// Fixed muzzle velocity of siege shots.
    pub siege_velocity: f64,
    /// Per-tick chance of placing a target while pursuing.
    pub target_spawn_chance: f64,
}

/// Get the profile for a given cannon kind.
pub fn get_profile(kind: CannonKind) -> CannonProfile {
    match kind {
        CannonKind::Player => CannonProfile {
            step_size: PLAYER_STEP,
            min_pow: PLAYER_MIN_POW,
            max_pow: PLAYER_MAX_POW,
            health: PLAYER_HEALTH,
            fire_delay_secs: None,
            siege_velocity: 0.0,
            target_spawn_chance: 0.0,
        },
        CannonKind::Autonomous => CannonProfile {
            step_size: ENEMY_STEP,
            min_pow: ENEMY_MIN_POW,
            max_pow: ENEMY_MAX_POW,
            health: ENEMY_HEALTH,
            fire_delay_secs: Some(SIEGE_FIRE_DELAY_SECS),
            siege_velocity: SIEGE_FIRE_VELOCITY,
            target_spawn_chance: TARGET_SPAWN_CHANCE,
        },
    }
}
