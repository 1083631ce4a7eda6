//! Application configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use cannonade_core::types::Arena;
use cannonade_sim::engine::SimConfig;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub sim: SimSection,
    #[serde(default)]
    pub run: RunSection,
}

impl AppConfig {
    /// Load configuration from `cannonade.toml` or use defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Path::new("cannonade.toml");
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            info!("No cannonade.toml found, creating default config");
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)?;
            Ok(default_config)
        }
    }

    /// The engine configuration this app config describes.
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            seed: self.sim.seed,
            arena: Arena::new(self.sim.arena_width, self.sim.arena_height),
            wave_size: self.sim.wave_size,
            enemy_cannons: self.sim.enemy_cannons,
        }
    }
}

/// Simulation settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimSection {
    /// RNG seed; the same seed replays the same mission.
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_arena_width")]
    pub arena_width: f64,
    #[serde(default = "default_arena_height")]
    pub arena_height: f64,
    /// Targets per respawned wave.
    #[serde(default = "default_wave_size")]
    pub wave_size: usize,
    /// Autonomous cannons to field.
    #[serde(default = "default_enemy_cannons")]
    pub enemy_cannons: usize,
}

impl Default for SimSection {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            arena_width: default_arena_width(),
            arena_height: default_arena_height(),
            wave_size: default_wave_size(),
            enemy_cannons: default_enemy_cannons(),
        }
    }
}

/// Runner settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunSection {
    /// Stop after this many ticks even if the game is still going.
    /// `None` runs until game over or shutdown.
    #[serde(default = "default_max_ticks")]
    pub max_ticks: Option<u64>,
    /// Run as fast as possible instead of pacing to the tick rate.
    #[serde(default)]
    pub unpaced: bool,
}

impl Default for RunSection {
    fn default() -> Self {
        Self {
            max_ticks: default_max_ticks(),
            unpaced: false,
        }
    }
}

fn default_seed() -> u64 {
    42
}

fn default_arena_width() -> f64 {
    cannonade_core::constants::ARENA_WIDTH
}

fn default_arena_height() -> f64 {
    cannonade_core::constants::ARENA_HEIGHT
}

fn default_wave_size() -> usize {
    cannonade_core::constants::WAVE_SIZE
}

fn default_enemy_cannons() -> usize {
    cannonade_core::constants::ENEMY_CANNON_COUNT
}

fn default_max_ticks() -> Option<u64> {
    Some(1800)
}
