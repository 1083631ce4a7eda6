//! Events emitted by the simulation for logging, UI feedback, and tests.

use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, Shape};

/// Notable happenings during a tick, drained by the caller after each
/// `tick` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A fresh wave of targets appeared.
    WaveSpawned { count: usize },
    /// A pursuing autonomous cannon placed a target.
    TargetPlaced,
    /// A player projectile destroyed a same-shape target.
    TargetDestroyed { shape: Shape },
    /// A target let go of a bomb.
    BombDropped,
    /// The player took a hit (enemy projectile or bomb contact).
    PlayerHit { remaining: i32 },
    /// An autonomous cannon was destroyed.
    EnemyCannonDestroyed,
    /// The simulation ended.
    GameOver { phase: GamePhase },
}
