//! Wave respawn: once the arena is clear of targets and the player has
//! no shots left in flight, a fresh wave appears, sized by the current
//! score.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use cannonade_core::components::{Projectile, Target};
use cannonade_core::events::GameEvent;
use cannonade_core::state::ScoreBoard;
use cannonade_core::types::Arena;

use crate::world_setup;

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    arena: Arena,
    player: Entity,
    score: ScoreBoard,
    wave_size: usize,
    events: &mut Vec<GameEvent>,
) {
    let targets_remain = {
        let mut query = world.query::<&Target>();
        query.iter().next().is_some()
    };
    if targets_remain {
        return;
    }

    // Enemy shots in flight do not hold the wave back.
    let player_shots_remain = {
        let mut query = world.query::<&Projectile>();
        query.iter().any(|(_, projectile)| projectile.fired_by == player)
    };
    if player_shots_remain {
        return;
    }

    for _ in 0..wave_size {
        world_setup::spawn_wave_target(world, rng, arena, score.score());
    }
    events.push(GameEvent::WaveSpawned { count: wave_size });
    info!(count = wave_size, score = score.score(), "spawned target wave");
}
