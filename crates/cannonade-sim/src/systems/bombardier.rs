//! Bomb-drop scheduling.
//!
//! Every live target gets a probabilistic drop opportunity once per
//! cycle, on a shared staggered schedule: when a cycle is exhausted the
//! target list is reshuffled and each target waits its slot's stagger
//! before its own chance roll, so bombs never appear synchronously.
//! A slot whose target died in the meantime is silently skipped, the
//! cooperative analogue of a cancelled timer.

use hecs::{Entity, World};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use cannonade_agent_ai::schedule::DropCycle;
use cannonade_core::components::Target;
use cannonade_core::constants::{BOMB_DROP_CHANCE, BOMB_STAGGER_TICKS};
use cannonade_core::events::GameEvent;
use cannonade_core::types::Position;

use crate::world_setup::SpawnRequest;

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    cycle: &mut DropCycle<Entity>,
    current_tick: u64,
    spawn_queue: &mut Vec<SpawnRequest>,
    events: &mut Vec<GameEvent>,
) {
    if cycle.is_exhausted() {
        let mut targets: Vec<Entity> = {
            let mut query = world.query::<&Target>();
            query.iter().map(|(entity, _)| entity).collect()
        };
        targets.shuffle(rng);
        cycle.rebuild(&targets, current_tick, BOMB_STAGGER_TICKS);
    }

    for target in cycle.take_due(current_tick) {
        if world.get::<&Target>(target).is_err() {
            continue;
        }
        let Ok(origin) = world.get::<&Position>(target).map(|pos| *pos) else {
            continue;
        };
        if rng.gen_bool(BOMB_DROP_CHANCE) {
            spawn_queue.push(SpawnRequest::Bomb {
                dropped_by: target,
                origin,
            });
            events.push(GameEvent::BombDropped);
        }
    }
}
