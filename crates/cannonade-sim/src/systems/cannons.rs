//! Decision phase for cannons: player input and autonomous behavior.
//!
//! Calls the agent FSM from cannonade-agent-ai to compute mode
//! transitions, then updates components and enqueues spawns. Nothing in
//! this phase touches the live collections beyond the spawn queue.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use cannonade_core::components::{
    AgentCannon, CannonState, EnemyCannon, Sprite, Steering,
};
use cannonade_core::constants::CHARGE_GAIN;
use cannonade_core::enums::AgentMode;
use cannonade_core::events::GameEvent;
use cannonade_core::input::InputFrame;
use cannonade_core::spawn::{ColorSpec, ShapeSpec};
use cannonade_core::state::ScoreBoard;
use cannonade_core::types::{Color, Position};

use cannonade_agent_ai::fsm::{evaluate, AgentContext, AgentUpdate};

use crate::gunnery;
use crate::world_setup::{self, SpawnRequest};

/// Apply the player's input snapshot to the player cannon.
pub fn run_player(
    world: &mut World,
    player: Entity,
    input: &InputFrame,
    score: &mut ScoreBoard,
    spawn_queue: &mut Vec<SpawnRequest>,
) {
    let Ok((state, pos, steer)) =
        world.query_one_mut::<(&mut CannonState, &Position, &mut Steering)>(player)
    else {
        return;
    };

    if let Some(shape) = input.select_shape {
        state.chosen_shape = shape;
    }
    if let Some(cursor) = input.cursor {
        state.angle = gunnery::aim(*pos, cursor);
    }
    if input.charge_pressed {
        gunnery::activate(state);
    }
    gunnery::charge(state, CHARGE_GAIN);

    steer.dx = input.steer_x();
    steer.dy = input.steer_y();

    if input.fire_released {
        let velocity = gunnery::strike(state, None);
        spawn_queue.push(SpawnRequest::Projectile {
            fired_by: player,
            origin: *pos,
            velocity,
            shape: ShapeSpec::Fixed(state.chosen_shape),
            color: ColorSpec::Random,
        });
        score.projectiles_used += 1;
    }
}

/// Run the agent FSM for every autonomous cannon and apply the results:
/// aim at the player, steer or besiege, fire due siege shots, and roll
/// target placement while pursuing.
pub fn run_agents(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player: Entity,
    current_tick: u64,
    score: ScoreBoard,
    spawn_queue: &mut Vec<SpawnRequest>,
    events: &mut Vec<GameEvent>,
) {
    let (player_pos, player_size) = match world.query_one_mut::<(&Position, &Sprite)>(player) {
        Ok((pos, sprite)) => (*pos, sprite.size),
        Err(_) => return,
    };

    // Collect decisions in a buffer to avoid borrow issues with hecs.
    let mut decisions: Vec<(Entity, AgentUpdate, Position, f64, f64)> = Vec::new();
    {
        let mut query = world.query::<(&EnemyCannon, &Position, &Sprite, &AgentCannon)>();
        for (entity, (_tag, pos, sprite, agent)) in query.iter() {
            let ctx = AgentContext {
                mode: agent.mode,
                position: *pos,
                size: sprite.size,
                player_position: player_pos,
                player_size,
                next_fire_tick: agent.next_fire_tick,
                fire_interval_ticks: agent.fire_interval_ticks,
                current_tick,
            };
            decisions.push((
                entity,
                evaluate(&ctx),
                *pos,
                agent.siege_velocity,
                agent.target_spawn_chance,
            ));
        }
    }

    for (entity, update, pos, siege_velocity, spawn_chance) in decisions {
        if let Ok(mut agent) = world.get::<&mut AgentCannon>(entity) {
            agent.mode = update.mode;
            agent.next_fire_tick = update.next_fire_tick;
        }
        if let Ok(mut steer) = world.get::<&mut Steering>(entity) {
            steer.dx = update.step.0;
            steer.dy = update.step.1;
        }
        if let Ok(mut state) = world.get::<&mut CannonState>(entity) {
            state.angle = gunnery::aim(pos, player_pos);
            if update.fire {
                let velocity = gunnery::strike(&mut state, Some(siege_velocity));
                spawn_queue.push(SpawnRequest::Projectile {
                    fired_by: entity,
                    origin: pos,
                    velocity,
                    shape: ShapeSpec::Fixed(state.chosen_shape),
                    color: ColorSpec::Fixed(Color::RED),
                });
            }
        }

        // While pursuing, the cannon seeds the arena with fresh targets.
        if update.mode == AgentMode::Pursue && spawn_chance > 0.0 && rng.gen_bool(spawn_chance) {
            let size = world_setup::calculate_spawn_size(rng, score.score());
            spawn_queue.push(SpawnRequest::Target { origin: pos, size });
            events.push(GameEvent::TargetPlaced);
        }
    }
}
