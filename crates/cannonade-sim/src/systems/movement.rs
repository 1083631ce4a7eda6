//! Movement phase: one integration pass per entity kind, in spawn order.
//!
//! Entities do not interact with each other inside this phase, so the
//! order within a pass is irrelevant for correctness.

use hecs::World;

use cannonade_core::components::{
    Bomb, CannonState, Health, Projectile, Restitution, Sprite, Steering, Target,
};
use cannonade_core::constants::{GRAVITY, STEP};
use cannonade_core::types::{Arena, Position, Velocity};

use crate::ballistics;
use crate::gunnery;

pub fn run(world: &mut World, arena: Arena) {
    steer_cannons(world, arena);
    drift_targets(world, arena);
    fly_projectiles(world, arena);
    fall_bombs(world, arena);
}

/// Consume per-tick steering intents, clamped to the arena margins.
fn steer_cannons(world: &mut World, arena: Arena) {
    for (_entity, (state, pos, steer)) in
        world.query_mut::<(&CannonState, &mut Position, &mut Steering)>()
    {
        if steer.dx != 0.0 || steer.dy != 0.0 {
            *pos = gunnery::step(*pos, steer.dx, steer.dy, state.step_size, arena);
            *steer = Steering::default();
        }
    }
}

/// Drifting targets: gravity-free integration with elastic rebound.
/// Static targets carry no Velocity and are skipped by the query.
fn drift_targets(world: &mut World, arena: Arena) {
    for (_entity, (_tag, pos, vel, sprite, rest)) in world.query_mut::<(
        &Target,
        &mut Position,
        &mut Velocity,
        &Sprite,
        &Restitution,
    )>() {
        ballistics::integrate(pos, vel, 0.0, STEP);
        ballistics::rebound(pos, vel, sprite.size, arena, *rest);
    }
}

/// Projectiles: gravity, inelastic rebound, settle-kill at the floor.
fn fly_projectiles(world: &mut World, arena: Arena) {
    for (_entity, (_tag, pos, vel, sprite, rest, health)) in world.query_mut::<(
        &Projectile,
        &mut Position,
        &mut Velocity,
        &Sprite,
        &Restitution,
        &mut Health,
    )>() {
        ballistics::integrate(pos, vel, GRAVITY, STEP);
        ballistics::rebound(pos, vel, sprite.size, arena, *rest);
        if ballistics::is_settled(*pos, *vel, sprite.size, arena) {
            health.kill();
        }
    }
}

/// Bombs fall straight down and die on reaching the floor.
fn fall_bombs(world: &mut World, arena: Arena) {
    for (_entity, (_tag, pos, vel, sprite, health)) in world.query_mut::<(
        &Bomb,
        &mut Position,
        &mut Velocity,
        &Sprite,
        &mut Health,
    )>() {
        vel.y += GRAVITY;
        pos.y += vel.y * STEP;
        if pos.y >= arena.height - sprite.size {
            pos.y = arena.height - sprite.size;
            health.kill();
        }
    }
}
