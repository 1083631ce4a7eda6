//! Cleanup system: removes dead entities and cascades ownership.
//!
//! Two-phase: survivors are never touched and victims are collected
//! into a pre-allocated buffer before any despawn, so pruning is
//! correct regardless of traversal order and a repeated call with no
//! intervening mutation is a no-op.

use hecs::{Entity, World};

use cannonade_core::components::{Bomb, Health, Projectile};

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    // Anything whose health ran out, regardless of kind.
    for (entity, health) in world.query_mut::<&Health>() {
        if !health.is_alive() {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    // Ownership cascade: no projectile outlives its cannon, no bomb its
    // target.
    let mut owned: Vec<(Entity, Entity)> = Vec::new();
    {
        let mut query = world.query::<&Projectile>();
        for (entity, projectile) in query.iter() {
            owned.push((entity, projectile.fired_by));
        }
    }
    {
        let mut query = world.query::<&Bomb>();
        for (entity, bomb) in query.iter() {
            owned.push((entity, bomb.dropped_by));
        }
    }
    for (entity, owner) in owned {
        if !world.contains(owner) {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
