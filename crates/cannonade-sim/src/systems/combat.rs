//! Collision/damage resolution, in fixed order: player projectile vs
//! target (same shape required), enemy projectile vs player, player
//! projectile vs enemy cannon, bomb vs player.
//!
//! Hits are collected from read-only queries first, then applied, so
//! resolution never observes half-applied damage within one pass.
//! Entities killed earlier in the tick still exist until cleanup and
//! are skipped via their health.

use hecs::{Entity, World};
use tracing::debug;

use cannonade_core::components::{Bomb, EnemyCannon, Health, Projectile, Sprite, Target};
use cannonade_core::enums::Shape;
use cannonade_core::events::GameEvent;
use cannonade_core::state::ScoreBoard;
use cannonade_core::types::Position;

use crate::ballistics;

pub fn run(world: &mut World, player: Entity, score: &mut ScoreBoard, events: &mut Vec<GameEvent>) {
    projectiles_vs_targets(world, player, score, events);
    enemy_projectiles_vs_player(world, player, events);
    player_projectiles_vs_enemies(world, player, events);
    bombs_vs_player(world, player, events);
}

/// A live projectile snapshot used by the pairwise checks.
struct Shot {
    entity: Entity,
    position: Position,
    size: f64,
    shape: Shape,
}

/// Collect live projectiles fired by (or not by) the player.
fn collect_shots(world: &World, player: Entity, players_own: bool) -> Vec<Shot> {
    let mut shots = Vec::new();
    let mut query = world.query::<(&Projectile, &Position, &Sprite, &Health)>();
    for (entity, (projectile, pos, sprite, health)) in query.iter() {
        if health.is_alive() && (projectile.fired_by == player) == players_own {
            shots.push(Shot {
                entity,
                position: *pos,
                size: sprite.size,
                shape: sprite.shape,
            });
        }
    }
    shots
}

/// Deal damage; true when this hit was the killing one.
fn deal(world: &mut World, entity: Entity, damage: i32) -> bool {
    if let Ok(mut health) = world.get::<&mut Health>(entity) {
        let was_alive = health.is_alive();
        health.deal(damage);
        was_alive && !health.is_alive()
    } else {
        false
    }
}

fn player_position(world: &World, player: Entity) -> Option<(Position, f64)> {
    let pos = *world.get::<&Position>(player).ok()?;
    let size = world.get::<&Sprite>(player).ok()?.size;
    if world.get::<&Health>(player).ok()?.is_alive() {
        Some((pos, size))
    } else {
        None
    }
}

/// A target only takes damage from a projectile of its own shape;
/// mismatched hits pass straight through.
fn projectiles_vs_targets(
    world: &mut World,
    player: Entity,
    score: &mut ScoreBoard,
    events: &mut Vec<GameEvent>,
) {
    let shots = collect_shots(world, player, true);

    let mut hits: Vec<(Entity, Entity, Shape)> = Vec::new();
    {
        let mut query = world.query::<(&Target, &Position, &Sprite, &Health)>();
        for (target, (_tag, pos, sprite, health)) in query.iter() {
            if !health.is_alive() {
                continue;
            }
            for shot in &shots {
                if shot.shape == sprite.shape
                    && ballistics::collides(shot.position, shot.size, *pos, sprite.size)
                {
                    hits.push((shot.entity, target, sprite.shape));
                }
            }
        }
    }

    for (shot, target, shape) in hits {
        deal(world, shot, 1);
        if deal(world, target, 1) {
            score.targets_destroyed += 1;
            events.push(GameEvent::TargetDestroyed { shape });
            debug!(?shape, "target destroyed");
        }
    }
}

fn enemy_projectiles_vs_player(world: &mut World, player: Entity, events: &mut Vec<GameEvent>) {
    let Some((pos, size)) = player_position(world, player) else {
        return;
    };
    let shots = collect_shots(world, player, false);

    for shot in shots {
        if ballistics::collides(shot.position, shot.size, pos, size) {
            deal(world, shot.entity, 1);
            deal(world, player, 1);
            let remaining = world.get::<&Health>(player).map(|h| h.hp).unwrap_or(0);
            events.push(GameEvent::PlayerHit { remaining });
        }
    }
}

fn player_projectiles_vs_enemies(world: &mut World, player: Entity, events: &mut Vec<GameEvent>) {
    let shots = collect_shots(world, player, true);

    let mut hits: Vec<(Entity, Entity)> = Vec::new();
    {
        let mut query = world.query::<(&EnemyCannon, &Position, &Sprite, &Health)>();
        for (cannon, (_tag, pos, sprite, health)) in query.iter() {
            if !health.is_alive() {
                continue;
            }
            for shot in &shots {
                if ballistics::collides(shot.position, shot.size, *pos, sprite.size) {
                    hits.push((shot.entity, cannon));
                }
            }
        }
    }

    for (shot, cannon) in hits {
        deal(world, shot, 1);
        if deal(world, cannon, 1) {
            events.push(GameEvent::EnemyCannonDestroyed);
            debug!("enemy cannon destroyed");
        }
    }
}

fn bombs_vs_player(world: &mut World, player: Entity, events: &mut Vec<GameEvent>) {
    let Some((pos, size)) = player_position(world, player) else {
        return;
    };

    let mut touching: Vec<Entity> = Vec::new();
    {
        let mut query = world.query::<(&Bomb, &Position, &Sprite, &Health)>();
        for (bomb, (_tag, bomb_pos, sprite, health)) in query.iter() {
            if health.is_alive() && ballistics::collides(*bomb_pos, sprite.size, pos, size) {
                touching.push(bomb);
            }
        }
    }

    for bomb in touching {
        deal(world, bomb, 1);
        deal(world, player, 1);
        let remaining = world.get::<&Health>(player).map(|h| h.hp).unwrap_or(0);
        events.push(GameEvent::PlayerHit { remaining });
    }
}
