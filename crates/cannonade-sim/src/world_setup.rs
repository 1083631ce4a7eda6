//! Entity spawn factories.
//!
//! All entity creation goes through these: they construct the component
//! bundle for each kind, resolve `Random` spec variants against the
//! engine RNG, and return the entity id. Callers never hold live
//! references.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use cannonade_agent_ai::profiles::get_profile;
use cannonade_agent_ai::schedule::ticks_from_secs;
use cannonade_core::components::*;
use cannonade_core::constants::*;
use cannonade_core::enums::{AgentMode, CannonKind, Shape};
use cannonade_core::spawn::{ColorSpec, ShapeSpec, VelocitySpec};
use cannonade_core::types::{Arena, Color, Position, Velocity};

/// A spawn decided during the decision phase. Requests are appended to
/// the engine's spawn queue and drained at the start of the movement
/// phase; deciders never touch the live collections directly.
#[derive(Debug, Clone, Copy)]
pub enum SpawnRequest {
    Projectile {
        fired_by: Entity,
        origin: Position,
        velocity: Velocity,
        shape: ShapeSpec,
        color: ColorSpec,
    },
    Target {
        origin: Position,
        size: f64,
    },
    Bomb {
        dropped_by: Entity,
        origin: Position,
    },
}

/// Materialize one queued spawn.
pub fn apply_request(world: &mut World, rng: &mut ChaCha8Rng, request: SpawnRequest) -> Entity {
    match request {
        SpawnRequest::Projectile {
            fired_by,
            origin,
            velocity,
            shape,
            color,
        } => spawn_projectile(world, rng, fired_by, origin, velocity, shape, color),
        SpawnRequest::Target { origin, size } => spawn_target(
            world,
            rng,
            origin,
            size,
            VelocitySpec::Still,
            ShapeSpec::Random,
            ColorSpec::Random,
        ),
        SpawnRequest::Bomb { dropped_by, origin } => spawn_bomb(world, dropped_by, origin),
    }
}

/// Spawn the player cannon at the left edge, mid-height.
pub fn spawn_player_cannon(world: &mut World, arena: Arena) -> Entity {
    let profile = get_profile(CannonKind::Player);
    world.spawn((
        PlayerCannon,
        Position::new(CANNON_MARGIN, arena.height / 2.0),
        Steering::default(),
        CannonState {
            angle: 0.0,
            pow: profile.min_pow,
            min_pow: profile.min_pow,
            max_pow: profile.max_pow,
            active: false,
            chosen_shape: Shape::Circle,
            step_size: profile.step_size,
        },
        Sprite {
            shape: Shape::Circle,
            color: Color::LIGHT_BLUE,
            size: CANNON_SIZE,
        },
        Health::new(profile.health),
    ))
}

/// Spawn one autonomous cannon at the right edge. Multiple cannons are
/// spread evenly over the arena height.
pub fn spawn_enemy_cannon(world: &mut World, arena: Arena, index: usize, count: usize) -> Entity {
    let profile = get_profile(CannonKind::Autonomous);
    let y = arena.height * (index + 1) as f64 / (count + 1) as f64;
    world.spawn((
        EnemyCannon,
        Position::new(arena.width - CANNON_MARGIN, y),
        Steering::default(),
        CannonState {
            angle: std::f64::consts::PI,
            pow: profile.min_pow,
            min_pow: profile.min_pow,
            max_pow: profile.max_pow,
            active: false,
            chosen_shape: Shape::Circle,
            step_size: profile.step_size,
        },
        AgentCannon {
            mode: AgentMode::Pursue,
            next_fire_tick: None,
            fire_interval_ticks: ticks_from_secs(
                profile.fire_delay_secs.unwrap_or(SIEGE_FIRE_DELAY_SECS),
            ),
            siege_velocity: profile.siege_velocity,
            target_spawn_chance: profile.target_spawn_chance,
        },
        Sprite {
            shape: Shape::Circle,
            color: Color::RED,
            size: CANNON_SIZE,
        },
        Health::new(profile.health),
    ))
}

/// Spawn a projectile already in flight.
pub fn spawn_projectile(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    fired_by: Entity,
    origin: Position,
    velocity: Velocity,
    shape: ShapeSpec,
    color: ColorSpec,
) -> Entity {
    world.spawn((
        Projectile { fired_by },
        origin,
        velocity,
        Sprite {
            shape: resolve_shape(rng, shape),
            color: resolve_color(rng, color),
            size: PROJECTILE_SIZE,
        },
        Health::new(PROJECTILE_HEALTH),
        Restitution {
            orthogonal: PROJECTILE_RESTITUTION_ORTHO,
            parallel: PROJECTILE_RESTITUTION_PAR,
        },
    ))
}

/// Spawn a target. `VelocitySpec::Still` produces a static target (no
/// `Velocity` component at all); anything else a drifting one with
/// perfectly elastic rebound.
pub fn spawn_target(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    origin: Position,
    size: f64,
    velocity: VelocitySpec,
    shape: ShapeSpec,
    color: ColorSpec,
) -> Entity {
    let entity = world.spawn((
        Target,
        origin,
        Sprite {
            shape: resolve_shape(rng, shape),
            color: resolve_color(rng, color),
            size,
        },
        Health::new(TARGET_HEALTH),
    ));
    if let Some(vel) = resolve_velocity(rng, velocity) {
        let _ = world.insert(
            entity,
            (
                vel,
                Restitution {
                    orthogonal: TARGET_RESTITUTION,
                    parallel: TARGET_RESTITUTION,
                },
            ),
        );
    }
    entity
}

/// Spawn one wave target: random position fully inside the arena,
/// moving or static with even odds, random shape and color.
pub fn spawn_wave_target(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    arena: Arena,
    score: i64,
) -> Entity {
    let size = calculate_spawn_size(rng, score);
    let origin = Position::new(
        rng.gen_range(size..=arena.width - size),
        rng.gen_range(size..=arena.height - size),
    );
    let velocity = if rng.gen_bool(0.5) {
        VelocitySpec::RandomRange {
            min: TARGET_DRIFT_MIN,
            max: TARGET_DRIFT_MAX,
        }
    } else {
        VelocitySpec::Still
    };
    spawn_target(
        world,
        rng,
        origin,
        size,
        velocity,
        ShapeSpec::Random,
        ColorSpec::Random,
    )
}

/// Spawn a bomb falling from its owning target's position.
pub fn spawn_bomb(world: &mut World, dropped_by: Entity, origin: Position) -> Entity {
    world.spawn((
        Bomb { dropped_by },
        origin,
        Velocity::default(),
        Sprite {
            shape: Shape::Circle,
            color: Color::RED,
            size: BOMB_SIZE,
        },
        Health::new(BOMB_HEALTH),
    ))
}

/// Target radius for the current score: drawn uniformly from
/// `[min, upper]` where the upper bound shrinks toward `min` as the
/// score grows, so a winning player faces smaller targets.
pub fn calculate_spawn_size(rng: &mut ChaCha8Rng, score: i64) -> f64 {
    let upper = (TARGET_MIN_SIZE + TARGET_SIZE_BIAS / (score.max(0) + 1) as f64)
        .min(TARGET_MAX_SIZE);
    rng.gen_range(TARGET_MIN_SIZE..=upper)
}

fn resolve_shape(rng: &mut ChaCha8Rng, spec: ShapeSpec) -> Shape {
    match spec {
        ShapeSpec::Fixed(shape) => shape,
        ShapeSpec::Random => match rng.gen_range(0..3) {
            0 => Shape::Circle,
            1 => Shape::Square,
            _ => Shape::Triangle,
        },
    }
}

fn resolve_color(rng: &mut ChaCha8Rng, spec: ColorSpec) -> Color {
    match spec {
        ColorSpec::Fixed(color) => color,
        ColorSpec::Random => Color::new(rng.gen(), rng.gen(), rng.gen()),
    }
}

fn resolve_velocity(rng: &mut ChaCha8Rng, spec: VelocitySpec) -> Option<Velocity> {
    match spec {
        VelocitySpec::Still => None,
        VelocitySpec::Fixed(vel) => Some(vel),
        VelocitySpec::RandomRange { min, max } => {
            let mut axis = |rng: &mut ChaCha8Rng| {
                let magnitude = rng.gen_range(min..=max);
                if rng.gen_bool(0.5) {
                    magnitude
                } else {
                    -magnitude
                }
            };
            let x = axis(rng);
            let y = axis(rng);
            Some(Velocity::new(x, y))
        }
    }
}
