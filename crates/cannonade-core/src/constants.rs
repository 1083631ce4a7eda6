//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 15;

/// Integration step per tick. Velocities are expressed in arena units
/// per tick, so the step is 1.
pub const STEP: f64 = 1.0;

/// Downward acceleration applied to projectiles and bombs each tick.
pub const GRAVITY: f64 = 2.0;

// --- Arena ---

/// Default arena width in pixels.
pub const ARENA_WIDTH: f64 = 800.0;

/// Default arena height in pixels.
pub const ARENA_HEIGHT: f64 = 600.0;

/// Margin keeping cannon sprites fully on screen when clamping movement.
pub const CANNON_MARGIN: f64 = 30.0;

/// Cannon hitbox radius. The sprite is drawn larger than the hull.
pub const CANNON_SIZE: f64 = 1.0;

// --- Ballistics ---

/// Squared speed below which an entity near the floor counts as settled.
pub const REST_SPEED_SQ: f64 = 4.0;

/// Projectile restitution orthogonal to the struck edge.
pub const PROJECTILE_RESTITUTION_ORTHO: f64 = 0.6;

/// Projectile restitution parallel to the struck edge.
pub const PROJECTILE_RESTITUTION_PAR: f64 = 0.7;

/// Targets rebound perfectly elastically.
pub const TARGET_RESTITUTION: f64 = 1.0;

// --- Projectiles ---

/// Projectile hitbox radius.
pub const PROJECTILE_SIZE: f64 = 20.0;

/// Projectile hulls die on their first impact.
pub const PROJECTILE_HEALTH: i32 = 1;

// --- Cannons ---

/// Player cannon per-axis step size.
pub const PLAYER_STEP: f64 = 7.0;

/// Player charge bounds.
pub const PLAYER_MIN_POW: f64 = 10.0;
pub const PLAYER_MAX_POW: f64 = 50.0;

/// Player starting health.
pub const PLAYER_HEALTH: i32 = 15;

/// Charge gained per tick while the charge is active.
pub const CHARGE_GAIN: f64 = 2.0;

/// Autonomous cannon per-axis step size.
pub const ENEMY_STEP: f64 = 3.0;

/// Autonomous cannon charge bounds.
pub const ENEMY_MIN_POW: f64 = 30.0;
pub const ENEMY_MAX_POW: f64 = 50.0;

/// Autonomous cannon starting health.
pub const ENEMY_HEALTH: i32 = 5;

// --- Autonomous behavior ---

/// Extra clearance beyond the two sprite sizes below which an autonomous
/// cannon freezes and besieges the player.
pub const SIEGE_STANDOFF: f64 = 100.0;

/// Delay between repeated siege shots (seconds).
pub const SIEGE_FIRE_DELAY_SECS: f64 = 0.5;

/// Fixed muzzle velocity of siege shots.
pub const SIEGE_FIRE_VELOCITY: f64 = 60.0;

/// Per-tick chance that a pursuing autonomous cannon places a target.
pub const TARGET_SPAWN_CHANCE: f64 = 0.005;

// --- Targets ---

/// Target radius bounds.
pub const TARGET_MIN_SIZE: f64 = 10.0;
pub const TARGET_MAX_SIZE: f64 = 30.0;

/// Weight of the inverse-score term in the spawn-size upper bound.
pub const TARGET_SIZE_BIAS: f64 = 20.0;

/// Targets die on a single same-shape hit.
pub const TARGET_HEALTH: i32 = 1;

/// Drift speed bounds (per axis) for moving targets.
pub const TARGET_DRIFT_MIN: f64 = 2.0;
pub const TARGET_DRIFT_MAX: f64 = 5.0;

/// Targets per wave.
pub const WAVE_SIZE: usize = 10;

// --- Bombs ---

/// Bomb hitbox radius.
pub const BOMB_SIZE: f64 = 30.0;

pub const BOMB_HEALTH: i32 = 1;

/// Chance that a target drops a bomb on each of its scheduled
/// opportunities.
pub const BOMB_DROP_CHANCE: f64 = 0.1;

/// Stagger between consecutive targets' drop opportunities (ticks).
pub const BOMB_STAGGER_TICKS: u64 = 3;

// --- Defaults ---

/// Autonomous cannons in a default mission.
pub const ENEMY_CANNON_COUNT: usize = 1;
