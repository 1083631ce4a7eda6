//! Cannon operations — pure functions over `CannonState`.

use cannonade_core::components::CannonState;
use cannonade_core::constants::CANNON_MARGIN;
use cannonade_core::types::{Arena, Position, Velocity};

/// Start charging. Idle -> Charging.
pub fn activate(state: &mut CannonState) {
    state.active = true;
}

/// Gain charge power, clamped at `max_pow`. No-op unless charging.
pub fn charge(state: &mut CannonState, increment: f64) {
    if state.active {
        state.pow = (state.pow + increment).min(state.max_pow);
    }
}

/// Release a shot and return its muzzle velocity.
///
/// Fires regardless of the charge state: `velocity` overrides the
/// current power when supplied (siege fire uses a fixed velocity).
/// Resets the power to `min_pow` and ends the charge.
pub fn strike(state: &mut CannonState, velocity: Option<f64>) -> Velocity {
    let speed = velocity.unwrap_or(state.pow);
    let fired = Velocity::from_polar(speed, state.angle);
    state.pow = state.min_pow;
    state.active = false;
    fired
}

/// Aim at a point. Independent of the charge state.
pub fn aim(from: Position, at: Position) -> f64 {
    (at.y - from.y).atan2(at.x - from.x)
}

/// Apply one movement step and clamp to the arena margins so the
/// cannon's sprite stays fully on screen.
pub fn step(pos: Position, dx: f64, dy: f64, step_size: f64, arena: Arena) -> Position {
    Position::new(
        (pos.x + dx * step_size).clamp(CANNON_MARGIN, arena.width - CANNON_MARGIN),
        (pos.y + dy * step_size).clamp(CANNON_MARGIN, arena.height - CANNON_MARGIN),
    )
}
