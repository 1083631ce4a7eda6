//! Ballistics kernel — pure functions over entity state.
//!
//! Owns no entities; the movement and combat systems feed it component
//! data and write the results back.

use cannonade_core::components::Restitution;
use cannonade_core::constants::REST_SPEED_SQ;
use cannonade_core::types::{Arena, Position, Velocity};

/// Gravity integration: accelerate, then displace with the post-gravity
/// velocity.
pub fn integrate(pos: &mut Position, vel: &mut Velocity, gravity: f64, dt: f64) {
    vel.y += gravity;
    pos.x += vel.x * dt;
    pos.y += vel.y * dt;
}

/// Inelastic boundary rebound.
///
/// Each axis is evaluated independently, so an entity can rebound off
/// two edges in one call (a corner hit). On a rebound the perpendicular
/// velocity is negated and scaled by `restitution.orthogonal`, the
/// parallel one scaled by `restitution.parallel`; for coefficients
/// below 1 every bounce loses energy and the entity eventually settles.
pub fn rebound(pos: &mut Position, vel: &mut Velocity, size: f64, arena: Arena, rest: Restitution) {
    if pos.x < size {
        pos.x = size;
        vel.x = -vel.x * rest.orthogonal;
        vel.y *= rest.parallel;
    } else if pos.x > arena.width - size {
        pos.x = arena.width - size;
        vel.x = -vel.x * rest.orthogonal;
        vel.y *= rest.parallel;
    }

    if pos.y < size {
        pos.y = size;
        vel.y = -vel.y * rest.orthogonal;
        vel.x *= rest.parallel;
    } else if pos.y > arena.height - size {
        pos.y = arena.height - size;
        vel.y = -vel.y * rest.orthogonal;
        vel.x *= rest.parallel;
    }
}

/// Whether an entity has come to rest at the arena floor: speed below
/// the rest threshold while within one size-unit of the bottom edge.
pub fn is_settled(pos: Position, vel: Velocity, size: f64, arena: Arena) -> bool {
    vel.speed_sq() < REST_SPEED_SQ && pos.y > arena.height - 2.0 * size
}

/// Circular collision test: center distance no greater than the sum of
/// the two sizes. Hitboxes are circles regardless of sprite shape.
pub fn collides(a_pos: Position, a_size: f64, b_pos: Position, b_size: f64) -> bool {
    let reach = a_size + b_size;
    a_pos.distance_sq_to(&b_pos) <= reach * reach
}
