//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for the
//! read-only draw pass). They own no state — all state lives in
//! components or in the engine.

pub mod bombardier;
pub mod cannons;
pub mod cleanup;
pub mod combat;
pub mod draw;
pub mod movement;
pub mod wave_spawner;
