//! Spawn parameter specs.
//!
//! The source material scattered "random if unspecified" defaults across
//! constructors; here every spawn call states its intent explicitly and
//! the factories resolve `Random` variants against the engine RNG.

use serde::{Deserialize, Serialize};

use crate::enums::Shape;
use crate::types::{Color, Velocity};

/// How to pick a spawned entity's shape.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub enum ShapeSpec {
    Fixed(Shape),
    #[default]
    Random,
}

/// How to pick a spawned entity's initial velocity.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub enum VelocitySpec {
    Fixed(Velocity),
    /// Per-axis magnitude drawn from `[min, max]`, sign drawn
    /// independently per axis.
    RandomRange { min: f64, max: f64 },
    /// No velocity component at all: the entity never moves on its own.
    #[default]
    Still,
}

/// How to pick a spawned entity's color.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub enum ColorSpec {
    Fixed(Color),
    #[default]
    Random,
}
