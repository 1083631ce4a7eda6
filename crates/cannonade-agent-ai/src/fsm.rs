//! Autonomous-cannon behavior state machine.
//!
//! Pure functions that compute mode transitions, movement steps, and
//! fire decisions for enemy cannons based on their distance to the
//! player. No ECS dependency — operates on plain data.

use cannonade_core::constants::SIEGE_STANDOFF;
use cannonade_core::enums::AgentMode;
use cannonade_core::types::Position;

use crate::schedule;

/// Input to the agent FSM for a single cannon.
pub struct AgentContext {
    pub mode: AgentMode,
    pub position: Position,
    pub size: f64,
    pub player_position: Position,
    pub player_size: f64,
    /// Tick at which the next siege shot is due, `None` when the
    /// schedule is not running.
    pub next_fire_tick: Option<u64>,
    /// Ticks between siege shots.
    pub fire_interval_ticks: u64,
    pub current_tick: u64,
}

/// Output from the agent FSM.
pub struct AgentUpdate {
    pub mode: AgentMode,
    /// Per-axis step multipliers (-1, 0, or 1). Movement is
    /// axis-independent, never diagonally normalized.
    pub step: (f64, f64),
    /// Whether to fire a siege shot this tick.
    pub fire: bool,
    /// Replacement fire schedule. `None` cancels it.
    pub next_fire_tick: Option<u64>,
    pub mode_changed: bool,
}

/// The standoff distance below which the cannon freezes and besieges.
pub fn standoff_distance(own_size: f64, player_size: f64) -> f64 {
    own_size + player_size + SIEGE_STANDOFF
}

/// Evaluate the FSM for one cannon.
///
/// Siege requires the distance to be strictly inside the standoff; a
/// cannon sitting exactly on the boundary keeps pursuing.
pub fn evaluate(ctx: &AgentContext) -> AgentUpdate {
    let distance = ctx.position.distance_to(&ctx.player_position);

    if distance < standoff_distance(ctx.size, ctx.player_size) {
        evaluate_siege(ctx)
    } else {
        evaluate_pursuit(ctx)
    }
}

/// Siege: hold position, run the repeating fire schedule.
fn evaluate_siege(ctx: &AgentContext) -> AgentUpdate {
    let entering = ctx.mode != AgentMode::Siege;

    // On entry (or with a cancelled schedule) arm the first shot one
    // full delay out; otherwise fire when due and reschedule.
    let (fire, next_fire_tick) = match ctx.next_fire_tick {
        Some(due_tick) if !entering => {
            if schedule::due(due_tick, ctx.current_tick) {
                (true, Some(ctx.current_tick + ctx.fire_interval_ticks))
            } else {
                (false, Some(due_tick))
            }
        }
        _ => (false, Some(ctx.current_tick + ctx.fire_interval_ticks)),
    };

    AgentUpdate {
        mode: AgentMode::Siege,
        step: (0.0, 0.0),
        fire,
        next_fire_tick,
        mode_changed: entering,
    }
}

/// Pursuit: one step toward the player on each axis, fire schedule
/// cancelled. The sentinel is observed before any shot, so a schedule
/// cancelled here can never fire late.
fn evaluate_pursuit(ctx: &AgentContext) -> AgentUpdate {
    AgentUpdate {
        mode: AgentMode::Pursue,
        step: (
            axis_step(ctx.player_position.x - ctx.position.x),
            axis_step(ctx.player_position.y - ctx.position.y),
        ),
        fire: false,
        next_fire_tick: None,
        mode_changed: ctx.mode != AgentMode::Pursue,
    }
}

/// Step multiplier toward the player along one axis.
fn axis_step(delta: f64) -> f64 {
    if delta > 0.0 {
        1.0
    } else if delta < 0.0 {
        -1.0
    } else {
        0.0
    }
}
