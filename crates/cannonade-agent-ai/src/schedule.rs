//! Cooperative timing for autonomous behavior.
//!
//! The source material ran per-agent OS timer threads; here every
//! repeating action is a "next due" tick checked once per simulation
//! tick. Cancellation stores a sentinel observed before any action, so
//! a cancelled schedule never fires after being told to stop.

use cannonade_core::constants::TICK_RATE;

/// Convert a delay in seconds to whole ticks, never less than one.
pub fn ticks_from_secs(secs: f64) -> u64 {
    (secs * TICK_RATE as f64).round().max(1.0) as u64
}

/// Whether a scheduled action is due at `current_tick`.
pub fn due(next_due_tick: u64, current_tick: u64) -> bool {
    current_tick >= next_due_tick
}

/// One cycle of staggered drop opportunities.
///
/// Each participant gets a due tick offset by its slot index, so the
/// opportunities of one cycle never land on the same tick. The caller
/// shuffles the participant order before rebuilding each cycle and
/// re-checks that a participant still exists before acting on its slot
/// (the cooperative analogue of a cancelled timer).
#[derive(Debug, Clone)]
pub struct DropCycle<T> {
    slots: Vec<(T, u64)>,
}

impl<T> Default for DropCycle<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T: Copy> DropCycle<T> {
    /// Build a cycle over `participants` (already shuffled), the first
    /// slot due `stagger_ticks` after `start_tick`.
    pub fn rebuild(&mut self, participants: &[T], start_tick: u64, stagger_ticks: u64) {
        self.slots.clear();
        for (index, &participant) in participants.iter().enumerate() {
            let due_tick = start_tick + stagger_ticks * (index as u64 + 1);
            self.slots.push((participant, due_tick));
        }
    }

    /// Remove and return every participant whose slot is due.
    pub fn take_due(&mut self, current_tick: u64) -> Vec<T> {
        let mut ready = Vec::new();
        self.slots.retain(|&(participant, due_tick)| {
            if due(due_tick, current_tick) {
                ready.push(participant);
                false
            } else {
                true
            }
        });
        ready
    }

    /// Whether every slot of the current cycle has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.slots.is_empty()
    }
}
