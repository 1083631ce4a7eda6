//! Running score.

use serde::{Deserialize, Serialize};

/// Monotonically incrementing hit/expenditure counters. The derived
/// score drives target-size scaling and the score panel.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub targets_destroyed: u32,
    /// Player shots only; siege fire does not count.
    pub projectiles_used: u32,
}

impl ScoreBoard {
    /// Targets destroyed minus projectiles expended. Can go negative.
    pub fn score(&self) -> i64 {
        i64::from(self.targets_destroyed) - i64::from(self.projectiles_used)
    }
}
