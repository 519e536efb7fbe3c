//! Plan totals handed to presentation layers.

use serde::{Deserialize, Serialize};

/// Totals and task names for the current daily plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Minutes allocated by the plan.
    pub total_minutes: u64,
    /// Number of planned tasks.
    pub task_count: usize,
    /// Names of planned tasks, in plan order.
    pub included: Vec<String>,
    /// Names of known tasks left out of the plan, in snapshot order.
    pub excluded: Vec<String>,
}
