//! Daily planning engine.
//!
//! The [`Scheduler`] takes a snapshot of one owner's tasks and time budget
//! and builds a greedy daily plan: every required task, then optional tasks
//! by rank while they fit. It also summarises the plan and reports tasks
//! that share a start time.

mod config;
pub mod conflict;
mod error;
pub mod ordering;
mod scheduler;
mod summary;

pub use config::{ConfigError, PlannerConfig};
pub use conflict::{ConflictingTask, TimeConflict, detect_time_conflicts};
pub use error::{PlanningError, StaleSnapshot};
pub use ordering::{calculate_total_time, compare, prioritize, sort_by_time};
pub use scheduler::Scheduler;
pub use summary::PlanSummary;
