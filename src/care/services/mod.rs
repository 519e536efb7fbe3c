//! Application services for household care planning.

mod planning;

pub use planning::{CarePlanningError, CarePlanningResult, CarePlanningService, DailyPlan};
