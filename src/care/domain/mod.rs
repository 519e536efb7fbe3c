//! Domain model for household care tracking.
//!
//! Owners hold pets, pets hold task occurrences. Back-references between the
//! levels are identifier handles, never shared pointers, so every aggregate
//! can be cloned into an independent snapshot.

mod error;
mod ids;
mod owner;
mod pet;
mod task;
mod time_of_day;

pub use error::{CareDomainError, ParseFrequencyError};
pub use ids::{OwnerId, PetId, Priority, TaskDuration, TaskId};
pub use owner::{Owner, Preferences};
pub use pet::{CareRequirements, Pet};
pub use task::{Completion, Frequency, RankKey, Task, TaskState};
pub use time_of_day::TimeOfDay;
