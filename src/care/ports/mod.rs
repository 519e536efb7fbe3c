//! Port contracts for household storage.
//!
//! Ports define infrastructure-agnostic interfaces used by care services.

pub mod repository;

pub use repository::{HouseholdRepository, HouseholdRepositoryError, HouseholdRepositoryResult};
