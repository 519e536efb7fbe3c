//! Step definitions for daily care planning scenarios.

pub mod when;
pub mod world;
