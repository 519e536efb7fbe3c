//! Household care tracking for pawplan.
//!
//! Owners, their pets and the pets' care tasks, with the task recurrence
//! state machine and an application service that plans days for stored
//! households. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
