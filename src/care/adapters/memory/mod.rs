//! In-memory adapters for care ports.

mod household;

pub use household::InMemoryHouseholdRepository;
