//! Repository port for household storage and lookup.

use crate::care::domain::{Owner, OwnerId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for household repository operations.
pub type HouseholdRepositoryResult<T> = Result<T, HouseholdRepositoryError>;

/// Household storage contract.
///
/// Reads hand out owned copies, so callers always work on a snapshot that
/// concurrent writers cannot change underneath them.
pub trait HouseholdRepository: Send + Sync {
    /// Stores a new household.
    ///
    /// # Errors
    ///
    /// Returns [`HouseholdRepositoryError::DuplicateOwner`] when the owner
    /// identifier already exists.
    fn store(&self, owner: &Owner) -> HouseholdRepositoryResult<()>;

    /// Replaces an existing household with the given state.
    ///
    /// # Errors
    ///
    /// Returns [`HouseholdRepositoryError::NotFound`] when the owner does not
    /// exist.
    fn update(&self, owner: &Owner) -> HouseholdRepositoryResult<()>;

    /// Finds a household by owner identifier.
    ///
    /// Returns `None` when the owner does not exist.
    fn find_by_id(&self, id: OwnerId) -> HouseholdRepositoryResult<Option<Owner>>;
}

/// Errors returned by household repository implementations.
#[derive(Debug, Clone, Error)]
pub enum HouseholdRepositoryError {
    /// An owner with the same identifier already exists.
    #[error("duplicate owner identifier: {0}")]
    DuplicateOwner(OwnerId),

    /// The owner was not found.
    #[error("owner not found: {0}")]
    NotFound(OwnerId),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl HouseholdRepositoryError {
    /// Wraps a storage error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
