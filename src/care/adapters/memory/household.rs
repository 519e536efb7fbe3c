//! In-memory household repository.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::care::{
    domain::{Owner, OwnerId},
    ports::{HouseholdRepository, HouseholdRepositoryError, HouseholdRepositoryResult},
};

/// Thread-safe in-memory household repository.
///
/// Cloning the repository shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHouseholdRepository {
    state: Arc<RwLock<HashMap<OwnerId, Owner>>>,
}

impl InMemoryHouseholdRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error<T>(err: &PoisonError<T>) -> HouseholdRepositoryError {
    HouseholdRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

impl HouseholdRepository for InMemoryHouseholdRepository {
    fn store(&self, owner: &Owner) -> HouseholdRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        if state.contains_key(&owner.id()) {
            return Err(HouseholdRepositoryError::DuplicateOwner(owner.id()));
        }
        state.insert(owner.id(), owner.clone());
        Ok(())
    }

    fn update(&self, owner: &Owner) -> HouseholdRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        let slot = state
            .get_mut(&owner.id())
            .ok_or(HouseholdRepositoryError::NotFound(owner.id()))?;
        *slot = owner.clone();
        Ok(())
    }

    fn find_by_id(&self, id: OwnerId) -> HouseholdRepositoryResult<Option<Owner>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state.get(&id).cloned())
    }
}
