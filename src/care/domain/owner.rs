//! Owner aggregate root: the household whose tasks get planned.

use super::{CareDomainError, Completion, OwnerId, Pet, PetId, Task, TaskId};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};

/// Opaque owner preferences. Scheduling never reads them.
pub type Preferences = BTreeMap<String, Value>;

/// A pet owner with a daily time budget and an ordered set of pets.
///
/// Each task identifier appears under at most one pet. Deserialization
/// validates the name, re-points every pet at this owner and rejects
/// duplicate pet or task identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OwnerRecord")]
pub struct Owner {
    id: OwnerId,
    name: String,
    available_minutes: u32,
    #[serde(default)]
    preferences: Preferences,
    #[serde(default)]
    pets: Vec<Pet>,
}

#[derive(Deserialize)]
struct OwnerRecord {
    id: OwnerId,
    name: String,
    available_minutes: u32,
    #[serde(default)]
    preferences: Preferences,
    #[serde(default)]
    pets: Vec<Pet>,
}

impl TryFrom<OwnerRecord> for Owner {
    type Error = CareDomainError;

    fn try_from(record: OwnerRecord) -> Result<Self, Self::Error> {
        let mut owner = Self::new(record.name, record.available_minutes)?;
        owner.id = record.id;
        owner.preferences = record.preferences;
        let mut seen_tasks = HashSet::new();
        for mut pet in record.pets {
            if owner.pet(pet.id()).is_some() {
                return Err(CareDomainError::DuplicatePet(pet.id()));
            }
            if let Some(task) = pet.tasks().iter().find(|task| !seen_tasks.insert(task.id())) {
                return Err(CareDomainError::DuplicateTask(task.id()));
            }
            pet.attach_to(owner.id);
            owner.pets.push(pet);
        }
        Ok(owner)
    }
}

impl Owner {
    /// Creates an owner with no pets.
    ///
    /// # Errors
    ///
    /// Returns [`CareDomainError::EmptyOwnerName`] if the name is blank.
    pub fn new(name: impl Into<String>, available_minutes: u32) -> Result<Self, CareDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CareDomainError::EmptyOwnerName);
        }
        Ok(Self {
            id: OwnerId::new(),
            name: trimmed.to_owned(),
            available_minutes,
            preferences: Preferences::new(),
            pets: Vec::new(),
        })
    }

    /// Returns the owner identifier.
    #[must_use]
    pub const fn id(&self) -> OwnerId {
        self.id
    }

    /// Returns the owner name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the daily time budget in minutes.
    #[must_use]
    pub const fn get_available_time(&self) -> u32 {
        self.available_minutes
    }

    /// Replaces the daily time budget.
    pub const fn set_available_minutes(&mut self, minutes: u32) {
        self.available_minutes = minutes;
    }

    /// Returns the stored preferences.
    #[must_use]
    pub const fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Merges preferences, overwriting existing keys.
    pub fn update_preferences(&mut self, preferences: impl IntoIterator<Item = (String, Value)>) {
        self.preferences.extend(preferences);
    }

    /// Returns the pets in insertion order.
    #[must_use]
    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    /// Finds a pet by identifier.
    #[must_use]
    pub fn pet(&self, pet_id: PetId) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id() == pet_id)
    }

    /// Finds a pet by identifier for mutation.
    pub fn pet_mut(&mut self, pet_id: PetId) -> Option<&mut Pet> {
        self.pets.iter_mut().find(|pet| pet.id() == pet_id)
    }

    /// Adds a pet to the household.
    ///
    /// Returns `false` without changes when the pet is already present,
    /// still belongs to another owner, or holds a task that another pet in
    /// this household already holds.
    pub fn add_pet(&mut self, mut pet: Pet) -> bool {
        if self.pet(pet.id()).is_some() {
            return false;
        }
        if pet.owner_id().is_some_and(|holder| holder != self.id) {
            return false;
        }
        if pet
            .tasks()
            .iter()
            .any(|task| self.find_task(task.id()).is_some())
        {
            return false;
        }
        pet.attach_to(self.id);
        self.pets.push(pet);
        true
    }

    /// Removes and returns a pet, clearing its owner reference.
    pub fn remove_pet(&mut self, pet_id: PetId) -> Option<Pet> {
        let position = self.pets.iter().position(|pet| pet.id() == pet_id)?;
        let mut pet = self.pets.remove(position);
        pet.detach();
        Some(pet)
    }

    /// Adds a task to one of the owner's pets.
    ///
    /// Returns `Ok(false)` when the pet already holds the task.
    ///
    /// # Errors
    ///
    /// Returns [`CareDomainError::PetNotFound`] when the pet is not part of
    /// this household, or [`CareDomainError::TaskHeldByAnotherPet`] when
    /// another pet holds the task (in this household or according to the
    /// task's own pet reference).
    pub fn add_task_to_pet(&mut self, pet_id: PetId, task: Task) -> Result<bool, CareDomainError> {
        if self.pet(pet_id).is_none() {
            return Err(CareDomainError::PetNotFound(pet_id));
        }
        let task_id = task.id();
        let holder = self
            .pets
            .iter()
            .find(|pet| pet.task(task_id).is_some())
            .map(Pet::id)
            .or_else(|| task.pet_id());
        match holder {
            Some(other) if other != pet_id => Err(CareDomainError::TaskHeldByAnotherPet {
                task_id,
                pet_id: other,
            }),
            _ => self
                .pet_mut(pet_id)
                .map(|pet| pet.add_task(task))
                .ok_or(CareDomainError::PetNotFound(pet_id)),
        }
    }

    /// Returns every task across all pets, pet by pet in insertion order.
    #[must_use]
    pub fn get_all_tasks(&self) -> Vec<&Task> {
        self.pets.iter().flat_map(Pet::tasks).collect()
    }

    /// Finds a task anywhere in the household.
    #[must_use]
    pub fn find_task(&self, task_id: TaskId) -> Option<&Task> {
        self.pets.iter().find_map(|pet| pet.task(task_id))
    }

    /// Completes a task, attaching any successor occurrence to the same pet.
    ///
    /// # Errors
    ///
    /// Returns [`CareDomainError::TaskNotFound`] when no pet holds the task.
    pub fn complete_task(
        &mut self,
        task_id: TaskId,
        clock: &impl Clock,
    ) -> Result<Completion, CareDomainError> {
        self.pet_holding_mut(task_id)?.complete_task(task_id, clock)
    }

    /// Updates a task's priority.
    ///
    /// # Errors
    ///
    /// Returns [`CareDomainError::TaskNotFound`] when no pet holds the task,
    /// or [`CareDomainError::InvalidPriority`] for an out-of-range value.
    pub fn set_task_priority(&mut self, task_id: TaskId, value: u8) -> Result<(), CareDomainError> {
        self.pet_holding_mut(task_id)?
            .task_mut(task_id)
            .ok_or(CareDomainError::TaskNotFound(task_id))?
            .set_priority(value)
    }

    fn pet_holding_mut(&mut self, task_id: TaskId) -> Result<&mut Pet, CareDomainError> {
        self.pets
            .iter_mut()
            .find(|pet| pet.task(task_id).is_some())
            .ok_or(CareDomainError::TaskNotFound(task_id))
    }
}
