//! Pet aggregate holding an ordered, duplicate-free task list.

use super::{CareDomainError, Completion, OwnerId, PetId, Task, TaskId};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Snapshot of a pet's details and care load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareRequirements {
    /// Pet name.
    pub name: String,
    /// Pet species.
    pub species: String,
    /// Pet age in years.
    pub age: u32,
    /// Special care needs, in insertion order.
    pub special_needs: Vec<String>,
    /// Number of task occurrences tracked for the pet.
    pub task_count: usize,
}

/// A pet and the care tasks attached to it.
///
/// Deserialization runs the same validation as [`Pet::new`] and re-points
/// every task at this pet. Duplicate task identifiers are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PetRecord")]
pub struct Pet {
    id: PetId,
    name: String,
    species: String,
    age: u32,
    special_needs: Vec<String>,
    tasks: Vec<Task>,
    owner_id: Option<OwnerId>,
}

#[derive(Deserialize)]
struct PetRecord {
    id: PetId,
    name: String,
    species: String,
    age: u32,
    #[serde(default)]
    special_needs: Vec<String>,
    #[serde(default)]
    tasks: Vec<Task>,
    #[serde(default)]
    owner_id: Option<OwnerId>,
}

impl TryFrom<PetRecord> for Pet {
    type Error = CareDomainError;

    fn try_from(record: PetRecord) -> Result<Self, Self::Error> {
        let mut pet = Self::new(record.name, record.species, record.age)?;
        pet.id = record.id;
        pet.owner_id = record.owner_id;
        for need in record.special_needs {
            pet.add_special_need(need);
        }
        for mut task in record.tasks {
            let task_id = task.id();
            task.detach();
            if !pet.add_task(task) {
                return Err(CareDomainError::DuplicateTask(task_id));
            }
        }
        Ok(pet)
    }
}

impl Pet {
    /// Creates a pet with no tasks or special needs.
    ///
    /// # Errors
    ///
    /// Returns [`CareDomainError::EmptyPetName`] if the name is blank.
    pub fn new(
        name: impl Into<String>,
        species: impl Into<String>,
        age: u32,
    ) -> Result<Self, CareDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CareDomainError::EmptyPetName);
        }
        Ok(Self {
            id: PetId::new(),
            name: trimmed.to_owned(),
            species: species.into(),
            age,
            special_needs: Vec::new(),
            tasks: Vec::new(),
            owner_id: None,
        })
    }

    /// Adds special needs, skipping duplicates.
    #[must_use]
    pub fn with_special_needs(mut self, needs: impl IntoIterator<Item = String>) -> Self {
        for need in needs {
            self.add_special_need(need);
        }
        self
    }

    /// Returns the pet identifier.
    #[must_use]
    pub const fn id(&self) -> PetId {
        self.id
    }

    /// Returns the pet name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the species.
    #[must_use]
    pub fn species(&self) -> &str {
        &self.species
    }

    /// Returns the age in years.
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Returns the special care needs.
    #[must_use]
    pub fn special_needs(&self) -> &[String] {
        &self.special_needs
    }

    /// Returns the owning household, if any.
    #[must_use]
    pub const fn owner_id(&self) -> Option<OwnerId> {
        self.owner_id
    }

    /// Returns the tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Finds a task by identifier for mutation.
    pub fn task_mut(&mut self, task_id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == task_id)
    }

    /// Returns the number of completed occurrences.
    #[must_use]
    pub fn completed_task_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed()).count()
    }

    /// Records a special need unless it is already present.
    pub fn add_special_need(&mut self, need: impl Into<String>) {
        let value = need.into();
        if !self.special_needs.contains(&value) {
            self.special_needs.push(value);
        }
    }

    /// Attaches a task to this pet.
    ///
    /// Returns `false` without changes when a task with the same identifier
    /// is already attached, or when the task still belongs to another pet.
    /// Detach it with [`Pet::remove_task`] first to move it.
    pub fn add_task(&mut self, mut task: Task) -> bool {
        if self.task(task.id()).is_some() {
            return false;
        }
        if task.pet_id().is_some_and(|holder| holder != self.id) {
            return false;
        }
        task.attach_to(self.id);
        self.tasks.push(task);
        true
    }

    /// Detaches and returns a task, clearing its pet reference.
    pub fn remove_task(&mut self, task_id: TaskId) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.id() == task_id)?;
        let mut task = self.tasks.remove(position);
        task.detach();
        Some(task)
    }

    /// Completes one of this pet's tasks, attaching any successor occurrence
    /// to this pet. The completed occurrence stays in the task list.
    ///
    /// # Errors
    ///
    /// Returns [`CareDomainError::TaskNotFound`] when the task is not
    /// attached to this pet.
    pub fn complete_task(
        &mut self,
        task_id: TaskId,
        clock: &impl Clock,
    ) -> Result<Completion, CareDomainError> {
        let task = self
            .task_mut(task_id)
            .ok_or(CareDomainError::TaskNotFound(task_id))?;
        match task.complete(clock) {
            Completion::Rescheduled(mut successor) => {
                successor.attach_to(self.id);
                info!(
                    pet = %self.name,
                    task_id = %task_id,
                    successor_id = %successor.id(),
                    due_date = ?successor.due_date(),
                    "task completed and rescheduled"
                );
                self.add_task(successor.clone());
                Ok(Completion::Rescheduled(successor))
            }
            Completion::Completed => {
                info!(pet = %self.name, task_id = %task_id, "task completed");
                Ok(Completion::Completed)
            }
            Completion::AlreadyCompleted => Ok(Completion::AlreadyCompleted),
        }
    }

    /// Returns the pet's details and care load.
    #[must_use]
    pub fn get_care_requirements(&self) -> CareRequirements {
        CareRequirements {
            name: self.name.clone(),
            species: self.species.clone(),
            age: self.age,
            special_needs: self.special_needs.clone(),
            task_count: self.tasks.len(),
        }
    }

    pub(crate) const fn attach_to(&mut self, owner_id: OwnerId) {
        self.owner_id = Some(owner_id);
    }

    pub(crate) const fn detach(&mut self) {
        self.owner_id = None;
    }
}
