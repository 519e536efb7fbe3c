//! Start-time collision detection.
//!
//! Tasks collide only when their `HH:MM` labels are identical. Durations are
//! ignored: a 09:30 task lasting an hour and a 09:45 task are not reported.

use crate::care::domain::{PetId, Task, TaskId, TimeOfDay};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One task taking part in a time conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictingTask {
    /// Task identifier.
    pub task_id: TaskId,
    /// Task name.
    pub task_name: String,
    /// Name of the owning pet, if the task is attached to a known pet.
    pub pet_name: Option<String>,
}

/// Two or more tasks sharing the same start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeConflict {
    /// The shared start time.
    pub time: TimeOfDay,
    /// Colliding tasks in input order.
    pub tasks: Vec<ConflictingTask>,
}

impl fmt::Display for TimeConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "time conflict at {}: ", self.time)?;
        for (index, task) in self.tasks.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&task.task_name)?;
            if let Some(pet_name) = &task.pet_name {
                write!(f, " ({pet_name})")?;
            }
        }
        Ok(())
    }
}

/// Groups tasks by exact start time and reports every slot holding more than
/// one task.
///
/// Untimed tasks are ignored. Conflicts are returned in the order their time
/// slot first appears in `tasks`. `pet_name` resolves the owning pet of each
/// task for the report.
pub fn detect_time_conflicts<'a, F>(
    tasks: impl IntoIterator<Item = &'a Task>,
    pet_name: F,
) -> Vec<TimeConflict>
where
    F: Fn(PetId) -> Option<String>,
{
    let mut slots: Vec<(TimeOfDay, Vec<&Task>)> = Vec::new();
    let mut slot_index: HashMap<TimeOfDay, usize> = HashMap::new();

    for task in tasks {
        let Some(time) = task.time() else {
            continue;
        };
        match slot_index.get(&time).and_then(|index| slots.get_mut(*index)) {
            Some((_, members)) => members.push(task),
            None => {
                slot_index.insert(time, slots.len());
                slots.push((time, vec![task]));
            }
        }
    }

    slots
        .into_iter()
        .filter(|(_, members)| members.len() > 1)
        .map(|(time, members)| TimeConflict {
            time,
            tasks: members
                .into_iter()
                .map(|task| ConflictingTask {
                    task_id: task.id(),
                    task_name: task.name().to_owned(),
                    pet_name: task.pet_id().and_then(&pet_name),
                })
                .collect(),
        })
        .collect()
}
