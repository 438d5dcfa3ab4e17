// In-memory task store

use crate::error::ValidationError;
use crate::models::{SortDirection, Task, TaskId, TaskInput};
use std::cmp::Reverse;
use tracing::{debug, warn};

/// What an `upsert` did to the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// A new task was appended
    Created(TaskId),
    /// The task was replaced in place
    Updated(TaskId),
    /// The edit target is no longer in the collection; nothing changed
    Missing(TaskId),
}

impl Upsert {
    pub fn id(&self) -> TaskId {
        match *self {
            Upsert::Created(id) | Upsert::Updated(id) | Upsert::Missing(id) => id,
        }
    }
}

/// Ordered collection of tasks, insertion order unless sorted
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Create a task, or replace the one being edited.
    ///
    /// With `editing` set, the task keeps its id and position. An `editing` id
    /// that is not in the collection is a no-op reported as `Upsert::Missing`;
    /// it never creates a second task.
    pub fn upsert(&mut self, input: TaskInput, editing: Option<TaskId>) -> Result<Upsert, ValidationError> {
        if input.name.trim().is_empty() {
            debug!(?editing, "upsert: rejected empty name");
            return Err(ValidationError::EmptyName);
        }

        match editing {
            None => {
                let id = TaskId::generate();
                self.tasks.push(Task::from_input(id, input));
                debug!(%id, len = self.tasks.len(), "upsert: created");
                Ok(Upsert::Created(id))
            }
            Some(id) => match self.position(id) {
                Some(idx) => {
                    self.tasks[idx] = Task::from_input(id, input);
                    debug!(%id, idx, "upsert: updated");
                    Ok(Upsert::Updated(id))
                }
                None => {
                    warn!(%id, "upsert: edit target not found, ignoring");
                    Ok(Upsert::Missing(id))
                }
            },
        }
    }

    /// Remove the task with `id`, preserving the order of the rest.
    /// Unknown ids are ignored.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let removed = self.position(id).map(|idx| self.tasks.remove(idx));
        debug!(%id, removed = removed.is_some(), len = self.tasks.len(), "remove");
        removed
    }

    /// Stable sort by priority rank in `direction`.
    ///
    /// Returns the direction for the next sort, which is always the opposite
    /// of `direction`, whatever the collection holds.
    pub fn sort_by_priority(&mut self, direction: SortDirection) -> SortDirection {
        match direction {
            SortDirection::Descending => self.tasks.sort_by_key(|t| Reverse(t.priority.rank())),
            SortDirection::Ascending => self.tasks.sort_by_key(|t| t.priority.rank()),
        }
        debug!(?direction, len = self.tasks.len(), "sort_by_priority");
        direction.toggled()
    }
}
