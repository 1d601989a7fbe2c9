use crate::store::{is_valid_date, is_valid_due_date, Store};
use crate::task::Task;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddTaskError {
    #[error("Invalid date. Make sure it is in YYYY-MM-DD format.")]
    InvalidDate,
    #[error("Due date cannot be earlier than the creation date.")]
    DueBeforeCreation,
}

/// Owns the in-memory task list for the session. Every mutating operation
/// rewrites the whole persisted file (write-through).
#[derive(Debug)]
pub struct TaskManager {
    tasks: Vec<Task>,
    store: Store,
}

impl TaskManager {
    /// Loads the task list from the store. A load failure is reported and
    /// the session starts empty; it never aborts the program.
    pub fn new(store: Store) -> Self {
        let tasks = match store.load() {
            Ok(tasks) => tasks,
            Err(err) => {
                eprintln!("Failed to load tasks: {err}");
                Vec::new()
            }
        };
        Self { tasks, store }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Validates both dates, then their ordering; on failure nothing is
    /// added and nothing is written.
    pub fn add_task(
        &mut self,
        title: String,
        description: String,
        creation_date: String,
        due_date: String,
    ) -> Result<(), AddTaskError> {
        if !is_valid_date(&creation_date) || !is_valid_date(&due_date) {
            return Err(AddTaskError::InvalidDate);
        }
        if !is_valid_due_date(&creation_date, &due_date) {
            return Err(AddTaskError::DueBeforeCreation);
        }
        self.tasks
            .push(Task::new(title, description, creation_date, due_date));
        self.persist();
        Ok(())
    }

    /// Rendering of every task in insertion order, or a placeholder when
    /// the list is empty.
    pub fn listing(&self) -> String {
        if self.tasks.is_empty() {
            return "No tasks found!".to_string();
        }
        self.tasks
            .iter()
            .map(Task::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Removes the first task whose title matches exactly. Returns false
    /// (and leaves the file untouched) when no task matches.
    pub fn remove_task(&mut self, title: &str) -> bool {
        match self.tasks.iter().position(|t| t.title == title) {
            Some(index) => {
                self.tasks.remove(index);
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Marks the first task whose title matches exactly as complete.
    /// Returns false (and leaves the file untouched) when no task matches.
    pub fn complete_task(&mut self, title: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.title == title) {
            Some(task) => {
                task.complete();
                self.persist();
                true
            }
            None => false,
        }
    }

    // A failed save is reported and the session keeps its in-memory state.
    fn persist(&self) {
        if let Err(err) = self.store.save(&self.tasks) {
            eprintln!("Failed to save tasks: {err}");
        }
    }
}
