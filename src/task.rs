use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Pending,
    Complete,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pending => write!(f, "Pending"),
            Status::Complete => write!(f, "Complete"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Task {
    pub title: String,
    pub description: String,
    pub creation_date: String, // "YYYY-MM-DD"
    pub due_date: String,      // "YYYY-MM-DD"
    #[serde(default)]
    pub status: Status,
}

impl Task {
    pub fn new(title: String, description: String, creation_date: String, due_date: String) -> Self {
        Self {
            title,
            description,
            creation_date,
            due_date,
            status: Status::Pending,
        }
    }

    /// One-way transition; completing a completed task is a no-op.
    pub fn complete(&mut self) {
        self.status = Status::Complete;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Creation date: {}", self.creation_date)?;
        writeln!(f, "Due date: {}", self.due_date)?;
        writeln!(f, "Status: {}", self.status)
    }
}
