use crate::task::Task;
use chrono::NaiveDate;
use std::path::PathBuf;
use std::{fs, io};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// True iff `s` is a real calendar date in `YYYY-MM-DD` form.
pub fn is_valid_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s, DATE_FORMAT).is_ok()
}

/// True iff both dates parse and `due` is on or after `creation`.
/// Fails closed when either date is malformed.
pub fn is_valid_due_date(creation: &str, due: &str) -> bool {
    match (
        NaiveDate::parse_from_str(creation, DATE_FORMAT),
        NaiveDate::parse_from_str(due, DATE_FORMAT),
    ) {
        (Ok(creation), Ok(due)) => due >= creation,
        _ => false,
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Whole-file JSON persistence for the task list. The path is explicit so
/// tests can point at a temporary file.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Rewrites the file with the full task list, pretty-printed.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(tasks).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// A missing file is an empty task list, not an error.
    pub fn load(&self) -> Result<Vec<Task>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}
