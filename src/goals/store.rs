//! Goal persistence backends

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use thiserror::Error;

use super::Goal;

/// Failure while loading or saving goals
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("goal storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("goal data could not be serialized: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Abstraction over persistence backends for the goal list.
///
/// Presentation code only ever talks to this trait; the medium behind it
/// (a JSON file, memory for tests) is swappable without touching callers.
pub trait GoalStore {
    fn load(&self) -> Result<Vec<Goal>, StoreError>;
    fn save(&self, goals: &[Goal]) -> Result<(), StoreError>;
}

/// Single-file JSON persistence for the goal list
#[derive(Debug, Clone)]
pub struct JsonGoalStore {
    path: PathBuf,
}

impl JsonGoalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the conventional location under the platform data dir
    pub fn open_default() -> Self {
        Self::new(Self::default_path())
    }

    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("budgetqueen")
            .join("goals.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GoalStore for JsonGoalStore {
    /// Load the goal list. A missing file is an empty list; a file that no
    /// longer parses is logged and treated as empty so the caller can start
    /// fresh rather than being locked out of its goals.
    fn load(&self) -> Result<Vec<Goal>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&data) {
            Ok(goals) => Ok(goals),
            Err(err) => {
                log::warn!(
                    "discarding unreadable goal file {}: {}",
                    self.path.display(),
                    err
                );
                Ok(Vec::new())
            }
        }
    }

    /// Write the full list atomically: serialize to a sibling tmp file,
    /// then rename over the target.
    fn save(&self, goals: &[Goal]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(goals)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory store for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryGoalStore {
    goals: Arc<Mutex<Vec<Goal>>>,
}

impl GoalStore for MemoryGoalStore {
    fn load(&self) -> Result<Vec<Goal>, StoreError> {
        Ok(self.goals.lock().expect("store lock poisoned").clone())
    }

    fn save(&self, goals: &[Goal]) -> Result<(), StoreError> {
        *self.goals.lock().expect("store lock poisoned") = goals.to_vec();
        Ok(())
    }
}
