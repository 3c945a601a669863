use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::config::StorageConfig;
use crate::feedback::FeedbackRecord;

use super::error::StorageError;
use super::FeedbackStore;

/// File-based feedback storage.
///
/// All records live in one pretty-printed JSON array:
/// ```text
/// feedback_data/
///   feedback.json      # [{id, name, feedback, rating, timestamp}, ...]
/// ```
///
/// Appends hold a writer lock across the whole read-modify-write, and the
/// new array is written to a temporary file that is renamed over the old
/// one, so readers never observe a partial file.
pub struct FileFeedbackStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileFeedbackStore {
    /// Creates a store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Creates a store from storage configuration.
    pub fn with_config(config: &StorageConfig) -> Self {
        Self::new(config.feedback_path())
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensures the directory holding the feedback file exists.
    fn ensure_parent_dir(&self) -> Result<PathBuf, StorageError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| StorageError::io(&dir, e))?;
        }
        Ok(dir)
    }

    fn read_records(&self) -> Result<Vec<FeedbackRecord>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path).map_err(|e| StorageError::io(&self.path, e))?;
        if json.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<FeedbackRecord> = serde_json::from_str(&json)?;
        Ok(records)
    }

    fn write_records(&self, records: &[FeedbackRecord]) -> Result<(), StorageError> {
        let dir = self.ensure_parent_dir()?;
        let json = serde_json::to_string_pretty(records)?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| StorageError::io(&dir, e))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| StorageError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| StorageError::io(&self.path, e.error))?;

        Ok(())
    }
}

impl FeedbackStore for FileFeedbackStore {
    fn append(&self, record: &FeedbackRecord) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().map_err(|_| StorageError::Poisoned)?;

        let mut records = self.read_records()?;
        records.push(record.clone());
        self.write_records(&records)?;

        debug!(id = %record.id, total = records.len(), "feedback persisted");
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<FeedbackRecord>, StorageError> {
        self.read_records()
    }
}
