//! File-backed persistence for session state.
//!
//! One storage root, one pretty-printed JSON file per key. Reads are
//! forgiving: a missing or undecodable entry is reported as absent, so
//! a damaged mirror never takes a session down with it.

use std::fs::{self, File};
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Directory-backed key/value store for JSON values.
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Opens a storage root, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Storage { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reads the value stored under `key`, if any.
    ///
    /// An entry that cannot be opened or decoded counts as absent; the
    /// failure is logged and the file left in place.
    pub fn get(&self, key: &str) -> Option<Value> {
        let path = self.file_for(key);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!("failed to open {}: {}", path.display(), err);
                return None;
            }
        };
        match serde_json::from_reader(BufReader::new(file)) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!("failed to decode {}: {}", path.display(), err);
                None
            }
        }
    }

    /// Stores `value` under `key`, replacing any previous entry.
    pub fn set(&self, key: &str, value: &Value) -> Result<(), StorageError> {
        let file = File::create(self.file_for(key))?;
        serde_json::to_writer_pretty(file, value)?;
        Ok(())
    }

    /// Removes the entry under `key`. Removing an absent key succeeds.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.file_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    // Keys may carry characters a filesystem rejects; anything outside
    // [A-Za-z0-9._-] maps to '_'.
    fn file_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{}.json", name))
    }
}
