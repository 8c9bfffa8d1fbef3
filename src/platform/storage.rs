//! High score persistence
//!
//! The simulation only tracks the best score for the running process. This
//! keeps it across runs as a small JSON file.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Persisted best score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub high_score: u64,
}

impl HighScoreRecord {
    /// Load from `path`. A missing file is a fresh record.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let record: Self = serde_json::from_str(&json)?;
                log::info!("Loaded high score {}", record.high_score);
                Ok(record)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No high score found, starting fresh");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("High score saved ({})", self.high_score);
        Ok(())
    }

    /// Raise the record if `score` beats it. Returns whether it changed.
    pub fn offer(&mut self, score: u64) -> bool {
        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }
}
