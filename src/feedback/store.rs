use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("Feedback message must not be empty")]
    EmptyMessage,
    #[error("Failed to access feedback storage: {0}")]
    Io(#[from] std::io::Error),
    #[error("Feedback storage is corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: u64,
    pub message: String,
    pub is_helpful: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFeedback {
    pub message: String,
    #[serde(default)]
    pub is_helpful: Option<bool>,
}

/// Feedback rows persisted as one pretty-printed JSON document. Ids are
/// sequential, 1-based; `is_helpful` defaults to true when omitted.
pub struct FeedbackStore {
    path: PathBuf,
    rows: Mutex<Vec<Feedback>>,
}

impl FeedbackStore {
    /// Opens the store, loading any rows already on disk. A missing file is
    /// an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, FeedbackError> {
        let path = path.into();
        let rows = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path,
            rows: Mutex::new(rows),
        })
    }

    pub fn create(&self, new: NewFeedback) -> Result<Feedback, FeedbackError> {
        if new.message.trim().is_empty() {
            return Err(FeedbackError::EmptyMessage);
        }

        let mut rows = self.rows.lock().expect("feedback rows lock");
        let row = Feedback {
            id: rows.last().map(|r| r.id).unwrap_or(0) + 1,
            message: new.message,
            is_helpful: new.is_helpful.unwrap_or(true),
            created_at: Utc::now(),
        };
        rows.push(row.clone());
        self.persist(&rows)?;
        Ok(row)
    }

    pub fn all(&self) -> Vec<Feedback> {
        self.rows.lock().expect("feedback rows lock").clone()
    }

    fn persist(&self, rows: &[Feedback]) -> Result<(), FeedbackError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(rows)?)?;
        Ok(())
    }
}
