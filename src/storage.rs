// ABOUTME: Persistence seams: the Store trait for state snapshots and the training log repository
// ABOUTME: JSON-file implementations plus an in-memory store for tests and ephemeral runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 meetprep contributors

//! # Storage
//!
//! All I/O in the crate lives here. `Store` persists the full
//! [`PowerliftingState`] snapshot; `TrainingLogRepository` serves date-window
//! views of the append-only training log. The analysis modules never touch
//! either; the state container and CLI own them.
//!
//! A missing file is an empty store (`Ok(None)` / empty history), not an
//! error. A file that exists but cannot be read or parsed is an error; the
//! caller decides whether to fall back.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{Duration, Utc};
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::{PowerliftingState, TrainingEntry};

/// Persistence seam for the state snapshot
pub trait Store {
    /// Load the persisted snapshot, `None` when nothing was saved yet
    ///
    /// # Errors
    ///
    /// Returns an error when a persisted snapshot exists but cannot be read
    /// or parsed.
    fn load(&self) -> AppResult<Option<PowerliftingState>>;

    /// Persist the snapshot, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error when the snapshot cannot be serialized or written.
    fn save(&self, state: &PowerliftingState) -> AppResult<()>;
}

/// Date-window access to the append-only training log
pub trait TrainingLogRepository {
    /// Entries from the last `days` days, oldest first as stored
    ///
    /// `force_refresh` asks caching implementations to bypass their cache;
    /// implementations that always read fresh may ignore it.
    ///
    /// # Errors
    ///
    /// Returns an error when the log exists but cannot be read or parsed.
    fn history(&self, days: u32, force_refresh: bool) -> AppResult<Vec<TrainingEntry>>;

    /// Append one entry to the log
    ///
    /// # Errors
    ///
    /// Returns an error when the log cannot be read, updated or written.
    fn append(&self, entry: &TrainingEntry) -> AppResult<()>;
}

/// JSON-file store holding one pretty-printed state snapshot
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> AppResult<Option<PowerliftingState>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no state file yet");
                return Ok(None);
            }
            Err(err) => return Err(AppError::from(err)),
        };
        let state = serde_json::from_str(&raw)?;
        debug!(path = %self.path.display(), "state loaded");
        Ok(Some(state))
    }

    fn save(&self, state: &PowerliftingState) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, raw)?;
        debug!(path = %self.path.display(), "state saved");
        Ok(())
    }
}

/// In-memory store for tests and ephemeral runs
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<Option<PowerliftingState>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn load(&self) -> AppResult<Option<PowerliftingState>> {
        let guard = self
            .state
            .lock()
            .map_err(|_| AppError::internal("memory store lock poisoned"))?;
        Ok(guard.clone())
    }

    fn save(&self, state: &PowerliftingState) -> AppResult<()> {
        let mut guard = self
            .state
            .lock()
            .map_err(|_| AppError::internal("memory store lock poisoned"))?;
        *guard = Some(state.clone());
        Ok(())
    }
}

/// JSON-file training log: a flat array of entries, appended in session order
pub struct JsonTrainingLog {
    path: PathBuf,
}

impl JsonTrainingLog {
    /// Create a log backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the full log, empty when the file does not exist
    fn read_all(&self) -> AppResult<Vec<TrainingEntry>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(AppError::from(err)),
        };
        Ok(serde_json::from_str(&raw)?)
    }
}

impl TrainingLogRepository for JsonTrainingLog {
    /// Always reads fresh from disk; `force_refresh` is accepted for callers
    /// written against caching implementations.
    fn history(&self, days: u32, _force_refresh: bool) -> AppResult<Vec<TrainingEntry>> {
        let cutoff = Utc::now().date_naive() - Duration::days(i64::from(days));
        let entries = self.read_all()?;
        let total = entries.len();
        let window: Vec<TrainingEntry> = entries
            .into_iter()
            .filter(|entry| entry.training_date >= cutoff)
            .collect();
        debug!(
            total,
            in_window = window.len(),
            days,
            "training history read"
        );
        Ok(window)
    }

    fn append(&self, entry: &TrainingEntry) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut entries = self.read_all()?;
        entries.push(entry.clone());
        let raw = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, raw)?;
        debug!(path = %self.path.display(), count = entries.len(), "training entry appended");
        Ok(())
    }
}
