// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Local backend: four JSON slot files in the platform data directory.
//! Record operations are read-modify-write of the owning slot.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;
use crate::models::{Expense, Tracker, TrackerTemplate, UserPreferences};
use crate::storage::{PersistedState, StorageProvider};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Trackly", "trackly"));

const TRACKERS_SLOT: &str = "trackers.json";
const EXPENSES_SLOT: &str = "expenses.json";
const TEMPLATES_SLOT: &str = "templates.json";
const PREFERENCES_SLOT: &str = "preferences.json";

pub fn data_dir() -> Result<PathBuf, StorageError> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or_else(|| {
        StorageError::Backend("Could not determine platform-specific data dir".to_string())
    })?;
    Ok(proj.data_dir().to_path_buf())
}

pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Open the store at the platform data dir, creating it if needed.
    pub fn open_default() -> Result<LocalStore, StorageError> {
        LocalStore::open(data_dir()?)
    }

    /// Open the store at an explicit directory, creating it if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<LocalStore, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(map_io)?;
        Ok(LocalStore { dir })
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(slot)
    }

    fn read_slot<T: DeserializeOwned + Default>(&self, slot: &str) -> Result<T, StorageError> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(T::default());
        }
        let data = fs::read(&path).map_err(map_io)?;
        Ok(serde_json::from_slice(&data)?)
    }

    fn write_slot<T: Serialize>(&self, slot: &str, value: &T) -> Result<(), StorageError> {
        let path = self.slot_path(slot);
        let data = serde_json::to_vec_pretty(value)?;
        fs::write(&path, data).map_err(map_io)
    }

    fn read_trackers(&self) -> Result<Vec<Tracker>, StorageError> {
        self.read_slot(TRACKERS_SLOT)
    }

    fn read_expenses(&self) -> Result<Vec<Expense>, StorageError> {
        self.read_slot(EXPENSES_SLOT)
    }
}

/// A full filesystem is this backend's quota-exceeded condition and gets
/// its own error kind.
fn map_io(err: std::io::Error) -> StorageError {
    match err.kind() {
        std::io::ErrorKind::StorageFull | std::io::ErrorKind::QuotaExceeded => {
            StorageError::QuotaExceeded
        }
        _ => StorageError::Io(err),
    }
}

impl StorageProvider for LocalStore {
    fn load_all(&self) -> Result<PersistedState, StorageError> {
        Ok(PersistedState {
            trackers: self.read_trackers()?,
            expenses: self.read_expenses()?,
            templates: self.read_slot(TEMPLATES_SLOT)?,
            preferences: self.read_slot::<Option<UserPreferences>>(PREFERENCES_SLOT)?,
        })
    }

    fn insert_tracker(&self, tracker: &Tracker) -> Result<Tracker, StorageError> {
        let mut trackers = self.read_trackers()?;
        trackers.push(tracker.clone());
        self.write_slot(TRACKERS_SLOT, &trackers)?;
        Ok(tracker.clone())
    }

    fn update_tracker(&self, tracker: &Tracker) -> Result<(), StorageError> {
        let mut trackers = self.read_trackers()?;
        if let Some(existing) = trackers.iter_mut().find(|t| t.id == tracker.id) {
            *existing = tracker.clone();
        }
        self.write_slot(TRACKERS_SLOT, &trackers)
    }

    fn delete_tracker(&self, id: &str) -> Result<(), StorageError> {
        let mut trackers = self.read_trackers()?;
        trackers.retain(|t| t.id != id);
        self.write_slot(TRACKERS_SLOT, &trackers)
    }

    fn insert_expense(&self, expense: &Expense) -> Result<Expense, StorageError> {
        let mut expenses = self.read_expenses()?;
        expenses.push(expense.clone());
        self.write_slot(EXPENSES_SLOT, &expenses)?;
        Ok(expense.clone())
    }

    fn update_expense(&self, expense: &Expense) -> Result<(), StorageError> {
        let mut expenses = self.read_expenses()?;
        if let Some(existing) = expenses.iter_mut().find(|e| e.id == expense.id) {
            *existing = expense.clone();
        }
        self.write_slot(EXPENSES_SLOT, &expenses)
    }

    fn delete_expense(&self, id: &str) -> Result<(), StorageError> {
        let mut expenses = self.read_expenses()?;
        expenses.retain(|e| e.id != id);
        self.write_slot(EXPENSES_SLOT, &expenses)
    }

    fn delete_expenses_for_tracker(&self, tracker_id: &str) -> Result<(), StorageError> {
        let mut expenses = self.read_expenses()?;
        expenses.retain(|e| e.tracker_id != tracker_id);
        self.write_slot(EXPENSES_SLOT, &expenses)
    }

    fn save_templates(&self, templates: &[TrackerTemplate]) -> Result<(), StorageError> {
        self.write_slot(TEMPLATES_SLOT, &templates)
    }

    fn save_preferences(&self, preferences: &UserPreferences) -> Result<(), StorageError> {
        self.write_slot(PREFERENCES_SLOT, preferences)
    }

    fn describe(&self) -> String {
        format!("local data at {}", self.dir.display())
    }
}
