// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-memory backend for tests. The fail-writes switch simulates a
//! quota-exceeded persistence failure.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::StorageError;
use crate::models::{Expense, Tracker, TrackerTemplate, UserPreferences};
use crate::storage::{PersistedState, StorageProvider};

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<PersistedState>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    /// Start from pre-seeded contents.
    pub fn with_state(state: PersistedState) -> MemoryStore {
        MemoryStore {
            state: Mutex::new(state),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// When set, every write fails with `StorageError::QuotaExceeded`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(StorageError::QuotaExceeded)
        } else {
            Ok(())
        }
    }
}

impl StorageProvider for MemoryStore {
    fn load_all(&self) -> Result<PersistedState, StorageError> {
        Ok(self.state.lock().unwrap().clone())
    }

    fn insert_tracker(&self, tracker: &Tracker) -> Result<Tracker, StorageError> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        state.trackers.push(tracker.clone());
        Ok(tracker.clone())
    }

    fn update_tracker(&self, tracker: &Tracker) -> Result<(), StorageError> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        if let Some(existing) = state.trackers.iter_mut().find(|t| t.id == tracker.id) {
            *existing = tracker.clone();
        }
        Ok(())
    }

    fn delete_tracker(&self, id: &str) -> Result<(), StorageError> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        state.trackers.retain(|t| t.id != id);
        Ok(())
    }

    fn insert_expense(&self, expense: &Expense) -> Result<Expense, StorageError> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        state.expenses.push(expense.clone());
        Ok(expense.clone())
    }

    fn update_expense(&self, expense: &Expense) -> Result<(), StorageError> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        if let Some(existing) = state.expenses.iter_mut().find(|e| e.id == expense.id) {
            *existing = expense.clone();
        }
        Ok(())
    }

    fn delete_expense(&self, id: &str) -> Result<(), StorageError> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        state.expenses.retain(|e| e.id != id);
        Ok(())
    }

    fn delete_expenses_for_tracker(&self, tracker_id: &str) -> Result<(), StorageError> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        state.expenses.retain(|e| e.tracker_id != tracker_id);
        Ok(())
    }

    fn save_templates(&self, templates: &[TrackerTemplate]) -> Result<(), StorageError> {
        self.check_writable()?;
        self.state.lock().unwrap().templates = templates.to_vec();
        Ok(())
    }

    fn save_preferences(&self, preferences: &UserPreferences) -> Result<(), StorageError> {
        self.check_writable()?;
        self.state.lock().unwrap().preferences = Some(preferences.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory store".to_string()
    }
}
