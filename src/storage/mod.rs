// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Persistence backends. The store depends only on [`StorageProvider`];
//! the deployed backend is chosen at process start.

pub mod local;
pub mod memory;
pub mod remote;

use crate::error::StorageError;
use crate::models::{Expense, Tracker, TrackerTemplate, UserPreferences};

pub use local::LocalStore;
pub use memory::MemoryStore;
pub use remote::RemoteStore;

/// Environment variable selecting the remote document backend.
pub const REMOTE_URL_ENV: &str = "TRACKLY_REMOTE_URL";

/// Everything a backend holds, loaded in one pass at initialization.
#[derive(Debug, Clone, Default)]
pub struct PersistedState {
    pub trackers: Vec<Tracker>,
    pub expenses: Vec<Expense>,
    pub templates: Vec<TrackerTemplate>,
    pub preferences: Option<UserPreferences>,
}

/// Record-level persistence capability. Inserts return the stored record so
/// a backend-assigned identifier can replace a blank client id.
pub trait StorageProvider {
    fn load_all(&self) -> Result<PersistedState, StorageError>;

    fn insert_tracker(&self, tracker: &Tracker) -> Result<Tracker, StorageError>;
    fn update_tracker(&self, tracker: &Tracker) -> Result<(), StorageError>;
    fn delete_tracker(&self, id: &str) -> Result<(), StorageError>;

    fn insert_expense(&self, expense: &Expense) -> Result<Expense, StorageError>;
    fn update_expense(&self, expense: &Expense) -> Result<(), StorageError>;
    fn delete_expense(&self, id: &str) -> Result<(), StorageError>;
    fn delete_expenses_for_tracker(&self, tracker_id: &str) -> Result<(), StorageError>;

    fn save_templates(&self, templates: &[TrackerTemplate]) -> Result<(), StorageError>;
    fn save_preferences(&self, preferences: &UserPreferences) -> Result<(), StorageError>;

    /// Human-readable location, shown by `trackly init`.
    fn describe(&self) -> String;
}

/// Pick the deployed backend: remote when `TRACKLY_REMOTE_URL` is set,
/// local slot files otherwise.
pub fn default_provider() -> Result<Box<dyn StorageProvider>, StorageError> {
    match std::env::var(REMOTE_URL_ENV) {
        Ok(url) if !url.is_empty() => Ok(Box::new(RemoteStore::new(&url)?)),
        _ => Ok(Box::new(LocalStore::open_default()?)),
    }
}
