// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The client state store: a single-writer, in-memory snapshot of the four
//! entity collections, kept in sync with a persistence backend. Every
//! mutator writes to the backend first and only then commits the in-memory
//! change, so a failed write leaves the snapshot in its pre-failure state.

use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::error::StoreError;
use crate::models::{Expense, Tracker, TrackerTemplate, UserPreferences};
use crate::storage::StorageProvider;
use crate::templates::builtin_templates;

/// The store's current in-memory copy of all four collections.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub trackers: Vec<Tracker>,
    pub expenses: Vec<Expense>,
    pub templates: Vec<TrackerTemplate>,
    pub preferences: UserPreferences,
}

/// Partial update for a tracker. Unset fields are left unchanged; the id
/// is immutable and not patchable.
#[derive(Debug, Clone, Default)]
pub struct TrackerPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub frequency: Option<crate::models::Frequency>,
    pub custom_fields: Option<Vec<String>>,
    pub budget_limit: Option<Decimal>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub is_active: Option<bool>,
}

/// Partial update for an expense.
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub amount: Option<Decimal>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub payment_method: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Partial update for preferences.
#[derive(Debug, Clone, Default)]
pub struct PreferencesPatch {
    pub currency: Option<String>,
    pub date_format: Option<String>,
}

pub struct ExpenseStore {
    provider: Box<dyn StorageProvider>,
    snapshot: Snapshot,
    ready: bool,
}

impl ExpenseStore {
    /// A new store in the uninitialized state. Every mutator fails with
    /// `StoreError::NotInitialized` until `initialize` has run.
    pub fn new(provider: Box<dyn StorageProvider>) -> ExpenseStore {
        ExpenseStore {
            provider,
            snapshot: Snapshot::default(),
            ready: false,
        }
    }

    /// Load all four collections from the backend. On a completely fresh
    /// backend (no trackers and no expenses) the built-in template catalog
    /// is seeded; template persistence is best-effort. Idempotent: a second
    /// call simply reloads.
    pub fn initialize(&mut self) -> Result<(), StoreError> {
        let state = self.provider.load_all()?;
        debug!(
            "loaded {} trackers, {} expenses, {} templates",
            state.trackers.len(),
            state.expenses.len(),
            state.templates.len()
        );

        let templates = if state.trackers.is_empty() && state.expenses.is_empty() {
            let templates = builtin_templates();
            if let Err(err) = self.provider.save_templates(&templates) {
                warn!("could not persist built-in templates: {}", err);
            }
            templates
        } else if state.templates.is_empty() {
            builtin_templates()
        } else {
            state.templates
        };

        self.snapshot = Snapshot {
            trackers: state.trackers,
            expenses: state.expenses,
            templates,
            preferences: state.preferences.unwrap_or_default(),
        };
        self.ready = true;
        Ok(())
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn trackers(&self) -> &[Tracker] {
        &self.snapshot.trackers
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.snapshot.expenses
    }

    pub fn templates(&self) -> &[TrackerTemplate] {
        &self.snapshot.templates
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.snapshot.preferences
    }

    pub fn backend_description(&self) -> String {
        self.provider.describe()
    }

    fn ensure_ready(&self) -> Result<(), StoreError> {
        if self.ready {
            Ok(())
        } else {
            Err(StoreError::NotInitialized)
        }
    }

    pub fn add_tracker(&mut self, tracker: Tracker) -> Result<Tracker, StoreError> {
        self.ensure_ready()?;
        let stored = self.provider.insert_tracker(&tracker)?;
        self.snapshot.trackers.push(stored.clone());
        Ok(stored)
    }

    pub fn update_tracker(&mut self, id: &str, patch: TrackerPatch) -> Result<Tracker, StoreError> {
        self.ensure_ready()?;
        let index = self
            .snapshot
            .trackers
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::not_found("tracker", id))?;

        let mut merged = self.snapshot.trackers[index].clone();
        if let Some(name) = patch.name {
            merged.name = name;
        }
        if let Some(category) = patch.category {
            merged.category = category;
        }
        if let Some(frequency) = patch.frequency {
            merged.frequency = frequency;
        }
        if let Some(custom_fields) = patch.custom_fields {
            merged.custom_fields = custom_fields;
        }
        if let Some(budget_limit) = patch.budget_limit {
            merged.budget_limit = Some(budget_limit);
        }
        if let Some(color) = patch.color {
            merged.color = color;
        }
        if let Some(icon) = patch.icon {
            merged.icon = icon;
        }
        if let Some(is_active) = patch.is_active {
            merged.is_active = is_active;
        }

        self.provider.update_tracker(&merged)?;
        self.snapshot.trackers[index] = merged.clone();
        Ok(merged)
    }

    /// Delete a tracker and every expense referencing it. The backend sees
    /// two writes with no transaction between them; the in-memory commit is
    /// a single point, so callers never observe a half-applied snapshot.
    pub fn delete_tracker(&mut self, id: &str) -> Result<(), StoreError> {
        self.ensure_ready()?;
        if !self.snapshot.trackers.iter().any(|t| t.id == id) {
            return Err(StoreError::not_found("tracker", id));
        }
        self.provider.delete_tracker(id)?;
        self.provider.delete_expenses_for_tracker(id)?;
        self.snapshot.trackers.retain(|t| t.id != id);
        self.snapshot.expenses.retain(|e| e.tracker_id != id);
        Ok(())
    }

    pub fn add_expense(&mut self, expense: Expense) -> Result<Expense, StoreError> {
        self.ensure_ready()?;
        let stored = self.provider.insert_expense(&expense)?;
        self.snapshot.expenses.push(stored.clone());
        Ok(stored)
    }

    pub fn update_expense(&mut self, id: &str, patch: ExpensePatch) -> Result<Expense, StoreError> {
        self.ensure_ready()?;
        let index = self
            .snapshot
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StoreError::not_found("expense", id))?;

        let mut merged = self.snapshot.expenses[index].clone();
        if let Some(amount) = patch.amount {
            merged.amount = amount;
        }
        if let Some(date) = patch.date {
            merged.date = date;
        }
        if let Some(description) = patch.description {
            merged.description = description;
        }
        if let Some(category) = patch.category {
            merged.category = Some(category);
        }
        if let Some(payment_method) = patch.payment_method {
            merged.payment_method = Some(payment_method);
        }
        if let Some(tags) = patch.tags {
            merged.tags = Some(tags);
        }

        self.provider.update_expense(&merged)?;
        self.snapshot.expenses[index] = merged.clone();
        Ok(merged)
    }

    pub fn delete_expense(&mut self, id: &str) -> Result<(), StoreError> {
        self.ensure_ready()?;
        if !self.snapshot.expenses.iter().any(|e| e.id == id) {
            return Err(StoreError::not_found("expense", id));
        }
        self.provider.delete_expense(id)?;
        self.snapshot.expenses.retain(|e| e.id != id);
        Ok(())
    }

    /// Append a template. Template persistence is best-effort: a backend
    /// failure is logged and the in-memory append still commits.
    pub fn add_template(&mut self, template: TrackerTemplate) -> Result<(), StoreError> {
        self.ensure_ready()?;
        let mut templates = self.snapshot.templates.clone();
        templates.push(template);
        if let Err(err) = self.provider.save_templates(&templates) {
            warn!("could not persist templates: {}", err);
        }
        self.snapshot.templates = templates;
        Ok(())
    }

    pub fn update_preferences(
        &mut self,
        patch: PreferencesPatch,
    ) -> Result<UserPreferences, StoreError> {
        self.ensure_ready()?;
        let mut merged = self.snapshot.preferences.clone();
        if let Some(currency) = patch.currency {
            merged.currency = currency;
        }
        if let Some(date_format) = patch.date_format {
            merged.date_format = date_format;
        }
        self.provider.save_preferences(&merged)?;
        self.snapshot.preferences = merged.clone();
        Ok(merged)
    }
}
