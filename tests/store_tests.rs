// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use trackly::error::{StorageError, StoreError};
use trackly::models::{Expense, Frequency, Tracker};
use trackly::storage::MemoryStore;
use trackly::store::{ExpensePatch, ExpenseStore, PreferencesPatch, TrackerPatch};

fn tracker(id: &str, name: &str) -> Tracker {
    Tracker {
        id: id.to_string(),
        name: name.to_string(),
        category: "General".to_string(),
        frequency: Frequency::Monthly,
        custom_fields: vec![],
        budget_limit: Some(Decimal::from(5000)),
        color: "#3B82F6".to_string(),
        icon: "wallet".to_string(),
        created_at: Utc::now(),
        is_active: true,
    }
}

fn expense(id: &str, tracker_id: &str, amount: i64) -> Expense {
    Expense {
        id: id.to_string(),
        tracker_id: tracker_id.to_string(),
        amount: Decimal::from(amount),
        date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        description: "test expense".to_string(),
        category: None,
        payment_method: None,
        tags: None,
        custom_field_values: None,
    }
}

fn ready_store() -> ExpenseStore {
    let mut store = ExpenseStore::new(Box::new(MemoryStore::new()));
    store.initialize().unwrap();
    store
}

#[test]
fn mutators_fail_fast_before_initialize() {
    let mut store = ExpenseStore::new(Box::new(MemoryStore::new()));
    let err = store.add_tracker(tracker("t1", "Food")).unwrap_err();
    assert!(matches!(err, StoreError::NotInitialized));
    let err = store.delete_expense("e1").unwrap_err();
    assert!(matches!(err, StoreError::NotInitialized));
}

#[test]
fn initialize_seeds_builtin_templates_on_fresh_backend() {
    let store = ready_store();
    assert!(store.trackers().is_empty());
    assert!(store.expenses().is_empty());
    assert!(!store.templates().is_empty());
    assert_eq!(store.preferences().currency, "INR");
    assert_eq!(store.preferences().date_format, "DD/MM/YYYY");
}

#[test]
fn initialize_is_idempotent() {
    let mut store = ExpenseStore::new(Box::new(MemoryStore::new()));
    store.initialize().unwrap();
    store.add_tracker(tracker("t1", "Food")).unwrap();
    let templates_before = store.templates().len();

    store.initialize().unwrap();
    assert_eq!(store.trackers().len(), 1);
    assert_eq!(store.templates().len(), templates_before);

    store.initialize().unwrap();
    assert_eq!(store.trackers().len(), 1);
    assert_eq!(store.templates().len(), templates_before);
}

#[test]
fn add_and_update_tracker() {
    let mut store = ready_store();
    store.add_tracker(tracker("t1", "Food")).unwrap();

    let updated = store
        .update_tracker(
            "t1",
            TrackerPatch {
                name: Some("Dining".to_string()),
                budget_limit: Some(Decimal::from(8000)),
                is_active: Some(false),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.name, "Dining");
    assert_eq!(updated.budget_limit, Some(Decimal::from(8000)));
    assert!(!updated.is_active);
    // Unpatched fields survive
    assert_eq!(updated.category, "General");
    assert_eq!(store.trackers()[0].name, "Dining");
}

#[test]
fn update_unknown_tracker_is_an_error() {
    let mut store = ready_store();
    let err = store
        .update_tracker("missing", TrackerPatch::default())
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { kind: "tracker", .. }));
}

#[test]
fn delete_unknown_expense_is_an_error() {
    let mut store = ready_store();
    let err = store.delete_expense("missing").unwrap_err();
    assert!(matches!(err, StoreError::NotFound { kind: "expense", .. }));
}

#[test]
fn delete_tracker_cascades_to_its_expenses() {
    let mut store = ready_store();
    store.add_tracker(tracker("t1", "Food")).unwrap();
    store.add_tracker(tracker("t2", "Transport")).unwrap();
    store.add_expense(expense("e1", "t1", 100)).unwrap();
    store.add_expense(expense("e2", "t1", 200)).unwrap();
    store.add_expense(expense("e3", "t2", 300)).unwrap();

    store.delete_tracker("t1").unwrap();

    assert_eq!(store.trackers().len(), 1);
    assert!(store.expenses().iter().all(|e| e.tracker_id != "t1"));
    assert_eq!(store.expenses().len(), 1);
    assert_eq!(store.expenses()[0].id, "e3");
}

#[test]
fn update_expense_merges_patch_fields() {
    let mut store = ready_store();
    store.add_tracker(tracker("t1", "Food")).unwrap();
    store.add_expense(expense("e1", "t1", 100)).unwrap();

    let updated = store
        .update_expense(
            "e1",
            ExpensePatch {
                amount: Some(Decimal::from(250)),
                category: Some("Dining".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.amount, Decimal::from(250));
    assert_eq!(updated.category.as_deref(), Some("Dining"));
    assert_eq!(updated.description, "test expense");
}

#[test]
fn failed_persistence_write_leaves_snapshot_untouched() {
    let failing = MemoryStore::with_state(trackly::storage::PersistedState {
        trackers: vec![tracker("t1", "Food")],
        ..Default::default()
    });
    failing.set_fail_writes(true);
    let mut store = ExpenseStore::new(Box::new(failing));
    store.initialize().unwrap();

    let err = store.add_expense(expense("e1", "t1", 100)).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Storage(StorageError::QuotaExceeded)
    ));
    assert!(store.expenses().is_empty());

    let err = store.delete_tracker("t1").unwrap_err();
    assert!(matches!(err, StoreError::Storage(_)));
    assert_eq!(store.trackers().len(), 1);
}

#[test]
fn update_preferences_merges_and_persists() {
    let mut store = ready_store();
    let updated = store
        .update_preferences(PreferencesPatch {
            currency: Some("USD".to_string()),
            date_format: None,
        })
        .unwrap();
    assert_eq!(updated.currency, "USD");
    assert_eq!(updated.date_format, "DD/MM/YYYY");
    assert_eq!(store.preferences().currency, "USD");
}

#[test]
fn add_template_appends_to_catalog() {
    let mut store = ready_store();
    let before = store.templates().len();
    store
        .add_template(trackly::models::TrackerTemplate {
            id: "tpl-x".to_string(),
            name: "Pet Care".to_string(),
            category: "Pets".to_string(),
            frequency: Frequency::Monthly,
            suggested_fields: vec![],
            icon: "paw".to_string(),
            color: "#10B981".to_string(),
        })
        .unwrap();
    assert_eq!(store.templates().len(), before + 1);
}
