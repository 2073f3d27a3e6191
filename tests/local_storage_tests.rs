// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use trackly::models::{Expense, Frequency, Tracker, UserPreferences};
use trackly::storage::{LocalStore, StorageProvider};

fn sample_tracker() -> Tracker {
    Tracker {
        id: "t1".to_string(),
        name: "Groceries".to_string(),
        category: "Food".to_string(),
        frequency: Frequency::Weekly,
        custom_fields: vec!["Store".to_string(), "Items".to_string()],
        budget_limit: Some(Decimal::new(500050, 2)), // 5000.50
        color: "#10B981".to_string(),
        icon: "cart".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        is_active: true,
    }
}

fn sample_expense() -> Expense {
    let mut values = BTreeMap::new();
    values.insert("Store".to_string(), "Big Bazaar".to_string());
    Expense {
        id: "e1".to_string(),
        tracker_id: "t1".to_string(),
        amount: Decimal::new(45075, 2), // 450.75
        date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        description: "Weekly groceries".to_string(),
        category: Some("Food".to_string()),
        payment_method: Some("UPI".to_string()),
        tags: Some(vec!["weekly".to_string()]),
        custom_field_values: Some(values),
    }
}

#[test]
fn fresh_directory_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();
    let state = store.load_all().unwrap();
    assert!(state.trackers.is_empty());
    assert!(state.expenses.is_empty());
    assert!(state.templates.is_empty());
    assert!(state.preferences.is_none());
}

#[test]
fn tracker_round_trips_field_for_field() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();
    let tracker = sample_tracker();
    store.insert_tracker(&tracker).unwrap();

    let state = store.load_all().unwrap();
    assert_eq!(state.trackers, vec![tracker]);
}

#[test]
fn expense_round_trips_field_for_field() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();
    let expense = sample_expense();
    store.insert_expense(&expense).unwrap();

    let state = store.load_all().unwrap();
    assert_eq!(state.expenses, vec![expense.clone()]);
    // Day precision survives
    assert_eq!(
        state.expenses[0].date,
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    );
}

#[test]
fn update_and_delete_rewrite_the_slot() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();
    let mut tracker = sample_tracker();
    store.insert_tracker(&tracker).unwrap();

    tracker.name = "Supermarket".to_string();
    store.update_tracker(&tracker).unwrap();
    let state = store.load_all().unwrap();
    assert_eq!(state.trackers[0].name, "Supermarket");

    store.delete_tracker("t1").unwrap();
    assert!(store.load_all().unwrap().trackers.is_empty());
}

#[test]
fn delete_expenses_for_tracker_removes_only_that_tracker() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();
    let e1 = sample_expense();
    let mut e2 = sample_expense();
    e2.id = "e2".to_string();
    e2.tracker_id = "t2".to_string();
    store.insert_expense(&e1).unwrap();
    store.insert_expense(&e2).unwrap();

    store.delete_expenses_for_tracker("t1").unwrap();
    let state = store.load_all().unwrap();
    assert_eq!(state.expenses.len(), 1);
    assert_eq!(state.expenses[0].id, "e2");
}

#[test]
fn preferences_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();
    let prefs = UserPreferences {
        currency: "USD".to_string(),
        date_format: "YYYY-MM-DD".to_string(),
    };
    store.save_preferences(&prefs).unwrap();
    assert_eq!(store.load_all().unwrap().preferences, Some(prefs));
}

#[test]
fn dates_serialize_as_iso_strings() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();
    store.insert_expense(&sample_expense()).unwrap();

    let raw = std::fs::read_to_string(dir.path().join("expenses.json")).unwrap();
    assert!(raw.contains("2024-03-15"));
    assert!(raw.contains("trackerId"));
}
