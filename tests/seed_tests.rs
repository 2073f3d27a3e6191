// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use trackly::seed::seed_demo_data;
use trackly::storage::MemoryStore;
use trackly::store::ExpenseStore;

fn ready_store() -> ExpenseStore {
    let mut store = ExpenseStore::new(Box::new(MemoryStore::new()));
    store.initialize().unwrap();
    store
}

#[test]
fn seed_creates_demo_trackers_and_expenses() {
    let mut store = ready_store();
    let summary = seed_demo_data(&mut store, 10).unwrap();

    assert_eq!(summary.trackers_added, 3);
    assert_eq!(summary.trackers_skipped, 0);
    assert_eq!(summary.expenses_added, 10);
    assert_eq!(store.trackers().len(), 3);
    assert_eq!(store.expenses().len(), 10);

    let names: Vec<&str> = store.trackers().iter().map(|t| t.name.as_str()).collect();
    assert!(names.contains(&"Personal Expenses"));
    assert!(names.contains(&"Groceries"));
    assert!(names.contains(&"Office Commute"));
}

#[test]
fn seeded_expenses_reference_seeded_trackers_and_are_valid() {
    let mut store = ready_store();
    seed_demo_data(&mut store, 25).unwrap();

    for expense in store.expenses() {
        assert!(
            store
                .trackers()
                .iter()
                .any(|t| t.id == expense.tracker_id)
        );
        assert!(expense.amount > Decimal::ZERO);
        assert!(!expense.description.is_empty());
    }
}

#[test]
fn reseeding_skips_existing_tracker_names() {
    let mut store = ready_store();
    seed_demo_data(&mut store, 5).unwrap();
    let summary = seed_demo_data(&mut store, 5).unwrap();

    assert_eq!(summary.trackers_added, 0);
    assert_eq!(summary.trackers_skipped, 3);
    assert_eq!(store.trackers().len(), 3);
    assert_eq!(store.expenses().len(), 10);
}
