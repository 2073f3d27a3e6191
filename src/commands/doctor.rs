// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashSet;

use anyhow::Result;

use crate::store::ExpenseStore;
use crate::utils::pretty_table;

/// Reconciliation pass. The cascade delete issues two backend writes with
/// no transaction, so a partial failure can strand expenses whose tracker
/// is gone; this reports them (and other stored-data oddities) without
/// changing anything.
pub fn handle(store: &ExpenseStore) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Expenses referencing a tracker that no longer exists
    let tracker_ids: HashSet<&str> = store.trackers().iter().map(|t| t.id.as_str()).collect();
    for expense in store.expenses() {
        if !tracker_ids.contains(expense.tracker_id.as_str()) {
            rows.push(vec![
                "orphaned_expense".into(),
                format!("{} '{}' ({})", expense.id, expense.description, expense.date),
            ]);
        }
    }

    // 2) Trackers carrying duplicate custom field names
    for tracker in store.trackers() {
        let mut seen = HashSet::new();
        for field in &tracker.custom_fields {
            if !seen.insert(field.as_str()) {
                rows.push(vec![
                    "duplicate_custom_field".into(),
                    format!("{}: '{}'", tracker.name, field),
                ]);
            }
        }
    }

    // 3) Expense custom field values with no matching tracker field
    for expense in store.expenses() {
        let Some(values) = &expense.custom_field_values else {
            continue;
        };
        let Some(tracker) = store.trackers().iter().find(|t| t.id == expense.tracker_id) else {
            continue;
        };
        for name in values.keys() {
            if !tracker.custom_fields.contains(name) {
                rows.push(vec![
                    "unknown_custom_field".into(),
                    format!("expense {}: '{}'", expense.id, name),
                ]);
            }
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
