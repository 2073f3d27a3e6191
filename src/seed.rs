// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Demo data: a fixed set of example trackers plus randomly generated
//! expenses over the last 30 days. An external batch caller of the same
//! add-tracker/add-expense contracts the CLI uses.

use chrono::{Duration, Local, Utc};
use rand::Rng;
use rust_decimal::Decimal;

use crate::error::StoreError;
use crate::models::{Expense, Frequency, Tracker};
use crate::store::ExpenseStore;
use crate::utils::new_id;

const DEMO_CATEGORIES: &[&str] = &["Food", "Transport", "Utilities", "Entertainment", "Health"];
const DEMO_METHODS: &[&str] = &["Cash", "Credit Card", "UPI", "Debit Card"];
const DEMO_DESCRIPTIONS: &[&str] = &[
    "Morning Coffee",
    "Uber to work",
    "Lunch with colleagues",
    "Netflix Subscription",
    "Gym Membership",
    "Grocery Run",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct SeedSummary {
    pub trackers_added: usize,
    pub trackers_skipped: usize,
    pub expenses_added: usize,
}

fn demo_trackers() -> Vec<Tracker> {
    let now = Utc::now();
    vec![
        Tracker {
            id: new_id(),
            name: "Personal Expenses".to_string(),
            category: "Personal".to_string(),
            frequency: Frequency::Monthly,
            custom_fields: vec![],
            budget_limit: Some(Decimal::from(20000)),
            color: "#3B82F6".to_string(),
            icon: "👤".to_string(),
            created_at: now,
            is_active: true,
        },
        Tracker {
            id: new_id(),
            name: "Groceries".to_string(),
            category: "Food".to_string(),
            frequency: Frequency::Weekly,
            custom_fields: vec!["Store".to_string(), "Items".to_string()],
            budget_limit: Some(Decimal::from(5000)),
            color: "#10B981".to_string(),
            icon: "🛒".to_string(),
            created_at: now,
            is_active: true,
        },
        Tracker {
            id: new_id(),
            name: "Office Commute".to_string(),
            category: "Transport".to_string(),
            frequency: Frequency::Daily,
            custom_fields: vec![],
            budget_limit: Some(Decimal::from(3000)),
            color: "#F59E0B".to_string(),
            icon: "🚗".to_string(),
            created_at: now,
            is_active: true,
        },
    ]
}

/// Insert the demo trackers (skipping any whose name already exists) and
/// `count` random expenses referencing them.
pub fn seed_demo_data(store: &mut ExpenseStore, count: usize) -> Result<SeedSummary, StoreError> {
    let mut summary = SeedSummary::default();
    let mut tracker_ids = Vec::new();

    for tracker in demo_trackers() {
        if let Some(existing) = store.trackers().iter().find(|t| t.name == tracker.name) {
            tracker_ids.push(existing.id.clone());
            summary.trackers_skipped += 1;
            continue;
        }
        let stored = store.add_tracker(tracker)?;
        tracker_ids.push(stored.id);
        summary.trackers_added += 1;
    }

    let mut rng = rand::thread_rng();
    let today = Local::now().date_naive();
    for _ in 0..count {
        let tracker_id = tracker_ids[rng.gen_range(0..tracker_ids.len())].clone();
        let amount = Decimal::from(rng.gen_range(50..2050));
        let date = today - Duration::days(rng.gen_range(0..30));
        let description = DEMO_DESCRIPTIONS[rng.gen_range(0..DEMO_DESCRIPTIONS.len())];
        let category = DEMO_CATEGORIES[rng.gen_range(0..DEMO_CATEGORIES.len())];
        let method = DEMO_METHODS[rng.gen_range(0..DEMO_METHODS.len())];

        store.add_expense(Expense {
            id: new_id(),
            tracker_id,
            amount,
            date,
            description: description.to_string(),
            category: Some(category.to_string()),
            payment_method: Some(method.to_string()),
            tags: Some(vec!["demo".to_string(), "seed".to_string()]),
            custom_field_values: None,
        })?;
        summary.expenses_added += 1;
    }

    Ok(summary)
}
