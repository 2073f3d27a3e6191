// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Frequency, TrackerTemplate};

/// The built-in template catalog seeded on first run.
pub fn builtin_templates() -> Vec<TrackerTemplate> {
    vec![
        TrackerTemplate {
            id: "tpl-1".to_string(),
            name: "Daily Food Expenses".to_string(),
            category: "Food".to_string(),
            frequency: Frequency::Daily,
            suggested_fields: vec!["meal_type".to_string(), "location".to_string()],
            icon: "utensils".to_string(),
            color: "#10B981".to_string(),
        },
        TrackerTemplate {
            id: "tpl-2".to_string(),
            name: "Monthly Bills".to_string(),
            category: "Bills".to_string(),
            frequency: Frequency::Monthly,
            suggested_fields: vec!["bill_type".to_string(), "due_date".to_string()],
            icon: "receipt".to_string(),
            color: "#3B82F6".to_string(),
        },
        TrackerTemplate {
            id: "tpl-3".to_string(),
            name: "Farm Labor Expenses".to_string(),
            category: "Agriculture".to_string(),
            frequency: Frequency::Seasonal,
            suggested_fields: vec![
                "worker_name".to_string(),
                "task".to_string(),
                "season".to_string(),
            ],
            icon: "tractor".to_string(),
            color: "#F59E0B".to_string(),
        },
        TrackerTemplate {
            id: "tpl-4".to_string(),
            name: "Shopping".to_string(),
            category: "Shopping".to_string(),
            frequency: Frequency::Weekly,
            suggested_fields: vec![],
            icon: "shopping-bag".to_string(),
            color: "#EC4899".to_string(),
        },
        TrackerTemplate {
            id: "tpl-5".to_string(),
            name: "Transportation".to_string(),
            category: "Transport".to_string(),
            frequency: Frequency::Daily,
            suggested_fields: vec!["vehicle_type".to_string(), "distance".to_string()],
            icon: "car".to_string(),
            color: "#8B5CF6".to_string(),
        },
    ]
}
