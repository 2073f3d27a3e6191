// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Spending cadence of a tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Seasonal,
    Yearly,
    Custom,
}

impl Frequency {
    pub fn parse(s: &str) -> Option<Frequency> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Some(Frequency::Daily),
            "weekly" => Some(Frequency::Weekly),
            "monthly" => Some(Frequency::Monthly),
            "quarterly" => Some(Frequency::Quarterly),
            "seasonal" => Some(Frequency::Seasonal),
            "yearly" => Some(Frequency::Yearly),
            "custom" => Some(Frequency::Custom),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Seasonal => "seasonal",
            Frequency::Yearly => "yearly",
            Frequency::Custom => "custom",
        }
    }
}

/// A user-defined budget category. The id is opaque and immutable after
/// creation; custom field names are unique within a tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tracker {
    pub id: String,
    pub name: String,
    pub category: String,
    pub frequency: Frequency,
    #[serde(default)]
    pub custom_fields: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_limit: Option<Decimal>,
    pub color: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// A single spend event attributed to exactly one tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub tracker_id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_field_values: Option<BTreeMap<String, String>>,
}

/// Read-only catalog entry used to pre-fill tracker creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerTemplate {
    pub id: String,
    pub name: String,
    pub category: String,
    pub frequency: Frequency,
    #[serde(default)]
    pub suggested_fields: Vec<String>,
    pub icon: String,
    pub color: String,
}

/// Display-only settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub currency: String,
    pub date_format: String,
}

impl Default for UserPreferences {
    fn default() -> Self {
        UserPreferences {
            currency: "INR".to_string(),
            date_format: "DD/MM/YYYY".to_string(),
        }
    }
}

/// Per-tracker slice of a breakdown report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerBreakdown {
    pub tracker_id: String,
    pub tracker_name: String,
    pub total: Decimal,
    pub count: usize,
    pub color: String,
}

/// Per-category slice of a breakdown report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

/// Composite month report: totals plus tracker and category breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub month: String,
    pub year: i32,
    pub total_expenses: Decimal,
    pub by_tracker: Vec<TrackerBreakdown>,
    pub by_category: Vec<CategoryTotal>,
}
