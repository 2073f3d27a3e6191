// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over expense collections. Every function re-scans the
//! supplied slice; data volumes are personal-scale so no index is kept.

use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::Decimal;

use crate::dates::{month_name, week_range};
use crate::models::{CategoryTotal, Expense, MonthlyReport, Tracker, TrackerBreakdown};

/// Label used for expenses without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Sum of amounts for expenses dated in the given calendar month (1-based).
pub fn monthly_total(expenses: &[Expense], month: u32, year: i32) -> Decimal {
    expenses
        .iter()
        .filter(|e| e.date.month() == month && e.date.year() == year)
        .map(|e| e.amount)
        .sum()
}

/// One row per active tracker, in input order. Trackers with no matching
/// expenses still appear with a zero total.
pub fn tracker_breakdown(expenses: &[Expense], trackers: &[Tracker]) -> Vec<TrackerBreakdown> {
    trackers
        .iter()
        .filter(|t| t.is_active)
        .map(|tracker| {
            let matching: Vec<&Expense> = expenses
                .iter()
                .filter(|e| e.tracker_id == tracker.id)
                .collect();
            TrackerBreakdown {
                tracker_id: tracker.id.clone(),
                tracker_name: tracker.name.clone(),
                total: matching.iter().map(|e| e.amount).sum(),
                count: matching.len(),
                color: tracker.color.clone(),
            }
        })
        .collect()
}

/// Spent-to-limit ratio as a percentage, unclamped. Exactly zero when the
/// tracker has no limit (or a zero limit).
pub fn budget_progress(tracker: &Tracker, expenses: &[Expense]) -> Decimal {
    let limit = match tracker.budget_limit {
        Some(l) if !l.is_zero() => l,
        _ => return Decimal::ZERO,
    };
    let spent: Decimal = expenses
        .iter()
        .filter(|e| e.tracker_id == tracker.id)
        .map(|e| e.amount)
        .sum();
    spent / limit * Decimal::from(100)
}

/// Group totals by category, bucketing absent categories under
/// "Uncategorized". Output order is first-seen order.
pub fn category_breakdown(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut buckets: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        let category = expense.category.as_deref().unwrap_or(UNCATEGORIZED);
        match buckets.iter_mut().find(|b| b.category == category) {
            Some(bucket) => bucket.total += expense.amount,
            None => buckets.push(CategoryTotal {
                category: category.to_string(),
                total: expense.amount,
            }),
        }
    }
    buckets
}

/// Composite month report: totals plus tracker and category breakdowns,
/// all computed over the expenses dated in the given month.
pub fn monthly_report(
    expenses: &[Expense],
    trackers: &[Tracker],
    month: u32,
    year: i32,
) -> MonthlyReport {
    let month_expenses: Vec<Expense> = expenses
        .iter()
        .filter(|e| e.date.month() == month && e.date.year() == year)
        .cloned()
        .collect();
    MonthlyReport {
        month: month_name(month),
        year,
        total_expenses: month_expenses.iter().map(|e| e.amount).sum(),
        by_tracker: tracker_breakdown(&month_expenses, trackers),
        by_category: category_breakdown(&month_expenses),
    }
}

/// Sum of expenses dated exactly on `day`.
pub fn today_total_on(expenses: &[Expense], day: NaiveDate) -> Decimal {
    expenses
        .iter()
        .filter(|e| e.date == day)
        .map(|e| e.amount)
        .sum()
}

/// Sum of expenses within the week containing `day` (Sunday through
/// Saturday).
pub fn week_total_on(expenses: &[Expense], day: NaiveDate) -> Decimal {
    let (start, end) = week_range(day);
    expenses
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .map(|e| e.amount)
        .sum()
}

/// Sum of expenses within the calendar month containing `day`.
pub fn month_total_on(expenses: &[Expense], day: NaiveDate) -> Decimal {
    monthly_total(expenses, day.month(), day.year())
}

/// Sum of one tracker's expenses within the calendar month containing
/// `day`. Used for budget-progress display on tracker listings, which is
/// always "this month" regardless of any report month selection.
pub fn tracker_month_total_on(tracker_id: &str, expenses: &[Expense], day: NaiveDate) -> Decimal {
    expenses
        .iter()
        .filter(|e| {
            e.tracker_id == tracker_id && e.date.month() == day.month() && e.date.year() == day.year()
        })
        .map(|e| e.amount)
        .sum()
}

pub fn today_total(expenses: &[Expense]) -> Decimal {
    today_total_on(expenses, Local::now().date_naive())
}

pub fn week_total(expenses: &[Expense]) -> Decimal {
    week_total_on(expenses, Local::now().date_naive())
}

pub fn month_total(expenses: &[Expense]) -> Decimal {
    month_total_on(expenses, Local::now().date_naive())
}

pub fn tracker_month_total(tracker_id: &str, expenses: &[Expense]) -> Decimal {
    tracker_month_total_on(tracker_id, expenses, Local::now().date_naive())
}
