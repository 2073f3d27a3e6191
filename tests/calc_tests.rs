// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use trackly::calc::{
    budget_progress, category_breakdown, monthly_report, monthly_total, month_total_on,
    today_total_on, tracker_breakdown, tracker_month_total_on, week_total_on,
};
use trackly::models::{Expense, Frequency, Tracker};

fn tracker(id: &str, name: &str, limit: Option<i64>, active: bool) -> Tracker {
    Tracker {
        id: id.to_string(),
        name: name.to_string(),
        category: "General".to_string(),
        frequency: Frequency::Monthly,
        custom_fields: vec![],
        budget_limit: limit.map(Decimal::from),
        color: "#3B82F6".to_string(),
        icon: "wallet".to_string(),
        created_at: Utc::now(),
        is_active: active,
    }
}

fn expense(id: &str, tracker_id: &str, amount: i64, date: NaiveDate) -> Expense {
    Expense {
        id: id.to_string(),
        tracker_id: tracker_id.to_string(),
        amount: Decimal::from(amount),
        date,
        description: "test expense".to_string(),
        category: None,
        payment_method: None,
        tags: None,
        custom_field_values: None,
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn monthly_total_sums_only_the_given_month() {
    // Two expenses dated the 1st and 15th of March 2024
    let expenses = vec![
        expense("e1", "t1", 100, day(2024, 3, 1)),
        expense("e2", "t1", 200, day(2024, 3, 15)),
        expense("e3", "t1", 999, day(2024, 4, 1)),
    ];
    assert_eq!(monthly_total(&expenses, 3, 2024), Decimal::from(300));
    assert_eq!(monthly_total(&expenses, 4, 2024), Decimal::from(999));
    assert_eq!(monthly_total(&expenses, 3, 2023), Decimal::ZERO);
}

#[test]
fn monthly_total_of_empty_collection_is_zero() {
    let expenses: Vec<Expense> = vec![];
    assert_eq!(monthly_total(&expenses, 5, 2024), Decimal::ZERO);
    assert!(category_breakdown(&expenses).is_empty());
}

#[test]
fn budget_progress_basic_ratio() {
    let t = tracker("t1", "Food", Some(5000), true);
    let expenses = vec![
        expense("e1", "t1", 2000, day(2024, 3, 1)),
        expense("e2", "t1", 1000, day(2024, 3, 2)),
    ];
    assert_eq!(budget_progress(&t, &expenses), Decimal::from(60));
}

#[test]
fn budget_progress_without_limit_is_exactly_zero() {
    let t = tracker("t1", "Food", None, true);
    let expenses = vec![expense("e1", "t1", 2000, day(2024, 3, 1))];
    assert_eq!(budget_progress(&t, &expenses), Decimal::ZERO);
}

#[test]
fn budget_progress_may_exceed_hundred() {
    let t = tracker("t1", "Food", Some(1000), true);
    let expenses = vec![expense("e1", "t1", 2500, day(2024, 3, 1))];
    assert_eq!(budget_progress(&t, &expenses), Decimal::from(250));
}

#[test]
fn tracker_breakdown_keeps_zero_expense_trackers_and_input_order() {
    let trackers = vec![
        tracker("t1", "Food", None, true),
        tracker("t2", "Transport", None, true),
    ];
    let expenses = vec![expense("e1", "t2", 500, day(2024, 3, 1))];
    let breakdown = tracker_breakdown(&expenses, &trackers);
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0].tracker_name, "Food");
    assert_eq!(breakdown[0].total, Decimal::ZERO);
    assert_eq!(breakdown[0].count, 0);
    assert_eq!(breakdown[1].tracker_name, "Transport");
    assert_eq!(breakdown[1].total, Decimal::from(500));
    assert_eq!(breakdown[1].count, 1);
}

#[test]
fn tracker_breakdown_excludes_inactive_trackers() {
    let trackers = vec![
        tracker("t1", "Food", None, true),
        tracker("t2", "Old", None, false),
    ];
    let expenses = vec![
        expense("e1", "t1", 100, day(2024, 3, 1)),
        expense("e2", "t2", 200, day(2024, 3, 1)),
    ];
    let breakdown = tracker_breakdown(&expenses, &trackers);
    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[0].tracker_id, "t1");

    // Inactive-tracker expenses still count toward global totals
    assert_eq!(monthly_total(&expenses, 3, 2024), Decimal::from(300));
}

#[test]
fn breakdown_totals_sum_to_active_tracker_expense_sum() {
    let trackers = vec![
        tracker("t1", "Food", None, true),
        tracker("t2", "Transport", None, true),
        tracker("t3", "Old", None, false),
    ];
    let expenses = vec![
        expense("e1", "t1", 100, day(2024, 3, 1)),
        expense("e2", "t2", 250, day(2024, 3, 2)),
        expense("e3", "t2", 50, day(2024, 3, 3)),
        expense("e4", "t3", 75, day(2024, 3, 4)),
    ];
    let breakdown = tracker_breakdown(&expenses, &trackers);
    let breakdown_sum: Decimal = breakdown.iter().map(|b| b.total).sum();
    assert_eq!(breakdown_sum, Decimal::from(400));
}

#[test]
fn category_breakdown_is_a_partition() {
    let mut e1 = expense("e1", "t1", 100, day(2024, 3, 1));
    e1.category = Some("Food".to_string());
    let mut e2 = expense("e2", "t1", 200, day(2024, 3, 2));
    e2.category = Some("Transport".to_string());
    let mut e3 = expense("e3", "t1", 300, day(2024, 3, 3));
    e3.category = Some("Food".to_string());
    let e4 = expense("e4", "t1", 50, day(2024, 3, 4)); // no category

    let expenses = vec![e1, e2, e3, e4];
    let breakdown = category_breakdown(&expenses);
    let total: Decimal = breakdown.iter().map(|b| b.total).sum();
    assert_eq!(total, Decimal::from(650));

    // First-seen order
    assert_eq!(breakdown[0].category, "Food");
    assert_eq!(breakdown[0].total, Decimal::from(400));
    assert_eq!(breakdown[1].category, "Transport");
    assert_eq!(breakdown[2].category, "Uncategorized");
    assert_eq!(breakdown[2].total, Decimal::from(50));
}

#[test]
fn uncategorized_expense_is_bucketed_not_dropped() {
    let expenses = vec![expense("e1", "t1", 120, day(2024, 3, 1))];
    let breakdown = category_breakdown(&expenses);
    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[0].category, "Uncategorized");
    assert_eq!(breakdown[0].total, Decimal::from(120));
}

#[test]
fn monthly_report_filters_to_the_month() {
    let trackers = vec![tracker("t1", "Food", None, true)];
    let expenses = vec![
        expense("e1", "t1", 100, day(2024, 3, 1)),
        expense("e2", "t1", 200, day(2024, 3, 15)),
        expense("e3", "t1", 400, day(2024, 4, 1)),
    ];
    let report = monthly_report(&expenses, &trackers, 3, 2024);
    assert_eq!(report.month, "March");
    assert_eq!(report.year, 2024);
    assert_eq!(report.total_expenses, Decimal::from(300));
    assert_eq!(report.by_tracker.len(), 1);
    assert_eq!(report.by_tracker[0].total, Decimal::from(300));
    assert_eq!(report.by_tracker[0].count, 2);
    assert_eq!(report.by_category.len(), 1);
    assert_eq!(report.by_category[0].total, Decimal::from(300));
}

#[test]
fn day_week_month_totals_relative_to_a_reference_day() {
    // 2024-03-13 was a Wednesday; its week runs Sun 10th .. Sat 16th
    let reference = day(2024, 3, 13);
    let expenses = vec![
        expense("e1", "t1", 10, day(2024, 3, 13)),
        expense("e2", "t1", 20, day(2024, 3, 10)),
        expense("e3", "t1", 40, day(2024, 3, 16)),
        expense("e4", "t1", 80, day(2024, 3, 9)),  // previous week
        expense("e5", "t1", 160, day(2024, 3, 17)), // next week
        expense("e6", "t1", 320, day(2024, 2, 29)), // previous month
    ];
    assert_eq!(today_total_on(&expenses, reference), Decimal::from(10));
    assert_eq!(week_total_on(&expenses, reference), Decimal::from(70));
    assert_eq!(month_total_on(&expenses, reference), Decimal::from(310));
}

#[test]
fn tracker_month_total_scopes_to_tracker_and_month() {
    let reference = day(2024, 3, 13);
    let expenses = vec![
        expense("e1", "t1", 10, day(2024, 3, 1)),
        expense("e2", "t1", 20, day(2024, 4, 1)),
        expense("e3", "t2", 40, day(2024, 3, 2)),
    ];
    assert_eq!(
        tracker_month_total_on("t1", &expenses, reference),
        Decimal::from(10)
    );
    assert_eq!(
        tracker_month_total_on("t2", &expenses, reference),
        Decimal::from(40)
    );
    assert_eq!(
        tracker_month_total_on("t3", &expenses, reference),
        Decimal::ZERO
    );
}
