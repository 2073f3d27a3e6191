// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Datelike, Local};
use serde::Serialize;

use crate::calc::{
    budget_progress, monthly_report, today_total, tracker_breakdown, tracker_month_total,
    week_total, month_total,
};
use crate::dates::{format_currency, parse_year_month};
use crate::store::ExpenseStore;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(store: &ExpenseStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("overview", sub)) => overview(store, sub)?,
        Some(("monthly", sub)) => monthly(store, sub)?,
        Some(("budget", sub)) => budget(store, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Overview {
    today: String,
    this_week: String,
    this_month: String,
    by_tracker: Vec<crate::models::TrackerBreakdown>,
}

fn overview(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let currency = store.preferences().currency.clone();
    let expenses = store.expenses();

    let report = Overview {
        today: format_currency(today_total(expenses), &currency),
        this_week: format_currency(week_total(expenses), &currency),
        this_month: format_currency(month_total(expenses), &currency),
        by_tracker: tracker_breakdown(expenses, store.trackers()),
    };

    if !maybe_print_json(json_flag, jsonl_flag, &report)? {
        println!(
            "{}",
            pretty_table(
                &["Today", "This Week", "This Month"],
                vec![vec![report.today, report.this_week, report.this_month]],
            )
        );
        let rows: Vec<Vec<String>> = report
            .by_tracker
            .iter()
            .map(|b| {
                vec![
                    b.tracker_name.clone(),
                    b.count.to_string(),
                    format_currency(b.total, &currency),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Tracker", "Count", "Total"], rows));
    }
    Ok(())
}

fn monthly(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (year, month) = parse_year_month(sub.get_one::<String>("month").unwrap())?;
    let currency = store.preferences().currency.clone();

    let report = monthly_report(store.expenses(), store.trackers(), month, year);

    if !maybe_print_json(json_flag, jsonl_flag, &report)? {
        println!(
            "{} {}: total {}",
            report.month,
            report.year,
            format_currency(report.total_expenses, &currency)
        );
        let tracker_rows: Vec<Vec<String>> = report
            .by_tracker
            .iter()
            .map(|b| {
                vec![
                    b.tracker_name.clone(),
                    b.count.to_string(),
                    format_currency(b.total, &currency),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Tracker", "Count", "Total"], tracker_rows)
        );
        let category_rows: Vec<Vec<String>> = report
            .by_category
            .iter()
            .map(|c| vec![c.category.clone(), format_currency(c.total, &currency)])
            .collect();
        println!("{}", pretty_table(&["Category", "Total"], category_rows));
    }
    Ok(())
}

fn budget(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let currency = store.preferences().currency.clone();
    let expenses = store.expenses();

    let today = Local::now().date_naive();
    let month_expenses: Vec<_> = expenses
        .iter()
        .filter(|e| e.date.month() == today.month() && e.date.year() == today.year())
        .cloned()
        .collect();

    let mut data = Vec::new();
    for tracker in store.trackers() {
        let Some(limit) = tracker.budget_limit else {
            continue;
        };
        let spent = tracker_month_total(&tracker.id, expenses);
        let progress = budget_progress(tracker, &month_expenses);
        data.push(vec![
            tracker.name.clone(),
            format_currency(spent, &currency),
            format_currency(limit, &currency),
            format!("{:.1}%", progress),
        ]);
    }

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!(
            "{}",
            pretty_table(&["Tracker", "Spent (month)", "Limit", "Progress"], data)
        );
    }
    Ok(())
}
