// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use chrono::{Datelike, Local};
use serde::Serialize;

use crate::dates::{format_currency, format_date, parse_year_month};
use crate::models::Expense;
use crate::store::{ExpenseStore, ExpensePatch};
use crate::utils::{maybe_print_json, new_id, parse_date, parse_decimal, pretty_table};
use crate::validate::{message, validate_expense};

pub fn handle(store: &mut ExpenseStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("update", sub)) => update(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let tracker_id = sub.get_one::<String>("tracker").unwrap().clone();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let description = sub.get_one::<String>("description").unwrap().clone();
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };

    let tracker = store
        .trackers()
        .iter()
        .find(|t| t.id == tracker_id)
        .cloned();
    let Some(tracker) = tracker else {
        bail!("Tracker '{}' not found", tracker_id);
    };

    let mut custom_field_values: BTreeMap<String, String> = BTreeMap::new();
    if let Some(pairs) = sub.get_many::<String>("field") {
        for pair in pairs {
            match pair.split_once('=') {
                Some((name, value)) => {
                    custom_field_values.insert(name.to_string(), value.to_string());
                }
                None => bail!("Invalid custom field '{}', expected name=value", pair),
            }
        }
    }

    let expense = Expense {
        id: new_id(),
        tracker_id,
        amount,
        date,
        description,
        category: sub.get_one::<String>("category").cloned(),
        payment_method: sub.get_one::<String>("method").cloned(),
        tags: sub
            .get_many::<String>("tag")
            .map(|vs| vs.cloned().collect()),
        custom_field_values: if custom_field_values.is_empty() {
            None
        } else {
            Some(custom_field_values)
        },
    };
    if let Err(errors) = validate_expense(&expense) {
        bail!("{}", message(&errors));
    }

    let stored = store.add_expense(expense)?;
    let currency = store.preferences().currency.clone();
    println!(
        "Recorded {} on {} under '{}'",
        format_currency(stored.amount, &currency),
        stored.date,
        tracker.name
    );
    Ok(())
}

#[derive(Serialize)]
struct ExpenseRow {
    id: String,
    date: String,
    tracker: String,
    amount: String,
    category: String,
    description: String,
    method: String,
}

fn list(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let currency = store.preferences().currency.clone();
    let date_format = store.preferences().date_format.clone();

    let month = match sub.get_one::<String>("month") {
        Some(s) => Some(parse_year_month(s)?),
        None => None,
    };
    let tracker_filter = sub.get_one::<String>("tracker");

    let mut expenses: Vec<&Expense> = store
        .expenses()
        .iter()
        .filter(|e| tracker_filter.is_none_or(|id| &e.tracker_id == id))
        .filter(|e| month.is_none_or(|(year, m)| e.date.year() == year && e.date.month() == m))
        .collect();
    expenses.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        expenses.truncate(*limit);
    }

    let data: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| {
            let tracker_name = store
                .trackers()
                .iter()
                .find(|t| t.id == e.tracker_id)
                .map(|t| t.name.clone())
                .unwrap_or_else(|| e.tracker_id.clone());
            ExpenseRow {
                id: e.id.clone(),
                date: format_date(e.date, &date_format),
                tracker: tracker_name,
                amount: format_currency(e.amount, &currency),
                category: e.category.clone().unwrap_or_default(),
                description: e.description.clone(),
                method: e.payment_method.clone().unwrap_or_default(),
            }
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .into_iter()
            .map(|r| {
                vec![
                    r.id,
                    r.date,
                    r.tracker,
                    r.amount,
                    r.category,
                    r.description,
                    r.method,
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &[
                    "ID",
                    "Date",
                    "Tracker",
                    "Amount",
                    "Category",
                    "Description",
                    "Method"
                ],
                rows
            )
        );
    }
    Ok(())
}

fn update(store: &mut ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut patch = ExpensePatch::default();
    if let Some(amount) = sub.get_one::<String>("amount") {
        let amount = parse_decimal(amount)?;
        if amount <= rust_decimal::Decimal::ZERO {
            bail!("amount must be greater than zero");
        }
        patch.amount = Some(amount);
    }
    if let Some(date) = sub.get_one::<String>("date") {
        patch.date = Some(parse_date(date)?);
    }
    if let Some(description) = sub.get_one::<String>("description") {
        if description.trim().is_empty() {
            bail!("description must not be empty");
        }
        patch.description = Some(description.clone());
    }
    if let Some(category) = sub.get_one::<String>("category") {
        patch.category = Some(category.clone());
    }
    if let Some(method) = sub.get_one::<String>("method") {
        patch.payment_method = Some(method.clone());
    }
    if let Some(tags) = sub.get_many::<String>("tag") {
        patch.tags = Some(tags.cloned().collect());
    }

    let updated = store.update_expense(id, patch)?;
    println!("Updated expense '{}'", updated.id);
    Ok(())
}

fn rm(store: &mut ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    store.delete_expense(id)?;
    println!("Removed expense '{}'", id);
    Ok(())
}
