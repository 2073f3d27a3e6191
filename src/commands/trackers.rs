// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use chrono::{Datelike, Local, Utc};
use serde::Serialize;

use crate::calc::{budget_progress, tracker_month_total};
use crate::dates::format_currency;
use crate::models::{Frequency, Tracker};
use crate::store::{ExpenseStore, TrackerPatch};
use crate::utils::{maybe_print_json, new_id, parse_decimal, pretty_table};
use crate::validate::{message, validate_tracker};

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

fn parse_frequency(s: &str) -> Result<Frequency> {
    Frequency::parse(s).ok_or_else(|| anyhow::anyhow!("Invalid frequency '{}'", s))
}

fn add(store: &mut ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let category = sub.get_one::<String>("category").unwrap().clone();
    let mut frequency = parse_frequency(sub.get_one::<String>("frequency").unwrap())?;
    let mut color = sub.get_one::<String>("color").unwrap().clone();
    let mut icon = sub.get_one::<String>("icon").unwrap().clone();
    let mut custom_fields: Vec<String> = sub
        .get_many::<String>("field")
        .map(|vs| vs.cloned().collect())
        .unwrap_or_default();

    // Template pre-fill; flags given on the command line still win.
    if let Some(template_id) = sub.get_one::<String>("template") {
        let template = store
            .templates()
            .iter()
            .find(|t| &t.id == template_id)
            .cloned();
        match template {
            Some(t) => {
                if sub.value_source("frequency") != Some(clap::parser::ValueSource::CommandLine) {
                    frequency = t.frequency;
                }
                if sub.value_source("color") != Some(clap::parser::ValueSource::CommandLine) {
                    color = t.color;
                }
                if sub.value_source("icon") != Some(clap::parser::ValueSource::CommandLine) {
                    icon = t.icon;
                }
                if custom_fields.is_empty() {
                    custom_fields = t.suggested_fields;
                }
            }
            None => bail!("Template '{}' not found", template_id),
        }
    }

    let budget_limit = match sub.get_one::<String>("budget") {
        Some(s) => Some(parse_decimal(s)?),
        None => None,
    };

    let tracker = Tracker {
        id: new_id(),
        name,
        category,
        frequency,
        custom_fields,
        budget_limit,
        color,
        icon,
        created_at: Utc::now(),
        is_active: true,
    };
    if let Err(errors) = validate_tracker(&tracker) {
        bail!("{}", message(&errors));
    }

    let stored = store.add_tracker(tracker)?;
    println!("Added tracker '{}' ({})", stored.name, stored.id);
    Ok(())
}

#[derive(Serialize)]
struct TrackerRow {
    id: String,
    name: String,
    category: String,
    frequency: String,
    budget: String,
    active: bool,
    month_spend: String,
    progress: String,
}

fn list(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let currency = store.preferences().currency.clone();
    let expenses = store.expenses();

    // Budget progress on tracker listings is always "this month".
    let today = Local::now().date_naive();
    let month_expenses: Vec<_> = expenses
        .iter()
        .filter(|e| e.date.month() == today.month() && e.date.year() == today.year())
        .cloned()
        .collect();

    let mut data = Vec::new();
    for tracker in store.trackers() {
        let month_spend = tracker_month_total(&tracker.id, expenses);
        let progress = budget_progress(tracker, &month_expenses);
        data.push(TrackerRow {
            id: tracker.id.clone(),
            name: tracker.name.clone(),
            category: tracker.category.clone(),
            frequency: tracker.frequency.as_str().to_string(),
            budget: tracker
                .budget_limit
                .map(|l| format_currency(l, &currency))
                .unwrap_or_default(),
            active: tracker.is_active,
            month_spend: format_currency(month_spend, &currency),
            progress: if tracker.budget_limit.is_some() {
                format!("{:.1}%", progress)
            } else {
                String::new()
            },
        });
    }

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .into_iter()
            .map(|r| {
                vec![
                    r.id,
                    r.name,
                    r.category,
                    r.frequency,
                    r.budget,
                    if r.active { "yes".into() } else { "no".into() },
                    r.month_spend,
                    r.progress,
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &[
                    "ID",
                    "Name",
                    "Category",
                    "Frequency",
                    "Budget",
                    "Active",
                    "This Month",
                    "Progress"
                ],
                rows
            )
        );
    }
    Ok(())
}

fn update(store: &mut ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut patch = TrackerPatch::default();
    if let Some(name) = sub.get_one::<String>("name") {
        if name.trim().is_empty() {
            bail!("tracker name must not be empty");
        }
        patch.name = Some(name.clone());
    }
    if let Some(category) = sub.get_one::<String>("category") {
        patch.category = Some(category.clone());
    }
    if let Some(frequency) = sub.get_one::<String>("frequency") {
        patch.frequency = Some(parse_frequency(frequency)?);
    }
    if let Some(budget) = sub.get_one::<String>("budget") {
        let budget = parse_decimal(budget)?;
        if budget < rust_decimal::Decimal::ZERO {
            bail!("budget limit must not be negative");
        }
        patch.budget_limit = Some(budget);
    }
    if let Some(color) = sub.get_one::<String>("color") {
        patch.color = Some(color.clone());
    }
    if let Some(icon) = sub.get_one::<String>("icon") {
        patch.icon = Some(icon.clone());
    }
    if let Some(fields) = sub.get_many::<String>("field") {
        let fields: Vec<String> = fields.cloned().collect();
        let mut seen = std::collections::HashSet::new();
        for field in &fields {
            if !seen.insert(field.as_str()) {
                bail!("duplicate custom field '{}'", field);
            }
        }
        patch.custom_fields = Some(fields);
    }
    if let Some(active) = sub.get_one::<String>("active") {
        patch.is_active = Some(active == "true");
    }

    let updated = store.update_tracker(id, patch)?;
    println!("Updated tracker '{}'", updated.name);
    Ok(())
}

fn rm(store: &mut ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let before = store.expenses().len();
    store.delete_tracker(id)?;
    let removed = before - store.expenses().len();
    println!("Removed tracker '{}' and {} expense(s)", id, removed);
    Ok(())
}
