// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};

use crate::models::{Frequency, TrackerTemplate};
use crate::store::ExpenseStore;
use crate::utils::{maybe_print_json, new_id, pretty_table};

pub fn handle(store: &mut ExpenseStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(store, sub)?,
        Some(("add", sub)) => add(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn list(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let templates = store.templates();

    if !maybe_print_json(json_flag, jsonl_flag, &templates)? {
        let rows: Vec<Vec<String>> = templates
            .iter()
            .map(|t| {
                vec![
                    t.id.clone(),
                    t.name.clone(),
                    t.category.clone(),
                    t.frequency.as_str().to_string(),
                    t.suggested_fields.join(", "),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Name", "Category", "Frequency", "Fields"], rows)
        );
    }
    Ok(())
}

fn add(store: &mut ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    if name.is_empty() {
        bail!("template name must not be empty");
    }
    let frequency = sub.get_one::<String>("frequency").unwrap();
    let Some(frequency) = Frequency::parse(frequency) else {
        bail!("Invalid frequency '{}'", frequency);
    };

    let template = TrackerTemplate {
        id: new_id(),
        name: name.clone(),
        category: sub.get_one::<String>("category").unwrap().clone(),
        frequency,
        suggested_fields: sub
            .get_many::<String>("field")
            .map(|vs| vs.cloned().collect())
            .unwrap_or_default(),
        icon: sub.get_one::<String>("icon").unwrap().clone(),
        color: sub.get_one::<String>("color").unwrap().clone(),
    };
    store.add_template(template)?;
    println!("Added template '{}'", name);
    Ok(())
}
