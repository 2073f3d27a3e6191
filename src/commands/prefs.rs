// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::{ExpenseStore, PreferencesPatch};
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(store: &mut ExpenseStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(store, sub)?,
        Some(("set", sub)) => set(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn show(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let prefs = store.preferences();
    if !maybe_print_json(json_flag, jsonl_flag, prefs)? {
        println!(
            "{}",
            pretty_table(
                &["Currency", "Date Format"],
                vec![vec![prefs.currency.clone(), prefs.date_format.clone()]],
            )
        );
    }
    Ok(())
}

fn set(store: &mut ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let patch = PreferencesPatch {
        currency: sub.get_one::<String>("currency").cloned(),
        date_format: sub.get_one::<String>("date-format").cloned(),
    };
    let updated = store.update_preferences(patch)?;
    println!(
        "Preferences: currency={}, date format={}",
        updated.currency, updated.date_format
    );
    Ok(())
}
