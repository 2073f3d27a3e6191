// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use trackly::store::ExpenseStore;
use trackly::{cli, commands, storage};

fn main() -> Result<()> {
    env_logger::init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let provider = storage::default_provider()?;
    let mut store = ExpenseStore::new(provider);
    store.initialize()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Store initialized ({})", store.backend_description());
        }
        Some(("tracker", sub)) => commands::trackers::handle(&mut store, sub)?,
        Some(("expense", sub)) => commands::expenses::handle(&mut store, sub)?,
        Some(("template", sub)) => commands::templates::handle(&mut store, sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        Some(("prefs", sub)) => commands::prefs::handle(&mut store, sub)?,
        Some(("seed", sub)) => commands::seed::handle(&mut store, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
