// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::seed::seed_demo_data;
use crate::store::ExpenseStore;

pub fn handle(store: &mut ExpenseStore, m: &clap::ArgMatches) -> Result<()> {
    let count = *m.get_one::<usize>("count").unwrap_or(&10);
    let summary = seed_demo_data(store, count)?;
    println!(
        "Added {} tracker(s) ({} already present) and {} expense(s)",
        summary.trackers_added, summary.trackers_skipped, summary.expenses_added
    );
    Ok(())
}
