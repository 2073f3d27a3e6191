// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print JSON instead of a table")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print JSON lines instead of a table")
            .action(ArgAction::SetTrue),
    )
}

pub fn build_cli() -> Command {
    command!()
        .about("Trackly: personal expense trackers, budget progress, and dashboard reports")
        .subcommand(Command::new("init").about("Initialize the store and show where data lives"))
        .subcommand(
            Command::new("tracker")
                .about("Manage trackers (budget categories)")
                .subcommand(
                    Command::new("add")
                        .about("Create a tracker")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("frequency")
                                .long("frequency")
                                .default_value("monthly")
                                .help("daily|weekly|monthly|quarterly|seasonal|yearly|custom"),
                        )
                        .arg(Arg::new("budget").long("budget").help("Budget limit"))
                        .arg(Arg::new("color").long("color").default_value("#3B82F6"))
                        .arg(Arg::new("icon").long("icon").default_value("wallet"))
                        .arg(
                            Arg::new("field")
                                .long("field")
                                .action(ArgAction::Append)
                                .help("Custom field name (repeatable)"),
                        )
                        .arg(
                            Arg::new("template")
                                .long("template")
                                .help("Template id to pre-fill from"),
                        ),
                )
                .subcommand(
                    json_flags(Command::new("list").about("List trackers with budget progress")),
                )
                .subcommand(
                    Command::new("update")
                        .about("Update fields of a tracker")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("frequency").long("frequency"))
                        .arg(Arg::new("budget").long("budget"))
                        .arg(Arg::new("color").long("color"))
                        .arg(Arg::new("icon").long("icon"))
                        .arg(
                            Arg::new("field")
                                .long("field")
                                .action(ArgAction::Append)
                                .help("Replace the custom field list (repeatable)"),
                        )
                        .arg(
                            Arg::new("active")
                                .long("active")
                                .value_parser(["true", "false"]),
                        ),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a tracker and all of its expenses")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("expense")
                .about("Record and manage expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record an expense against a tracker")
                        .arg(Arg::new("tracker").required(true).help("Tracker id"))
                        .arg(Arg::new("amount").required(true))
                        .arg(Arg::new("description").required(true))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD, default today"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("method").long("method").help("Payment method"))
                        .arg(
                            Arg::new("tag")
                                .long("tag")
                                .action(ArgAction::Append)
                                .help("Tag (repeatable)"),
                        )
                        .arg(
                            Arg::new("field")
                                .long("field")
                                .action(ArgAction::Append)
                                .help("Custom field value as name=value (repeatable)"),
                        ),
                )
                .subcommand(
                    json_flags(Command::new("list").about("List expenses, newest first"))
                        .arg(Arg::new("tracker").long("tracker").help("Filter by tracker id"))
                        .arg(Arg::new("month").long("month").help("Filter by month YYYY-MM"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )
                .subcommand(
                    Command::new("update")
                        .about("Update fields of an expense")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("date").long("date"))
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("method").long("method"))
                        .arg(Arg::new("tag").long("tag").action(ArgAction::Append)),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete an expense")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("template")
                .about("Tracker templates")
                .subcommand(json_flags(Command::new("list").about("List the template catalog")))
                .subcommand(
                    Command::new("add")
                        .about("Add a template to the catalog")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("frequency")
                                .long("frequency")
                                .default_value("monthly"),
                        )
                        .arg(
                            Arg::new("field")
                                .long("field")
                                .action(ArgAction::Append)
                                .help("Suggested field name (repeatable)"),
                        )
                        .arg(Arg::new("icon").long("icon").default_value("wallet"))
                        .arg(Arg::new("color").long("color").default_value("#3B82F6")),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregated dashboards")
                .subcommand(json_flags(
                    Command::new("overview")
                        .about("Today / this week / this month totals and tracker breakdown"),
                ))
                .subcommand(
                    json_flags(Command::new("monthly").about("Full report for one month"))
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .required(true)
                                .help("Month as YYYY-MM"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("budget").about("Per-tracker budget progress for this month"),
                )),
        )
        .subcommand(
            Command::new("prefs")
                .about("Display preferences")
                .subcommand(json_flags(Command::new("show").about("Show preferences")))
                .subcommand(
                    Command::new("set")
                        .about("Set preferences")
                        .arg(Arg::new("currency").long("currency"))
                        .arg(
                            Arg::new("date-format")
                                .long("date-format")
                                .help("DD/MM/YYYY, MM/DD/YYYY, YYYY-MM-DD or DD-MM-YYYY"),
                        ),
                ),
        )
        .subcommand(
            Command::new("seed")
                .about("Insert demo trackers and randomly generated expenses")
                .arg(
                    Arg::new("count")
                        .long("count")
                        .default_value("10")
                        .value_parser(value_parser!(usize))
                        .help("Number of demo expenses"),
                ),
        )
        .subcommand(Command::new("doctor").about("Check stored data for inconsistencies"))
}
