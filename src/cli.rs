// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print JSON lines"),
    ]
}

fn period_args() -> [Arg; 3] {
    [
        Arg::new("month")
            .long("month")
            .help("Calendar month YYYY-MM (default: current month)")
            .conflicts_with_all(["from", "to"]),
        Arg::new("from")
            .long("from")
            .help("Range start YYYY-MM-DD")
            .requires("to"),
        Arg::new("to")
            .long("to")
            .help("Range end YYYY-MM-DD, inclusive")
            .requires("from"),
    ]
}

fn id_arg() -> Arg {
    Arg::new("id").long("id").required(true)
}

pub fn build_cli() -> Command {
    Command::new("harvestbook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Farm records, financial reports, and field planning")
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("farm")
                .about("Manage farms")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("location").long("location").required(true))
                        .arg(Arg::new("size").long("size").required(true))
                        .arg(Arg::new("unit").long("unit").default_value("acres")),
                )
                .subcommand(Command::new("list").args(json_args()))
                .subcommand(Command::new("rm").arg(id_arg()))
                .subcommand(
                    Command::new("layout")
                        .about("Show the generated field layout")
                        .arg(id_arg())
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("assign")
                        .about("Assign a crop type to a field")
                        .arg(id_arg())
                        .arg(Arg::new("field").long("field").required(true))
                        .arg(Arg::new("crop").long("crop").required(true)),
                ),
        )
        .subcommand(
            Command::new("crop")
                .about("Manage crops")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("farm").long("farm").required(true))
                        .arg(Arg::new("type").long("type").required(true))
                        .arg(Arg::new("field").long("field").required(true))
                        .arg(Arg::new("planted").long("planted").required(true))
                        .arg(Arg::new("harvest").long("harvest").required(true))
                        .arg(Arg::new("status").long("status").default_value("planted"))
                        .arg(Arg::new("notes").long("notes")),
                )
                .subcommand(
                    Command::new("list")
                        .arg(Arg::new("farm").long("farm"))
                        .arg(Arg::new("status").long("status"))
                        .args(json_args()),
                )
                .subcommand(Command::new("rm").arg(id_arg())),
        )
        .subcommand(
            Command::new("task")
                .about("Manage tasks")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("farm").long("farm").required(true))
                        .arg(Arg::new("title").long("title").required(true))
                        .arg(Arg::new("type").long("type").default_value("other"))
                        .arg(Arg::new("due").long("due").required(true))
                        .arg(Arg::new("crop").long("crop"))
                        .arg(Arg::new("notes").long("notes")),
                )
                .subcommand(
                    Command::new("list")
                        .arg(Arg::new("status").long("status").default_value("all"))
                        .arg(Arg::new("due").long("due").help("Only tasks due on YYYY-MM-DD"))
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("done")
                        .about("Toggle a task between pending and completed")
                        .arg(id_arg()),
                )
                .subcommand(Command::new("rm").arg(id_arg())),
        )
        .subcommand(
            Command::new("tx")
                .about("Manage income and expense transactions")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("type").long("type").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("date").long("date").required(true))
                        .arg(Arg::new("farm").long("farm"))
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(
                    Command::new("list")
                        .args(period_args())
                        .arg(Arg::new("type").long("type"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .args(json_args()),
                )
                .subcommand(Command::new("rm").arg(id_arg()))
                .subcommand(
                    Command::new("categories")
                        .about("List the categories for a transaction type")
                        .arg(Arg::new("type").long("type").required(true)),
                ),
        )
        .subcommand(
            Command::new("inventory")
                .about("Manage inventory")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("stock")
                                .long("stock")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(
                            Arg::new("reorder")
                                .long("reorder")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("unit").long("unit").required(true))
                        .arg(Arg::new("cost").long("cost").default_value("0"))
                        .arg(Arg::new("supplier").long("supplier"))
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(
                    Command::new("list")
                        .arg(Arg::new("search").long("search"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("sort").long("sort").default_value("name"))
                        .args(json_args()),
                )
                .subcommand(Command::new("low").about("Items at or below reorder level"))
                .subcommand(Command::new("rm").arg(id_arg())),
        )
        .subcommand(
            Command::new("report")
                .about("Financial reports")
                .subcommand(
                    Command::new("summary")
                        .args(period_args())
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("export")
                        .args(period_args())
                        .arg(Arg::new("type").long("type"))
                        .arg(Arg::new("format").long("format").default_value("csv"))
                        .arg(Arg::new("out").long("out")),
                ),
        )
        .subcommand(
            Command::new("weather")
                .about("Current conditions, forecast and farming advice")
                .arg(
                    Arg::new("forecast")
                        .long("forecast")
                        .action(ArgAction::SetTrue),
                )
                .args(json_args()),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Farm overview")
                .args(json_args()),
        )
        .subcommand(
            Command::new("config")
                .about("Read or change settings")
                .subcommand(Command::new("get").arg(Arg::new("key").long("key").required(true)))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("key").long("key").required(true))
                        .arg(Arg::new("value").long("value").required(true)),
                ),
        )
}
