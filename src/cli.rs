// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    )
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Month to show (defaults to the current month)")
}

fn tx_fields(cmd: Command, required: bool) -> Command {
    cmd.arg(Arg::new("title").long("title").required(required))
        .arg(
            Arg::new("amount")
                .long("amount")
                .required(required)
                .help("Amount, e.g. 5000 or 5.000,50"),
        )
        .arg(
            Arg::new("date")
                .long("date")
                .value_name("YYYY-MM-DD")
                .help("Defaults to today"),
        )
        .arg(
            Arg::new("type")
                .long("type")
                .value_parser(["income", "expense"])
                .help("Defaults to expense"),
        )
        .arg(Arg::new("group").long("group").help("Group name; empty for none"))
        .arg(
            Arg::new("alert")
                .long("alert")
                .action(ArgAction::SetTrue)
                .help("Remind before the due date"),
        )
        .arg(
            Arg::new("recurring")
                .long("recurring")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("frequency")
                .long("frequency")
                .value_parser(["daily", "weekly", "monthly"])
                .default_value("monthly"),
        )
        .arg(
            Arg::new("duration")
                .long("duration")
                .value_parser(value_parser!(u32).range(1..))
                .default_value("1"),
        )
        .arg(
            Arg::new("weekdays-only")
                .long("weekdays-only")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("per-workday")
                .long("per-workday")
                .action(ArgAction::SetTrue)
                .help("Treat the amount as a daily rate and multiply by the month's workdays"),
        )
}

fn overtime_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("hours")
            .long("hours")
            .value_parser(value_parser!(u32))
            .default_value("1"),
    )
    .arg(
        Arg::new("minutes")
            .long("minutes")
            .value_parser(value_parser!(u32).range(0..60))
            .default_value("0"),
    )
    .arg(
        Arg::new("multiplier")
            .long("multiplier")
            .default_value("1.5")
            .help("1.5 or 2"),
    )
    .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
}

pub fn build_cli() -> Command {
    Command::new("paycheck")
        .about("Track income and expenses, salary, reminders and overtime")
        .version(clap::crate_version!())
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_name("PATH")
                .help("Database file (overrides PAYCHECK_DB)"),
        )
        .subcommand(
            Command::new("init")
                .about("First-run setup")
                .arg(Arg::new("salary").long("salary"))
                .arg(
                    Arg::new("salary-day")
                        .long("salary-day")
                        .value_parser(value_parser!(u32).range(1..=31)),
                )
                .arg(
                    Arg::new("work-hours")
                        .long("work-hours")
                        .value_parser(value_parser!(u32)),
                )
                .arg(Arg::new("currency").long("currency"))
                .arg(Arg::new("language").long("language"))
                .arg(
                    Arg::new("skip")
                        .long("skip")
                        .action(ArgAction::SetTrue)
                        .help("Skip setup without syncing salary"),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(tx_fields(Command::new("add"), true))
                .subcommand(tx_fields(
                    Command::new("edit")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(
                            Arg::new("no-alert")
                                .long("no-alert")
                                .action(ArgAction::SetTrue)
                                .conflicts_with("alert"),
                        )
                        .arg(
                            Arg::new("no-recurring")
                                .long("no-recurring")
                                .action(ArgAction::SetTrue)
                                .conflicts_with("recurring"),
                        ),
                    false,
                ))
                .subcommand(
                    Command::new("rm").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                )
                .subcommand(json_flags(Command::new("list").arg(month_arg()))),
        )
        .subcommand(
            Command::new("report")
                .about("Monthly views")
                .subcommand(json_flags(Command::new("summary").arg(month_arg())))
                .subcommand(json_flags(Command::new("calendar").arg(month_arg())))
                .subcommand(json_flags(Command::new("upcoming"))),
        )
        .subcommand(Command::new("remind").about("Raise a reminder for a due expense"))
        .subcommand(
            Command::new("overtime")
                .about("Overtime pay")
                .subcommand(overtime_args(Command::new("calc")))
                .subcommand(overtime_args(Command::new("add"))),
        )
        .subcommand(
            Command::new("calc").about("Calculators").subcommand(
                Command::new("workdays")
                    .arg(Arg::new("amount").long("amount").required(true))
                    .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD")),
            ),
        )
        .subcommand(
            Command::new("settings")
                .about("Preferences")
                .subcommand(json_flags(Command::new("show")))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("language").long("language"))
                        .arg(Arg::new("currency").long("currency"))
                        .arg(
                            Arg::new("dark-mode")
                                .long("dark-mode")
                                .value_parser(value_parser!(bool)),
                        )
                        .arg(
                            Arg::new("reminder-days")
                                .long("reminder-days")
                                .value_parser(value_parser!(u32)),
                        )
                        .arg(
                            Arg::new("holidays")
                                .long("holidays")
                                .value_delimiter(',')
                                .value_parser(value_parser!(u32).range(0..7))
                                .help("Weekday indices off work, 0=Sunday..6=Saturday"),
                        )
                        .arg(
                            Arg::new("toggle-holiday")
                                .long("toggle-holiday")
                                .value_name("WEEKDAY")
                                .value_parser(value_parser!(u32).range(0..7))
                                .conflicts_with("holidays")
                                .help("Flip one weekday in or out of the holiday set"),
                        )
                        .arg(
                            Arg::new("salary-day")
                                .long("salary-day")
                                .value_parser(value_parser!(u32).range(1..=31)),
                        )
                        .arg(
                            Arg::new("work-hours")
                                .long("work-hours")
                                .value_parser(value_parser!(u32)),
                        )
                        .arg(
                            Arg::new("notifications")
                                .long("notifications")
                                .value_parser(value_parser!(bool)),
                        )
                        .arg(Arg::new("salary").long("salary")),
                )
                .subcommand(
                    Command::new("reset").arg(
                        Arg::new("yes")
                            .long("yes")
                            .action(ArgAction::SetTrue)
                            .help("Confirm wiping all data"),
                    ),
                ),
        )
        .subcommand(
            Command::new("group")
                .about("Transaction groups")
                .subcommand(Command::new("add").arg(Arg::new("name").required(true)))
                .subcommand(Command::new("list")),
        )
        .subcommand(
            Command::new("currency")
                .about("Supported currencies")
                .subcommand(Command::new("list")),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("transactions")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .value_parser(["csv", "json"])
                                .default_value("csv"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
}
