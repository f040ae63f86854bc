// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::Result;
use chrono::Local;
use tracing_subscriber::EnvFilter;

use paycheck::{app::App, cli, commands, db};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let path = db::db_path(matches.get_one::<String>("db").map(Path::new))?;
    let kv = db::KvStore::open(&path)?;
    let mut app = App::open(kv, Local::now())?;

    let sub_name = matches.subcommand_name().unwrap_or_default().to_string();
    if sub_name != "init" && !app.onboarding_complete()? {
        eprintln!("Tip: run `paycheck init --salary <amount>` to finish setup");
    }

    match matches.subcommand() {
        Some(("init", sub)) => commands::onboarding::handle(&mut app, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut app, sub)?,
        Some(("report", sub)) => commands::reports::handle(&mut app, sub)?,
        Some(("remind", _)) => commands::reminders::handle(&mut app)?,
        Some(("overtime", sub)) => commands::overtime::handle(&mut app, sub)?,
        Some(("calc", sub)) => commands::calc::handle(&mut app, sub)?,
        Some(("settings", sub)) => commands::settings::handle(&mut app, sub)?,
        Some(("group", sub)) => commands::groups::handle(&mut app, sub)?,
        Some(("currency", sub)) => commands::settings::handle_currency(sub)?,
        Some(("export", sub)) => commands::exporter::handle(&app, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }

    // Salary changes are debounced; apply them before the process goes away.
    if let Some(outcome) = app.flush()? {
        tracing::info!(?outcome, "pending salary sync applied");
    }

    if sub_name != "remind" {
        if let Some(toast) = app.check_reminders()? {
            eprintln!("🔔 {}", toast.message);
        }
    }
    Ok(())
}
