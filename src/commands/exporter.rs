// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::models::Transaction;
use crate::utils::parse_instant;
use anyhow::{Context, Result};
use std::path::Path;

pub fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(app, sub),
        _ => Ok(()),
    }
}

fn export_transactions(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "csv".to_string());
    let out = sub
        .get_one::<String>("out")
        .context("--out is required")?;

    let mut rows: Vec<&Transaction> = app.transactions().iter().collect();
    rows.sort_by_key(|t| (parse_instant(&t.date), t.id));

    match fmt.as_str() {
        "csv" => write_csv(Path::new(out), &rows)?,
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&rows)?)
                .with_context(|| format!("Write {}", out))?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} transactions to {}", rows.len(), out);
    Ok(())
}

pub fn write_csv(path: &Path, rows: &[&Transaction]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Create {}", path.display()))?;
    wtr.write_record([
        "id",
        "date",
        "title",
        "type",
        "amount",
        "category",
        "group",
        "recurring",
        "alert",
    ])?;
    for t in rows {
        wtr.write_record([
            t.id.to_string(),
            t.day().map(|d| d.to_string()).unwrap_or_else(|| t.date.clone()),
            t.title.clone(),
            t.r#type.to_string(),
            t.amount.to_string(),
            t.category.clone(),
            t.group.clone().unwrap_or_default(),
            t.recurring.to_string(),
            t.alert.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
