// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::commands::{date_or, gate};
use crate::models::Month;
use crate::utils::{parse_amount, pretty_table};
use anyhow::Result;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("workdays", sub)) = m.subcommand() {
        workdays(app, sub)?;
    }
    Ok(())
}

fn workdays(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let per_day = sub
        .get_one::<String>("amount")
        .map(|s| parse_amount(s))
        .unwrap_or_default();
    let Some(date) = gate(date_or(sub, app.today()))? else {
        return Ok(());
    };
    let Some(projection) = gate(app.project_workdays(per_day, date).map_err(Into::into))? else {
        return Ok(());
    };
    match projection {
        Some(p) => {
            let data = vec![vec![
                Month::of(date).to_string(),
                app.money(per_day),
                p.work_days.to_string(),
                app.money(p.total),
            ]];
            println!(
                "{}",
                pretty_table(&["Month", "Per day", "Workdays", "Total"], data)
            );
        }
        None => println!("Enter a positive daily amount"),
    }
    Ok(())
}
