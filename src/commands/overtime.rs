// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::commands::{date_or, gate};
use crate::engine::calculators::Multiplier;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("calc", sub)) => calc(app, sub)?,
        Some(("add", sub)) => add(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn inputs(sub: &clap::ArgMatches) -> Result<(Multiplier, u32, u32)> {
    let multiplier = Multiplier::parse(
        sub.get_one::<String>("multiplier")
            .map(String::as_str)
            .unwrap_or("1.5"),
    )?;
    let hours = sub.get_one::<u32>("hours").copied().unwrap_or(0);
    let minutes = sub.get_one::<u32>("minutes").copied().unwrap_or(0);
    Ok((multiplier, hours, minutes))
}

fn calc(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let Some((multiplier, hours, minutes)) = gate(inputs(sub))? else {
        return Ok(());
    };
    let Some(q) = gate(app.overtime_quote(multiplier, hours, minutes).map_err(Into::into))? else {
        return Ok(());
    };
    let data = vec![vec![
        app.money(q.hourly_rate),
        multiplier.factor().to_string(),
        q.total_hours.round_dp(2).to_string(),
        app.money(q.amount),
    ]];
    println!(
        "{}",
        pretty_table(&["Hourly", "Multiplier", "Hours", "Overtime pay"], data)
    );
    Ok(())
}

fn add(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let Some((multiplier, hours, minutes)) = gate(inputs(sub))? else {
        return Ok(());
    };
    let Some(date) = gate(date_or(sub, app.today()))? else {
        return Ok(());
    };
    if let Some(tx) = gate(app.save_overtime(date, multiplier, hours, minutes))? {
        println!(
            "Recorded '{}' {} on {} (id {})",
            tx.title,
            app.money(tx.amount),
            date,
            tx.id
        );
    }
    Ok(())
}
