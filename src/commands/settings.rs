// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::Instant;

use crate::app::App;
use crate::commands::gate;
use crate::settings::CURRENCIES;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(app, sub)?,
        Some(("set", sub)) => set(app, sub)?,
        Some(("reset", sub)) => reset(app, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn handle_currency(m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", _)) = m.subcommand() {
        let data = CURRENCIES
            .iter()
            .map(|c| vec![c.code.clone(), c.symbol.clone(), c.name.clone()])
            .collect();
        println!("{}", pretty_table(&["Code", "Symbol", "Name"], data));
    }
    Ok(())
}

fn show(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let s = app.settings();
    if maybe_print_json(json_flag, jsonl_flag, s)? {
        return Ok(());
    }
    let holidays = s
        .holiday_days
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let rows = vec![
        vec!["language".into(), s.language.clone()],
        vec!["currency".into(), format!("{} ({})", s.currency.code, s.currency.symbol)],
        vec!["dark-mode".into(), s.dark_mode.to_string()],
        vec!["reminder-days".into(), s.reminder_days.to_string()],
        vec!["holidays".into(), holidays],
        vec!["salary".into(), s.salary.clone()],
        vec!["salary-day".into(), s.salary_day.to_string()],
        vec!["work-hours".into(), s.work_hours.to_string()],
        vec!["notifications".into(), s.notifications.to_string()],
        vec!["groups".into(), s.groups.join(", ")],
        vec!["onboarding".into(), app.onboarding_complete()?.to_string()],
    ];
    println!("{}", pretty_table(&["Setting", "Value"], rows));
    Ok(())
}

fn set(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let now = Instant::now();
    let mut changed = Vec::new();

    if let Some(code) = sub.get_one::<String>("language") {
        app.set_language(code)?;
        changed.push("language");
    }
    if let Some(code) = sub.get_one::<String>("currency") {
        if gate(app.set_currency(code))?.is_some() {
            changed.push("currency");
        }
    }
    if let Some(on) = sub.get_one::<bool>("dark-mode") {
        app.set_dark_mode(*on)?;
        changed.push("dark-mode");
    }
    if let Some(days) = sub.get_one::<u32>("reminder-days") {
        app.set_reminder_days(*days)?;
        changed.push("reminder-days");
    }
    if let Some(days) = sub.get_many::<u32>("holidays") {
        app.set_holidays(days.copied().collect())?;
        changed.push("holidays");
    }
    if let Some(day) = sub.get_one::<u32>("toggle-holiday") {
        app.toggle_holiday(*day)?;
        changed.push("holidays");
    }
    if let Some(hours) = sub.get_one::<u32>("work-hours") {
        app.set_work_hours(*hours)?;
        changed.push("work-hours");
    }
    if let Some(on) = sub.get_one::<bool>("notifications") {
        app.set_notifications(*on)?;
        changed.push("notifications");
    }
    if let Some(raw) = sub.get_one::<String>("salary") {
        app.set_salary(raw, now)?;
        changed.push("salary");
    }
    if let Some(day) = sub.get_one::<u32>("salary-day") {
        app.set_salary_day(*day, now)?;
        changed.push("salary-day");
    }

    if changed.is_empty() {
        println!("Nothing to change");
    } else {
        println!("Updated {}", changed.join(", "));
    }
    Ok(())
}

fn reset(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    if !sub.get_flag("yes") {
        println!("This deletes every transaction and setting. Re-run with --yes to confirm.");
        return Ok(());
    }
    app.reset()?;
    println!("All data cleared");
    Ok(())
}
