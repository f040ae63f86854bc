// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::commands::month_or;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(app, sub)?,
        Some(("calendar", sub)) => calendar(app, sub)?,
        Some(("upcoming", sub)) => upcoming(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = month_or(sub, app.view())?;
    app.set_view(month);
    let stats = app.stats();
    if !maybe_print_json(json_flag, jsonl_flag, &stats)? {
        let data = vec![vec![
            month.to_string(),
            app.money(stats.income),
            app.money(stats.expense),
            app.money(stats.balance),
        ]];
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expense", "Balance"], data)
        );
    }
    Ok(())
}

fn calendar(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = month_or(sub, app.view())?;
    app.set_view(month);
    let cal = app.calendar();
    if maybe_print_json(json_flag, jsonl_flag, &cal)? {
        return Ok(());
    }

    // Monday-first grid; each cell shows the day and rounded in/out totals.
    let mut cells: Vec<String> = (0..cal.leading_blanks).map(|_| String::new()).collect();
    for d in &cal.days {
        let mut cell = if d.is_today {
            format!("[{}]", d.day)
        } else {
            d.day.to_string()
        };
        if d.income > rust_decimal::Decimal::ZERO {
            cell.push_str(&format!("\n+{}", d.income.round()));
        }
        if d.expense > rust_decimal::Decimal::ZERO {
            cell.push_str(&format!("\n-{}", d.expense.round()));
        }
        cells.push(cell);
    }
    while cells.len() % 7 != 0 {
        cells.push(String::new());
    }
    let rows: Vec<Vec<String>> = cells.chunks(7).map(|w| w.to_vec()).collect();
    let headers: &[&str] = if app.settings().language == "tr" {
        &["Pzt", "Sal", "Çar", "Per", "Cum", "Cmt", "Paz"]
    } else {
        &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
    };
    println!("{}", month);
    println!("{}", pretty_table(headers, rows));
    let label = if app.settings().language == "tr" {
        "Bu ay mesai"
    } else {
        "Overtime this month"
    };
    println!("{}: {}", label, app.money(cal.overtime));
    Ok(())
}

fn upcoming(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let items = app.upcoming();
    if !maybe_print_json(json_flag, jsonl_flag, &items)? {
        let data: Vec<Vec<String>> = items
            .iter()
            .map(|t| {
                vec![
                    t.day().map(|d| d.to_string()).unwrap_or_default(),
                    t.title.clone(),
                    app.money(t.amount),
                    if t.alert { "yes".into() } else { String::new() },
                ]
            })
            .collect();
        println!(
            "Due within {} days",
            app.settings().reminder_days
        );
        println!("{}", pretty_table(&["Date", "Title", "Amount", "Alert"], data));
    }
    Ok(())
}
