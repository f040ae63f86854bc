// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::commands::{date_or, gate, month_or};
use crate::ledger::TxDraft;
use crate::models::{Frequency, GroupedTransactions, Recurrence, Transaction, TxType};
use crate::utils::{maybe_print_json, parse_amount, pretty_table};
use anyhow::Result;
use clap::parser::ValueSource;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(app, sub)?,
        Some(("edit", sub)) => edit(app, sub)?,
        Some(("rm", sub)) => remove(app, sub)?,
        Some(("list", sub)) => list(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn given(sub: &clap::ArgMatches, id: &str) -> bool {
    sub.value_source(id) == Some(ValueSource::CommandLine)
}

fn recurrence_from(sub: &clap::ArgMatches, current: Option<&Recurrence>) -> Recurrence {
    let mut r = current.cloned().unwrap_or(Recurrence {
        frequency: Frequency::Monthly,
        duration: 1,
        weekdays_only: false,
    });
    if current.is_none() || given(sub, "frequency") {
        if let Some(f) = sub
            .get_one::<String>("frequency")
            .and_then(|s| Frequency::parse(s))
        {
            r.frequency = f;
        }
    }
    if current.is_none() || given(sub, "duration") {
        if let Some(d) = sub.get_one::<u32>("duration") {
            r.duration = *d;
        }
    }
    if sub.get_flag("weekdays-only") {
        r.weekdays_only = true;
    }
    if r.frequency != Frequency::Daily {
        r.weekdays_only = false;
    }
    r
}

/// Build the form state from arguments, pre-filled from `current` when editing.
pub fn draft_from(
    app: &App,
    sub: &clap::ArgMatches,
    current: Option<&Transaction>,
) -> Result<TxDraft> {
    let title = match sub.get_one::<String>("title") {
        Some(t) => t.clone(),
        None => current.map(|c| c.title.clone()).unwrap_or_default(),
    };
    let amount = match sub.get_one::<String>("amount") {
        Some(a) => parse_amount(a),
        None => current.map(|c| c.amount).unwrap_or_default(),
    };
    let r#type = match sub.get_one::<String>("type").and_then(|s| TxType::parse(s)) {
        Some(t) => t,
        None => current.map_or(TxType::Expense, |c| c.r#type),
    };
    let fallback_date = current.and_then(|c| c.day()).unwrap_or(app.today());
    let date = Some(date_or(sub, fallback_date)?);
    let group = match sub.get_one::<String>("group") {
        Some(g) => Some(g.clone()),
        None => current.and_then(|c| c.group.clone()),
    };

    let alert = if sub.get_flag("alert") {
        true
    } else if sub.try_get_one::<bool>("no-alert").ok().flatten() == Some(&true) {
        false
    } else {
        current.is_some_and(|c| c.alert)
    };
    let recurring = if sub.get_flag("recurring") {
        true
    } else if sub.try_get_one::<bool>("no-recurring").ok().flatten() == Some(&true) {
        false
    } else {
        current.is_some_and(|c| c.recurring)
    };
    let recurrence = if recurring {
        Some(recurrence_from(
            sub,
            current.and_then(|c| c.recurrence.as_ref()),
        ))
    } else {
        None
    };

    Ok(TxDraft {
        title,
        amount,
        r#type,
        date,
        group,
        alert,
        recurring,
        recurrence,
    })
}

fn add(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let calculator = sub.get_flag("per-workday");
    let Some(draft) = gate(draft_from(app, sub, None))? else {
        return Ok(());
    };
    if let Some(id) = gate(app.save_transaction(draft, None, calculator))? {
        if let Some(tx) = app.transaction(id) {
            println!(
                "Recorded {} '{}' {} on {} (id {})",
                tx.r#type,
                tx.title,
                app.money(tx.amount),
                tx.day().map(|d| d.to_string()).unwrap_or_default(),
                id
            );
        }
    }
    Ok(())
}

fn edit(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub
        .get_one::<i64>("id")
        .ok_or_else(|| anyhow::anyhow!("--id is required"))?;
    let current = app.transaction(id).cloned();
    let Some(current) = current else {
        gate::<()>(Err(crate::error::FinanceError::TransactionNotFound(id).into()))?;
        return Ok(());
    };
    let calculator = sub.get_flag("per-workday");
    let Some(draft) = gate(draft_from(app, sub, Some(&current)))? else {
        return Ok(());
    };
    if gate(app.save_transaction(draft, Some(id), calculator))?.is_some() {
        println!("Updated transaction {}", id);
    }
    Ok(())
}

fn remove(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub
        .get_one::<i64>("id")
        .ok_or_else(|| anyhow::anyhow!("--id is required"))?;
    if let Some(tx) = gate(app.delete_transaction(id))? {
        println!("Deleted '{}' (id {})", tx.title, id);
    }
    Ok(())
}

fn list(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = month_or(sub, app.view())?;
    app.set_view(month);
    let grouped = app.grouped();
    if !maybe_print_json(json_flag, jsonl_flag, &grouped)? {
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Title", "Type", "Amount", "Group", "Flags"],
                table_rows(app, &grouped),
            )
        );
    }
    Ok(())
}

fn flags(t: &Transaction) -> String {
    let mut out = Vec::new();
    if t.alert {
        out.push("alert".to_string());
    }
    if let Some(r) = &t.recurrence {
        let freq = match r.frequency {
            Frequency::Daily if r.weekdays_only => "daily (weekdays)",
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
        };
        out.push(format!("{} x{}", freq, r.duration));
    }
    out.join(", ")
}

pub fn table_rows(app: &App, grouped: &GroupedTransactions) -> Vec<Vec<String>> {
    let row = |t: &Transaction, indent: &str| {
        vec![
            t.id.to_string(),
            t.day().map(|d| d.to_string()).unwrap_or_default(),
            format!("{}{}", indent, t.title),
            t.r#type.to_string(),
            app.money(t.signed_amount()),
            t.group_name().unwrap_or_default().to_string(),
            flags(t),
        ]
    };
    let mut rows = Vec::new();
    for g in &grouped.groups {
        rows.push(vec![
            String::new(),
            String::new(),
            format!("▸ {} ({})", g.name, g.items.len()),
            String::new(),
            app.money(g.total),
            g.name.clone(),
            String::new(),
        ]);
        for t in &g.items {
            rows.push(row(t, "  "));
        }
    }
    for t in &grouped.singles {
        rows.push(row(t, ""));
    }
    rows
}
