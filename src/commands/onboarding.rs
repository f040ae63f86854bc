// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::Instant;

use crate::app::App;
use crate::commands::gate;
use crate::engine::salary::SalarySync;
use anyhow::Result;

/// First-run setup. Values given here are stored like any other setting; on
/// completion the salary is synced at once instead of after the usual delay.
pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    if m.get_flag("skip") {
        app.skip_onboarding()?;
        println!("Setup skipped");
        return Ok(());
    }

    let now = Instant::now();
    if let Some(code) = m.get_one::<String>("language") {
        app.set_language(code)?;
    }
    if let Some(code) = m.get_one::<String>("currency") {
        gate(app.set_currency(code))?;
    }
    if let Some(hours) = m.get_one::<u32>("work-hours") {
        app.set_work_hours(*hours)?;
    }
    if let Some(day) = m.get_one::<u32>("salary-day") {
        app.set_salary_day(*day, now)?;
    }
    if let Some(raw) = m.get_one::<String>("salary") {
        app.set_salary(raw, now)?;
    }

    match app.finish_onboarding()? {
        SalarySync::Created(id) | SalarySync::Updated(id) => println!(
            "Setup complete; salary {} posted for {} (id {})",
            app.settings().salary,
            app.view(),
            id
        ),
        SalarySync::Skipped => println!("Setup complete"),
    }
    Ok(())
}
