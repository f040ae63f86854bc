// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate, TimeZone};
use paycheck::{
    app::{App, SALARY_DEBOUNCE},
    cli,
    commands::onboarding,
    db::KvStore,
    engine::salary::SalarySync,
    models::{Month, SALARY_CATEGORY},
};
use rust_decimal::Decimal;
use tempfile::NamedTempFile;

fn setup() -> App {
    let kv = KvStore::open_in_memory().unwrap();
    let now = Local.with_ymd_and_hms(2024, 2, 10, 9, 0, 0).single().unwrap();
    App::open(kv, now).unwrap()
}

fn salaries(app: &App) -> Vec<(i64, Decimal, Option<NaiveDate>)> {
    app.transactions()
        .iter()
        .filter(|t| t.is_salary())
        .map(|t| (t.id, t.amount, t.day()))
        .collect()
}

#[test]
fn rapid_changes_coalesce_into_one_sync() {
    let mut app = setup();
    let t0 = Instant::now();
    app.set_salary("20000", t0).unwrap();
    app.set_salary("22500", t0 + Duration::from_millis(300)).unwrap();
    app.set_salary_day(31, t0 + Duration::from_millis(600)).unwrap();

    // still inside the quiet period of the last change
    assert_eq!(app.settle(t0 + SALARY_DEBOUNCE).unwrap(), None);
    assert!(salaries(&app).is_empty());

    let outcome = app
        .settle(t0 + Duration::from_millis(600) + SALARY_DEBOUNCE)
        .unwrap();
    assert!(matches!(outcome, Some(SalarySync::Created(_))));
    assert_eq!(app.settings().salary, "22.500");

    let s = salaries(&app);
    assert_eq!(s.len(), 1);
    assert_eq!(s[0].1, Decimal::new(22500, 0));
    // February 2024 has 29 days
    assert_eq!(s[0].2, NaiveDate::from_ymd_opt(2024, 2, 29));
    assert!(!app.has_pending_sync());
}

#[test]
fn sync_is_idempotent_per_month() {
    let mut app = setup();
    app.set_salary("22.500", Instant::now()).unwrap();
    let first = app.sync_salary().unwrap();
    let second = app.sync_salary().unwrap();
    let SalarySync::Created(id) = first else {
        panic!("expected a new salary row, got {:?}", first);
    };
    assert_eq!(second, SalarySync::Updated(id));
    assert_eq!(salaries(&app).len(), 1);

    let tx = &app.transactions()[0];
    assert_eq!(tx.title, "Maaş");
    assert_eq!(tx.category, SALARY_CATEGORY);
    assert!(tx.recurring && tx.alert);
    assert_eq!(tx.recurrence.as_ref().map(|r| r.duration), Some(12));
}

#[test]
fn another_view_month_gets_its_own_row() {
    let mut app = setup();
    app.set_salary("10000", Instant::now()).unwrap();
    app.sync_salary().unwrap();
    app.shift_view(1);
    assert_eq!(app.view(), Month { year: 2024, month: 3 });
    app.sync_salary().unwrap();
    assert_eq!(salaries(&app).len(), 2);
}

#[test]
fn zero_or_garbage_salary_suppresses_sync() {
    let mut app = setup();
    let t0 = Instant::now();
    app.set_salary("", t0).unwrap();
    assert_eq!(app.settle(t0 + SALARY_DEBOUNCE).unwrap(), Some(SalarySync::Skipped));
    app.set_salary("0", t0).unwrap();
    assert_eq!(app.sync_salary().unwrap(), SalarySync::Skipped);
    assert!(app.transactions().is_empty());
    assert_eq!(app.kv().get_raw("transactions").unwrap(), None);
}

#[test]
fn onboarding_syncs_immediately() {
    let mut app = setup();
    let matches = cli::build_cli().get_matches_from([
        "paycheck", "init", "--salary", "22500", "--salary-day", "15", "--language", "en",
    ]);
    if let Some(("init", sub)) = matches.subcommand() {
        onboarding::handle(&mut app, sub).unwrap();
    } else {
        panic!("init not parsed");
    }

    assert!(app.onboarding_complete().unwrap());
    assert!(!app.has_pending_sync());
    let s = salaries(&app);
    assert_eq!(s.len(), 1);
    assert_eq!(s[0].2, NaiveDate::from_ymd_opt(2024, 2, 15));
    assert_eq!(app.transactions()[0].title, "Salary");
}

#[test]
fn skipping_onboarding_creates_nothing() {
    let mut app = setup();
    let matches = cli::build_cli().get_matches_from(["paycheck", "init", "--skip"]);
    if let Some(("init", sub)) = matches.subcommand() {
        onboarding::handle(&mut app, sub).unwrap();
    }
    assert!(app.onboarding_complete().unwrap());
    assert!(app.transactions().is_empty());
}

#[test]
fn reset_clears_everything() {
    let mut app = setup();
    app.set_salary("22500", Instant::now()).unwrap();
    app.finish_onboarding().unwrap();
    app.set_reminder_days(9).unwrap();
    app.reset().unwrap();

    assert!(app.transactions().is_empty());
    assert!(!app.onboarding_complete().unwrap());
    assert_eq!(app.settings().reminder_days, 3);
    assert!(app.kv().keys().unwrap().is_empty());
}

#[test]
fn next_launch_posts_the_new_month_salary() {
    let file = NamedTempFile::new().unwrap();
    let feb = Local.with_ymd_and_hms(2024, 2, 10, 9, 0, 0).single().unwrap();
    let mar = Local.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).single().unwrap();
    {
        let mut app = App::open(KvStore::open(file.path()).unwrap(), feb).unwrap();
        app.set_salary("22500", Instant::now()).unwrap();
        app.set_salary_day(5, Instant::now()).unwrap();
        app.finish_onboarding().unwrap();
        assert_eq!(salaries(&app).len(), 1);
    }

    let mut app = App::open(KvStore::open(file.path()).unwrap(), mar).unwrap();
    assert!(app.has_pending_sync());
    // browsing another month does not redirect the startup sync
    app.set_view(Month { year: 2023, month: 12 });
    assert!(matches!(app.flush().unwrap(), Some(SalarySync::Created(_))));

    let days: Vec<_> = salaries(&app).into_iter().map(|s| s.2).collect();
    assert_eq!(
        days,
        vec![
            NaiveDate::from_ymd_opt(2024, 3, 5),
            NaiveDate::from_ymd_opt(2024, 2, 5)
        ]
    );
}

#[test]
fn launch_without_salary_schedules_nothing() {
    let app = setup();
    assert!(!app.has_pending_sync());
}
