// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::db::KvStore;
use crate::debounce::Debouncer;
use crate::engine::calculators::{
    overtime_quote, overtime_transaction, workday_projection, Multiplier, OvertimeQuote,
    WorkdayProjection,
};
use crate::engine::calendar::{month_heatmap, CalendarMonth};
use crate::engine::reminders::{reminder_message, scan_due, upcoming, ReminderGate, Toast};
use crate::engine::salary::{sync_salary, SalarySync};
use crate::engine::stats::{group_month, monthly_overtime, monthly_stats};
use crate::error::FinanceError;
use crate::i18n::Lang;
use crate::ledger::{Ledger, TxDraft};
use crate::models::{GroupedTransactions, Month, MonthlyStats, Transaction};
use crate::settings::{find_currency, keys, Settings};
use crate::utils::{fmt_money, format_number};

/// Quiet period before a salary or salary-day change is applied.
pub const SALARY_DEBOUNCE: Duration = Duration::from_millis(800);

/// Owns both stores and drives the engine. Reads recompute from scratch;
/// writes persist the touched key straight away.
pub struct App {
    kv: KvStore,
    settings: Settings,
    ledger: Ledger,
    view: Month,
    now: DateTime<Local>,
    salary_sync: Debouncer<Month>,
    reminder_gate: ReminderGate,
}

impl App {
    pub fn open(kv: KvStore, now: DateTime<Local>) -> Result<Self> {
        let settings = Settings::load(&kv)?;
        let ledger = Ledger::load(&kv)?;
        let reminder_gate = kv.get(keys::REMINDER_LOG)?.unwrap_or_default();
        debug!(
            transactions = ledger.all().len(),
            language = %settings.language,
            "state loaded"
        );
        // A configured salary is synced on every start so a new month gets its row.
        let mut salary_sync = Debouncer::new(SALARY_DEBOUNCE);
        if settings.salary_amount() > Decimal::ZERO {
            salary_sync.schedule(Month::of(now.date_naive()), Instant::now());
        }
        Ok(App {
            kv,
            settings,
            ledger,
            view: Month::of(now.date_naive()),
            now,
            salary_sync,
            reminder_gate,
        })
    }

    pub fn kv(&self) -> &KvStore {
        &self.kv
    }

    pub fn into_kv(self) -> KvStore {
        self.kv
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.all()
    }

    pub fn transaction(&self, id: i64) -> Option<&Transaction> {
        self.ledger.get(id)
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    pub fn lang(&self) -> Lang {
        Lang::from_code(&self.settings.language)
    }

    pub fn view(&self) -> Month {
        self.view
    }

    pub fn set_view(&mut self, month: Month) {
        self.view = month;
    }

    pub fn shift_view(&mut self, delta: i32) {
        self.view = self.view.shift(delta);
    }

    pub fn money(&self, amount: Decimal) -> String {
        fmt_money(amount, &self.settings.currency, &self.settings.language)
    }

    pub fn onboarding_complete(&self) -> Result<bool> {
        self.kv.contains(keys::ONBOARDING_COMPLETE)
    }

    // --- derived views ---

    pub fn stats(&self) -> MonthlyStats {
        monthly_stats(self.ledger.all(), self.view)
    }

    pub fn overtime_total(&self) -> Decimal {
        monthly_overtime(self.ledger.all(), self.view)
    }

    pub fn grouped(&self) -> GroupedTransactions {
        group_month(self.ledger.all(), self.view)
    }

    pub fn calendar(&self) -> CalendarMonth {
        month_heatmap(self.ledger.all(), self.view, self.today())
    }

    pub fn upcoming(&self) -> Vec<Transaction> {
        upcoming(self.ledger.all(), self.today(), self.settings.reminder_days)
    }

    pub fn overtime_quote(
        &self,
        multiplier: Multiplier,
        hours: u32,
        minutes: u32,
    ) -> Result<OvertimeQuote, FinanceError> {
        overtime_quote(
            self.settings.salary_amount(),
            self.settings.effective_work_hours(),
            multiplier,
            hours,
            minutes,
        )
    }

    pub fn project_workdays(
        &self,
        per_day: Decimal,
        date: NaiveDate,
    ) -> Result<Option<WorkdayProjection>, FinanceError> {
        workday_projection(per_day, date, &self.settings.holiday_days)
    }

    // --- transaction store ---

    /// Create (`editing = None`) or replace a transaction. With `calculator`
    /// on, the draft amount is read as a per-workday rate and replaced by its
    /// monthly projection.
    pub fn save_transaction(
        &mut self,
        mut draft: TxDraft,
        editing: Option<i64>,
        calculator: bool,
    ) -> Result<i64> {
        if let (true, Some(date)) = (calculator, draft.date) {
            if let Some(p) = self.project_workdays(draft.amount, date)? {
                debug!(work_days = p.work_days, total = %p.total, "calculator projection applied");
                draft.amount = p.total;
            }
        }
        let id = match editing {
            Some(id) => {
                self.ledger.update(id, &draft)?;
                id
            }
            None => self.ledger.create(&draft, self.now.timestamp_millis())?,
        };
        self.ledger.save(&self.kv)?;
        Ok(id)
    }

    pub fn delete_transaction(&mut self, id: i64) -> Result<Transaction> {
        let removed = self.ledger.delete(id)?;
        self.ledger.save(&self.kv)?;
        Ok(removed)
    }

    pub fn save_overtime(
        &mut self,
        date: NaiveDate,
        multiplier: Multiplier,
        hours: u32,
        minutes: u32,
    ) -> Result<Transaction> {
        if self.settings.salary_amount() <= Decimal::ZERO {
            return Err(FinanceError::NonPositiveSalary.into());
        }
        let quote = self.overtime_quote(multiplier, hours, minutes)?;
        let tx = overtime_transaction(
            self.ledger.next_id(self.now.timestamp_millis()),
            self.lang().overtime_title(hours, minutes),
            &quote,
            date,
        )?;
        info!(id = tx.id, amount = %tx.amount, "overtime recorded");
        self.ledger.prepend(tx.clone());
        self.ledger.save(&self.kv)?;
        Ok(tx)
    }

    // --- salary synchronization ---

    /// Upsert this view month's salary income right away.
    pub fn sync_salary(&mut self) -> Result<SalarySync> {
        self.sync_salary_for(self.view)
    }

    fn sync_salary_for(&mut self, month: Month) -> Result<SalarySync> {
        let now_ms = self.now.timestamp_millis();
        let next_id = self.ledger.next_id(now_ms);
        let title = self.lang().salary_title();
        let outcome = sync_salary(
            self.ledger.list_mut(),
            self.settings.salary_amount(),
            self.settings.salary_day,
            month,
            title,
            || next_id,
        );
        match outcome {
            SalarySync::Skipped => debug!("salary sync skipped"),
            SalarySync::Updated(id) | SalarySync::Created(id) => {
                info!(id, %month, ?outcome, "salary synced");
                self.ledger.save(&self.kv)?;
            }
        }
        Ok(outcome)
    }

    /// Run the pending salary sync if its quiet period is over.
    pub fn settle(&mut self, now: Instant) -> Result<Option<SalarySync>> {
        match self.salary_sync.take_due(now) {
            Some(month) => self.sync_salary_for(month).map(Some),
            None => Ok(None),
        }
    }

    /// Wait out any pending deferred work and run it.
    pub fn flush(&mut self) -> Result<Option<SalarySync>> {
        let Some(deadline) = self.salary_sync.deadline() else {
            return Ok(None);
        };
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
        self.settle(deadline.max(Instant::now()))
    }

    pub fn has_pending_sync(&self) -> bool {
        self.salary_sync.is_pending()
    }

    // --- settings ---

    /// Store the salary as typed (re-formatted) and schedule a sync.
    pub fn set_salary(&mut self, raw: &str, now: Instant) -> Result<()> {
        self.settings.salary = format_number(raw);
        self.kv.set(keys::SALARY, &self.settings.salary)?;
        self.salary_sync.schedule(self.view, now);
        Ok(())
    }

    pub fn set_salary_day(&mut self, day: u32, now: Instant) -> Result<()> {
        self.settings.salary_day = day;
        self.kv.set(keys::SALARY_DAY, &day)?;
        self.salary_sync.schedule(self.view, now);
        Ok(())
    }

    pub fn set_language(&mut self, code: &str) -> Result<()> {
        self.settings.language = Lang::from_code(code).code().to_string();
        self.kv.set(keys::LANGUAGE, &self.settings.language)
    }

    pub fn set_currency(&mut self, code: &str) -> Result<()> {
        self.settings.currency = find_currency(code)?;
        self.kv.set(keys::CURRENCY, &self.settings.currency)
    }

    pub fn set_dark_mode(&mut self, on: bool) -> Result<()> {
        self.settings.dark_mode = on;
        self.kv.set(keys::DARK_MODE, &on)
    }

    pub fn set_reminder_days(&mut self, days: u32) -> Result<()> {
        self.settings.reminder_days = days;
        self.kv.set(keys::REMINDER_DAYS, &days)
    }

    pub fn set_holidays(&mut self, weekdays: Vec<u32>) -> Result<()> {
        self.settings.holiday_days = weekdays.into_iter().filter(|d| *d < 7).collect();
        self.kv.set(keys::HOLIDAY_DAYS, &self.settings.holiday_days)
    }

    pub fn toggle_holiday(&mut self, weekday: u32) -> Result<()> {
        self.settings.toggle_holiday(weekday);
        self.kv.set(keys::HOLIDAY_DAYS, &self.settings.holiday_days)
    }

    pub fn set_work_hours(&mut self, hours: u32) -> Result<()> {
        self.settings.work_hours = hours;
        self.kv.set(keys::WORK_HOURS, &hours)
    }

    pub fn set_notifications(&mut self, on: bool) -> Result<()> {
        self.settings.notifications = on;
        self.kv.set(keys::NOTIFICATIONS, &on)
    }

    /// Append a user group. Returns false when it already exists.
    pub fn add_group(&mut self, name: &str) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FinanceError::EmptyGroupName.into());
        }
        if self.settings.groups.iter().any(|g| g == name) {
            return Ok(false);
        }
        self.settings.groups.push(name.to_string());
        self.kv.set(keys::GROUPS, &self.settings.groups)?;
        Ok(true)
    }

    // --- lifecycle ---

    /// Mark first-run setup done and sync the salary without waiting.
    pub fn finish_onboarding(&mut self) -> Result<SalarySync> {
        self.kv.set(keys::ONBOARDING_COMPLETE, &true)?;
        self.salary_sync.cancel();
        self.sync_salary()
    }

    pub fn skip_onboarding(&mut self) -> Result<()> {
        self.kv.set(keys::ONBOARDING_COMPLETE, &true)
    }

    /// Wipe every persisted key and fall back to defaults.
    pub fn reset(&mut self) -> Result<()> {
        self.kv.clear()?;
        self.settings = Settings::default();
        self.ledger = Ledger::default();
        self.reminder_gate = ReminderGate::default();
        self.salary_sync.cancel();
        self.view = Month::of(self.today());
        info!("all data cleared");
        Ok(())
    }

    // --- reminders ---

    /// Scan for a due alertable expense and raise a toast for it, unless
    /// notifications are off or the same reminder was already raised today.
    pub fn check_reminders(&mut self) -> Result<Option<Toast>> {
        if !self.settings.notifications {
            return Ok(None);
        }
        let today = self.today();
        let Some(due) = scan_due(self.ledger.all(), today, self.settings.reminder_days) else {
            return Ok(None);
        };
        if !self.reminder_gate.admit(&due, today) {
            debug!(id = due.tx_id, "reminder already shown today");
            return Ok(None);
        }
        self.kv.set(keys::REMINDER_LOG, &self.reminder_gate)?;
        let message = reminder_message(&due, self.lang(), &self.settings.currency);
        info!(id = due.tx_id, "reminder raised");
        Ok(Some(Toast::new(message, self.now)))
    }
}
