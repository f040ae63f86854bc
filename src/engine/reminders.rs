// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Due-date reminders for alertable expenses.

use chrono::{DateTime, Days, Local, NaiveDate, TimeDelta};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::i18n::Lang;
use crate::models::{Currency, Transaction, TxType};
use crate::utils::{fmt_money, parse_instant};

/// How long a reminder toast stays up unless dismissed.
pub const TOAST_SECONDS: i64 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Due {
    Today,
    InDays(u32),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DueReminder {
    pub tx_id: i64,
    pub title: String,
    pub amount: Decimal,
    pub due: Due,
}

/// First alertable expense (in store order) falling exactly on `today` or on
/// `today + lead_days`.
pub fn scan_due(txs: &[Transaction], today: NaiveDate, lead_days: u32) -> Option<DueReminder> {
    let reminder_day = today.checked_add_days(Days::new(lead_days.into()))?;
    txs.iter().find_map(|t| {
        if !t.alert || t.r#type != TxType::Expense {
            return None;
        }
        let day = t.day()?;
        let due = if day == today {
            Due::Today
        } else if day == reminder_day {
            Due::InDays(lead_days)
        } else {
            return None;
        };
        Some(DueReminder {
            tx_id: t.id,
            title: t.title.clone(),
            amount: t.amount,
            due,
        })
    })
}

/// Every expense dated within `[today, today + lead_days]`, earliest first.
pub fn upcoming(txs: &[Transaction], today: NaiveDate, lead_days: u32) -> Vec<Transaction> {
    let Some(last) = today.checked_add_days(Days::new(lead_days.into())) else {
        return Vec::new();
    };
    let mut rows: Vec<(DateTime<Local>, &Transaction)> = txs
        .iter()
        .filter(|t| t.r#type == TxType::Expense)
        .filter_map(|t| parse_instant(&t.date).map(|d| (d, t)))
        .filter(|(d, _)| {
            let day = d.date_naive();
            day >= today && day <= last
        })
        .collect();
    rows.sort_by_key(|(d, _)| *d);
    rows.into_iter().map(|(_, t)| t.clone()).collect()
}

pub fn reminder_message(r: &DueReminder, lang: Lang, currency: &Currency) -> String {
    let timing = match r.due {
        Due::Today => lang.payment_today().to_string(),
        Due::InDays(n) => lang.due_in_days(n),
    };
    format!(
        "{}: {} ({})",
        r.title,
        timing,
        fmt_money(r.amount, currency, lang.code())
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toast {
    pub message: String,
    pub shown_at: DateTime<Local>,
    pub dismissed: bool,
}

impl Toast {
    pub fn new(message: String, shown_at: DateTime<Local>) -> Self {
        Toast {
            message,
            shown_at,
            dismissed: false,
        }
    }

    pub fn is_visible(&self, now: DateTime<Local>) -> bool {
        !self.dismissed && now - self.shown_at < TimeDelta::seconds(TOAST_SECONDS)
    }

    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Mark {
    tx_id: i64,
    day: NaiveDate,
    due: Due,
}

/// Remembers which reminders were already raised so that re-scanning an
/// unchanged list on the same day stays quiet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReminderGate {
    marks: Vec<Mark>,
}

impl ReminderGate {
    /// True the first time `r` is seen on `today`; marks from earlier days are
    /// forgotten.
    pub fn admit(&mut self, r: &DueReminder, today: NaiveDate) -> bool {
        self.marks.retain(|m| m.day == today);
        let mark = Mark {
            tx_id: r.tx_id,
            day: today,
            due: r.due,
        };
        if self.marks.contains(&mark) {
            return false;
        }
        self.marks.push(mark);
        true
    }
}
