// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::db::KvStore;
use crate::error::FinanceError;
use crate::models::Currency;
use crate::utils::parse_number;

pub mod keys {
    pub const LANGUAGE: &str = "language";
    pub const DARK_MODE: &str = "darkMode";
    pub const ONBOARDING_COMPLETE: &str = "onboardingComplete";
    pub const REMINDER_DAYS: &str = "reminderDays";
    pub const HOLIDAY_DAYS: &str = "holidayDays";
    pub const SALARY_DAY: &str = "salaryDay";
    pub const WORK_HOURS: &str = "workHours";
    pub const TRANSACTIONS: &str = "transactions";
    pub const CURRENCY: &str = "currency";
    pub const GROUPS: &str = "groups";
    pub const NOTIFICATIONS: &str = "notifications";
    pub const SALARY: &str = "salary";
    pub const REMINDER_LOG: &str = "reminderLog";
}

pub const DEFAULT_WORK_HOURS: u32 = 225;

pub static CURRENCIES: Lazy<Vec<Currency>> = Lazy::new(|| {
    [
        ("TRY", "₺", "Türk Lirası"),
        ("USD", "$", "US Dollar"),
        ("EUR", "€", "Euro"),
        ("GBP", "£", "British Pound"),
    ]
    .into_iter()
    .map(|(code, symbol, name)| Currency {
        code: code.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
    })
    .collect()
});

pub fn find_currency(code: &str) -> Result<Currency, FinanceError> {
    let code = code.trim().to_uppercase();
    CURRENCIES
        .iter()
        .find(|c| c.code == code)
        .cloned()
        .ok_or(FinanceError::UnknownCurrency(code))
}

/// User-configurable scalars. Each field is persisted under its own key and
/// falls back to its default independently of the others.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub language: String,
    pub dark_mode: bool,
    pub reminder_days: u32,
    /// Weekday indices treated as non-working, 0 = Sunday .. 6 = Saturday.
    pub holiday_days: Vec<u32>,
    pub salary_day: u32,
    pub work_hours: u32,
    pub currency: Currency,
    pub groups: Vec<String>,
    pub notifications: bool,
    /// Formatted salary as typed, e.g. `22.500`.
    pub salary: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            language: "tr".to_string(),
            dark_mode: false,
            reminder_days: 3,
            holiday_days: vec![0],
            salary_day: 1,
            work_hours: DEFAULT_WORK_HOURS,
            currency: CURRENCIES[0].clone(),
            groups: vec!["Krediler".to_string(), "Faturalar".to_string()],
            notifications: true,
            salary: String::new(),
        }
    }
}

impl Settings {
    pub fn load(kv: &KvStore) -> Result<Self> {
        let d = Settings::default();
        Ok(Settings {
            language: kv.get(keys::LANGUAGE)?.unwrap_or(d.language),
            dark_mode: kv.get(keys::DARK_MODE)?.unwrap_or(d.dark_mode),
            reminder_days: kv.get(keys::REMINDER_DAYS)?.unwrap_or(d.reminder_days),
            holiday_days: kv.get(keys::HOLIDAY_DAYS)?.unwrap_or(d.holiday_days),
            salary_day: kv.get(keys::SALARY_DAY)?.unwrap_or(d.salary_day),
            work_hours: kv.get(keys::WORK_HOURS)?.unwrap_or(d.work_hours),
            currency: kv.get(keys::CURRENCY)?.unwrap_or(d.currency),
            groups: kv.get(keys::GROUPS)?.unwrap_or(d.groups),
            notifications: kv.get(keys::NOTIFICATIONS)?.unwrap_or(d.notifications),
            salary: kv.get(keys::SALARY)?.unwrap_or(d.salary),
        })
    }

    pub fn salary_amount(&self) -> Decimal {
        parse_number(&self.salary)
    }

    /// Contracted hours, with zero read as the default.
    pub fn effective_work_hours(&self) -> u32 {
        if self.work_hours == 0 {
            DEFAULT_WORK_HOURS
        } else {
            self.work_hours
        }
    }

    pub fn toggle_holiday(&mut self, weekday: u32) {
        if let Some(pos) = self.holiday_days.iter().position(|d| *d == weekday) {
            self.holiday_days.remove(pos);
        } else {
            self.holiday_days.push(weekday);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_yields_documented_defaults() {
        let kv = KvStore::open_in_memory().unwrap();
        let s = Settings::load(&kv).unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.currency.code, "TRY");
        assert_eq!(s.holiday_days, vec![0]);
        assert_eq!(s.groups, vec!["Krediler", "Faturalar"]);
        assert_eq!(s.salary_amount(), Decimal::ZERO);
    }

    #[test]
    fn each_key_falls_back_on_its_own() {
        let kv = KvStore::open_in_memory().unwrap();
        kv.set(keys::REMINDER_DAYS, &7u32).unwrap();
        kv.set(keys::SALARY_DAY, "fifteenth").unwrap();
        let s = Settings::load(&kv).unwrap();
        assert_eq!(s.reminder_days, 7);
        assert_eq!(s.salary_day, 1);
    }

    #[test]
    fn zero_work_hours_reads_as_default() {
        let s = Settings {
            work_hours: 0,
            ..Settings::default()
        };
        assert_eq!(s.effective_work_hours(), 225);
    }

    #[test]
    fn holidays_toggle_in_and_out() {
        let mut s = Settings::default();
        s.toggle_holiday(6);
        assert_eq!(s.holiday_days, vec![0, 6]);
        s.toggle_holiday(0);
        assert_eq!(s.holiday_days, vec![6]);
    }

    #[test]
    fn currency_lookup_is_case_insensitive() {
        assert_eq!(find_currency("usd").unwrap().symbol, "$");
        assert!(matches!(
            find_currency("XYZ"),
            Err(FinanceError::UnknownCurrency(_))
        ));
    }
}
