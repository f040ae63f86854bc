// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Keeps one synthetic salary income per month in step with the settings.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Frequency, Month, Recurrence, Transaction, TxType, SALARY_CATEGORY};
use crate::utils::local_instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SalarySync {
    /// Salary missing or not positive; nothing touched.
    Skipped,
    Updated(i64),
    Created(i64),
}

/// Posting date for `month`: the configured day, or the month's last day when
/// the configured one does not exist in it.
pub fn salary_date(month: Month, salary_day: u32) -> Option<NaiveDate> {
    let last = month.days();
    let day = if salary_day == 0 || salary_day > last {
        last
    } else {
        salary_day
    };
    month.day(day)
}

/// Upsert the salary income for `month`.
///
/// An existing income in that month tagged with the salary category or group
/// gets the new amount and date; otherwise a fresh one is prepended with an id
/// from `new_id`.
pub fn sync_salary(
    txs: &mut Vec<Transaction>,
    salary: Decimal,
    salary_day: u32,
    month: Month,
    title: &str,
    new_id: impl FnOnce() -> i64,
) -> SalarySync {
    if salary <= Decimal::ZERO {
        return SalarySync::Skipped;
    }
    let Some(target) = salary_date(month, salary_day) else {
        return SalarySync::Skipped;
    };
    let date = local_instant(target);

    let existing = txs
        .iter_mut()
        .find(|t| t.is_salary() && t.day().is_some_and(|d| month.contains(d)));
    if let Some(tx) = existing {
        tx.amount = salary;
        tx.date = date;
        return SalarySync::Updated(tx.id);
    }

    let id = new_id();
    txs.insert(
        0,
        Transaction {
            id,
            title: title.to_string(),
            amount: salary,
            r#type: TxType::Income,
            date,
            category: SALARY_CATEGORY.to_string(),
            group: Some(SALARY_CATEGORY.to_string()),
            recurring: true,
            recurrence: Some(Recurrence {
                frequency: Frequency::Monthly,
                duration: 12,
                weekdays_only: false,
            }),
            alert: true,
        },
    );
    SalarySync::Created(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::tx;

    fn feb_2024() -> Month {
        Month {
            year: 2024,
            month: 2,
        }
    }

    #[test]
    fn posting_day_clamps_to_month_end() {
        assert_eq!(salary_date(feb_2024(), 31), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(
            salary_date(Month { year: 2023, month: 2 }, 30),
            NaiveDate::from_ymd_opt(2023, 2, 28)
        );
        assert_eq!(salary_date(feb_2024(), 15), NaiveDate::from_ymd_opt(2024, 2, 15));
    }

    #[test]
    fn creates_once_then_updates_in_place() {
        let mut txs = vec![tx(1, "Rent", 5000, TxType::Expense, (2024, 2, 1), None)];
        let first = sync_salary(&mut txs, Decimal::new(20000, 0), 15, feb_2024(), "Maaş", || 99);
        assert_eq!(first, SalarySync::Created(99));
        assert_eq!(txs[0].id, 99);
        assert!(txs[0].recurring && txs[0].alert);

        let second = sync_salary(&mut txs, Decimal::new(22500, 0), 31, feb_2024(), "Maaş", || 100);
        assert_eq!(second, SalarySync::Updated(99));

        let salaries: Vec<_> = txs.iter().filter(|t| t.is_salary()).collect();
        assert_eq!(salaries.len(), 1);
        assert_eq!(salaries[0].amount, Decimal::new(22500, 0));
        assert_eq!(salaries[0].day(), NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn matches_on_group_as_well_as_category() {
        let mut manual = tx(7, "Paycheck", 1, TxType::Income, (2024, 2, 3), Some(SALARY_CATEGORY));
        manual.category = "Genel".into();
        let mut txs = vec![manual];
        let r = sync_salary(&mut txs, Decimal::new(500, 0), 1, feb_2024(), "Maaş", || 1);
        assert_eq!(r, SalarySync::Updated(7));
        assert_eq!(txs[0].title, "Paycheck");
    }

    #[test]
    fn other_months_and_expenses_do_not_match() {
        let mut march = tx(7, "Maaş", 1, TxType::Income, (2024, 3, 1), None);
        march.category = SALARY_CATEGORY.into();
        let mut expense = tx(8, "Maaş", 1, TxType::Expense, (2024, 2, 1), None);
        expense.category = SALARY_CATEGORY.into();
        let mut txs = vec![march, expense];
        let r = sync_salary(&mut txs, Decimal::new(500, 0), 1, feb_2024(), "Maaş", || 1);
        assert_eq!(r, SalarySync::Created(1));
        assert_eq!(txs.len(), 3);
    }

    #[test]
    fn non_positive_salary_is_skipped() {
        let mut txs = Vec::new();
        let r = sync_salary(&mut txs, Decimal::ZERO, 1, feb_2024(), "Maaş", || 1);
        assert_eq!(r, SalarySync::Skipped);
        assert!(txs.is_empty());
    }
}
