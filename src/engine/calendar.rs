// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Per-day income/expense for the calendar heatmap.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::engine::stats::{in_month, monthly_overtime};
use crate::models::{Month, Transaction, TxType};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayStats {
    pub day: u32,
    pub income: Decimal,
    pub expense: Decimal,
    pub has_tx: bool,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarMonth {
    pub month: Month,
    /// Empty cells before day 1 in a Monday-first grid.
    pub leading_blanks: u32,
    pub days: Vec<DayStats>,
    /// Overtime earned in the month.
    pub overtime: Decimal,
}

pub fn month_heatmap(txs: &[Transaction], month: Month, today: NaiveDate) -> CalendarMonth {
    let mut days: Vec<DayStats> = (1..=month.days())
        .map(|day| DayStats {
            day,
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
            has_tx: false,
            is_today: month.day(day) == Some(today),
        })
        .collect();

    for t in in_month(txs, month) {
        let Some(d) = t.day() else { continue };
        let Some(cell) = days.get_mut(d.day0() as usize) else {
            continue;
        };
        cell.has_tx = true;
        match t.r#type {
            TxType::Income => cell.income = cell.income.saturating_add(t.amount),
            TxType::Expense => cell.expense = cell.expense.saturating_add(t.amount),
        }
    }

    let leading_blanks = month
        .first_day()
        .map_or(0, |d| d.weekday().num_days_from_monday());

    CalendarMonth {
        month,
        leading_blanks,
        days,
        overtime: monthly_overtime(txs, month),
    }
}
