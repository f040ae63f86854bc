// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Overtime pay and the per-workday monthly projection.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::FinanceError;
use crate::models::{Month, Transaction, TxType, OVERTIME_CATEGORY};
use crate::settings::DEFAULT_WORK_HOURS;
use crate::utils::local_instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Multiplier {
    /// 1.5x, regular overtime.
    Standard,
    /// 2x, weekends and holidays.
    Double,
}

impl Multiplier {
    pub fn parse(s: &str) -> Result<Self, FinanceError> {
        match s.trim() {
            "1.5" | "1,5" => Ok(Multiplier::Standard),
            "2" | "2.0" | "2,0" => Ok(Multiplier::Double),
            other => Err(FinanceError::InvalidMultiplier(other.to_string())),
        }
    }

    pub fn factor(&self) -> Decimal {
        match self {
            Multiplier::Standard => Decimal::new(15, 1),
            Multiplier::Double => Decimal::TWO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OvertimeQuote {
    pub hourly_rate: Decimal,
    pub total_hours: Decimal,
    pub amount: Decimal,
}

/// `salary / work_hours * factor * (hours + minutes / 60)`. A missing or
/// non-positive salary quotes zero.
pub fn overtime_quote(
    salary: Decimal,
    work_hours: u32,
    multiplier: Multiplier,
    hours: u32,
    minutes: u32,
) -> Result<OvertimeQuote, FinanceError> {
    let total_hours = Decimal::from(hours) + Decimal::from(minutes) / Decimal::from(60);
    if salary <= Decimal::ZERO {
        return Ok(OvertimeQuote {
            hourly_rate: Decimal::ZERO,
            total_hours,
            amount: Decimal::ZERO,
        });
    }
    let work_hours = if work_hours == 0 {
        DEFAULT_WORK_HOURS
    } else {
        work_hours
    };
    let hourly_rate = salary / Decimal::from(work_hours);
    let amount = hourly_rate
        .checked_mul(multiplier.factor())
        .and_then(|v| v.checked_mul(total_hours))
        .ok_or(FinanceError::AmountOverflow)?;
    Ok(OvertimeQuote {
        hourly_rate,
        total_hours,
        amount,
    })
}

/// A fresh overtime income for `date`. Every save is a new row.
pub fn overtime_transaction(
    id: i64,
    title: String,
    quote: &OvertimeQuote,
    date: NaiveDate,
) -> Result<Transaction, FinanceError> {
    if quote.amount <= Decimal::ZERO {
        return Err(FinanceError::NonPositiveAmount(quote.amount));
    }
    Ok(Transaction {
        id,
        title,
        amount: quote.amount,
        r#type: TxType::Income,
        date: local_instant(date),
        category: OVERTIME_CATEGORY.to_string(),
        group: Some(OVERTIME_CATEGORY.to_string()),
        recurring: false,
        recurrence: None,
        alert: false,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkdayProjection {
    pub work_days: u32,
    pub total: Decimal,
}

/// Days in `month` whose weekday (0 = Sunday) is not in `holidays`.
pub fn count_workdays(month: Month, holidays: &[u32]) -> u32 {
    (1..=month.days())
        .filter_map(|d| month.day(d))
        .filter(|d| !holidays.contains(&d.weekday().num_days_from_sunday()))
        .count() as u32
}

/// Spread a per-workday amount over the working days of `date`'s month.
/// Nothing is projected for a non-positive amount.
pub fn workday_projection(
    per_day: Decimal,
    date: NaiveDate,
    holidays: &[u32],
) -> Result<Option<WorkdayProjection>, FinanceError> {
    if per_day <= Decimal::ZERO {
        return Ok(None);
    }
    let work_days = count_workdays(Month::of(date), holidays);
    let total = per_day
        .checked_mul(Decimal::from(work_days))
        .ok_or(FinanceError::AmountOverflow)?;
    Ok(Some(WorkdayProjection { work_days, total }))
}
