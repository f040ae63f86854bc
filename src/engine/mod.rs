// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived state. Every function here is a pure computation over the
//! transaction list and settings; callers recompute on each read.

pub mod calculators;
pub mod calendar;
pub mod reminders;
pub mod salary;
pub mod stats;

#[cfg(test)]
pub(crate) mod testing {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use crate::models::{Transaction, TxType};
    use crate::utils::local_instant;

    pub fn tx(
        id: i64,
        title: &str,
        amount: i64,
        kind: TxType,
        (y, m, d): (i32, u32, u32),
        group: Option<&str>,
    ) -> Transaction {
        let day = NaiveDate::from_ymd_opt(y, m, d).expect("valid test date");
        Transaction {
            id,
            title: title.to_string(),
            amount: Decimal::new(amount, 0),
            r#type: kind,
            date: local_instant(day),
            category: "Genel".to_string(),
            group: group.map(str::to_string),
            recurring: false,
            recurrence: None,
            alert: false,
        }
    }
}
