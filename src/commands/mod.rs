// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod calc;
pub mod exporter;
pub mod groups;
pub mod onboarding;
pub mod overtime;
pub mod reminders;
pub mod reports;
pub mod settings;
pub mod transactions;

use anyhow::Result;
use chrono::NaiveDate;
use tracing::warn;

use crate::error::FinanceError;
use crate::models::Month;
use crate::utils::{parse_date, parse_month};

/// Input gates do not fail the command: the stores stay as they were and the
/// reason is reported.
pub fn gate<T>(res: Result<T>) -> Result<Option<T>> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(e) => match e.downcast_ref::<FinanceError>() {
            Some(fe) => {
                warn!(reason = %fe, "input rejected");
                println!("Not saved: {}", fe);
                Ok(None)
            }
            None => Err(e),
        },
    }
}

pub fn date_or(sub: &clap::ArgMatches, default: NaiveDate) -> Result<NaiveDate> {
    match sub.get_one::<String>("date") {
        Some(s) => parse_date(s).map_err(|_| FinanceError::InvalidDate(s.clone()).into()),
        None => Ok(default),
    }
}

pub fn month_or(sub: &clap::ArgMatches, default: Month) -> Result<Month> {
    match sub.get_one::<String>("month") {
        Some(s) => parse_month(s),
        None => Ok(default),
    }
}
