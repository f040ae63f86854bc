// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

/// Input gates that reject a mutation before it reaches the stores.
///
/// None of these are fatal: the command layer reports them and leaves the
/// stored state untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FinanceError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    #[error("Date is required")]
    MissingDate,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Salary is not set or not positive")]
    NonPositiveSalary,

    #[error("Group name must not be empty")]
    EmptyGroupName,

    #[error("Transaction {0} not found")]
    TransactionNotFound(i64),

    #[error("Unknown currency '{0}'")]
    UnknownCurrency(String),

    #[error("Invalid overtime multiplier '{0}', expected 1.5 or 2")]
    InvalidMultiplier(String),

    #[error("Amount is too large to calculate with")]
    AmountOverflow,
}
