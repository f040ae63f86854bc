// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;

use crate::db::KvStore;
use crate::error::FinanceError;
use crate::models::{Recurrence, Transaction, TxType, DEFAULT_CATEGORY};
use crate::settings::keys;
use crate::utils::local_instant;

/// What the user fills in when composing or editing a transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TxDraft {
    pub title: String,
    pub amount: Decimal,
    pub r#type: TxType,
    pub date: Option<NaiveDate>,
    pub group: Option<String>,
    pub alert: bool,
    pub recurring: bool,
    pub recurrence: Option<Recurrence>,
}

impl TxDraft {
    pub fn validate(&self) -> Result<NaiveDate, FinanceError> {
        if self.title.trim().is_empty() {
            return Err(FinanceError::EmptyTitle);
        }
        if self.amount <= Decimal::ZERO {
            return Err(FinanceError::NonPositiveAmount(self.amount));
        }
        self.date.ok_or(FinanceError::MissingDate)
    }

    fn apply(&self, tx: &mut Transaction, date: NaiveDate) {
        tx.title = self.title.trim().to_string();
        tx.amount = self.amount;
        tx.r#type = self.r#type;
        tx.date = local_instant(date);
        tx.group = self
            .group
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_string);
        tx.alert = self.alert;
        tx.category = DEFAULT_CATEGORY.to_string();
        tx.recurring = self.recurring;
        tx.recurrence = if self.recurring {
            self.recurrence.clone()
        } else {
            None
        };
    }
}

/// The mutable transaction list, newest entries first.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    txs: Vec<Transaction>,
}

impl Ledger {
    pub fn new(txs: Vec<Transaction>) -> Self {
        Ledger { txs }
    }

    pub fn load(kv: &KvStore) -> Result<Self> {
        Ok(Ledger::new(kv.get(keys::TRANSACTIONS)?.unwrap_or_default()))
    }

    pub fn save(&self, kv: &KvStore) -> Result<()> {
        kv.set(keys::TRANSACTIONS, &self.txs)
    }

    pub fn all(&self) -> &[Transaction] {
        &self.txs
    }

    pub fn list_mut(&mut self) -> &mut Vec<Transaction> {
        &mut self.txs
    }

    pub fn get(&self, id: i64) -> Option<&Transaction> {
        self.txs.iter().find(|t| t.id == id)
    }

    /// Millisecond timestamp, bumped past any id already in use.
    pub fn next_id(&self, now_ms: i64) -> i64 {
        let max = self.txs.iter().map(|t| t.id).max().unwrap_or(i64::MIN);
        if now_ms > max { now_ms } else { max + 1 }
    }

    pub fn prepend(&mut self, tx: Transaction) {
        self.txs.insert(0, tx);
    }

    pub fn create(&mut self, draft: &TxDraft, now_ms: i64) -> Result<i64, FinanceError> {
        let date = draft.validate()?;
        let mut tx = Transaction {
            id: self.next_id(now_ms),
            title: String::new(),
            amount: Decimal::ZERO,
            r#type: draft.r#type,
            date: String::new(),
            category: String::new(),
            group: None,
            recurring: false,
            recurrence: None,
            alert: false,
        };
        draft.apply(&mut tx, date);
        let id = tx.id;
        info!(id, title = %tx.title, "transaction created");
        self.prepend(tx);
        Ok(id)
    }

    pub fn update(&mut self, id: i64, draft: &TxDraft) -> Result<(), FinanceError> {
        let date = draft.validate()?;
        let tx = self
            .txs
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(FinanceError::TransactionNotFound(id))?;
        draft.apply(tx, date);
        info!(id, "transaction updated");
        Ok(())
    }

    pub fn delete(&mut self, id: i64) -> Result<Transaction, FinanceError> {
        let pos = self
            .txs
            .iter()
            .position(|t| t.id == id)
            .ok_or(FinanceError::TransactionNotFound(id))?;
        info!(id, "transaction deleted");
        Ok(self.txs.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Frequency;

    fn draft(title: &str, amount: i64) -> TxDraft {
        TxDraft {
            title: title.to_string(),
            amount: Decimal::new(amount, 0),
            r#type: TxType::Expense,
            date: NaiveDate::from_ymd_opt(2024, 3, 1),
            group: None,
            alert: false,
            recurring: false,
            recurrence: None,
        }
    }

    #[test]
    fn create_prepends_with_fresh_ids() {
        let mut l = Ledger::default();
        let a = l.create(&draft("Rent", 5000), 1_000).unwrap();
        let b = l.create(&draft("Water", 80), 1_000).unwrap();
        assert_eq!(a, 1_000);
        assert_eq!(b, 1_001);
        assert_eq!(l.all()[0].title, "Water");
        assert_eq!(l.all()[1].category, DEFAULT_CATEGORY);
    }

    #[test]
    fn gates_leave_ledger_untouched() {
        let mut l = Ledger::default();
        assert_eq!(l.create(&draft("  ", 10), 1), Err(FinanceError::EmptyTitle));
        assert!(matches!(
            l.create(&draft("x", 0), 1),
            Err(FinanceError::NonPositiveAmount(_))
        ));
        let mut no_date = draft("x", 10);
        no_date.date = None;
        assert_eq!(l.create(&no_date, 1), Err(FinanceError::MissingDate));
        assert!(l.all().is_empty());
    }

    #[test]
    fn update_keeps_id_and_drops_recurrence_when_not_recurring() {
        let mut l = Ledger::default();
        let mut d = draft("Gym", 300);
        d.recurring = true;
        d.recurrence = Some(Recurrence {
            frequency: Frequency::Monthly,
            duration: 6,
            weekdays_only: false,
        });
        d.group = Some("  Faturalar ".into());
        let id = l.create(&d, 42).unwrap();
        assert_eq!(l.get(id).unwrap().group.as_deref(), Some("Faturalar"));
        assert!(l.get(id).unwrap().recurrence.is_some());

        d.recurring = false;
        d.amount = Decimal::new(350, 0);
        l.update(id, &d).unwrap();
        let tx = l.get(id).unwrap();
        assert_eq!(tx.id, 42);
        assert_eq!(tx.amount, Decimal::new(350, 0));
        assert!(tx.recurrence.is_none());
    }

    #[test]
    fn delete_unknown_id_is_reported() {
        let mut l = Ledger::default();
        assert_eq!(l.delete(7), Err(FinanceError::TransactionNotFound(7)));
    }

    #[test]
    fn save_and_load_round_trip_through_store() {
        let kv = KvStore::open_in_memory().unwrap();
        let mut l = Ledger::default();
        l.create(&draft("Rent", 5000), 5).unwrap();
        l.save(&kv).unwrap();
        let back = Ledger::load(&kv).unwrap();
        assert_eq!(back.all(), l.all());
    }
}
