// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Monthly totals and the grouped list shown on the home screen.

use rust_decimal::Decimal;

use crate::models::{
    GroupedTransactions, Month, MonthlyStats, Transaction, TxGroup, TxType, OVERTIME_CATEGORY,
};
use crate::utils::parse_instant;

/// Transactions dated inside `month`. Rows whose date does not parse are
/// left out.
pub fn in_month<'a>(
    txs: &'a [Transaction],
    month: Month,
) -> impl Iterator<Item = &'a Transaction> + 'a {
    txs.iter()
        .filter(move |t| t.day().is_some_and(|d| month.contains(d)))
}

pub fn monthly_stats(txs: &[Transaction], month: Month) -> MonthlyStats {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for t in in_month(txs, month) {
        match t.r#type {
            TxType::Income => income = income.saturating_add(t.amount),
            TxType::Expense => expense = expense.saturating_add(t.amount),
        }
    }
    MonthlyStats {
        income,
        expense,
        balance: income.saturating_sub(expense),
    }
}

/// Sum of the month's overtime rows, matched on category or group.
pub fn monthly_overtime(txs: &[Transaction], month: Month) -> Decimal {
    in_month(txs, month)
        .filter(|t| t.category == OVERTIME_CATEGORY || t.group_name() == Some(OVERTIME_CATEGORY))
        .fold(Decimal::ZERO, |acc, t| acc.saturating_add(t.amount))
}

/// Partition the month's transactions into named groups and singles, newest
/// first. Groups appear in the order they are first met.
pub fn group_month(txs: &[Transaction], month: Month) -> GroupedTransactions {
    let mut rows: Vec<(&Transaction, i64)> = in_month(txs, month)
        .map(|t| {
            let ts = parse_instant(&t.date).map_or(i64::MIN, |d| d.timestamp_millis());
            (t, ts)
        })
        .collect();
    // stable: equal instants keep store order
    rows.sort_by(|a, b| b.1.cmp(&a.1));

    let mut out = GroupedTransactions::default();
    for (tx, _) in rows {
        match tx.group_name() {
            Some(name) => {
                let idx = match out.groups.iter().position(|g| g.name == name) {
                    Some(i) => i,
                    None => {
                        out.groups.push(TxGroup {
                            name: name.to_string(),
                            total: Decimal::ZERO,
                            items: Vec::new(),
                        });
                        out.groups.len() - 1
                    }
                };
                let group = &mut out.groups[idx];
                group.total = group.total.saturating_add(tx.signed_amount());
                group.items.push(tx.clone());
            }
            None => out.singles.push(tx.clone()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::tx;

    const MARCH: Month = Month {
        year: 2024,
        month: 3,
    };

    #[test]
    fn stats_sum_by_type_within_month() {
        let txs = vec![
            tx(1, "Salary", 22500, TxType::Income, (2024, 3, 1), None),
            tx(2, "Rent", 5000, TxType::Expense, (2024, 3, 1), None),
            tx(3, "Food", 700, TxType::Expense, (2024, 3, 20), Some("Market")),
            tx(4, "Old", 999, TxType::Expense, (2024, 2, 29), None),
            tx(5, "Next", 111, TxType::Income, (2025, 3, 2), None),
        ];
        let s = monthly_stats(&txs, MARCH);
        assert_eq!(s.income, Decimal::new(22500, 0));
        assert_eq!(s.expense, Decimal::new(5700, 0));
        assert_eq!(s.balance, s.income - s.expense);
    }

    #[test]
    fn empty_month_is_all_zero() {
        let txs = vec![tx(1, "Rent", 5000, TxType::Expense, (2024, 2, 1), None)];
        assert_eq!(monthly_stats(&txs, MARCH), MonthlyStats::default());
        assert_eq!(monthly_stats(&[], MARCH), MonthlyStats::default());
    }

    #[test]
    fn unparseable_dates_are_excluded() {
        let mut bad = tx(1, "Bad", 10, TxType::Expense, (2024, 3, 1), None);
        bad.date = "yesterday".into();
        let txs = vec![bad, tx(2, "Good", 5, TxType::Expense, (2024, 3, 2), None)];
        assert_eq!(monthly_stats(&txs, MARCH).expense, Decimal::new(5, 0));
        let g = group_month(&txs, MARCH);
        assert_eq!(g.singles.len(), 1);
        assert_eq!(g.singles[0].id, 2);
    }

    #[test]
    fn grouping_partitions_and_totals_are_signed() {
        let txs = vec![
            tx(1, "Loan A", 1000, TxType::Expense, (2024, 3, 5), Some("Krediler")),
            tx(2, "Power", 300, TxType::Expense, (2024, 3, 10), Some("Faturalar")),
            tx(3, "Coffee", 50, TxType::Expense, (2024, 3, 12), None),
            tx(4, "Refund", 200, TxType::Income, (2024, 3, 15), Some("Krediler")),
            tx(5, "Loan B", 400, TxType::Expense, (2024, 3, 2), Some("Krediler")),
            tx(6, "Gift", 75, TxType::Income, (2024, 3, 1), Some("")),
        ];
        let g = group_month(&txs, MARCH);

        // newest first: Refund(15) opens Krediler before Power(10) opens Faturalar
        let names: Vec<_> = g.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Krediler", "Faturalar"]);

        let kredi = &g.groups[0];
        let ids: Vec<_> = kredi.items.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![4, 1, 5]);
        assert_eq!(kredi.total, Decimal::new(-1200, 0));
        for group in &g.groups {
            let sum: Decimal = group.items.iter().map(|t| t.signed_amount()).sum();
            assert_eq!(sum, group.total);
        }

        let singles: Vec<_> = g.singles.iter().map(|t| t.id).collect();
        assert_eq!(singles, vec![3, 6]);

        let placed = g.singles.len() + g.groups.iter().map(|g| g.items.len()).sum::<usize>();
        assert_eq!(placed, txs.len());
    }

    #[test]
    fn same_instant_keeps_store_order() {
        let txs = vec![
            tx(1, "A", 1, TxType::Expense, (2024, 3, 5), None),
            tx(2, "B", 1, TxType::Expense, (2024, 3, 5), None),
            tx(3, "C", 1, TxType::Expense, (2024, 3, 6), None),
        ];
        let ids: Vec<_> = group_month(&txs, MARCH).singles.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn overtime_total_matches_category_or_group() {
        let mut by_category = tx(1, "Mesai (2s)", 200, TxType::Income, (2024, 3, 4), None);
        by_category.category = OVERTIME_CATEGORY.into();
        let by_group = tx(2, "Extra", 150, TxType::Income, (2024, 3, 9), Some(OVERTIME_CATEGORY));
        let mut february = tx(3, "Mesai (1s)", 100, TxType::Income, (2024, 2, 28), None);
        february.category = OVERTIME_CATEGORY.into();
        let other = tx(4, "Bonus", 999, TxType::Income, (2024, 3, 1), Some("Prim"));

        let txs = vec![by_category, by_group, february, other];
        assert_eq!(monthly_overtime(&txs, MARCH), Decimal::new(350, 0));
        assert_eq!(monthly_overtime(&[], MARCH), Decimal::ZERO);
    }

    #[test]
    fn huge_totals_saturate() {
        let mut a = tx(1, "A", 1, TxType::Income, (2024, 3, 1), Some("Big"));
        let mut b = tx(2, "B", 1, TxType::Income, (2024, 3, 2), Some("Big"));
        let mut c = tx(3, "C", 1, TxType::Expense, (2024, 3, 3), None);
        a.amount = Decimal::MAX;
        b.amount = Decimal::MAX;
        c.amount = Decimal::MAX;
        let txs = vec![a, b, c];

        let s = monthly_stats(&txs, MARCH);
        assert_eq!(s.income, Decimal::MAX);
        assert_eq!(s.expense, Decimal::MAX);
        assert_eq!(s.balance, Decimal::ZERO);
        assert_eq!(group_month(&txs, MARCH).groups[0].total, Decimal::MAX);
    }
}
