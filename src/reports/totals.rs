//! Income, expense and balance totals

use crate::models::{Money, Transaction, TransactionType};

/// Dashboard summary figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Money,
    pub expenses: Money,
    /// `income - expenses`; negative when spending exceeds income
    pub balance: Money,
}

impl Totals {
    /// Sum a snapshot of transactions; an empty slice yields all zeros
    pub fn compute(transactions: &[Transaction]) -> Self {
        let mut income = Money::zero();
        let mut expenses = Money::zero();

        for txn in transactions {
            match txn.kind {
                TransactionType::Income => income += txn.amount,
                TransactionType::Expense => expenses += txn.amount,
            }
        }

        Self {
            income,
            expenses,
            balance: income - expenses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionDraft;
    use chrono::NaiveDate;

    fn txn(kind: TransactionType, cents: i64, category: &str) -> Transaction {
        Transaction::from_draft(TransactionDraft::new(
            kind,
            Money::from_cents(cents),
            "test",
            category,
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        ))
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(Totals::compute(&[]), Totals::default());
    }

    #[test]
    fn test_single_expense() {
        let totals = Totals::compute(&[txn(TransactionType::Expense, 5000, "Food")]);
        assert_eq!(totals.expenses, Money::from_cents(5000));
        assert_eq!(totals.income, Money::zero());
        assert_eq!(totals.balance, Money::from_cents(-5000));
    }

    #[test]
    fn test_mixed() {
        let totals = Totals::compute(&[
            txn(TransactionType::Income, 300000, "Salary"),
            txn(TransactionType::Expense, 5000, "Food"),
            txn(TransactionType::Expense, 12050, "Bills"),
            txn(TransactionType::Income, 10, "Other"),
        ]);
        assert_eq!(totals.income, Money::from_cents(300010));
        assert_eq!(totals.expenses, Money::from_cents(17050));
        assert_eq!(totals.balance, Money::from_cents(282960));
    }

    #[test]
    fn test_huge_amounts_saturate() {
        let txns = vec![
            txn(TransactionType::Expense, i64::MAX, "Food"),
            txn(TransactionType::Expense, i64::MAX, "Food"),
            txn(TransactionType::Income, 100, "Salary"),
        ];
        let totals = Totals::compute(&txns);
        assert_eq!(totals.expenses, Money::from_cents(i64::MAX));
        assert_eq!(totals.balance, Money::from_cents(100 - i64::MAX));
    }

    #[test]
    fn test_cents_do_not_drift() {
        // 0.1 + 0.2 style sums stay exact
        let txns: Vec<_> = (0..10)
            .map(|_| txn(TransactionType::Expense, 10, "Food"))
            .collect();
        assert_eq!(Totals::compute(&txns).expenses, Money::from_cents(100));
    }
}
