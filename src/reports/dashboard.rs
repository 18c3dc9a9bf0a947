//! Dashboard snapshot
//!
//! Everything the dashboard screen shows, computed from one read of storage.

use crate::config::Settings;
use crate::models::Transaction;
use crate::services::TransactionFilter;
use crate::storage::Storage;

use super::{BudgetStatusReport, CategoryBreakdown, Totals};

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub totals: Totals,
    pub breakdown: CategoryBreakdown,
    /// Newest transactions first, at most `Settings::recent_transactions`
    pub recent: Vec<Transaction>,
    pub budgets: BudgetStatusReport,
}

impl Dashboard {
    pub fn generate(storage: &Storage, settings: &Settings) -> Self {
        let transactions = storage.transactions.get_all();

        Self {
            totals: Totals::compute(transactions),
            breakdown: CategoryBreakdown::compute(transactions),
            recent: TransactionFilter::new()
                .limit(settings.recent_transactions)
                .apply(transactions),
            budgets: BudgetStatusReport::generate(
                storage.budgets.all(),
                transactions,
                settings.budget_warning_percent,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionDraft, TransactionType};
    use crate::storage::MemoryBlobStore;
    use chrono::NaiveDate;

    fn add(storage: &mut Storage, kind: TransactionType, cents: i64, category: &str, day: u32) {
        storage.transactions.insert(Transaction::from_draft(TransactionDraft::new(
            kind,
            Money::from_cents(cents),
            format!("day {}", day),
            category,
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        )));
    }

    #[test]
    fn test_empty_dashboard() {
        let storage = Storage::new(Box::new(MemoryBlobStore::new()));
        let dashboard = Dashboard::generate(&storage, &Settings::default());

        assert_eq!(dashboard.totals, Totals::default());
        assert!(dashboard.breakdown.is_empty());
        assert!(dashboard.recent.is_empty());
        assert!(dashboard.budgets.is_empty());
    }

    #[test]
    fn test_oversized_records_do_not_overflow() {
        let mut storage = Storage::new(Box::new(MemoryBlobStore::new()));
        add(&mut storage, TransactionType::Expense, i64::MAX, "Food", 1);
        add(&mut storage, TransactionType::Expense, i64::MAX, "Food", 2);
        storage.budgets.set("Food", Money::from_cents(10000));

        let dashboard = Dashboard::generate(&storage, &Settings::default());

        assert_eq!(dashboard.totals.expenses, Money::from_cents(i64::MAX));
        assert_eq!(dashboard.breakdown.get("Food"), Some(Money::from_cents(i64::MAX)));
        let food = dashboard.budgets.get("Food").unwrap();
        assert_eq!(food.spent, Money::from_cents(i64::MAX));
        assert!(food.is_over());
    }

    #[test]
    fn test_recent_is_limited_and_newest_first() {
        let mut storage = Storage::new(Box::new(MemoryBlobStore::new()));
        for day in 1..=8 {
            add(&mut storage, TransactionType::Expense, 100, "Food", day);
        }
        add(&mut storage, TransactionType::Income, 50000, "Salary", 3);
        storage.budgets.set("Food", Money::from_cents(1000));

        let dashboard = Dashboard::generate(&storage, &Settings::default());

        assert_eq!(dashboard.recent.len(), 5);
        assert_eq!(dashboard.recent[0].description, "day 8");
        assert_eq!(dashboard.recent[4].description, "day 4");

        assert_eq!(dashboard.totals.income, Money::from_cents(50000));
        assert_eq!(dashboard.totals.expenses, Money::from_cents(800));
        assert_eq!(dashboard.breakdown.get("Food"), Some(Money::from_cents(800)));
        assert_eq!(dashboard.budgets.get("Food").unwrap().percentage, 80.0);
    }
}
