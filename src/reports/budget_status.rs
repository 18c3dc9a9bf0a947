//! Budget utilization report
//!
//! Joins each budget with the expense transactions of its category. Nothing
//! here is stored; statuses are recomputed from the current snapshot.

use crate::models::{Money, Transaction};
use crate::storage::BudgetMap;

/// How close a category is to its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilizationLevel {
    OnTrack,
    /// At or above the warning threshold, still under the limit
    Warning,
    /// Spent the full limit or more
    Over,
}

impl UtilizationLevel {
    fn classify(percentage: f64, warning_percent: f64) -> Self {
        if percentage >= 100.0 {
            Self::Over
        } else if percentage >= warning_percent {
            Self::Warning
        } else {
            Self::OnTrack
        }
    }
}

/// Status of one budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub category: String,
    pub limit: Money,
    /// Sum of expense amounts in this category
    pub spent: Money,
    /// `spent / limit * 100`, unclamped
    pub percentage: f64,
    /// `limit - spent`; negative when over budget
    pub remaining: Money,
    pub level: UtilizationLevel,
}

impl BudgetStatus {
    pub fn compute(
        category: &str,
        limit: Money,
        transactions: &[Transaction],
        warning_percent: f64,
    ) -> Self {
        debug_assert!(limit.is_positive(), "budget limits are always positive");

        let spent: Money = transactions
            .iter()
            .filter(|t| t.is_expense() && t.category == category)
            .map(|t| t.amount)
            .sum();

        let percentage = spent.cents() as f64 * 100.0 / limit.cents() as f64;

        Self {
            category: category.to_string(),
            limit,
            spent,
            percentage,
            remaining: limit - spent,
            level: UtilizationLevel::classify(percentage, warning_percent),
        }
    }

    pub fn is_over(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Status of every budget, in category name order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BudgetStatusReport {
    pub statuses: Vec<BudgetStatus>,
}

impl BudgetStatusReport {
    pub fn generate(budgets: &BudgetMap, transactions: &[Transaction], warning_percent: f64) -> Self {
        let statuses = budgets
            .iter()
            .map(|(category, limit)| {
                BudgetStatus::compute(category, *limit, transactions, warning_percent)
            })
            .collect();

        Self { statuses }
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn get(&self, category: &str) -> Option<&BudgetStatus> {
        self.statuses.iter().find(|s| s.category == category)
    }

    pub fn over_budget(&self) -> impl Iterator<Item = &BudgetStatus> {
        self.statuses.iter().filter(|s| s.is_over())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionDraft, TransactionType};
    use chrono::NaiveDate;

    fn expense(cents: i64, category: &str) -> Transaction {
        Transaction::from_draft(TransactionDraft::new(
            TransactionType::Expense,
            Money::from_cents(cents),
            "test",
            category,
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        ))
    }

    fn budgets(entries: &[(&str, i64)]) -> BudgetMap {
        entries
            .iter()
            .map(|(c, cents)| (c.to_string(), Money::from_cents(*cents)))
            .collect()
    }

    #[test]
    fn test_half_spent() {
        let txns = vec![expense(5000, "Food")];
        let report = BudgetStatusReport::generate(&budgets(&[("Food", 10000)]), &txns, 80.0);

        let food = report.get("Food").unwrap();
        assert_eq!(food.spent, Money::from_cents(5000));
        assert_eq!(food.percentage, 50.0);
        assert_eq!(food.remaining, Money::from_cents(5000));
        assert_eq!(food.level, UtilizationLevel::OnTrack);
    }

    #[test]
    fn test_over_budget_is_not_clamped() {
        let txns = vec![expense(5000, "Food"), expense(6000, "Food")];
        let report = BudgetStatusReport::generate(&budgets(&[("Food", 10000)]), &txns, 80.0);

        let food = report.get("Food").unwrap();
        assert_eq!(food.spent, Money::from_cents(11000));
        assert_eq!(food.percentage, 110.0);
        assert_eq!(food.remaining, Money::from_cents(-1000));
        assert_eq!(food.level, UtilizationLevel::Over);
        assert!(food.is_over());
        assert_eq!(report.over_budget().count(), 1);
    }

    #[test]
    fn test_budget_without_spending() {
        let report = BudgetStatusReport::generate(&budgets(&[("Health", 4500)]), &[], 80.0);

        let health = report.get("Health").unwrap();
        assert_eq!(health.spent, Money::zero());
        assert_eq!(health.percentage, 0.0);
        assert_eq!(health.remaining, Money::from_cents(4500));
    }

    #[test]
    fn test_income_and_other_categories_ignored() {
        let txns = vec![
            expense(2000, "Bills"),
            Transaction::from_draft(TransactionDraft::new(
                TransactionType::Income,
                Money::from_cents(9000),
                "refund",
                "Other",
                NaiveDate::from_ymd_opt(2024, 1, 11).unwrap(),
            )),
            expense(1000, "Other"),
        ];
        let report = BudgetStatusReport::generate(&budgets(&[("Other", 4000)]), &txns, 80.0);

        assert_eq!(report.get("Other").unwrap().spent, Money::from_cents(1000));
    }

    #[test]
    fn test_levels_and_order() {
        let txns = vec![expense(8000, "Food"), expense(10000, "Bills")];
        let report = BudgetStatusReport::generate(
            &budgets(&[("Food", 10000), ("Bills", 10000), ("Shopping", 10000)]),
            &txns,
            80.0,
        );

        let order: Vec<_> = report.statuses.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(order, vec!["Bills", "Food", "Shopping"]);

        assert_eq!(report.get("Food").unwrap().level, UtilizationLevel::Warning);
        assert_eq!(report.get("Bills").unwrap().level, UtilizationLevel::Over);
        assert!(!report.get("Bills").unwrap().is_over());
        assert_eq!(report.get("Shopping").unwrap().level, UtilizationLevel::OnTrack);
    }

    #[test]
    fn test_empty_budgets() {
        let report = BudgetStatusReport::generate(&BudgetMap::new(), &[expense(100, "Food")], 80.0);
        assert!(report.is_empty());
    }
}
