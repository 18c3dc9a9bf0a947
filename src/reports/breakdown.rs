//! Expense breakdown by category
//!
//! Feeds the dashboard's category chart. Only expense transactions count,
//! and a category appears only if something was spent in it.

use std::collections::BTreeMap;

use crate::models::{Money, Transaction};

/// Spending in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: String,
    pub total: Money,
    pub transaction_count: usize,
    /// Bar height relative to the largest category, 0-100
    pub bar_percent: f64,
}

/// Expense totals per category, in order of first appearance
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryBreakdown {
    pub entries: Vec<CategorySpending>,
}

impl CategoryBreakdown {
    pub fn compute(transactions: &[Transaction]) -> Self {
        let mut entries: Vec<CategorySpending> = Vec::new();

        for txn in transactions.iter().filter(|t| t.is_expense()) {
            match entries.iter_mut().find(|e| e.category == txn.category) {
                Some(entry) => {
                    entry.total += txn.amount;
                    entry.transaction_count += 1;
                }
                None => entries.push(CategorySpending {
                    category: txn.category.clone(),
                    total: txn.amount,
                    transaction_count: 1,
                    bar_percent: 0.0,
                }),
            }
        }

        entries.retain(|e| !e.total.is_zero());

        let max = entries.iter().map(|e| e.total).max().unwrap_or_default();
        if max.is_positive() {
            for entry in &mut entries {
                entry.bar_percent = entry.total.cents() as f64 * 100.0 / max.cents() as f64;
            }
        }

        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum over every category; equals total expenses
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.total).sum()
    }

    pub fn get(&self, category: &str) -> Option<Money> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.total)
    }

    /// Category -> total mapping
    pub fn as_map(&self) -> BTreeMap<String, Money> {
        self.entries
            .iter()
            .map(|e| (e.category.clone(), e.total))
            .collect()
    }
}
