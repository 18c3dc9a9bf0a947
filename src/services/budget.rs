//! Budget service
//!
//! Sets and removes per-category spending limits. Budgets relate to
//! transactions only by category name, resolved when reports are built.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{CategoryConfig, Money};
use crate::storage::{BudgetMap, Storage};

use super::Mutation;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a mut Storage,
    categories: &'a CategoryConfig,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a mut Storage, categories: &'a CategoryConfig) -> Self {
        Self {
            storage,
            categories,
        }
    }

    /// Set the limit for an expense category, replacing any existing one
    ///
    /// The returned value is the limit that was replaced, if any.
    pub fn set(&mut self, category: &str, limit: Money) -> TrackerResult<Mutation<Option<Money>>> {
        if !limit.is_positive() {
            return Err(TrackerError::Validation(format!(
                "Budget amount must be greater than zero (got {})",
                limit
            )));
        }
        if limit.exceeds_max() {
            return Err(TrackerError::Validation(format!(
                "Budget amount {} is larger than the maximum of {}",
                limit,
                Money::MAX_AMOUNT
            )));
        }

        if !self
            .categories
            .budget_categories()
            .iter()
            .any(|c| c == category)
        {
            return Err(TrackerError::Validation(format!(
                "Budgets can only be set on expense categories; '{}' is not one",
                category
            )));
        }

        let previous = self.storage.budgets.set(category, limit);

        tracing::info!(category, limit = %limit, replaced = previous.is_some(), "budget set");

        Ok(Mutation::write_through(self.storage, previous))
    }

    /// Remove the budget for a category
    ///
    /// Fails with a not-found error if the category has no budget, matching
    /// the transaction delete policy.
    pub fn delete(&mut self, category: &str) -> TrackerResult<Mutation<Money>> {
        let removed = self
            .storage
            .budgets
            .remove(category)
            .ok_or_else(|| TrackerError::budget_not_found(category))?;

        tracing::info!(category, "budget deleted");

        Ok(Mutation::write_through(self.storage, removed))
    }

    pub fn get(&self, category: &str) -> Option<Money> {
        self.storage.budgets.get(category)
    }

    /// Read-only snapshot of every budget
    pub fn all(&self) -> BudgetMap {
        self.storage.budgets.all().clone()
    }
}
