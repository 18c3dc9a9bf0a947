//! Category configuration
//!
//! Categories are plain names. Which names a transaction may use depends on
//! its type, and that mapping comes from settings rather than from the
//! stored data, so it is never persisted alongside transactions.

use serde::{Deserialize, Serialize};

use super::transaction::TransactionType;

/// The allowed category names for each transaction type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Categories available to income transactions
    #[serde(default = "default_income_categories")]
    pub income: Vec<String>,

    /// Categories available to expense transactions and budgets
    #[serde(default = "default_expense_categories")]
    pub expense: Vec<String>,
}

fn default_income_categories() -> Vec<String> {
    ["Salary", "Freelance", "Investments", "Other"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_expense_categories() -> Vec<String> {
    [
        "Food",
        "Transportation",
        "Entertainment",
        "Bills",
        "Shopping",
        "Health",
        "Other",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            income: default_income_categories(),
            expense: default_expense_categories(),
        }
    }
}

impl CategoryConfig {
    /// Categories a transaction of `kind` may be filed under
    pub fn allowed_categories(&self, kind: TransactionType) -> &[String] {
        match kind {
            TransactionType::Income => &self.income,
            TransactionType::Expense => &self.expense,
        }
    }

    pub fn is_allowed(&self, kind: TransactionType, category: &str) -> bool {
        self.allowed_categories(kind).iter().any(|c| c == category)
    }

    /// Categories that can carry a budget (expense categories only)
    pub fn budget_categories(&self) -> &[String] {
        &self.expense
    }

    /// Every known category, income first, without duplicates ("Other"
    /// appears in both default lists)
    pub fn all_categories(&self) -> Vec<&str> {
        let mut all: Vec<&str> = Vec::new();
        for name in self.income.iter().chain(self.expense.iter()) {
            if !all.contains(&name.as_str()) {
                all.push(name);
            }
        }
        all
    }
}
