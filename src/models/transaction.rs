//! Transaction model
//!
//! A transaction is either income or an expense with a positive amount, a
//! non-empty description, a category valid for its type, and a date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::CategoryConfig;
use super::ids::TransactionId;
use super::money::Money;

/// Date format used for input and for the persisted representation
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }

    /// Sign shown in front of amounts in lists
    pub fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = TransactionValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(TransactionValidationError::UnknownType(other.to_string())),
        }
    }
}

/// Parse a calendar date in `YYYY-MM-DD` form
pub fn parse_date(s: &str) -> Result<NaiveDate, TransactionValidationError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| TransactionValidationError::InvalidDate(s.to_string()))
}

/// The user-editable fields of a transaction
///
/// Used both to create a transaction and to replace every mutable field of
/// an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub kind: TransactionType,
    pub amount: Money,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
}

impl TransactionDraft {
    pub fn new(
        kind: TransactionType,
        amount: Money,
        description: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind,
            amount,
            description: description.into(),
            category: category.into(),
            date,
        }
    }

    /// Check every field against the category configuration and return the
    /// draft with its description trimmed
    pub fn validated(
        mut self,
        categories: &CategoryConfig,
    ) -> Result<Self, TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        if self.amount.exceeds_max() {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }

        let trimmed = self.description.trim();
        if trimmed.is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }
        self.description = trimmed.to_string();

        if !categories.is_allowed(self.kind, &self.category) {
            return Err(TransactionValidationError::CategoryNotAllowed {
                kind: self.kind,
                category: self.category,
            });
        }

        Ok(self)
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, fixed at creation
    pub id: TransactionId,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Always positive; the direction comes from `kind`
    pub amount: Money,

    pub description: String,

    pub category: String,

    pub date: NaiveDate,
}

impl Transaction {
    /// Create a transaction from an already validated draft
    pub fn from_draft(draft: TransactionDraft) -> Self {
        Self {
            id: TransactionId::new(),
            kind: draft.kind,
            amount: draft.amount,
            description: draft.description,
            category: draft.category,
            date: draft.date,
        }
    }

    /// Replace every mutable field, keeping the id
    pub fn apply(&mut self, draft: TransactionDraft) {
        self.kind = draft.kind;
        self.amount = draft.amount;
        self.description = draft.description;
        self.category = draft.category;
        self.date = draft.date;
    }

    /// The mutable fields as a draft
    pub fn to_draft(&self) -> TransactionDraft {
        TransactionDraft {
            kind: self.kind,
            amount: self.amount,
            description: self.description.clone(),
            category: self.category.clone(),
            date: self.date,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }

    /// Amount with the sign of its direction (income positive)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Case-insensitive substring match on the description
    pub fn description_contains(&self, needle: &str) -> bool {
        self.description
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }

    /// Check the invariants that must hold for any stored transaction
    ///
    /// Category membership is only enforced at creation time, so a record
    /// loaded after the category configuration changed still validates.
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        if self.amount.exceeds_max() {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }
        if self.category.is_empty() {
            return Err(TransactionValidationError::MissingCategory);
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}{}",
            self.date.format(DATE_FORMAT),
            self.description,
            self.kind.sign(),
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    EmptyDescription,
    MissingCategory,
    CategoryNotAllowed {
        kind: TransactionType,
        category: String,
    },
    UnknownType(String),
    InvalidDate(String),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Amount {} is larger than the maximum of {}",
                amount,
                Money::MAX_AMOUNT
            ),
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::MissingCategory => write!(f, "Category is required"),
            Self::CategoryNotAllowed { kind, category } => write!(
                f,
                "Category '{}' is not valid for {} transactions",
                category,
                kind.to_string().to_lowercase()
            ),
            Self::UnknownType(s) => {
                write!(f, "Unknown transaction type '{}': use income or expense", s)
            }
            Self::InvalidDate(s) => write!(f, "Invalid date '{}': use YYYY-MM-DD", s),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
