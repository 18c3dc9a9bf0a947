//! Core data models for the finance tracker
//!
//! Transactions, the money type they are measured in, and the category
//! configuration that constrains them.

pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::CategoryConfig;
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{
    parse_date, Transaction, TransactionDraft, TransactionType, TransactionValidationError,
    DATE_FORMAT,
};
