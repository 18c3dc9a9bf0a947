//! Finance tracker - single-user personal finance tracking
//!
//! This library records income and expense transactions, keeps per-category
//! budgets, and derives the aggregates a dashboard needs (totals, a category
//! breakdown, budget utilization and recent activity). All state lives in two
//! JSON blobs that are rewritten wholesale after every mutation.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, money, categories)
//! - `storage`: Blob store abstraction and in-memory repositories
//! - `services`: Validated mutations and queries over the repositories
//! - `reports`: Pure aggregation over a snapshot (totals, breakdown, budgets)
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `fintrack` binary
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use finance_tracker::config::Settings;
//! use finance_tracker::models::{Money, TransactionDraft, TransactionType};
//! use finance_tracker::reports::Totals;
//! use finance_tracker::services::TransactionService;
//! use finance_tracker::storage::{MemoryBlobStore, Storage};
//!
//! let settings = Settings::default();
//! let categories = settings.category_config();
//! let mut storage = Storage::new(Box::new(MemoryBlobStore::new()));
//!
//! let mut service = TransactionService::new(&mut storage, &categories);
//! service
//!     .add(TransactionDraft::new(
//!         TransactionType::Expense,
//!         Money::from_cents(5000),
//!         "Groceries",
//!         "Food",
//!         NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
//!     ))
//!     .unwrap();
//!
//! let totals = Totals::compute(storage.transactions.get_all());
//! assert_eq!(totals.balance, Money::from_cents(-5000));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
