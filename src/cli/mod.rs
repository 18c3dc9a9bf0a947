//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use report::{handle_categories_command, handle_dashboard_command};
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::services::Mutation;

/// Tell the user when a change was applied but could not be saved
fn report_persistence<T>(outcome: &Mutation<T>) {
    if let Some(err) = outcome.warning() {
        eprintln!("Warning: change applied but not saved: {}", err);
    }
}
