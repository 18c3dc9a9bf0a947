//! Budget CLI commands
//!
//! Set, remove and review per-category spending limits.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::budget::format_budget_report;
use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;
use crate::reports::BudgetStatusReport;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::report_persistence;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set (or replace) the limit for an expense category
    Set {
        /// Expense category name
        category: String,
        /// Limit (e.g., "100" or "100.00")
        amount: String,
    },

    /// Remove the budget for a category
    Delete {
        /// Category name
        category: String,
    },

    /// Show every budget with spending against it
    List,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    let categories = settings.category_config();

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let limit = Money::parse(&amount).map_err(|e| {
                TrackerError::Validation(format!(
                    "Invalid amount '{}'. Use a format like '100' or '100.00'. Error: {}",
                    amount, e
                ))
            })?;

            let mut service = BudgetService::new(storage, &categories);
            let outcome = service.set(&category, limit)?;
            report_persistence(&outcome);

            let shown = limit.format_with_symbol(&settings.currency_symbol);
            match outcome.value {
                Some(previous) => println!(
                    "Budget for {} changed from {} to {}",
                    category,
                    previous.format_with_symbol(&settings.currency_symbol),
                    shown
                ),
                None => println!("Budget for {} set to {}", category, shown),
            }
        }

        BudgetCommands::Delete { category } => {
            let mut service = BudgetService::new(storage, &categories);
            let outcome = service.delete(&category)?;
            report_persistence(&outcome);

            println!(
                "Removed {} budget for {}",
                outcome.value.format_with_symbol(&settings.currency_symbol),
                category
            );
        }

        BudgetCommands::List => {
            let report = BudgetStatusReport::generate(
                storage.budgets.all(),
                storage.transactions.get_all(),
                settings.budget_warning_percent,
            );
            print!("{}", format_budget_report(&report, settings));
        }
    }

    Ok(())
}
