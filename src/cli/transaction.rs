//! Transaction CLI commands
//!
//! Implements CLI commands for transaction management.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{parse_date, Money, TransactionDraft, TransactionType};
use crate::services::{SortOrder, TransactionFilter, TransactionService};
use crate::storage::Storage;

use super::report_persistence;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record income or an expense
    Add {
        /// "income" or "expense"
        kind: String,
        /// Amount (e.g., "50", "50.25" or "$50.00")
        amount: String,
        /// What the money was for
        description: String,
        /// Category name (must belong to the transaction type)
        #[arg(short, long)]
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions
    List {
        /// Filter by category name
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by type ("income" or "expense")
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Case-insensitive text to look for in descriptions
        #[arg(short, long)]
        search: Option<String>,
        /// newest, oldest, largest, smallest or added
        #[arg(long, default_value = "newest")]
        order: String,
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID (full or displayed prefix)
        id: String,
    },
    /// Edit a transaction; omitted fields keep their current value
    Edit {
        /// Transaction ID (full or displayed prefix)
        id: String,
        /// New type
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID (full or displayed prefix)
        id: String,
    },
}

fn parse_kind(kind: &str) -> TrackerResult<TransactionType> {
    kind.parse::<TransactionType>()
        .map_err(|e| TrackerError::Validation(e.to_string()))
}

fn parse_amount(amount: &str) -> TrackerResult<Money> {
    Money::parse(amount).map_err(|e| {
        TrackerError::Validation(format!(
            "Invalid amount '{}'. Use a format like '50' or '50.25'. Error: {}",
            amount, e
        ))
    })
}

fn parse_date_arg(date: &str) -> TrackerResult<NaiveDate> {
    parse_date(date).map_err(|e| TrackerError::Validation(e.to_string()))
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    let categories = settings.category_config();
    let mut service = TransactionService::new(storage, &categories);

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            description,
            category,
            date,
        } => {
            let kind = parse_kind(&kind)?;
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(d) => parse_date_arg(&d)?,
                None => chrono::Local::now().date_naive(),
            };

            let outcome = service.add(TransactionDraft::new(
                kind,
                amount,
                description,
                category,
                date,
            ))?;
            report_persistence(&outcome);

            let txn = outcome.into_value();
            println!("Added {} {}", txn.kind.to_string().to_lowercase(), txn.id);
            println!("  {}", txn);
        }

        TransactionCommands::List {
            category,
            kind,
            search,
            order,
            limit,
        } => {
            let mut filter = TransactionFilter::new().order(order.parse::<SortOrder>()?);
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(kind) = kind {
                filter = filter.kind(parse_kind(&kind)?);
            }
            if let Some(search) = search {
                filter = filter.search(search);
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let transactions = service.query(&filter);
            print!("{}", format_transaction_register(&transactions, settings));
        }

        TransactionCommands::Show { id } => {
            let txn = service.find(&id)?;
            print!("{}", format_transaction_details(&txn, settings));
        }

        TransactionCommands::Edit {
            id,
            kind,
            amount,
            description,
            category,
            date,
        } => {
            let existing = service.find(&id)?;

            if kind.is_none()
                && amount.is_none()
                && description.is_none()
                && category.is_none()
                && date.is_none()
            {
                println!("No changes specified.");
                return Ok(());
            }

            let mut draft = existing.to_draft();
            if let Some(kind) = kind {
                draft.kind = parse_kind(&kind)?;
            }
            if let Some(amount) = amount {
                draft.amount = parse_amount(&amount)?;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(category) = category {
                draft.category = category;
            }
            if let Some(date) = date {
                draft.date = parse_date_arg(&date)?;
            }

            let outcome = service.update(existing.id, draft)?;
            report_persistence(&outcome);

            println!("Updated {}", outcome.value.id);
            println!("  {}", outcome.value);
        }

        TransactionCommands::Delete { id } => {
            let txn = service.find(&id)?;
            let outcome = service.delete(txn.id)?;
            report_persistence(&outcome);

            println!("Deleted {}", outcome.value.id);
            println!("  {}", outcome.value);
        }
    }

    Ok(())
}
