//! Transaction display formatting
//!
//! Register view for lists and a detail view for a single transaction.

use crate::config::Settings;
use crate::models::Transaction;

use super::report::truncate;

/// Signed amount, e.g. `+$3000.00` or `-$50.00`
pub fn format_signed_amount(txn: &Transaction, settings: &Settings) -> String {
    format!(
        "{}{}",
        txn.kind.sign(),
        txn.amount.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    format!(
        "{:12} {:10} {:24} {:14} {:>12}",
        txn.id.to_string(),
        txn.date.format(&settings.date_format).to_string(),
        truncate(&txn.description, 24),
        truncate(&txn.category, 14),
        format_signed_amount(txn, settings)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:24} {:14} {:>12}\n",
        "ID", "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(76));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, settings));
        output.push('\n');
    }

    output.push_str(&format!("\n{} transaction(s)\n", transactions.len()));
    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Full ID:     {}\n", txn.id.as_uuid()));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Date:        {}\n", txn.date.format(&settings.date_format)));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Category:    {}\n", txn.category));

    output
}
