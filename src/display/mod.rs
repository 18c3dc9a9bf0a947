//! Display formatting for terminal output
//!
//! Every formatter returns a `String`; printing is left to the CLI.

pub mod budget;
pub mod dashboard;
pub mod report;
pub mod transaction;

pub use budget::{format_budget_report, format_budget_status, format_remaining};
pub use dashboard::{format_breakdown, format_categories, format_dashboard, format_totals};
pub use transaction::{
    format_signed_amount, format_transaction_details, format_transaction_register,
    format_transaction_row,
};
