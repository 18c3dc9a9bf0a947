//! Aggregations over the transaction and budget snapshots
//!
//! All reports are pure functions of the data they are given and are
//! recomputed on every request.

pub mod breakdown;
pub mod budget_status;
pub mod dashboard;
pub mod totals;

pub use breakdown::{CategoryBreakdown, CategorySpending};
pub use budget_status::{BudgetStatus, BudgetStatusReport, UtilizationLevel};
pub use dashboard::Dashboard;
pub use totals::Totals;
