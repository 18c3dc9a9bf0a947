//! Dashboard rendering
//!
//! Summary totals, the expense-by-category chart, recent activity and
//! budget statuses, in that order.

use crate::config::Settings;
use crate::models::CategoryConfig;
use crate::reports::{CategoryBreakdown, Dashboard, Totals};

use super::budget::format_budget_report;
use super::report::{format_bar, format_header, separator, truncate};
use super::transaction::format_transaction_register;

const WIDTH: usize = 60;

pub fn format_totals(totals: &Totals, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = String::new();
    output.push_str(&format!(
        "Total Income:   {:>14}\n",
        totals.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Expenses: {:>14}\n",
        totals.expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Balance:        {:>14}\n",
        totals.balance.format_with_symbol(symbol)
    ));
    output
}

pub fn format_breakdown(breakdown: &CategoryBreakdown, settings: &Settings) -> String {
    if breakdown.is_empty() {
        return "No expense data available\n".to_string();
    }

    let mut output = String::new();
    for entry in &breakdown.entries {
        output.push_str(&format!(
            "{:16} {} {:>12}\n",
            truncate(&entry.category, 16),
            format_bar(entry.bar_percent, 25),
            entry.total.format_with_symbol(&settings.currency_symbol)
        ));
    }
    output
}

fn section(output: &mut String, title: &str) {
    output.push('\n');
    output.push_str(title);
    output.push('\n');
    output.push_str(&separator(WIDTH));
    output.push('\n');
}

pub fn format_dashboard(dashboard: &Dashboard, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format_header("Finance Dashboard", WIDTH));
    output.push('\n');
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format_totals(&dashboard.totals, settings));

    section(&mut output, "Expenses by Category");
    output.push_str(&format_breakdown(&dashboard.breakdown, settings));

    section(&mut output, "Recent Transactions");
    output.push_str(&format_transaction_register(&dashboard.recent, settings));

    section(&mut output, "Budgets");
    output.push_str(&format_budget_report(&dashboard.budgets, settings));

    output
}

/// Category lists per type, for the `categories` command
pub fn format_categories(categories: &CategoryConfig) -> String {
    let mut output = String::new();
    output.push_str("Income:\n");
    for name in &categories.income {
        output.push_str(&format!("  {}\n", name));
    }
    output.push_str("Expense (budgetable):\n");
    for name in &categories.expense {
        output.push_str(&format!("  {}\n", name));
    }
    output.push_str(&format!(
        "\nFilter choices: {}\n",
        categories.all_categories().join(", ")
    ));
    output
}
