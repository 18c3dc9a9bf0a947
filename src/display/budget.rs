//! Budget status display

use crate::config::Settings;
use crate::reports::{BudgetStatus, BudgetStatusReport, UtilizationLevel};

use super::report::{format_bar, format_percentage, truncate};

/// `"$X remaining"` or `"$X over"`
pub fn format_remaining(status: &BudgetStatus, settings: &Settings) -> String {
    let amount = status.remaining.abs().format_with_symbol(&settings.currency_symbol);
    if status.is_over() {
        format!("{} over", amount)
    } else {
        format!("{} remaining", amount)
    }
}

fn level_marker(level: UtilizationLevel) -> &'static str {
    match level {
        UtilizationLevel::OnTrack => " ",
        UtilizationLevel::Warning => "!",
        UtilizationLevel::Over => "✗",
    }
}

/// Two-line entry: spent against limit, then a utilization bar
pub fn format_budget_status(status: &BudgetStatus, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    format!(
        "{} {:16} {} / {}  {} used  {}\n  {}\n",
        level_marker(status.level),
        truncate(&status.category, 16),
        status.spent.format_with_symbol(symbol),
        status.limit.format_with_symbol(symbol),
        format_percentage(status.percentage),
        format_remaining(status, settings),
        format_bar(status.percentage, 30)
    )
}

pub fn format_budget_report(report: &BudgetStatusReport, settings: &Settings) -> String {
    if report.is_empty() {
        return "No budgets set\n".to_string();
    }

    let mut output = String::new();
    for status in &report.statuses {
        output.push_str(&format_budget_status(status, settings));
    }

    let over = report.over_budget().count();
    if over > 0 {
        output.push_str(&format!("\n{} budget(s) over limit\n", over));
    }

    output
}
