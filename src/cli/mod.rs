//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the expense tracker.

pub mod budget;
pub mod expense;
pub mod export;
pub mod filter;
pub mod report;
pub mod view;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs};
pub use filter::{parse_amount, parse_date, FilterArgs};
pub use report::{handle_charts_command, handle_stats_command, ChartsArgs, StatsArgs};
pub use view::{handle_analytics_command, handle_overview_command, render_view, OverviewArgs};

use chrono::NaiveDate;

/// Today's date in the local time zone
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
