//! Reports module for Trackify
//!
//! Read-only derivations over the full expense and budget collections:
//! statistics, budget tracking and chart series. Everything is recomputed
//! from the current snapshot on each call.

pub mod budget_tracker;
pub mod charts;
pub mod stats;

pub use budget_tracker::{BudgetState, BudgetStatus, BudgetTracker};
pub use charts::{daily_totals, monthly_totals, render_bar_chart, ChartSet, SeriesPoint};
pub use stats::{category_totals, CategoryTotal, ExpenseStats};
