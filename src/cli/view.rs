//! Overview and analytics screens

use clap::Args;

use crate::config::settings::{Settings, ViewMode};
use crate::display::{format_expense_list, format_list_heading};
use crate::error::TrackifyResult;
use crate::reports::{BudgetTracker, ChartSet, ExpenseStats};
use crate::services::{ExpenseFilter, ExpenseTracker};

use super::filter::FilterArgs;
use super::today;

const BAR_WIDTH: usize = 30;

/// Options of the `overview` command
#[derive(Args, Debug, Clone, Default)]
pub struct OverviewArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Render the screen for `mode`
///
/// Overview shows statistics, budgets and the filtered list; Analytics shows
/// the charts and the full list.
pub fn render_view(
    tracker: &ExpenseTracker,
    settings: &Settings,
    mode: ViewMode,
    filter: &ExpenseFilter,
) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    match mode {
        ViewMode::Overview => {
            let stats = ExpenseStats::compute(tracker.expenses(), tracker.budgets(), today());
            output.push_str(&stats.format_terminal(symbol));
            output.push('\n');

            let budgets = BudgetTracker::compute(tracker.budgets(), tracker.expenses());
            output.push_str(&budgets.format_terminal(symbol, BAR_WIDTH));
            output.push('\n');

            let visible = tracker.filtered(filter);
            output.push_str(&format_list_heading(
                "Expenses",
                visible.len(),
                tracker.expenses().len(),
            ));
            output.push('\n');
            output.push_str(&format_expense_list(&visible, symbol));
        }
        ViewMode::Analytics => {
            let charts = ChartSet::compute(tracker.expenses());
            output.push_str(&charts.format_terminal(settings.chart_width.max(1), symbol));
            output.push('\n');

            let all: Vec<_> = tracker.expenses().iter().collect();
            output.push_str("All Expenses\n");
            output.push_str(&format_expense_list(&all, symbol));
        }
    }

    output
}

/// Handle the `overview` command
pub fn handle_overview_command(
    tracker: &ExpenseTracker,
    settings: &Settings,
    args: OverviewArgs,
) -> TrackifyResult<()> {
    let filter = args.filter.to_filter()?;
    print!("{}", render_view(tracker, settings, ViewMode::Overview, &filter));
    Ok(())
}

/// Handle the `analytics` command
pub fn handle_analytics_command(tracker: &ExpenseTracker, settings: &Settings) -> TrackifyResult<()> {
    print!(
        "{}",
        render_view(tracker, settings, ViewMode::Analytics, &ExpenseFilter::new())
    );
    Ok(())
}
