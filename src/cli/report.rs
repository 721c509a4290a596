//! CLI commands for reports
//!
//! Statistics and charts computed over the full expense list.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use crate::config::settings::Settings;
use crate::error::{TrackifyError, TrackifyResult};
use crate::reports::{ChartSet, ExpenseStats};
use crate::services::ExpenseTracker;

use super::today;

/// Options of the `stats` command
#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Also export the per-category totals to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Options of the `charts` command
#[derive(Args, Debug, Clone)]
pub struct ChartsArgs {
    /// Width of the longest bar (defaults to the configured chart width)
    #[arg(short, long)]
    pub width: Option<usize>,
}

/// Print headline statistics
pub fn handle_stats_command(
    tracker: &ExpenseTracker,
    settings: &Settings,
    args: StatsArgs,
) -> TrackifyResult<()> {
    let stats = ExpenseStats::compute(tracker.expenses(), tracker.budgets(), today());
    print!("{}", stats.format_terminal(&settings.currency_symbol));

    if let Some(path) = args.output {
        let file = File::create(&path)
            .map_err(|e| TrackifyError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
        stats.export_csv(BufWriter::new(file))?;
        println!();
        println!("Category totals exported to: {}", path.display());
    }

    Ok(())
}

/// Print the category, monthly and daily bar charts
pub fn handle_charts_command(
    tracker: &ExpenseTracker,
    settings: &Settings,
    args: ChartsArgs,
) -> TrackifyResult<()> {
    let width = args.width.unwrap_or(settings.chart_width).max(1);
    let charts = ChartSet::compute(tracker.expenses());
    print!("{}", charts.format_terminal(width, &settings.currency_symbol));
    Ok(())
}
