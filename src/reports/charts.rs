//! Chart series and text rendering
//!
//! Spending broken down by category and bucketed over time, rendered as
//! horizontal bar charts.

use std::collections::BTreeMap;

use crate::models::{Expense, Money};

use super::stats::{category_totals, CategoryTotal};

/// Number of day buckets shown in the daily chart
pub const RECENT_DAYS: usize = 14;

/// One labelled value of a chart series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesPoint {
    pub label: String,
    pub total: Money,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, total: Money) -> Self {
        Self {
            label: label.into(),
            total,
        }
    }
}

fn bucket_by<F>(expenses: &[Expense], key: F) -> Vec<SeriesPoint>
where
    F: Fn(&Expense) -> String,
{
    let mut buckets: BTreeMap<String, Money> = BTreeMap::new();
    for expense in expenses {
        *buckets.entry(key(expense)).or_default() += expense.amount;
    }
    buckets
        .into_iter()
        .map(|(label, total)| SeriesPoint { label, total })
        .collect()
}

/// Sums per calendar month (`YYYY-MM`), oldest first
pub fn monthly_totals(expenses: &[Expense]) -> Vec<SeriesPoint> {
    bucket_by(expenses, Expense::month_key)
}

/// Sums per day (`YYYY-MM-DD`), oldest first
pub fn daily_totals(expenses: &[Expense]) -> Vec<SeriesPoint> {
    bucket_by(expenses, |e| e.date.format("%Y-%m-%d").to_string())
}

/// Render a horizontal bar chart scaled so the largest bar is `width` wide
pub fn render_bar_chart(title: &str, points: &[SeriesPoint], width: usize, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(title);
    output.push('\n');
    output.push_str(&"-".repeat(title.chars().count()));
    output.push('\n');

    if points.is_empty() {
        output.push_str("  (no data)\n");
        return output;
    }

    let label_width = points.iter().map(|p| p.label.chars().count()).max().unwrap_or(0);
    let max = points.iter().map(|p| p.total.abs()).max().unwrap_or_default();

    for point in points {
        let len = match point.total.abs().ratio_of(max) {
            Some(r) if !point.total.is_zero() => ((r * width as f64).round() as usize).max(1),
            _ => 0,
        };
        output.push_str(&format!(
            "{:<label_width$} | {:<width$} {}\n",
            point.label,
            "█".repeat(len),
            point.total.format_with_symbol(symbol),
        ));
    }

    output
}

/// All series shown on the analytics view
#[derive(Debug, Clone)]
pub struct ChartSet {
    pub categories: Vec<CategoryTotal>,
    pub monthly: Vec<SeriesPoint>,
    pub daily: Vec<SeriesPoint>,
}

impl ChartSet {
    pub fn compute(expenses: &[Expense]) -> Self {
        Self {
            categories: category_totals(expenses),
            monthly: monthly_totals(expenses),
            daily: daily_totals(expenses),
        }
    }

    /// The most recent day buckets
    pub fn recent_days(&self) -> &[SeriesPoint] {
        let skip = self.daily.len().saturating_sub(RECENT_DAYS);
        &self.daily[skip..]
    }

    pub fn format_terminal(&self, width: usize, symbol: &str) -> String {
        let categories: Vec<SeriesPoint> = self
            .categories
            .iter()
            .map(|c| SeriesPoint::new(format!("{} ({:.0}%)", c.category, c.percentage), c.total))
            .collect();

        [
            render_bar_chart("Spending by Category", &categories, width, symbol),
            render_bar_chart("Monthly Trend", &self.monthly, width, symbol),
            render_bar_chart("Recent Days", self.recent_days(), width, symbol),
        ]
        .join("\n")
    }
}
