//! Shared filter arguments and input parsing for CLI commands

use chrono::NaiveDate;
use clap::Args;

use crate::error::{TrackifyError, TrackifyResult};
use crate::models::Money;
use crate::services::ExpenseFilter;

/// Filter bar options shared by `list`, `overview` and `export`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only show this category ("all" for every category)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Case-insensitive search over description and category
    #[arg(short, long)]
    pub search: Option<String>,

    /// Start date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// End date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

impl FilterArgs {
    /// Build the filter state from the parsed options
    pub fn to_filter(&self) -> TrackifyResult<ExpenseFilter> {
        let mut filter = ExpenseFilter::new();

        if let Some(category) = &self.category {
            filter = filter.category(category.as_str());
        }
        if let Some(search) = &self.search {
            filter = filter.query(search.as_str());
        }
        if let Some(from) = &self.from {
            filter = filter.since(parse_date(from)?);
        }
        if let Some(to) = &self.to {
            filter = filter.until(parse_date(to)?);
        }

        Ok(filter)
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> TrackifyResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        TrackifyError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", input))
    })
}

/// Parse a decimal amount such as `12.50` or `$1,200`
pub fn parse_amount(input: &str) -> TrackifyResult<Money> {
    Money::parse(input).map_err(|e| {
        TrackifyError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '12.50'. Error: {}",
            input, e
        ))
    })
}
