//! Expense filter engine
//!
//! Narrows the full expense list by category, free-text query and date range.
//! Each criterion is an independent pass that is skipped while unset; the
//! passes compose by logical AND and keep the input order.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::models::Expense;

/// Category selector of the filter bar
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelector {
    /// No category restriction
    #[default]
    All,
    /// Only expenses with exactly this category
    Only(String),
}

impl CategorySelector {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategorySelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            Ok(Self::Only(s.to_string()))
        }
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(category) => write!(f, "{}", category),
        }
    }
}

/// Inclusive date range; `None` bounds are open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Transient filter state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub category: CategorySelector,
    pub query: String,
    pub date_range: DateRange,
}

impl ExpenseFilter {
    /// Create a new filter that lets everything through
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a single category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Self::selector(category.into());
        self
    }

    /// Free-text search over description and category
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Lower date bound (inclusive)
    pub fn since(mut self, start: NaiveDate) -> Self {
        self.date_range.start = Some(start);
        self
    }

    /// Upper date bound (inclusive)
    pub fn until(mut self, end: NaiveDate) -> Self {
        self.date_range.end = Some(end);
        self
    }

    fn selector(category: String) -> CategorySelector {
        match category.parse() {
            Ok(selector) => selector,
            Err(never) => match never {},
        }
    }

    /// Whether any criterion is set
    pub fn is_active(&self) -> bool {
        self.category != CategorySelector::All
            || !self.query.trim().is_empty()
            || !self.date_range.is_unbounded()
    }

    /// Apply the filter to `expenses`
    pub fn apply<'a>(&self, expenses: &'a [Expense]) -> Vec<&'a Expense> {
        filter_expenses(expenses, self)
    }
}

/// Apply the category, text and date passes in sequence
pub fn filter_expenses<'a>(expenses: &'a [Expense], filter: &ExpenseFilter) -> Vec<&'a Expense> {
    let mut filtered: Vec<&Expense> = expenses.iter().collect();

    if filter.category != CategorySelector::All {
        filtered.retain(|e| filter.category.matches(&e.category));
    }

    let query = filter.query.trim().to_lowercase();
    if !query.is_empty() {
        filtered.retain(|e| {
            e.description.to_lowercase().contains(&query)
                || e.category.to_lowercase().contains(&query)
        });
    }

    if let Some(start) = filter.date_range.start {
        filtered.retain(|e| e.date >= start);
    }
    if let Some(end) = filter.date_range.end {
        filtered.retain(|e| e.date <= end);
    }

    filtered
}

/// Distinct category labels across all expenses, in first-seen order
pub fn distinct_categories(expenses: &[Expense]) -> Vec<String> {
    let mut seen = HashSet::new();
    expenses
        .iter()
        .filter(|e| seen.insert(e.category.as_str()))
        .map(|e| e.category.clone())
        .collect()
}
