//! Budget tracker
//!
//! Compares each category's all-time spend against its limit.

use std::fmt;

use crate::models::{Budget, Expense, Money};

/// Share of the limit at which a budget is flagged
pub const WARNING_RATIO: f64 = 0.8;

/// How a category is doing against its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetState {
    /// Below the warning threshold
    OnTrack,
    /// At or above the warning threshold, not above the limit
    Warning,
    /// Spend is above the limit
    Exceeded,
}

impl fmt::Display for BudgetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnTrack => write!(f, "On track"),
            Self::Warning => write!(f, "Warning"),
            Self::Exceeded => write!(f, "Over budget"),
        }
    }
}

/// Spend-vs-limit for one budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub category: String,
    pub limit: Money,
    pub spent: Money,
    /// Limit minus spent; negative once exceeded
    pub remaining: Money,
    /// spent / limit, `None` for a zero limit
    pub ratio: Option<f64>,
    pub state: BudgetState,
    pub expense_count: usize,
}

impl BudgetStatus {
    fn compute(budget: &Budget, expenses: &[Expense]) -> Self {
        let in_category = expenses.iter().filter(|e| e.category == budget.category);
        let (spent, expense_count) = in_category
            .fold((Money::zero(), 0), |(sum, n), e| (sum + e.amount, n + 1));

        let ratio = spent.ratio_of(budget.limit);
        let state = match ratio {
            None if spent.is_positive() => BudgetState::Exceeded,
            None => BudgetState::OnTrack,
            Some(r) if r > 1.0 => BudgetState::Exceeded,
            Some(r) if r >= WARNING_RATIO => BudgetState::Warning,
            Some(_) => BudgetState::OnTrack,
        };

        Self {
            category: budget.category.clone(),
            limit: budget.limit,
            spent,
            remaining: budget.limit - spent,
            ratio,
            state,
            expense_count,
        }
    }

    /// Spend as a percentage of the limit
    pub fn percentage(&self) -> Option<f64> {
        self.ratio.map(|r| r * 100.0)
    }

    pub fn is_exceeded(&self) -> bool {
        self.state == BudgetState::Exceeded
    }
}

/// Status of every budget, in budget collection order
#[derive(Debug, Clone)]
pub struct BudgetTracker {
    pub statuses: Vec<BudgetStatus>,
    pub total_limit: Money,
    pub total_spent: Money,
}

impl BudgetTracker {
    pub fn compute(budgets: &[Budget], expenses: &[Expense]) -> Self {
        let statuses: Vec<BudgetStatus> = budgets
            .iter()
            .map(|b| BudgetStatus::compute(b, expenses))
            .collect();

        Self {
            total_limit: statuses.iter().map(|s| s.limit).sum(),
            total_spent: statuses.iter().map(|s| s.spent).sum(),
            statuses,
        }
    }

    /// Budgets whose spend is above the limit
    pub fn exceeded(&self) -> Vec<&BudgetStatus> {
        self.statuses.iter().filter(|s| s.is_exceeded()).collect()
    }

    /// Categories from `categories` that have no budget yet
    pub fn unbudgeted_categories(&self, categories: &[String]) -> Vec<String> {
        categories
            .iter()
            .filter(|c| !self.statuses.iter().any(|s| &s.category == *c))
            .cloned()
            .collect()
    }

    /// Format the tracker with a progress bar per budget
    pub fn format_terminal(&self, symbol: &str, bar_width: usize) -> String {
        if self.statuses.is_empty() {
            return "No budgets set. Use 'trackify budget set <category> <limit>'.\n".to_string();
        }

        let money = |m: Money| m.format_with_symbol(symbol);
        let mut output = String::new();

        output.push_str("Budgets\n");
        output.push_str(&"=".repeat(72));
        output.push('\n');

        for status in &self.statuses {
            let filled = status
                .ratio
                .map(|r| ((r.clamp(0.0, 1.0)) * bar_width as f64).round() as usize)
                .unwrap_or(if status.spent.is_positive() { bar_width } else { 0 });
            let percent = status
                .percentage()
                .map(|p| format!("{:.0}%", p))
                .unwrap_or_else(|| "-".to_string());

            output.push_str(&format!(
                "{:<20} {:>12} / {:<12} {:>5}  {}\n",
                status.category,
                money(status.spent),
                money(status.limit),
                percent,
                status.state
            ));
            output.push_str(&format!(
                "  [{}{}]\n",
                "#".repeat(filled),
                ".".repeat(bar_width.saturating_sub(filled))
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>12} / {:<12}\n",
            "TOTAL",
            money(self.total_spent),
            money(self.total_limit)
        ));

        output
    }
}
