//! Expense statistics
//!
//! Aggregates over the full, unfiltered collections: totals, averages,
//! the current month's spend, per-category sums and remaining budget.

use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use std::io::Write;

use crate::error::{TrackifyError, TrackifyResult};
use crate::models::{Budget, Expense, Money};

/// Spending summed over one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category label
    pub category: String,
    /// Sum of all amounts in the category
    pub total: Money,
    /// Number of expenses in the category
    pub count: usize,
    /// Share of total spending, 0-100
    pub percentage: f64,
}

/// Per-category sums, largest first; ties keep first-seen order
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut order: Vec<&str> = Vec::new();
    let mut sums: HashMap<&str, (Money, usize)> = HashMap::new();

    for expense in expenses {
        let entry = sums.entry(expense.category.as_str()).or_insert_with(|| {
            order.push(expense.category.as_str());
            (Money::zero(), 0)
        });
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    let grand_total: Money = expenses.iter().map(|e| e.amount).sum();

    let mut totals: Vec<CategoryTotal> = order
        .into_iter()
        .map(|category| {
            let (total, count) = sums[category];
            CategoryTotal {
                category: category.to_string(),
                total,
                count,
                percentage: total.ratio_of(grand_total).unwrap_or(0.0) * 100.0,
            }
        })
        .collect();

    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals
}

/// Headline statistics
#[derive(Debug, Clone)]
pub struct ExpenseStats {
    /// Sum of every expense
    pub total_spent: Money,
    /// Number of expenses
    pub expense_count: usize,
    /// Mean expense amount
    pub average: Money,
    /// Single largest expense
    pub largest: Option<Expense>,
    /// Spend within the month of the reference date
    pub this_month: Money,
    /// Per-category sums, largest first
    pub by_category: Vec<CategoryTotal>,
    /// Sum of all budget limits
    pub total_budget: Money,
    /// Budget limits minus spend in budgeted categories
    pub budget_remaining: Money,
}

impl ExpenseStats {
    /// Compute statistics relative to `today`
    pub fn compute(expenses: &[Expense], budgets: &[Budget], today: NaiveDate) -> Self {
        let total_spent: Money = expenses.iter().map(|e| e.amount).sum();

        let this_month: Money = expenses
            .iter()
            .filter(|e| e.date.year() == today.year() && e.date.month() == today.month())
            .map(|e| e.amount)
            .sum();

        let largest = expenses
            .iter()
            .fold(None::<&Expense>, |best, e| match best {
                Some(b) if b.amount >= e.amount => Some(b),
                _ => Some(e),
            })
            .cloned();

        let total_budget: Money = budgets.iter().map(|b| b.limit).sum();
        let budgeted_spend: Money = expenses
            .iter()
            .filter(|e| budgets.iter().any(|b| b.category == e.category))
            .map(|e| e.amount)
            .sum();

        Self {
            total_spent,
            expense_count: expenses.len(),
            average: total_spent.divide(expenses.len()),
            largest,
            this_month,
            by_category: category_totals(expenses),
            total_budget,
            budget_remaining: total_budget - budgeted_spend,
        }
    }

    /// Category with the highest spend
    pub fn top_category(&self) -> Option<&CategoryTotal> {
        self.by_category.first()
    }

    /// Format the statistics for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let money = |m: Money| m.format_with_symbol(symbol);
        let mut output = String::new();

        output.push_str("Statistics\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!("Total Spent:     {:>14}\n", money(self.total_spent)));
        output.push_str(&format!("This Month:      {:>14}\n", money(self.this_month)));
        output.push_str(&format!("Expenses:        {:>14}\n", self.expense_count));
        output.push_str(&format!("Average:         {:>14}\n", money(self.average)));

        if let Some(largest) = &self.largest {
            output.push_str(&format!(
                "Largest:         {:>14}  {}\n",
                money(largest.amount),
                largest.description
            ));
        }

        if !self.total_budget.is_zero() {
            output.push_str(&format!("Total Budget:    {:>14}\n", money(self.total_budget)));
            output.push_str(&format!(
                "Remaining:       {:>14}\n",
                money(self.budget_remaining)
            ));
        }

        if !self.by_category.is_empty() {
            output.push('\n');
            output.push_str(&format!(
                "{:<30} {:>14} {:>6} {:>7}\n",
                "Category", "Amount", "Count", "%"
            ));
            output.push_str(&"-".repeat(60));
            output.push('\n');
            for row in &self.by_category {
                output.push_str(&format!(
                    "{:<30} {:>14} {:>6} {:>6.1}%\n",
                    row.category,
                    money(row.total),
                    row.count,
                    row.percentage
                ));
            }
        }

        output
    }

    /// Export the per-category sums to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> TrackifyResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| TrackifyError::Export(e.to_string());

        wtr.write_record(["Category", "Amount", "Count", "Percentage"])
            .map_err(export_err)?;
        for row in &self.by_category {
            wtr.write_record([
                row.category.clone(),
                row.total.to_decimal_string(),
                row.count.to_string(),
                format!("{:.2}", row.percentage),
            ])
            .map_err(export_err)?;
        }
        wtr.write_record([
            "TOTAL".to_string(),
            self.total_spent.to_decimal_string(),
            self.expense_count.to_string(),
            "100.00".to_string(),
        ])
        .map_err(export_err)?;

        wtr.flush().map_err(|e| TrackifyError::Export(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new("Groceries", Money::from_cents(5000), "Food", date("2025-01-10")),
            Expense::new("Bus pass", Money::from_cents(3000), "Transit", date("2025-01-15")),
            Expense::new("Coffee", Money::from_cents(500), "Food", date("2024-12-30")),
        ]
    }

    #[test]
    fn test_category_totals() {
        let totals = category_totals(&sample());

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, "Food");
        assert_eq!(totals[0].total.cents(), 5500);
        assert_eq!(totals[0].count, 2);
        assert!((totals[0].percentage - 64.705).abs() < 0.01);
        assert_eq!(totals[1].category, "Transit");
    }

    #[test]
    fn test_category_totals_empty() {
        assert!(category_totals(&[]).is_empty());
    }

    #[test]
    fn test_compute_stats() {
        let budgets = vec![Budget::new("Food", Money::from_cents(10000))];
        let stats = ExpenseStats::compute(&sample(), &budgets, date("2025-01-20"));

        assert_eq!(stats.total_spent.cents(), 8500);
        assert_eq!(stats.expense_count, 3);
        assert_eq!(stats.average.cents(), 2833);
        assert_eq!(stats.this_month.cents(), 8000);
        assert_eq!(stats.largest.as_ref().unwrap().description, "Groceries");
        assert_eq!(stats.total_budget.cents(), 10000);
        assert_eq!(stats.budget_remaining.cents(), 4500);
        assert_eq!(stats.top_category().unwrap().category, "Food");
    }

    #[test]
    fn test_compute_empty() {
        let stats = ExpenseStats::compute(&[], &[], date("2025-01-20"));
        assert!(stats.total_spent.is_zero());
        assert!(stats.average.is_zero());
        assert!(stats.largest.is_none());
        assert!(stats.top_category().is_none());
    }

    #[test]
    fn test_huge_amounts_do_not_overflow() {
        let huge = Money::parse("90000000000000000").unwrap();
        let expenses = vec![
            Expense::new("Yacht", huge, "Fun", date("2025-01-10")),
            Expense::new("Island", huge, "Fun", date("2025-01-11")),
        ];
        let budgets = vec![Budget::new("Fun", Money::from_cents(100))];

        let stats = ExpenseStats::compute(&expenses, &budgets, date("2025-01-20"));

        assert_eq!(stats.total_spent.cents(), i64::MAX);
        assert_eq!(stats.by_category[0].total.cents(), i64::MAX);
        assert!(stats.budget_remaining.is_negative());
        assert!(stats.average.is_positive());
    }

    #[test]
    fn test_format_terminal() {
        let stats = ExpenseStats::compute(&sample(), &[], date("2025-01-20"));
        let text = stats.format_terminal("$");

        assert!(text.contains("Total Spent:"));
        assert!(text.contains("$85.00"));
        assert!(text.contains("Transit"));
        assert!(!text.contains("Total Budget"));
    }

    #[test]
    fn test_export_csv() {
        let stats = ExpenseStats::compute(&sample(), &[], date("2025-01-20"));
        let mut out = Vec::new();
        stats.export_csv(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Category,Amount,Count,Percentage");
        assert_eq!(lines[1], "Food,55.00,2,64.71");
        assert_eq!(lines.last().unwrap(), &"TOTAL,85.00,3,100.00");
    }
}
