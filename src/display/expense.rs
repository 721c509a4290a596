//! Expense display formatting
//!
//! Formats expenses for terminal output in list and detail views.

use crate::models::Expense;

const DESCRIPTION_MAX: usize = 32;

/// Heading of the expense list; shows "(n of m)" while a filter hides rows
pub fn format_list_heading(title: &str, shown: usize, total: usize) -> String {
    if shown == total {
        title.to_string()
    } else {
        format!("{} ({} of {})", title, shown, total)
    }
}

/// Format expenses as an aligned table
pub fn format_expense_list(expenses: &[&Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let desc_width = expenses
        .iter()
        .map(|e| truncate(&e.description, DESCRIPTION_MAX).chars().count())
        .max()
        .unwrap_or(0)
        .max("Description".len());

    let cat_width = expenses
        .iter()
        .map(|e| e.category.chars().count())
        .max()
        .unwrap_or(0)
        .max("Category".len());

    let amounts: Vec<String> = expenses
        .iter()
        .map(|e| e.amount.format_with_symbol(symbol))
        .collect();
    let amount_width = amounts.iter().map(|a| a.chars().count()).max().unwrap_or(0).max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<10}  {:<desc_width$}  {:<cat_width$}  {:>amount_width$}\n",
        "ID", "Date", "Description", "Category", "Amount",
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<10}  {:-<desc_width$}  {:-<cat_width$}  {:->amount_width$}\n",
        "", "", "", "", "",
    ));

    for (expense, amount) in expenses.iter().zip(&amounts) {
        output.push_str(&format!(
            "{:<12}  {:<10}  {:<desc_width$}  {:<cat_width$}  {:>amount_width$}\n",
            expense.id.to_string(),
            expense.date.format("%Y-%m-%d").to_string(),
            truncate(&expense.description, DESCRIPTION_MAX),
            expense.category,
            amount,
        ));
    }

    output
}

/// Format a single expense for display
pub fn format_expense_details(expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("UUID:        {}\n", expense.id.as_uuid()));
    output.push_str(&format!("Date:        {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    output
}

/// Format the category list, one per line
pub fn format_categories(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories yet.\n".to_string();
    }
    categories.iter().map(|c| format!("  {}\n", c)).collect()
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn expense(description: &str, cents: i64) -> Expense {
        Expense::new(
            description,
            Money::from_cents(cents),
            "Food",
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_list_heading() {
        assert_eq!(format_list_heading("Expenses", 3, 3), "Expenses");
        assert_eq!(format_list_heading("Expenses", 1, 3), "Expenses (1 of 3)");
    }

    #[test]
    fn test_expense_list() {
        let a = expense("Coffee", 350);
        let b = expense("Weekly groceries", 12345);
        let text = format_expense_list(&[&a, &b], "$");
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].starts_with(&a.id.to_string()));
        assert!(lines[2].ends_with("  $3.50"));
        assert!(lines[3].ends_with("$123.45"));
        assert!(lines[3].contains("Weekly groceries"));
    }

    #[test]
    fn test_long_description_is_truncated() {
        let long = expense(&"x".repeat(50), 100);
        let text = format_expense_list(&[&long], "$");
        assert!(text.contains(&format!("{}...", "x".repeat(29))));
        assert!(!text.contains(&"x".repeat(33)));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_expense_list(&[], "$"), "No expenses found.\n");
    }

    #[test]
    fn test_details() {
        let e = expense("Coffee", 350);
        let text = format_expense_details(&e, "€");
        assert!(text.contains("Description: Coffee"));
        assert!(text.contains("Amount:      €3.50"));
    }

    #[test]
    fn test_categories() {
        let text = format_categories(&["Food".to_string(), "Transit".to_string()]);
        assert_eq!(text, "  Food\n  Transit\n");
    }
}
