//! CSV export
//!
//! One row per expense with a fixed header; quoting follows RFC 4180.

use std::io::Write;

use serde::Serialize;

use crate::error::{TrackifyError, TrackifyResult};
use crate::models::Expense;

#[derive(Serialize)]
struct ExpenseRow<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
}

impl<'a> From<&'a Expense> for ExpenseRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            id: expense.id.as_uuid().to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            description: &expense.description,
            category: &expense.category,
            amount: expense.amount.to_decimal_string(),
        }
    }
}

/// Export expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[&Expense], writer: W) -> TrackifyResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    if expenses.is_empty() {
        // serialize() only emits the header alongside the first record
        wtr.write_record(["ID", "Date", "Description", "Category", "Amount"])
            .map_err(|e| TrackifyError::Export(e.to_string()))?;
    }

    for expense in expenses {
        wtr.serialize(ExpenseRow::from(*expense))
            .map_err(|e| TrackifyError::Export(e.to_string()))?;
    }

    wtr.flush().map_err(|e| TrackifyError::Export(e.to_string()))
}
