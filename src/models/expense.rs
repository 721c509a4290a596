//! Expense model
//!
//! An expense is a single recorded spending transaction. The collection is
//! kept newest-first; records are only ever replaced as a whole, keyed by id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::ids::ExpenseId;
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned on creation and never changed
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Signed amount
    pub amount: Money,

    /// Free-text category label
    pub category: String,

    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
}

/// A submitted expense that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
}

impl ExpenseDraft {
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category: category.into(),
            date,
        }
    }

    /// Check structural completeness of the draft
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        validate_fields(&self.description, &self.category)
    }
}

impl Expense {
    /// Turn a draft into a record with a fresh id
    pub fn from_draft(draft: ExpenseDraft) -> Self {
        Self {
            id: ExpenseId::new(),
            description: draft.description,
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
        }
    }

    /// Convenience constructor assigning a fresh id
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self::from_draft(ExpenseDraft::new(description, amount, category, date))
    }

    /// Check structural completeness of the record
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        validate_fields(&self.description, &self.category)
    }

    /// Month bucket key (`YYYY-MM`)
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

fn validate_fields(description: &str, category: &str) -> Result<(), ExpenseValidationError> {
    if description.trim().is_empty() {
        return Err(ExpenseValidationError::EmptyDescription);
    }
    if category.trim().is_empty() {
        return Err(ExpenseValidationError::EmptyCategory);
    }
    Ok(())
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.category,
            self.amount
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseValidationError {
    #[error("Expense description cannot be empty")]
    EmptyDescription,

    #[error("Expense category cannot be empty")]
    EmptyCategory,
}
