//! Core data models for Trackify
//!
//! Expenses, per-category budgets, and the value types they are built from.

pub mod budget;
pub mod expense;
pub mod ids;
pub mod money;

pub use budget::Budget;
pub use expense::{Expense, ExpenseDraft};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
