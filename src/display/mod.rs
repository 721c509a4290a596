//! Display formatting for terminal output
//!
//! Plain-text renderings of expenses for the list and detail views.

pub mod expense;

pub use expense::{format_categories, format_expense_details, format_expense_list, format_list_heading};
