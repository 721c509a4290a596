//! Service layer for Trackify
//!
//! The domain store and the filter engine. Everything that reads or writes
//! the expense and budget collections goes through here.

pub mod filter;
pub mod tracker;

pub use filter::{distinct_categories, filter_expenses, CategorySelector, DateRange, ExpenseFilter};
pub use tracker::ExpenseTracker;
