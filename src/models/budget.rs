//! Budget model
//!
//! A budget is a spending ceiling for one category. The category label is the
//! key: a collection holds at most one budget per category.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Spending limit for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Category label this limit applies to
    pub category: String,

    /// Non-negative spending limit
    pub limit: Money,
}

impl Budget {
    pub fn new(category: impl Into<String>, limit: Money) -> Self {
        Self {
            category: category.into(),
            limit,
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.limit)
    }
}
