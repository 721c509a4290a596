//! JSON export
//!
//! Wraps the exported expenses in a versioned document with summary metadata.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::settings::ViewMode;
use crate::error::{TrackifyError, TrackifyResult};
use crate::models::{Expense, Money};
use crate::services::filter::distinct_categories;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported expense document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// View the expenses were exported from
    pub view: ViewMode,

    pub expenses: Vec<Expense>,

    pub metadata: ExportMetadata,
}

/// Summary of the exported expenses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub total: Money,
    pub categories: Vec<String>,
    pub earliest_expense: Option<String>,
    pub latest_expense: Option<String>,
}

impl ExpenseExport {
    pub fn new(expenses: &[&Expense], view: ViewMode) -> Self {
        let expenses: Vec<Expense> = expenses.iter().map(|e| (*e).clone()).collect();

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            total: expenses.iter().map(|e| e.amount).sum(),
            categories: distinct_categories(&expenses),
            earliest_expense: expenses.iter().map(|e| e.date).min().map(|d| d.to_string()),
            latest_expense: expenses.iter().map(|e| e.date).max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            view,
            expenses,
            metadata,
        }
    }
}

/// Write an export document as JSON
pub fn export_json<W: Write>(
    export: &ExpenseExport,
    writer: &mut W,
    pretty: bool,
) -> TrackifyResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    }
    .map_err(|e| TrackifyError::Export(e.to_string()))
}
