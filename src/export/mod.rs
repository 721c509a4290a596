//! Export module for Trackify
//!
//! Writes the visible expense subset in one of three formats:
//! - CSV: spreadsheet-compatible rows
//! - JSON: machine-readable document with export metadata
//! - YAML: human-readable document with export metadata

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use self::json::{export_json, ExpenseExport, ExportMetadata, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_yaml;

use std::io::Write;

use chrono::NaiveDate;

use crate::config::settings::{ExportFormat, ViewMode};
use crate::error::TrackifyResult;
use crate::models::Expense;

/// Write `expenses` to `writer` in `format`
pub fn export_expenses<W: Write>(
    expenses: &[&Expense],
    format: ExportFormat,
    view: ViewMode,
    pretty: bool,
    writer: &mut W,
) -> TrackifyResult<()> {
    tracing::debug!(count = expenses.len(), %format, %view, "exporting expenses");

    match format {
        ExportFormat::Csv => export_expenses_csv(expenses, writer),
        ExportFormat::Json => export_json(&ExpenseExport::new(expenses, view), writer, pretty),
        ExportFormat::Yaml => export_yaml(&ExpenseExport::new(expenses, view), writer),
    }
}

/// Default output file name, e.g. `expenses-2025-01-31.csv`
pub fn default_file_name(format: ExportFormat, today: NaiveDate) -> String {
    format!("expenses-{}.{}", today.format("%Y-%m-%d"), format.extension())
}
