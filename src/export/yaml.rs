//! YAML export
//!
//! Same document as the JSON export, preceded by a comment header.

use std::io::Write;

use crate::error::{TrackifyError, TrackifyResult};

use super::json::ExpenseExport;

/// Write an export document as YAML
pub fn export_yaml<W: Write>(export: &ExpenseExport, writer: &mut W) -> TrackifyResult<()> {
    let export_err = |e: std::io::Error| TrackifyError::Export(e.to_string());

    writeln!(writer, "# Trackify Expense Export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, export).map_err(|e| TrackifyError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::ViewMode;
    use crate::models::{Expense, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export() {
        let expense = Expense::new(
            "Bus pass",
            Money::from_cents(3000),
            "Transit",
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        );
        let export = ExpenseExport::new(&[&expense], ViewMode::Overview);

        let mut out = Vec::new();
        export_yaml(&export, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# Trackify Expense Export"));
        assert!(text.contains("category: Transit"));

        let parsed: ExpenseExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.expenses, vec![expense]);
    }
}
