//! CLI commands for exporting expenses

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use crate::config::settings::{ExportFormat, Settings, ViewMode};
use crate::error::{TrackifyError, TrackifyResult};
use crate::export::{default_file_name, export_expenses};
use crate::services::ExpenseTracker;

use super::filter::FilterArgs;
use super::today;

/// Options of the `export` command
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output file path ("-" for stdout); defaults to expenses-<date>.<ext>
    pub output: Option<PathBuf>,

    /// Export format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Overview exports the filtered list, analytics the full list
    #[arg(short, long, value_enum)]
    pub view: Option<ViewMode>,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the `export` command
pub fn handle_export_command(
    tracker: &ExpenseTracker,
    settings: &Settings,
    args: ExportArgs,
) -> TrackifyResult<()> {
    let format = args.format.unwrap_or(settings.export_format);
    let view = args.view.unwrap_or(settings.default_view);

    let visible = match view {
        ViewMode::Overview => tracker.filtered(&args.filter.to_filter()?),
        ViewMode::Analytics => tracker.expenses().iter().collect(),
    };

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(default_file_name(format, today())));

    if output.as_os_str() == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        export_expenses(&visible, format, view, args.pretty, &mut handle)?;
        handle.flush()?;
        return Ok(());
    }

    let file = File::create(&output)
        .map_err(|e| TrackifyError::Export(format!("Failed to create {}: {}", output.display(), e)))?;
    let mut writer = BufWriter::new(file);
    export_expenses(&visible, format, view, args.pretty, &mut writer)?;
    writer.flush()?;

    println!(
        "Exported {} expense(s) as {} to: {}",
        visible.len(),
        format,
        output.display()
    );
    Ok(())
}
