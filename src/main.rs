use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use trackify::cli::{
    handle_analytics_command, handle_budget_command, handle_charts_command,
    handle_expense_command, handle_export_command, handle_overview_command,
    handle_stats_command, render_view, BudgetCommands, ChartsArgs, ExpenseCommands, ExportArgs,
    OverviewArgs, StatsArgs,
};
use trackify::config::paths::{TrackifyPaths, DATA_DIR_ENV};
use trackify::config::settings::Settings;
use trackify::services::{ExpenseFilter, ExpenseTracker};
use trackify::storage::Storage;

#[derive(Parser)]
#[command(
    name = "trackify",
    author = "Kaylee Beyene",
    version,
    about = "Track, analyze, and optimize your spending habits",
    long_about = "Trackify is a terminal expense tracker. Record expenses, set \
                  per-category budgets, filter and search your spending, and \
                  review statistics and charts or export them to CSV, JSON or YAML."
)]
struct Cli {
    /// Directory holding settings and data files
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show spending statistics
    Stats(StatsArgs),

    /// Show spending charts
    Charts(ChartsArgs),

    /// Statistics, budgets and the filtered expense list
    Overview(OverviewArgs),

    /// Charts and the full expense list
    Analytics,

    /// Export expenses to CSV, JSON or YAML
    Export(ExportArgs),

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    trackify::init_tracing();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => TrackifyPaths::with_base_dir(dir),
        None => TrackifyPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::open(&paths);
    let mut tracker = ExpenseTracker::load(storage)?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut tracker, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut tracker, &settings, cmd)?;
        }
        Some(Commands::Stats(args)) => {
            handle_stats_command(&tracker, &settings, args)?;
        }
        Some(Commands::Charts(args)) => {
            handle_charts_command(&tracker, &settings, args)?;
        }
        Some(Commands::Overview(args)) => {
            handle_overview_command(&tracker, &settings, args)?;
        }
        Some(Commands::Analytics) => {
            handle_analytics_command(&tracker, &settings)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&tracker, &settings, args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Trackify at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            tracker.persist()?;
            println!("Initialization complete!");
            println!();
            println!("Run 'trackify add <description> <amount> <category>' to record an expense.");
        }
        Some(Commands::Config) => {
            println!("Trackify Configuration");
            println!("======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Initialized:     {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Default view:    {}", settings.default_view);
            println!("  Export format:   {}", settings.export_format);
            println!("  Chart width:     {}", settings.chart_width);
            println!("  List limit:      {}", settings.list_limit);
        }
        None => {
            print!(
                "{}",
                render_view(&tracker, &settings, settings.default_view, &ExpenseFilter::new())
            );
        }
    }

    Ok(())
}
