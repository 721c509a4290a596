//! Trackify - Track, analyze, and optimize your spending habits
//!
//! This library provides the core functionality of the Trackify expense
//! tracker: a store of expenses and per-category budgets, a filter engine,
//! derived statistics and charts, and export to CSV, JSON and YAML.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, budgets, money, ids)
//! - `storage`: Repository port with JSON file and in-memory backends
//! - `services`: Expense tracker store and filter engine
//! - `reports`: Statistics, budget tracking and charts
//! - `export`: CSV, JSON and YAML export
//! - `display`: Plain-text renderers
//! - `cli`: clap commands and handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use trackify::config::paths::TrackifyPaths;
//! use trackify::services::ExpenseTracker;
//! use trackify::storage::Storage;
//!
//! let paths = TrackifyPaths::new()?;
//! let tracker = ExpenseTracker::load(Storage::open(&paths))?;
//! println!("{} expenses", tracker.expenses().len());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackifyError, TrackifyResult};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "trackify=warn";

/// Install the global tracing subscriber, writing to stderr
///
/// Verbosity comes from `RUST_LOG`. Safe to call more than once.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
