//! Configuration module for Trackify
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TrackifyPaths;
pub use settings::{ExportFormat, Settings, ViewMode};
