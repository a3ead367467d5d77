//! Configuration module for load-monitor
//!
//! This module provides configuration management including:
//! - File path resolution relative to a data directory
//! - Optional user settings persistence

pub mod paths;
pub mod settings;

pub use paths::MonitorPaths;
pub use settings::Settings;
