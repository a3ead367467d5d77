//! Path management for load-monitor
//!
//! All files live side by side in a single base directory, which defaults to
//! the process working directory.

use std::path::PathBuf;

use crate::error::MonitorError;

/// File name of the appliance record file
pub const APPLIANCES_FILE: &str = "appliances.txt";

/// File name of the append-only billing summary log
pub const BILLING_FILE: &str = "billing_summary.txt";

/// File name of the optional settings file
pub const SETTINGS_FILE: &str = "load-monitor.json";

/// Manages all paths used by load-monitor
#[derive(Debug, Clone)]
pub struct MonitorPaths {
    /// Base directory for all load-monitor files
    base_dir: PathBuf,
}

impl MonitorPaths {
    /// Create paths rooted at the current working directory
    pub fn new() -> Self {
        Self::with_base_dir(PathBuf::from("."))
    }

    /// Create MonitorPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the appliance record file
    pub fn appliances_file(&self) -> PathBuf {
        self.base_dir.join(APPLIANCES_FILE)
    }

    /// Get the path to the billing summary log
    pub fn billing_file(&self) -> PathBuf {
        self.base_dir.join(BILLING_FILE)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), MonitorError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MonitorError::Io(format!("Failed to create data directory: {}", e)))
    }
}

impl Default for MonitorPaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_is_working_directory() {
        let paths = MonitorPaths::new();
        assert_eq!(paths.base_dir(), &PathBuf::from("."));
        assert_eq!(paths.appliances_file(), PathBuf::from("./appliances.txt"));
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MonitorPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.appliances_file(), temp_dir.path().join("appliances.txt"));
        assert_eq!(
            paths.billing_file(),
            temp_dir.path().join("billing_summary.txt")
        );
        assert_eq!(
            paths.settings_file(),
            temp_dir.path().join("load-monitor.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("data");
        let paths = MonitorPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.exists());
    }
}
