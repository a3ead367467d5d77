//! Storage layer for load-monitor
//!
//! Provides the delimited appliance store and the append-only billing log,
//! both rooted in the configured data directory.

pub mod appliances;
pub mod file_io;

pub use appliances::{ApplianceStore, LoadReport, SearchMatches};

use crate::billing::BillingReporter;
use crate::config::{paths::MonitorPaths, settings::Settings};
use crate::error::MonitorError;

/// Main storage coordinator that owns the appliance store and billing log
pub struct Storage {
    paths: MonitorPaths,
    pub appliances: ApplianceStore,
    pub billing: BillingReporter,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: MonitorPaths, settings: &Settings) -> Result<Self, MonitorError> {
        paths.ensure_directories()?;

        Ok(Self {
            appliances: ApplianceStore::new(paths.appliances_file(), settings.max_appliances),
            billing: BillingReporter::new(paths.billing_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &MonitorPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> LoadReport {
        self.appliances.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), MonitorError> {
        self.appliances.save()
    }
}
