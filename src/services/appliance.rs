//! Appliance service
//!
//! Business operations over the appliance store: registration with
//! update-on-duplicate, lookups, load totals, and billing runs.

use std::path::Path;

use tracing::debug;

use crate::billing::{total_connected_load, total_daily_energy, BillingSummary};
use crate::error::{MonitorError, MonitorResult};
use crate::models::Appliance;
use crate::storage::{SearchMatches, Storage};

/// Result of a registration that may have updated an existing record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// A new record was appended at this index
    Added(usize),
    /// The record at this index already had the name and was updated in place
    Updated(usize),
}

/// Aggregate load of the whole store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadTotals {
    pub appliance_count: usize,
    pub connected_load_watts: f64,
    pub daily_energy_kwh: f64,
}

/// Service for appliance management
pub struct ApplianceService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ApplianceService<'a> {
    /// Create a new appliance service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Register a new appliance
    ///
    /// Fails with `Duplicate` when the name is taken; see [`Self::register_or_update`].
    pub fn register(&mut self, name: &str, watts: f64, hours: f64) -> MonitorResult<usize> {
        let index = self
            .storage
            .appliances
            .add(Appliance::new(name, watts, hours))?;
        debug!(index, name = name.trim(), "appliance registered");
        Ok(index)
    }

    /// Register an appliance, updating the existing record on a name clash
    /// when `update_existing` is set
    pub fn register_or_update(
        &mut self,
        name: &str,
        watts: f64,
        hours: f64,
        update_existing: bool,
    ) -> MonitorResult<Registration> {
        match self.register(name, watts, hours) {
            Ok(index) => Ok(Registration::Added(index)),
            Err(MonitorError::Duplicate { .. }) if update_existing => {
                let index = self.update_by_name(name, watts, hours)?;
                Ok(Registration::Updated(index))
            }
            Err(e) => Err(e),
        }
    }

    /// Update watts and hours of the appliance at `index`
    pub fn update(&mut self, index: usize, watts: f64, hours: f64) -> MonitorResult<&Appliance> {
        self.storage.appliances.update(index, watts, hours)
    }

    /// Update watts and hours of the appliance named `name`, keeping its position
    pub fn update_by_name(&mut self, name: &str, watts: f64, hours: f64) -> MonitorResult<usize> {
        let index = self
            .find(name)
            .ok_or_else(|| MonitorError::appliance_not_found(name.trim()))?;
        self.storage.appliances.update(index, watts, hours)?;
        debug!(index, "appliance updated");
        Ok(index)
    }

    /// Position of an appliance by name (case-insensitive)
    pub fn find(&self, name: &str) -> Option<usize> {
        self.storage.appliances.find_by_name(name)
    }

    /// Get an appliance by position
    pub fn get(&self, index: usize) -> Option<&Appliance> {
        self.storage.appliances.get(index)
    }

    /// All appliances in registration order
    pub fn list(&self) -> &[Appliance] {
        self.storage.appliances.all()
    }

    /// Appliances whose name contains `query`
    pub fn search(&self, query: &str) -> SearchMatches<'_> {
        self.storage.appliances.search(query)
    }

    /// Whether the store can take another appliance
    pub fn is_full(&self) -> bool {
        self.storage.appliances.is_full()
    }

    /// Aggregate connected load and daily energy
    pub fn totals(&self) -> LoadTotals {
        let appliances = self.list();
        LoadTotals {
            appliance_count: appliances.len(),
            connected_load_watts: total_connected_load(appliances),
            daily_energy_kwh: total_daily_energy(appliances),
        }
    }

    /// Compute a billing summary at `tariff` per kWh
    pub fn billing(&self, tariff: f64) -> MonitorResult<BillingSummary> {
        validate_tariff(tariff)?;
        Ok(BillingSummary::compute(self.list(), tariff))
    }

    /// Append a billing summary to the billing log
    pub fn record_billing(&self, summary: &BillingSummary) -> MonitorResult<()> {
        self.storage.billing.append(summary)
    }

    /// Write the current records to disk
    pub fn save(&self) -> MonitorResult<()> {
        self.storage.appliances.save()
    }

    /// Path of the appliance record file
    pub fn appliances_path(&self) -> &Path {
        self.storage.appliances.path()
    }

    /// Path of the billing summary log
    pub fn billing_path(&self) -> &Path {
        self.storage.billing.path()
    }
}

/// Check a tariff: finite and strictly positive
pub fn validate_tariff(tariff: f64) -> MonitorResult<()> {
    if !tariff.is_finite() || tariff <= 0.0 {
        return Err(MonitorError::Validation(format!(
            "Tariff must be greater than 0 (got {})",
            tariff
        )));
    }
    Ok(())
}
