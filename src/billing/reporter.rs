//! Billing reporter for the append-only summary log
//!
//! Each confirmed billing run appends one fixed-format block to
//! `billing_summary.txt`. The log is never read back.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::MonitorResult;
use crate::storage::file_io::append_text;

use super::estimate::BillingSummary;

const HEADER: &str = "================ BILLING SUMMARY ================";
const FOOTER: &str = "=================================================";

/// Render a summary as the block stored in the log, blank line included
pub fn format_summary_block(summary: &BillingSummary) -> String {
    let estimate = &summary.estimate;
    format!(
        "{HEADER}\n\
         Tariff: {:.2} per kWh\n\
         Appliances count: {}\n\
         Total daily energy: {:.2} kWh\n\
         Total daily cost:  {:.2}\n\
         Estimated 30-day energy: {:.2} kWh\n\
         Estimated 30-day cost:  {:.2}\n\
         {FOOTER}\n\n",
        summary.tariff,
        summary.appliance_count,
        estimate.daily_energy_kwh,
        estimate.daily_cost,
        estimate.monthly_energy_kwh,
        estimate.monthly_cost,
    )
}

/// Appends billing summaries to the log file
#[derive(Debug, Clone)]
pub struct BillingReporter {
    log_path: PathBuf,
}

impl BillingReporter {
    /// Create a reporter that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one summary block to the log
    pub fn append(&self, summary: &BillingSummary) -> MonitorResult<()> {
        append_text(&self.log_path, &format_summary_block(summary))?;
        info!(path = %self.log_path.display(), "billing summary appended");
        Ok(())
    }

    /// Path to the summary log
    pub fn path(&self) -> &Path {
        &self.log_path
    }
}
