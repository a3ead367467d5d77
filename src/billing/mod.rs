//! Billing estimates and the billing summary log
//!
//! - `estimate`: pure energy and cost calculations
//! - `reporter`: fixed-format summary blocks appended to a history file

pub mod estimate;
pub mod reporter;

pub use estimate::{
    billing_estimate, daily_energy, total_connected_load, total_daily_energy, BillingEstimate,
    BillingSummary,
};
pub use reporter::{format_summary_block, BillingReporter};
