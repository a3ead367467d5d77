//! Display formatting for terminal output
//!
//! Provides utilities for formatting appliances and billing runs as tables.

pub mod appliance;
pub mod billing;

pub use appliance::{format_appliance_list, format_appliance_table};
pub use billing::format_billing_report;
