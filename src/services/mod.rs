//! Service layer for load-monitor
//!
//! Business logic between the CLI and the storage layer.

pub mod appliance;

pub use appliance::{validate_tariff, ApplianceService, LoadTotals, Registration};
