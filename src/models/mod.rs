//! Core data models for load-monitor

pub mod appliance;

pub use appliance::{Appliance, ApplianceValidationError};
