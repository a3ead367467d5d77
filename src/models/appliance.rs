//! Appliance model
//!
//! A household appliance with its rated power draw and daily usage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum hours of use per day
pub const MAX_HOURS_PER_DAY: f64 = 24.0;

/// A registered appliance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appliance {
    /// Display name, also the identity key (case-insensitive, trimmed)
    pub name: String,

    /// Rated power draw in watts
    pub watts: f64,

    /// Hours of use per day
    pub hours: f64,
}

impl Appliance {
    /// Create a new appliance; the name is trimmed
    pub fn new(name: impl Into<String>, watts: f64, hours: f64) -> Self {
        let name = name.into();
        Self {
            name: name.trim().to_string(),
            watts,
            hours,
        }
    }

    /// Energy used per day in kWh
    pub fn daily_energy_kwh(&self) -> f64 {
        self.watts / 1000.0 * self.hours
    }

    /// Validate the appliance
    pub fn validate(&self) -> Result<(), ApplianceValidationError> {
        if self.name.trim().is_empty() {
            return Err(ApplianceValidationError::EmptyName);
        }
        validate_watts(self.watts)?;
        validate_hours(self.hours)?;
        Ok(())
    }

    /// Normalize an appliance name for matching
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Check if this appliance matches a name (case-insensitive, trimmed)
    pub fn matches_name(&self, name: &str) -> bool {
        Self::normalize_name(&self.name) == Self::normalize_name(name)
    }

    /// Check if the name contains `needle`, ignoring case
    ///
    /// `needle` must already be normalized with [`Appliance::normalize_name`].
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

impl fmt::Display for Appliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} W, {} h/day)", self.name, self.watts, self.hours)
    }
}

/// Check a power rating: finite and strictly positive
pub fn validate_watts(watts: f64) -> Result<(), ApplianceValidationError> {
    if !watts.is_finite() || watts <= 0.0 {
        return Err(ApplianceValidationError::NonPositiveWatts(watts));
    }
    Ok(())
}

/// Check daily usage: finite and within 0..=24
pub fn validate_hours(hours: f64) -> Result<(), ApplianceValidationError> {
    if !hours.is_finite() || !(0.0..=MAX_HOURS_PER_DAY).contains(&hours) {
        return Err(ApplianceValidationError::HoursOutOfRange(hours));
    }
    Ok(())
}

/// Validation errors for appliances
#[derive(Debug, Clone, PartialEq)]
pub enum ApplianceValidationError {
    EmptyName,
    NonPositiveWatts(f64),
    HoursOutOfRange(f64),
}

impl fmt::Display for ApplianceValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Appliance name cannot be empty"),
            Self::NonPositiveWatts(w) => {
                write!(f, "Watts must be greater than 0 (got {})", w)
            }
            Self::HoursOutOfRange(h) => {
                write!(f, "Hours per day must be between 0 and 24 (got {})", h)
            }
        }
    }
}

impl std::error::Error for ApplianceValidationError {}
