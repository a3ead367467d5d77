//! Energy and cost calculations
//!
//! Pure functions over appliance records. Tariff validation is the caller's
//! job; these functions compute with whatever they are given.

use crate::models::Appliance;

/// Days in the projected billing period
pub const BILLING_PERIOD_DAYS: f64 = 30.0;

/// Energy used per day by one appliance, in kWh
pub fn daily_energy(appliance: &Appliance) -> f64 {
    appliance.daily_energy_kwh()
}

/// Combined daily energy of all appliances, in kWh
pub fn total_daily_energy(appliances: &[Appliance]) -> f64 {
    appliances.iter().map(daily_energy).sum()
}

/// Combined rated power of all appliances, in watts
pub fn total_connected_load(appliances: &[Appliance]) -> f64 {
    appliances.iter().map(|a| a.watts).sum()
}

/// Daily and projected 30-day energy and cost
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillingEstimate {
    pub daily_energy_kwh: f64,
    pub daily_cost: f64,
    pub monthly_energy_kwh: f64,
    pub monthly_cost: f64,
}

/// Price a daily energy figure at `tariff` per kWh
pub fn billing_estimate(total_daily_energy: f64, tariff: f64) -> BillingEstimate {
    let daily_cost = total_daily_energy * tariff;
    BillingEstimate {
        daily_energy_kwh: total_daily_energy,
        daily_cost,
        monthly_energy_kwh: total_daily_energy * BILLING_PERIOD_DAYS,
        monthly_cost: daily_cost * BILLING_PERIOD_DAYS,
    }
}

/// Everything written to the billing summary log for one run
#[derive(Debug, Clone, PartialEq)]
pub struct BillingSummary {
    pub tariff: f64,
    pub appliance_count: usize,
    pub estimate: BillingEstimate,
}

impl BillingSummary {
    /// Compute a summary for `appliances` at `tariff` per kWh
    pub fn compute(appliances: &[Appliance], tariff: f64) -> Self {
        Self {
            tariff,
            appliance_count: appliances.len(),
            estimate: billing_estimate(total_daily_energy(appliances), tariff),
        }
    }
}
