//! Billing display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::billing::{format_summary_block, BillingSummary};
use crate::models::Appliance;

#[derive(Tabled)]
struct CostRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "kWh/day")]
    daily_energy: String,
    #[tabled(rename = "Cost/day")]
    daily_cost: String,
    #[tabled(rename = "Cost/30 days")]
    monthly_cost: String,
}

/// Format a billing run: per-appliance costs followed by the summary block
pub fn format_billing_report(
    appliances: &[Appliance],
    summary: &BillingSummary,
    currency_symbol: &str,
) -> String {
    let money = |amount: f64| format!("{}{:.2}", currency_symbol, amount);

    let rows: Vec<CostRow> = appliances
        .iter()
        .map(|a| {
            let energy = a.daily_energy_kwh();
            let cost = energy * summary.tariff;
            CostRow {
                name: a.name.clone(),
                daily_energy: format!("{:.2}", energy),
                daily_cost: money(cost),
                monthly_cost: money(cost * crate::billing::estimate::BILLING_PERIOD_DAYS),
            }
        })
        .collect();

    let mut output = String::new();
    if !rows.is_empty() {
        let mut table = Table::new(rows);
        table.with(Style::ascii());
        output.push_str(&table.to_string());
        output.push_str("\n\n");
    }
    output.push_str(&format_summary_block(summary));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_billing_report() {
        let appliances = vec![
            Appliance::new("Fridge", 150.0, 24.0),
            Appliance::new("TV", 100.0, 5.0),
        ];
        let summary = BillingSummary::compute(&appliances, 0.20);

        let output = format_billing_report(&appliances, &summary, "$");

        assert!(output.contains("Cost/day"));
        assert!(output.contains("$0.72"));
        assert!(output.contains("$21.60"));
        assert!(output.contains("BILLING SUMMARY"));
        assert!(output.contains("Total daily cost:  0.82"));
    }

    #[test]
    fn test_empty_store_shows_only_summary() {
        let summary = BillingSummary::compute(&[], 0.20);
        let output = format_billing_report(&[], &summary, "");

        assert!(output.starts_with("================ BILLING SUMMARY"));
        assert!(output.contains("Appliances count: 0"));
    }
}
