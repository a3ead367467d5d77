//! Appliance display formatting
//!
//! Formats appliances for terminal output as tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Appliance;
use crate::services::LoadTotals;

#[derive(Tabled)]
struct ApplianceRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Watts")]
    watts: String,
    #[tabled(rename = "Hours/day")]
    hours: String,
    #[tabled(rename = "kWh/day")]
    daily_energy: String,
}

impl ApplianceRow {
    fn new(index: usize, appliance: &Appliance) -> Self {
        Self {
            number: index + 1,
            name: appliance.name.clone(),
            watts: format!("{:.2}", appliance.watts),
            hours: format!("{:.2}", appliance.hours),
            daily_energy: format!("{:.2}", appliance.daily_energy_kwh()),
        }
    }
}

/// Format `(index, appliance)` pairs as a table; numbering is 1-based
pub fn format_appliance_table<'a, I>(rows: I) -> String
where
    I: IntoIterator<Item = (usize, &'a Appliance)>,
{
    let rows: Vec<ApplianceRow> = rows
        .into_iter()
        .map(|(index, appliance)| ApplianceRow::new(index, appliance))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::ascii());
    table.to_string()
}

/// Format the full appliance list with load totals
pub fn format_appliance_list(appliances: &[Appliance], totals: &LoadTotals) -> String {
    if appliances.is_empty() {
        return "No appliances registered.\n".to_string();
    }

    let mut output = format_appliance_table(appliances.iter().enumerate());
    output.push('\n');
    output.push_str(&format!(
        "Total connected load: {:.2} W\n",
        totals.connected_load_watts
    ));
    output.push_str(&format!(
        "Total daily energy:   {:.2} kWh\n",
        totals.daily_energy_kwh
    ));
    output.push_str(&format!("Appliances: {}\n", totals.appliance_count));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> Vec<Appliance> {
        vec![
            Appliance::new("Fridge", 150.0, 24.0),
            Appliance::new("TV", 100.0, 5.0),
        ]
    }

    #[test]
    fn test_format_appliance_list() {
        let appliances = example();
        let totals = LoadTotals {
            appliance_count: 2,
            connected_load_watts: 250.0,
            daily_energy_kwh: 4.1,
        };

        let output = format_appliance_list(&appliances, &totals);

        assert!(output.contains("Name"));
        assert!(output.contains("Hours/day"));
        assert!(output.contains("Fridge"));
        assert!(output.contains("3.60"));
        assert!(output.contains("Total connected load: 250.00 W"));
        assert!(output.contains("Total daily energy:   4.10 kWh"));
    }

    #[test]
    fn test_format_empty_list() {
        let totals = LoadTotals {
            appliance_count: 0,
            connected_load_watts: 0.0,
            daily_energy_kwh: 0.0,
        };
        let output = format_appliance_list(&[], &totals);
        assert!(output.contains("No appliances registered"));
    }

    #[test]
    fn test_table_keeps_store_numbering() {
        let appliances = example();
        let output = format_appliance_table([(1, &appliances[1])]);
        assert!(output.contains("| 2 "));
        assert!(output.contains("TV"));
        assert!(!output.contains("Fridge"));
    }
}
