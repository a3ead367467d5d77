//! Interactive menu loop
//!
//! A numbered menu over stdin/stdout. Errors from individual actions are
//! printed and the loop continues; only Exit or end of input ends the
//! session, and both attempt a final save.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::display::{format_appliance_list, format_appliance_table, format_billing_report};
use crate::error::{MonitorError, MonitorResult};
use crate::models::appliance::{validate_hours, validate_watts};
use crate::services::{validate_tariff, ApplianceService};
use crate::storage::LoadReport;

use super::prompt::Prompter;

const MENU: &str = "
1. Register appliance
2. View appliances
3. Search appliance
4. Billing
5. Save to file
6. Exit";

/// Menu entries, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Register,
    View,
    Search,
    Billing,
    Save,
    Exit,
}

impl MenuChoice {
    fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::Register),
            2 => Some(Self::View),
            3 => Some(Self::Search),
            4 => Some(Self::Billing),
            5 => Some(Self::Save),
            6 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Interactive session over an appliance service
pub struct MenuShell<'a, R, W> {
    service: ApplianceService<'a>,
    prompter: Prompter<R, W>,
    currency_symbol: String,
}

impl<'a, R: BufRead, W: Write> MenuShell<'a, R, W> {
    /// Create a session reading from `input` and writing to `output`
    pub fn new(
        service: ApplianceService<'a>,
        input: R,
        output: W,
        currency_symbol: impl Into<String>,
    ) -> Self {
        Self {
            service,
            prompter: Prompter::new(input, output),
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Run the menu until the user exits or input ends
    pub fn run(&mut self, report: LoadReport) -> MonitorResult<()> {
        self.prompter
            .say("Electrical Load Monitoring & Billing System")?;
        self.prompter
            .say(format!("Loaded appliances: {}", report.loaded))?;
        if report.skipped > 0 {
            self.prompter
                .say(format!("Skipped {} unreadable line(s).", report.skipped))?;
        }
        if report.truncated {
            self.prompter.say(format!(
                "Appliance limit reached; later records in {} were not loaded.",
                file_label(self.service.appliances_path())
            ))?;
        }

        loop {
            self.prompter.say(MENU)?;
            let choice = match self.prompter.integer("Choose (1-6): ") {
                Ok(n) => MenuChoice::from_number(n),
                Err(MonitorError::InputClosed) => return self.finish(),
                Err(e) => return Err(e),
            };

            let result = match choice {
                Some(MenuChoice::Register) => self.register(),
                Some(MenuChoice::View) => self.view(),
                Some(MenuChoice::Search) => self.search(),
                Some(MenuChoice::Billing) => self.billing(),
                Some(MenuChoice::Save) => self.save(),
                Some(MenuChoice::Exit) => return self.finish(),
                None => self.prompter.say("Invalid choice."),
            };

            match result {
                Ok(()) => {}
                Err(MonitorError::InputClosed) => return self.finish(),
                Err(e) => self.prompter.say(format!("Error: {}", e))?,
            }
        }
    }

    fn register(&mut self) -> MonitorResult<()> {
        let name = self.prompter.text("Name: ")?;

        if let Some(index) = self.service.find(&name) {
            let existing = self
                .service
                .get(index)
                .map(|a| a.to_string())
                .unwrap_or_default();
            self.prompter
                .say(format!("Appliance already exists: {}", existing))?;
            if !self.prompter.confirm("Update it? (y/n): ")? {
                return self.prompter.say("Skipped.");
            }
            let (watts, hours) = self.read_usage()?;
            self.service.update(index, watts, hours)?;
            return self.prompter.say("Updated.");
        }

        if self.service.is_full() {
            return self.prompter.say("Limit reached.");
        }

        let (watts, hours) = self.read_usage()?;
        self.service.register(&name, watts, hours)?;
        self.prompter.say("Saved.")
    }

    fn read_usage(&mut self) -> MonitorResult<(f64, f64)> {
        let watts = self.prompter.number_where("Watts (>0): ", validate_watts)?;
        let hours = self
            .prompter
            .number_where("Hours/day (0-24): ", validate_hours)?;
        Ok((watts, hours))
    }

    fn view(&mut self) -> MonitorResult<()> {
        let listing = format_appliance_list(self.service.list(), &self.service.totals());
        self.prompter.print(&listing)
    }

    fn search(&mut self) -> MonitorResult<()> {
        let query = self.prompter.text("Search name: ")?;
        let mut matches = self.service.search(&query).peekable();

        if matches.peek().is_none() {
            return self
                .prompter
                .say(format!("No appliance matches '{}'.", query));
        }

        let table = format_appliance_table(matches);
        self.prompter.say(table)
    }

    fn billing(&mut self) -> MonitorResult<()> {
        if self.service.list().is_empty() {
            return self.prompter.say("No appliances registered.");
        }

        let tariff = self
            .prompter
            .number_where("Tariff per kWh (>0): ", validate_tariff)?;
        let summary = self.service.billing(tariff)?;
        let report = format_billing_report(self.service.list(), &summary, &self.currency_symbol);
        self.prompter.print(&report)?;

        let prompt = format!(
            "Save billing summary to {}? (y/n): ",
            file_label(self.service.billing_path())
        );
        if self.prompter.confirm(&prompt)? {
            self.service.record_billing(&summary)?;
            self.prompter.say("Billing summary saved.")?;
        }
        Ok(())
    }

    fn save(&mut self) -> MonitorResult<()> {
        self.service.save()?;
        self.prompter.say(format!(
            "Saved to {}.",
            file_label(self.service.appliances_path())
        ))
    }

    fn finish(&mut self) -> MonitorResult<()> {
        if let Err(e) = self.service.save() {
            self.prompter.say(format!("Error: {}", e))?;
        }
        self.prompter.say("Goodbye!")
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
