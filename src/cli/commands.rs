//! One-shot CLI commands
//!
//! Non-interactive counterparts of the menu entries, for scripting.

use std::io::{self, Write};

use clap::Subcommand;

use crate::config::{MonitorPaths, Settings};
use crate::display::{format_appliance_list, format_appliance_table, format_billing_report};
use crate::error::MonitorResult;
use crate::services::{ApplianceService, Registration};
use crate::storage::{LoadReport, Storage};

use super::menu::MenuShell;

/// Appliance subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive menu (default)
    Menu,
    /// Register an appliance
    Add {
        /// Appliance name
        name: String,
        /// Rated power in watts (> 0)
        watts: f64,
        /// Hours of use per day (0-24)
        hours: f64,
        /// Update the existing record if the name is already registered
        #[arg(short, long)]
        update: bool,
    },
    /// List all appliances with load totals
    List {
        /// Print the records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search appliances by name (case-insensitive substring)
    Search {
        /// Text to look for in appliance names
        query: String,
    },
    /// Estimate daily and 30-day energy and cost
    Bill {
        /// Price per kWh (> 0)
        tariff: f64,
        /// Append the summary to the billing log
        #[arg(short, long)]
        save: bool,
    },
    /// Show file locations and settings
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

/// Handle a command against an already-loaded store
pub fn handle_command(
    storage: &mut Storage,
    settings: &Settings,
    report: LoadReport,
    cmd: Commands,
) -> MonitorResult<()> {
    let mut out = io::stdout().lock();

    match cmd {
        Commands::Menu => {
            drop(out);
            run_menu(storage, settings, report)?;
        }

        Commands::Add {
            name,
            watts,
            hours,
            update,
        } => {
            let mut service = ApplianceService::new(storage);
            match service.register_or_update(&name, watts, hours, update)? {
                Registration::Added(index) => {
                    writeln!(out, "Registered appliance #{}: {}", index + 1, name.trim())?;
                }
                Registration::Updated(index) => {
                    writeln!(out, "Updated appliance #{}: {}", index + 1, name.trim())?;
                }
            }
        }

        Commands::List { json } => {
            let service = ApplianceService::new(storage);
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(service.list())?)?;
            } else {
                write!(out, "{}", format_appliance_list(service.list(), &service.totals()))?;
            }
        }

        Commands::Search { query } => {
            let service = ApplianceService::new(storage);
            let mut matches = service.search(&query).peekable();
            if matches.peek().is_none() {
                writeln!(out, "No appliance matches '{}'.", query.trim())?;
            } else {
                writeln!(out, "{}", format_appliance_table(matches))?;
            }
        }

        Commands::Bill { tariff, save } => {
            let service = ApplianceService::new(storage);
            let summary = service.billing(tariff)?;
            write!(
                out,
                "{}",
                format_billing_report(service.list(), &summary, &settings.currency_symbol)
            )?;
            if save {
                service.record_billing(&summary)?;
                writeln!(out, "Billing summary appended to {}", service.billing_path().display())?;
            }
        }

        Commands::Config { init } => {
            show_config(&mut out, storage.paths(), settings, init)?;
        }
    }

    Ok(())
}

/// Run the interactive menu on stdin/stdout
pub fn run_menu(storage: &mut Storage, settings: &Settings, report: LoadReport) -> MonitorResult<()> {
    let stdin = io::stdin();
    let service = ApplianceService::new(storage);
    let mut shell = MenuShell::new(
        service,
        stdin.lock(),
        io::stdout(),
        settings.currency_symbol.as_str(),
    );
    shell.run(report)
}

fn show_config(
    out: &mut impl Write,
    paths: &MonitorPaths,
    settings: &Settings,
    init: bool,
) -> MonitorResult<()> {
    if init {
        settings.save(paths)?;
        writeln!(out, "Wrote {}", paths.settings_file().display())?;
        writeln!(out)?;
    }

    writeln!(out, "load-monitor configuration")?;
    writeln!(out, "==========================")?;
    writeln!(out, "Data directory:  {}", paths.base_dir().display())?;
    writeln!(out, "Appliance file:  {}", paths.appliances_file().display())?;
    writeln!(out, "Billing log:     {}", paths.billing_file().display())?;
    writeln!(out, "Settings file:   {}", paths.settings_file().display())?;
    writeln!(out)?;
    writeln!(out, "Settings:")?;
    writeln!(out, "  Max appliances:  {}", settings.max_appliances)?;
    writeln!(
        out,
        "  Currency symbol: {}",
        if settings.currency_symbol.is_empty() {
            "(none)"
        } else {
            settings.currency_symbol.as_str()
        }
    )?;
    Ok(())
}
