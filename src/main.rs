use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use load_monitor::cli::{handle_command, Commands};
use load_monitor::config::{MonitorPaths, Settings};
use load_monitor::storage::Storage;

#[derive(Parser)]
#[command(
    name = "load-monitor",
    version,
    about = "Electrical load monitoring and billing estimates",
    long_about = "load-monitor keeps a list of household appliances with their power \
                  draw and daily hours of use, and estimates daily and 30-day energy \
                  use and cost from your electricity tariff. Run without a command \
                  for the interactive menu."
)]
struct Cli {
    /// Directory holding appliances.txt, billing_summary.txt and settings
    #[arg(short, long, global = true, default_value = ".")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    load_monitor::init_tracing();

    let cli = Cli::parse();

    let paths = MonitorPaths::with_base_dir(cli.data_dir);
    let settings = Settings::load_or_create(&paths).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring settings file, using defaults");
        Settings::default()
    });

    let mut storage = Storage::new(paths, &settings)?;
    let report = storage.load_all();

    handle_command(
        &mut storage,
        &settings,
        report,
        cli.command.unwrap_or(Commands::Menu),
    )?;

    Ok(())
}
