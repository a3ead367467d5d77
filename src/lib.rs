//! load-monitor - Electrical load monitoring and billing estimates
//!
//! This library keeps an inventory of household appliances (power draw and
//! daily hours of use) in a flat text file and derives daily and 30-day
//! energy use and cost from a tariff.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory paths and optional settings
//! - `error`: Custom error types
//! - `models`: The appliance record
//! - `storage`: Delimited appliance file and store
//! - `billing`: Energy/cost calculator and the billing summary log
//! - `services`: Business logic layer
//! - `display`: Terminal tables
//! - `cli`: Interactive menu and one-shot commands
//!
//! # Example
//!
//! ```rust,ignore
//! use load_monitor::config::{MonitorPaths, Settings};
//! use load_monitor::storage::Storage;
//!
//! let paths = MonitorPaths::new();
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths, &settings)?;
//! let report = storage.load_all();
//! ```

pub mod billing;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

use std::sync::Once;

pub use error::{MonitorError, MonitorResult};

static INIT_TRACING: Once = Once::new();

/// Install the global tracing subscriber (stderr, `RUST_LOG` aware)
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("load_monitor=warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
