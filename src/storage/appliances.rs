//! Appliance store backed by `appliances.txt`
//!
//! Records are kept in insertion order. Every mutation rewrites the whole
//! file; there is no incremental write path.

use std::path::{Path, PathBuf};

use csv::ByteRecord;
use tracing::{debug, info, warn};

use crate::error::{MonitorError, MonitorResult};
use crate::models::appliance::{validate_hours, validate_watts, Appliance};

use super::file_io::{encode_delimited, open_delimited, write_atomic};

/// Outcome of hydrating the store from disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records accepted into the store
    pub loaded: usize,
    /// Non-blank lines rejected as malformed or invalid
    pub skipped: usize,
    /// Whether reading stopped because the store was full
    pub truncated: bool,
}

/// Bounded, ordered collection of appliances with file persistence
#[derive(Debug)]
pub struct ApplianceStore {
    path: PathBuf,
    capacity: usize,
    appliances: Vec<Appliance>,
}

impl ApplianceStore {
    /// Create an empty store persisting to `path`
    pub fn new(path: PathBuf, capacity: usize) -> Self {
        Self {
            path,
            capacity,
            appliances: Vec::new(),
        }
    }

    /// Load appliances from disk, replacing the in-memory records
    ///
    /// Never fails: a missing or unreadable file yields an empty store, and
    /// bad lines are skipped and counted.
    pub fn load(&mut self) -> LoadReport {
        self.appliances.clear();
        let mut report = LoadReport::default();

        let mut reader = match open_delimited(&self.path) {
            Ok(Some(reader)) => reader,
            Ok(None) => {
                debug!(path = %self.path.display(), "no appliance file, starting empty");
                return report;
            }
            Err(e) => {
                warn!(error = %e, "appliance file unreadable, starting empty");
                return report;
            }
        };

        let mut record = ByteRecord::new();
        loop {
            match reader.read_byte_record(&mut record) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    warn!(error = %e, "stopped reading appliance file");
                    break;
                }
            }

            if is_blank(&record) {
                continue;
            }

            let Some(appliance) = parse_record(&record) else {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                debug!(line, "skipping malformed appliance line");
                report.skipped += 1;
                continue;
            };

            if self.is_full() {
                report.truncated = true;
                break;
            }

            // First occurrence of a name wins
            if self.find_by_name(&appliance.name).is_some() {
                debug!(name = %appliance.name, "skipping duplicate appliance line");
                report.skipped += 1;
                continue;
            }

            self.appliances.push(appliance);
            report.loaded += 1;
        }

        info!(
            loaded = report.loaded,
            skipped = report.skipped,
            truncated = report.truncated,
            "appliances loaded"
        );
        report
    }

    /// Save all appliances to disk, overwriting the previous contents
    pub fn save(&self) -> MonitorResult<()> {
        let rows = self.appliances.iter().map(|a| {
            [
                a.name.clone(),
                a.watts.to_string(),
                a.hours.to_string(),
            ]
        });
        let contents = encode_delimited(rows)?;
        write_atomic(&self.path, &contents)?;

        debug!(count = self.appliances.len(), path = %self.path.display(), "appliances saved");
        Ok(())
    }

    /// Append a new appliance and save
    ///
    /// Returns the index of the new record. If only the save fails, the
    /// record is kept in memory and the storage error is returned.
    pub fn add(&mut self, appliance: Appliance) -> MonitorResult<usize> {
        let appliance = Appliance::new(appliance.name, appliance.watts, appliance.hours);
        appliance
            .validate()
            .map_err(|e| MonitorError::Validation(e.to_string()))?;

        if self.find_by_name(&appliance.name).is_some() {
            return Err(MonitorError::duplicate_appliance(appliance.name));
        }

        if self.is_full() {
            return Err(MonitorError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.appliances.push(appliance);
        self.save()?;
        Ok(self.appliances.len() - 1)
    }

    /// Overwrite watts and hours of an existing record in place, then save
    pub fn update(&mut self, index: usize, watts: f64, hours: f64) -> MonitorResult<&Appliance> {
        validate_watts(watts).map_err(|e| MonitorError::Validation(e.to_string()))?;
        validate_hours(hours).map_err(|e| MonitorError::Validation(e.to_string()))?;

        let appliance = self
            .appliances
            .get_mut(index)
            .ok_or_else(|| MonitorError::appliance_not_found(format!("#{}", index + 1)))?;
        appliance.watts = watts;
        appliance.hours = hours;

        self.save()?;
        Ok(&self.appliances[index])
    }

    /// Position of the appliance with this name (case-insensitive, trimmed)
    pub fn find_by_name(&self, query: &str) -> Option<usize> {
        self.appliances.iter().position(|a| a.matches_name(query))
    }

    /// Lazily match appliances whose name contains `query`, ignoring case
    pub fn search(&self, query: &str) -> SearchMatches<'_> {
        SearchMatches {
            needle: Appliance::normalize_name(query),
            inner: self.appliances.iter().enumerate(),
        }
    }

    /// Get an appliance by position
    pub fn get(&self, index: usize) -> Option<&Appliance> {
        self.appliances.get(index)
    }

    /// All appliances in store order
    pub fn all(&self) -> &[Appliance] {
        &self.appliances
    }

    /// Number of stored appliances
    pub fn len(&self) -> usize {
        self.appliances.len()
    }

    /// Whether the store holds no appliances
    pub fn is_empty(&self) -> bool {
        self.appliances.is_empty()
    }

    /// Whether the store has reached its capacity
    pub fn is_full(&self) -> bool {
        self.appliances.len() >= self.capacity
    }

    /// Maximum number of appliances
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Iterator over search hits as `(index, appliance)` pairs in store order
///
/// Cloning restarts the search from the clone point.
#[derive(Debug, Clone)]
pub struct SearchMatches<'a> {
    needle: String,
    inner: std::iter::Enumerate<std::slice::Iter<'a, Appliance>>,
}

impl<'a> Iterator for SearchMatches<'a> {
    type Item = (usize, &'a Appliance);

    fn next(&mut self) -> Option<Self::Item> {
        let needle = &self.needle;
        self.inner.find(|(_, a)| a.name_contains(needle))
    }
}

/// A line with no delimiter and nothing but whitespace
fn is_blank(record: &ByteRecord) -> bool {
    record.len() == 1 && record[0].trim_ascii().is_empty()
}

/// Parse `name|watts|hours`; `None` for anything malformed or invalid
fn parse_record(record: &ByteRecord) -> Option<Appliance> {
    if record.len() != 3 {
        return None;
    }

    let name = text_field(record, 0)?;
    let watts: f64 = text_field(record, 1)?.parse().ok()?;
    let hours: f64 = text_field(record, 2)?.parse().ok()?;

    let appliance = Appliance::new(name, watts, hours);
    appliance.validate().ok()?;
    Some(appliance)
}

fn text_field(record: &ByteRecord, index: usize) -> Option<&str> {
    std::str::from_utf8(record.get(index)?).ok().map(str::trim)
}
