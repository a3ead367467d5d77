//! File I/O utilities for the text-based stores
//!
//! Record files are `|`-delimited with no quoting. Full rewrites go through a
//! temp file and a rename so a failed write never truncates the previous
//! contents; logs are opened in append mode.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, Terminator, Trim, WriterBuilder};

use crate::error::MonitorError;

/// Field separator used by record files
pub const FIELD_DELIMITER: u8 = b'|';

/// Open a delimited record file, returning `None` if it doesn't exist
pub fn open_delimited<P: AsRef<Path>>(path: P) -> Result<Option<csv::Reader<File>>, MonitorError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| MonitorError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(file);

    Ok(Some(reader))
}

/// Encode rows as delimited text, one row per `\n`-terminated line
pub fn encode_delimited<I, R>(rows: I) -> Result<Vec<u8>, MonitorError>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let mut writer = WriterBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| MonitorError::Storage(format!("Failed to encode record: {}", e)))?;
    }

    writer
        .into_inner()
        .map_err(|e| MonitorError::Storage(format!("Failed to flush records: {}", e)))
}

/// Write bytes to a file atomically (write to temp, then rename)
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<(), MonitorError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                MonitorError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("txt.tmp");

    let file = File::create(&temp_path).map_err(|e| {
        MonitorError::Storage(format!("Error writing {}: {}", path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents)
        .map_err(|e| MonitorError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| MonitorError::Storage(format!("Failed to flush data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        MonitorError::Storage(format!("Error writing {}: {}", path.display(), e))
    })?;

    Ok(())
}

/// Append text to a file, creating it if needed
pub fn append_text<P: AsRef<Path>>(path: P, text: &str) -> Result<(), MonitorError> {
    let path = path.as_ref();

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| MonitorError::Io(format!("Error opening {}: {}", path.display(), e)))?;

    file.write_all(text.as_bytes())
        .map_err(|e| MonitorError::Io(format!("Error writing {}: {}", path.display(), e)))?;

    file.flush()
        .map_err(|e| MonitorError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}
