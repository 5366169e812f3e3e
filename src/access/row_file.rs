//! Binary row files.
//!
//! A row file is a bincode-encoded `Vec<Vec<Value>>`. It is how the CLI and
//! tests feed batches of records into an expression without a storage layer.

use crate::access::Value;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write rows to `path`, replacing any existing file
pub fn write_rows(path: &Path, rows: &[Vec<Value>]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create row file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    bincode::serialize_into(&mut writer, rows)
        .with_context(|| format!("Failed to encode rows into {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush row file {}", path.display()))?;
    log::debug!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Read all rows from `path`
pub fn read_rows(path: &Path) -> Result<Vec<Vec<Value>>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open row file {}", path.display()))?;
    let rows: Vec<Vec<Value>> = bincode::deserialize_from(BufReader::new(file))
        .with_context(|| format!("Failed to decode rows from {}", path.display()))?;
    log::debug!("read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}
