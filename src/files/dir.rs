//! Directory listing

use std::fs;
use std::path::Path;

use crate::error::{Result, TableIoError};

/// Names of the entries in `dir`, sorted
pub fn list_entries(dir: &Path) -> Result<Vec<String>> {
    let name = dir.display().to_string();
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| TableIoError::from_io(&name, e))? {
        let entry = entry.map_err(|e| TableIoError::from_io(&name, e))?;
        entries.push(entry.file_name().to_string_lossy().into_owned());
    }

    entries.sort();
    Ok(entries)
}
