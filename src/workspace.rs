//! Forgiving file operations rooted at a base directory.
//!
//! Each operation prints one status line and hands back a sentinel (`None`,
//! `0` or nothing) instead of an error. The `try_*` variants expose the
//! underlying [`TableIoError`] for callers that want it.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{absorb, Result, TableIoError};
use crate::files;
use crate::model::Table;

/// Base directory shared by the read operations.
///
/// Reads resolve relative names against the base directory; writes and
/// line counts use the name as given, relative to the working directory.
#[derive(Debug, Clone)]
pub struct Workspace {
    base_dir: PathBuf,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Workspace {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path a read of `filename` touches. Absolute names pass through.
    pub fn resolve(&self, filename: impl AsRef<Path>) -> PathBuf {
        let path = self.base_dir.join(filename);
        debug!(path = %path.display(), "resolved");
        path
    }

    /// Errors name `filename` as given, not the resolved path
    pub fn try_load_csv(&self, filename: impl AsRef<Path>) -> Result<Table> {
        let filename = filename.as_ref();
        files::read_table(&self.resolve(filename))
            .map_err(|e| e.with_file(&filename.display().to_string()))
    }

    /// Load a CSV with a header row, or `None` if it cannot be read
    pub fn load_csv(&self, filename: impl AsRef<Path>) -> Option<Table> {
        let filename = filename.as_ref();
        let table = absorb(self.try_load_csv(filename))?;
        let (rows, cols) = table.shape();
        println!(
            "Loaded '{}' successfully. Shape: ({}, {})",
            filename.display(),
            rows,
            cols
        );
        Some(table)
    }

    pub fn try_save_csv(&self, table: Option<&Table>, filename: impl AsRef<Path>) -> Result<()> {
        let table = table.ok_or(TableIoError::NoData("save"))?;
        files::write_table(table, filename.as_ref())
    }

    /// Save a table as CSV. An absent table is a no-op.
    pub fn save_csv(&self, table: Option<&Table>, filename: impl AsRef<Path>) {
        let filename = filename.as_ref();
        if absorb(self.try_save_csv(table, filename)).is_some() {
            println!("Data saved to '{}' successfully.", filename.display());
        }
    }

    pub fn try_read_txt(&self, filename: impl AsRef<Path>) -> Result<Vec<String>> {
        let filename = filename.as_ref();
        files::read_lines(&self.resolve(filename))
            .map_err(|e| e.with_file(&filename.display().to_string()))
    }

    pub fn read_txt(&self, filename: impl AsRef<Path>) -> Option<Vec<String>> {
        let filename = filename.as_ref();
        let lines = absorb(self.try_read_txt(filename))?;
        println!(
            "Loaded '{}' successfully. {} lines.",
            filename.display(),
            lines.len()
        );
        Some(lines)
    }

    pub fn try_write_txt<S: AsRef<str>>(
        &self,
        lines: &[S],
        filename: impl AsRef<Path>,
    ) -> Result<()> {
        files::write_lines(lines, filename.as_ref())
    }

    pub fn write_txt<S: AsRef<str>>(&self, lines: &[S], filename: impl AsRef<Path>) {
        let filename = filename.as_ref();
        if absorb(self.try_write_txt(lines, filename)).is_some() {
            println!("TXT saved to '{}' successfully.", filename.display());
        }
    }

    pub fn try_count_lines(&self, filename: impl AsRef<Path>) -> Result<usize> {
        files::count_lines(filename.as_ref())
    }

    /// Number of lines in the file, or 0 if it cannot be read
    pub fn count_lines(&self, filename: impl AsRef<Path>) -> usize {
        absorb(self.try_count_lines(filename)).unwrap_or(0)
    }

    pub fn try_list_dir(&self) -> Result<Vec<String>> {
        files::list_entries(&self.base_dir)
    }

    /// Print the base directory's entries, one per line
    pub fn list_dir(&self) -> Vec<String> {
        let entries = absorb(self.try_list_dir()).unwrap_or_default();
        for entry in &entries {
            println!("{}", entry);
        }
        entries
    }
}
