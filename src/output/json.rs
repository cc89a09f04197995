//! JSON preview format

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::model::{CellValue, Column, Table};

use super::OutputFormatter;

/// Pretty-printed JSON output formatter
pub struct JsonOutput {
    max_rows: Option<usize>,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { max_rows: None }
    }

    /// Only emit the first `max_rows` rows
    pub fn with_max_rows(max_rows: usize) -> Self {
        Self {
            max_rows: Some(max_rows),
        }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonTable<'a> {
    columns: &'a [Column],
    rows: Vec<&'a [CellValue]>,
}

impl OutputFormatter for JsonOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        let output = JsonTable {
            columns: &table.columns,
            rows: table
                .rows
                .iter()
                .take(self.max_rows.unwrap_or(usize::MAX))
                .map(|r| r.cells.as_slice())
                .collect(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;

        Ok(())
    }
}
