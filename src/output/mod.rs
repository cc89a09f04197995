//! Table previews

mod json;
mod terminal;

use std::io::Write;

use anyhow::Result;

use crate::config::OutputFormat;
use crate::model::Table;

pub use json::JsonOutput;
pub use terminal::TerminalOutput;

/// Trait for table preview formatters
pub trait OutputFormatter {
    /// Render a table to a writer
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter based on format type, showing at most
    /// `max_rows` rows when given
    pub fn create(format: OutputFormat, max_rows: Option<usize>) -> Box<dyn OutputFormatter> {
        match (format, max_rows) {
            (OutputFormat::Terminal, Some(n)) => Box::new(TerminalOutput::with_max_rows(n)),
            (OutputFormat::Terminal, None) => Box::new(TerminalOutput::new()),
            (OutputFormat::Json, Some(n)) => Box::new(JsonOutput::with_max_rows(n)),
            (OutputFormat::Json, None) => Box::new(JsonOutput::new()),
        }
    }
}

/// Render a table to any writer
pub fn render(
    table: &Table,
    format: OutputFormat,
    max_rows: Option<usize>,
    writer: &mut dyn Write,
) -> Result<()> {
    OutputFactory::create(format, max_rows).render(table, writer)
}

/// Render a table to stdout
pub fn render_to_stdout(
    table: &Table,
    format: OutputFormat,
    max_rows: Option<usize>,
) -> Result<()> {
    let mut stdout = std::io::stdout();
    render(table, format, max_rows, &mut stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;

    #[test]
    fn test_row_cap_applies_to_every_format() {
        let rows: Vec<Vec<CellValue>> = (0..6i64).map(|i| vec![CellValue::Int(i)]).collect();
        let table = Table::from_records(["n"], rows);

        let mut buf = Vec::new();
        render(&table, OutputFormat::Json, Some(2), &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["rows"].as_array().map(Vec::len), Some(2));

        let mut buf = Vec::new();
        render(&table, OutputFormat::Terminal, Some(2), &mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().ends_with("... 4 more rows\n"));
    }
}
