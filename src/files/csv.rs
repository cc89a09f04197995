//! CSV reading and writing

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, TableIoError};
use crate::model::{CellValue, Column, Table};

/// Read a CSV file with a header row into a table.
///
/// Rows shorter than the header are padded with nulls; rows longer than the
/// header are rejected as malformed.
pub fn read_table(path: &Path) -> Result<Table> {
    let name = path.display().to_string();
    let file = File::open(path).map_err(|e| TableIoError::from_io(&name, e))?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers = csv_reader
        .headers()
        .map_err(|e| TableIoError::from_csv(&name, e))?
        .clone();
    if headers.is_empty() {
        return Err(TableIoError::Empty(name));
    }

    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| Column::new(header.trim(), i))
        .collect();
    let mut table = Table::new(columns);

    for (line_num, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| TableIoError::from_csv(&name, e))?;
        let source_line = line_num + 2; // 1-indexed, after the header

        if record.len() > table.column_count() {
            return Err(TableIoError::Malformed {
                file: name,
                reason: format!(
                    "expected {} fields in line {}, saw {}",
                    table.column_count(),
                    source_line,
                    record.len()
                ),
            });
        }

        let cells: Vec<CellValue> = record.iter().map(CellValue::parse).collect();
        table.add_row(cells, source_line);
    }

    table.infer_column_types();
    debug!(path = %name, rows = table.row_count(), columns = table.column_count(), "read csv");

    Ok(table)
}

/// Write a table as CSV with a header row and no index column
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let name = path.display().to_string();
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| TableIoError::from_csv(&name, e).for_write())?;

    writer
        .write_record(table.header_names())
        .map_err(|e| TableIoError::from_csv(&name, e).for_write())?;
    for row in &table.rows {
        writer
            .write_record(row.cells.iter().map(|c| c.to_field().into_owned()))
            .map_err(|e| TableIoError::from_csv(&name, e).for_write())?;
    }
    writer.flush().map_err(|e| TableIoError::from_io(&name, e).for_write())?;

    debug!(path = %name, rows = table.row_count(), "wrote csv");
    Ok(())
}
