//! Box-drawn terminal preview

use std::io::Write;

use anyhow::Result;

use crate::model::Table;

use super::OutputFormatter;

/// Terminal output as an aligned box table
pub struct TerminalOutput {
    max_rows: Option<usize>,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self { max_rows: None }
    }

    /// Only draw the first `max_rows` rows
    pub fn with_max_rows(max_rows: usize) -> Self {
        Self {
            max_rows: Some(max_rows),
        }
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TerminalOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        if table.column_count() == 0 {
            writeln!(writer, "(empty table)")?;
            return Ok(());
        }

        let shown = self.max_rows.unwrap_or(usize::MAX).min(table.row_count());

        let mut data: Vec<Vec<String>> = Vec::with_capacity(shown + 1);
        data.push(table.header_names().map(str::to_string).collect());
        for row in table.rows.iter().take(shown) {
            data.push(row.cells.iter().map(|c| c.display().into_owned()).collect());
        }

        write!(writer, "{}", build_table(&data))?;
        if shown < table.row_count() {
            writeln!(writer, "... {} more rows", table.row_count() - shown)?;
        }
        Ok(())
    }
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, width) in widths.iter().enumerate() {
        line.push_str(&"─".repeat(width + 2));
        if i < widths.len() - 1 {
            line.push(mid);
        }
    }
    line.push(right);
    line.push('\n');
    line
}

fn cells_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("│");
    for (cell, width) in cells.iter().zip(widths) {
        let pad = width.saturating_sub(cell.chars().count());
        line.push_str(&format!(" {}{} │", cell, " ".repeat(pad)));
    }
    line.push('\n');
    line
}

/// Build a box table; the first row of `data` is the header
fn build_table(data: &[Vec<String>]) -> String {
    let Some(header) = data.first() else {
        return String::new();
    };

    let mut widths = vec![0; header.len()];
    for row in data {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = border(&widths, '┌', '┬', '┐');
    output.push_str(&cells_line(header, &widths));
    output.push_str(&border(&widths, '├', '┼', '┤'));
    for row in &data[1..] {
        output.push_str(&cells_line(row, &widths));
    }
    output.push_str(&border(&widths, '└', '┴', '┘'));
    output
}
