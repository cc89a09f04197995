//! Row sampling and column averages

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{absorb, Result, TableIoError};
use crate::model::Table;

/// Draw up to `size` distinct rows at random, keeping their source order.
///
/// A size larger than the table yields every row.
pub fn try_random_sample(table: Option<&Table>, size: usize, seed: Option<u64>) -> Result<Table> {
    let table = table.ok_or(TableIoError::NoData("sample"))?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok(sample_with(table, size, &mut rng))
}

fn sample_with<R: Rng + ?Sized>(table: &Table, size: usize, rng: &mut R) -> Table {
    let amount = size.min(table.row_count());
    let mut picked = rand::seq::index::sample(rng, table.row_count(), amount).into_vec();
    picked.sort_unstable();
    debug!(requested = size, drawn = amount, "sampled rows");
    table.select_rows(picked)
}

pub fn random_sample(table: Option<&Table>, size: usize, seed: Option<u64>) -> Option<Table> {
    let sample = absorb(try_random_sample(table, size, seed))?;
    println!(
        "Sampled {} of {} rows.",
        sample.row_count(),
        table.map_or(0, Table::row_count)
    );
    Some(sample)
}

/// Arithmetic mean of a column's numbers. Nulls are skipped.
pub fn try_column_average(table: Option<&Table>, column: &str) -> Result<f64> {
    let table = table.ok_or(TableIoError::NoData("average"))?;
    let index = table
        .column_index(column)
        .ok_or_else(|| TableIoError::MissingColumn(column.to_string()))?;

    let mut sum = 0.0;
    let mut count = 0usize;
    for cell in table.rows.iter().filter_map(|row| row.get(index)) {
        if cell.is_null() {
            continue;
        }
        let value = cell
            .as_f64()
            .ok_or_else(|| TableIoError::NotNumeric(column.to_string()))?;
        sum += value;
        count += 1;
    }

    if count == 0 {
        return Err(TableIoError::NotNumeric(column.to_string()));
    }
    Ok(sum / count as f64)
}

pub fn column_average(table: Option<&Table>, column: &str) -> Option<f64> {
    let average = absorb(try_column_average(table, column))?;
    println!("Average of '{}': {}", column, average);
    Some(average)
}
