//! In-memory representation of a loaded CSV

mod schema;
mod table;

pub use schema::{CellType, Column};
pub use table::{CellValue, Row, Table};
