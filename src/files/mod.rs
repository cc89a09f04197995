//! Fallible file operations.
//!
//! Everything here returns [`crate::error::Result`]; the forgiving wrappers
//! live in [`crate::workspace`].

mod csv;
mod dir;
mod text;

pub use self::csv::{read_table, write_table};
pub use self::dir::list_entries;
pub use self::text::{count_lines, read_lines, write_lines};
