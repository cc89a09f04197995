//! tablekit - forgiving CSV and text file helpers
//!
//! Load and save CSV tables, read and write line lists, count lines, list a
//! directory, sample rows and average a column. Every operation reports its
//! outcome as a status line and returns a sentinel instead of failing.

pub mod config;
pub mod error;
pub mod files;
pub mod model;
pub mod output;
pub mod stats;
pub mod workspace;

pub use config::Config;
pub use error::TableIoError;
pub use model::Table;
pub use stats::{column_average, random_sample};
pub use workspace::Workspace;
