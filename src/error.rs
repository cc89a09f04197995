//! Error kinds for file and table operations

use std::io;

/// Everything that can go wrong while reading, writing or summarising data.
///
/// The `Display` text of each variant is the status line printed to the user
/// when the error is absorbed into a sentinel value.
#[derive(Debug, thiserror::Error)]
pub enum TableIoError {
    /// The file does not exist
    #[error("Error: File '{0}' not found.")]
    NotFound(String),

    /// The file exists but cannot be opened for reading
    #[error("Permission denied: Cannot read '{0}'.")]
    PermissionDenied(String),

    /// The file or its directory cannot be written
    #[error("Permission denied: Cannot write to '{0}'.")]
    WriteDenied(String),

    /// A CSV file with no header row
    #[error("Error: File '{0}' is empty.")]
    Empty(String),

    /// Content that cannot be parsed as the expected format
    #[error("Error: File '{file}' is invalid or corrupted ({reason}).")]
    Malformed { file: String, reason: String },

    /// The requested column is not in the table
    #[error("Error: Column '{0}' not found.")]
    MissingColumn(String),

    /// The column holds values that cannot be averaged
    #[error("Error: Column '{0}' is not numeric.")]
    NotNumeric(String),

    /// An operation was handed no table
    #[error("No data to {0}.")]
    NoData(&'static str),

    /// Anything else
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl TableIoError {
    /// Classify an I/O error raised while touching `file`
    pub fn from_io(file: &str, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => TableIoError::NotFound(file.to_string()),
            io::ErrorKind::PermissionDenied => TableIoError::PermissionDenied(file.to_string()),
            io::ErrorKind::InvalidData => TableIoError::Malformed {
                file: file.to_string(),
                reason: err.to_string(),
            },
            _ => TableIoError::Unexpected(err.to_string()),
        }
    }

    /// Classify a CSV error raised while touching `file`
    pub fn from_csv(file: &str, err: csv::Error) -> Self {
        if err.is_io_error() {
            return match err.into_kind() {
                csv::ErrorKind::Io(io_err) => Self::from_io(file, io_err),
                other => TableIoError::Unexpected(format!("{:?}", other)),
            };
        }

        match err.kind() {
            csv::ErrorKind::Utf8 { .. } | csv::ErrorKind::UnequalLengths { .. } => {
                TableIoError::Malformed {
                    file: file.to_string(),
                    reason: err.to_string(),
                }
            }
            _ => TableIoError::Unexpected(err.to_string()),
        }
    }

    /// Reclassify a read-side permission failure as a write failure
    pub fn for_write(self) -> Self {
        match self {
            TableIoError::PermissionDenied(file) => TableIoError::WriteDenied(file),
            other => other,
        }
    }

    /// Report the error against `name` instead of the path that was touched
    pub fn with_file(self, name: &str) -> Self {
        let name = name.to_string();
        match self {
            TableIoError::NotFound(_) => TableIoError::NotFound(name),
            TableIoError::PermissionDenied(_) => TableIoError::PermissionDenied(name),
            TableIoError::WriteDenied(_) => TableIoError::WriteDenied(name),
            TableIoError::Empty(_) => TableIoError::Empty(name),
            TableIoError::Malformed { reason, .. } => TableIoError::Malformed { file: name, reason },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, TableIoError>;

/// Turn a failed operation into `None`, printing its status line.
///
/// Errors never travel past this point.
pub fn absorb<T>(result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(error = ?err, "operation failed");
            println!("{}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_kinds_are_classified() {
        let err = TableIoError::from_io("a.csv", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, TableIoError::NotFound(ref f) if f == "a.csv"));
        assert_eq!(err.to_string(), "Error: File 'a.csv' not found.");

        let err = TableIoError::from_io("b.txt", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, TableIoError::PermissionDenied(_)));

        let err = TableIoError::from_io("c.txt", io::Error::other("disk on fire"));
        assert!(matches!(err, TableIoError::Unexpected(_)));
        assert!(err.to_string().contains("disk on fire"));
    }

    #[test]
    fn test_write_side_permission_text() {
        let err = TableIoError::from_io("out.csv", io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(err.to_string(), "Permission denied: Cannot read 'out.csv'.");
        assert_eq!(
            err.for_write().to_string(),
            "Permission denied: Cannot write to 'out.csv'."
        );
    }

    #[test]
    fn test_with_file_relabels() {
        let err = TableIoError::NotFound("data/dataset.csv".to_string()).with_file("dataset.csv");
        assert_eq!(err.to_string(), "Error: File 'dataset.csv' not found.");

        let err = TableIoError::Malformed {
            file: "data/x.csv".to_string(),
            reason: "bad row".to_string(),
        }
        .with_file("x.csv");
        assert_eq!(err.to_string(), "Error: File 'x.csv' is invalid or corrupted (bad row).");

        let err = TableIoError::MissingColumn("price".to_string()).with_file("x.csv");
        assert!(matches!(err, TableIoError::MissingColumn(ref c) if c == "price"));
    }

    #[test]
    fn test_no_data_message() {
        assert_eq!(TableIoError::NoData("save").to_string(), "No data to save.");
    }

    #[test]
    fn test_absorb() {
        assert_eq!(absorb(Ok(3)), Some(3));
        assert_eq!(absorb::<u8>(Err(TableIoError::NoData("sample"))), None);
    }
}
