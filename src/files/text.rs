//! Plain-text line lists

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, TableIoError};

/// Read a file as a list of lines, in file order, without line terminators
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let name = path.display().to_string();
    let file = File::open(path).map_err(|e| TableIoError::from_io(&name, e))?;

    let lines = BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| TableIoError::from_io(&name, e))?;

    debug!(path = %name, lines = lines.len(), "read text");
    Ok(lines)
}

/// Write each line followed by `\n`, replacing any existing file
pub fn write_lines<S: AsRef<str>>(lines: &[S], path: &Path) -> Result<()> {
    let name = path.display().to_string();
    let file = File::create(path).map_err(|e| TableIoError::from_io(&name, e).for_write())?;
    let mut writer = BufWriter::new(file);

    for line in lines {
        writeln!(writer, "{}", line.as_ref())
            .map_err(|e| TableIoError::from_io(&name, e).for_write())?;
    }
    writer.flush().map_err(|e| TableIoError::from_io(&name, e).for_write())?;

    debug!(path = %name, lines = lines.len(), "wrote text");
    Ok(())
}

/// Count lines; a trailing line without a newline still counts
pub fn count_lines(path: &Path) -> Result<usize> {
    let name = path.display().to_string();
    let file = File::open(path).map_err(|e| TableIoError::from_io(&name, e))?;

    let mut count = 0;
    for chunk in BufReader::new(file).split(b'\n') {
        chunk.map_err(|e| TableIoError::from_io(&name, e))?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_round_trip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("foods.txt");
        let lines = vec!["Pizza", "  Sushi", "", "Tacos"];

        write_lines(&lines, &path).unwrap();
        assert_eq!(read_lines(&path).unwrap(), lines);
    }

    #[test]
    fn test_read_handles_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crlf.txt");
        fs::write(&path, "a\r\nb\r\n").unwrap();

        assert_eq!(read_lines(&path).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_count_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("n.txt");

        fs::write(&path, "one\ntwo\nthree\n").unwrap();
        assert_eq!(count_lines(&path).unwrap(), 3);

        fs::write(&path, "one\ntwo").unwrap();
        assert_eq!(count_lines(&path).unwrap(), 2);

        fs::write(&path, "").unwrap();
        assert_eq!(count_lines(&path).unwrap(), 0);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        assert!(matches!(read_lines(&missing), Err(TableIoError::NotFound(_))));
        assert!(matches!(count_lines(&missing), Err(TableIoError::NotFound(_))));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");

        assert!(matches!(write_lines(&["x"], &path), Err(TableIoError::NotFound(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locked.txt");
        fs::write(&path, "kept\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();
        if File::open(&path).is_ok() {
            // running as root; permissions are not enforced
            return;
        }

        assert!(matches!(read_lines(&path), Err(TableIoError::PermissionDenied(_))));
        assert!(matches!(
            write_lines(&["x"], &path),
            Err(TableIoError::WriteDenied(_))
        ));
    }
}
