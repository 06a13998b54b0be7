// src/counter.rs
use crate::error::{EngineError, Result};
use std::fs;
use std::path::Path;

/// Count the line records of one file.
///
/// The whole file is read into memory and decoded as UTF-8; the buffer is
/// released as soon as the count is taken.
///
/// # Errors
///
/// Returns `EngineError::FileRead` if the file cannot be opened, read, or
/// decoded as UTF-8.
pub fn count_file_lines(path: &Path) -> Result<u64> {
    let contents = fs::read_to_string(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(count_lines(&contents))
}

/// A line record is a chunk terminated by `\n`; a trailing chunk without a
/// terminator still counts as one line, and empty content counts zero.
fn count_lines(contents: &str) -> u64 {
    if contents.is_empty() {
        return 0;
    }
    let newlines = bytecount::count(contents.as_bytes(), b'\n') as u64;
    if contents.ends_with('\n') {
        newlines
    } else {
        newlines + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_content_counts_zero() {
        assert_eq!(count_lines(""), 0);
    }

    #[test]
    fn trailing_newline_does_not_add_a_line() {
        assert_eq!(count_lines("one\ntwo\nthree\n"), 3);
        assert_eq!(count_lines("one\ntwo\nthree"), 3);
        assert_eq!(count_lines("\n"), 1);
        assert_eq!(count_lines("no terminator"), 1);
    }

    #[test]
    fn blank_lines_still_count() {
        assert_eq!(count_lines("\n\n\n"), 3);
        assert_eq!(count_lines("a\n\nb\n"), 3);
    }

    #[test]
    fn counts_lines_of_a_real_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "void main() {{}}\n// done\n").unwrap();
        assert_eq!(count_file_lines(file.path()).unwrap(), 2);
    }

    #[test]
    fn empty_file_counts_zero() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(count_file_lines(file.path()).unwrap(), 0);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = count_file_lines(&dir.path().join("gone.dart")).unwrap_err();
        assert!(matches!(err, EngineError::FileRead { .. }));
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, b'\n']).unwrap();
        let err = count_file_lines(file.path()).unwrap_err();
        let EngineError::FileRead { source, .. } = err;
        assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
    }
}
