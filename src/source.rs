//! Line-oriented source reading.
//!
//! Reads a whole file into memory as an ordered sequence of lines with
//! their terminators preserved. This is the only I/O in the pipeline;
//! everything downstream is purely computational.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Failure to read a source file (missing, permission-denied, not UTF-8).
#[derive(Debug)]
pub enum SourceError {
    Unreadable { path: PathBuf, source: io::Error },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Unreadable { path, source } => {
                write!(f, "failed to read source file {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Unreadable { source, .. } => Some(source),
        }
    }
}

/// Read an entire file into memory as lines, terminators preserved.
pub fn read_lines(path: &Path) -> Result<Vec<String>, SourceError> {
    let content = std::fs::read_to_string(path).map_err(|source| SourceError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(split_lines(&content))
}

/// Split text into lines, keeping each line's terminator.
///
/// A final line without a trailing newline is kept as-is.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_preserves_terminators() {
        assert_eq!(split_lines("a\nb\nc\n"), vec!["a\n", "b\n", "c\n"]);
    }

    #[test]
    fn split_keeps_unterminated_final_line() {
        assert_eq!(split_lines("a\nb"), vec!["a\n", "b"]);
    }

    #[test]
    fn split_empty_content_has_no_lines() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn read_lines_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt");
        std::fs::write(&path, "one\ntwo\n").unwrap();
        assert_eq!(read_lines(&path).unwrap(), vec!["one\n", "two\n"]);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_lines(Path::new("/nonexistent/input.txt")).unwrap_err();
        assert!(err.to_string().contains("input.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
