//! Reading the line sequence from a file or stdin.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Path that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

/// Error type for input loading.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The source could not be opened.
    #[error("cannot open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source was opened but reading failed.
    #[error("cannot read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read every line of `path`, or of stdin when `path` is `-`.
pub fn read_lines(path: &Path) -> Result<Vec<String>, InputError> {
    let read_err = |source| InputError::Read {
        path: path.to_path_buf(),
        source,
    };

    let lines = if path.as_os_str() == STDIN_PATH {
        read_from(io::stdin().lock()).map_err(read_err)?
    } else {
        let file = File::open(path).map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        read_from(BufReader::new(file)).map_err(read_err)?
    };

    tracing::debug!(path = %path.display(), lines = lines.len(), "input loaded");
    Ok(lines)
}

/// Split a reader into lines on `\n`, dropping one trailing `\r` per line.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so such a
/// line is still counted (and classified as invalid).
pub fn read_from<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn splits_on_newline() {
        let lines = read_from(Cursor::new("1.2.3.4\nfoo\n\nbar")).unwrap();
        assert_eq!(lines, vec!["1.2.3.4", "foo", "", "bar"]);
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        let lines = read_from(Cursor::new("a\nb\n")).unwrap();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn strips_carriage_return() {
        let lines = read_from(Cursor::new("1.2.3.4\r\n::1\r\n")).unwrap();
        assert_eq!(lines, vec!["1.2.3.4", "::1"]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(read_from(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn invalid_utf8_is_kept() {
        let lines = read_from(Cursor::new(b"1.2.3.4\n\xff\xfe\n".to_vec())).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "1.2.3.4");
    }

    #[test]
    fn read_lines_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "10.0.0.1").unwrap();
        writeln!(file, "1:2:3:4:5:6:7:8").unwrap();
        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["10.0.0.1", "1:2:3:4:5:6:7:8"]);
    }

    #[test]
    fn missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let err = read_lines(&path).unwrap_err();
        assert!(matches!(err, InputError::Open { .. }));
        assert!(err.to_string().contains("absent.txt"));
    }
}
