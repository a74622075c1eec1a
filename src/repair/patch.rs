use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// An external-file correction could not be applied. The driver treats this
/// as a skipped attempt, never as a session failure.
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("line {line} is out of range for {}", .path.display())]
    OutOfRange { path: PathBuf, line: usize },
}

/// Replace exactly the 1-indexed `line` of `path` with an empty line and
/// persist the file in place. Non-UTF-8 content is read lossily.
pub fn blank_file_line(path: &Path, line: usize) -> Result<(), PatchError> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    let mut lines: Vec<&str> = text.split('\n').collect();

    if line == 0 || line > lines.len() {
        return Err(PatchError::OutOfRange {
            path: path.to_path_buf(),
            line,
        });
    }
    lines[line - 1] = "";

    fs::write(path, lines.join("\n"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn blanks_only_the_target_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "one\ntwo\nthree\n").unwrap();

        blank_file_line(file.path(), 2).unwrap();

        let patched = fs::read_to_string(file.path()).unwrap();
        assert_eq!(patched, "one\n\nthree\n");
    }

    #[test]
    fn out_of_range_line_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "only\n").unwrap();

        assert!(matches!(
            blank_file_line(file.path(), 40),
            Err(PatchError::OutOfRange { line: 40, .. })
        ));
        assert!(matches!(
            blank_file_line(file.path(), 0),
            Err(PatchError::OutOfRange { line: 0, .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = Path::new("/nonexistent/really/not/here.py");
        assert!(matches!(blank_file_line(path, 1), Err(PatchError::Io(_))));
    }
}
