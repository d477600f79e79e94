//! Failure kinds surfaced to the command line

use std::path::PathBuf;
use thiserror::Error;

/// Exit status for a parameter line with the wrong number of fields.
pub const EXIT_MALFORMED: u8 = 1;
/// Exit status for missing inputs, bad options, and every other fatal error.
pub const EXIT_USAGE: u8 = 2;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("file {} does not exist", path.display())]
    MissingFile { path: PathBuf },

    #[error(
        "missing one or more fields in parameter definition ({}:{line_no}: expected 3 fields, found {found})",
        path.display()
    )]
    MalformedLine { path: PathBuf, line_no: usize, line: String, found: usize },

    #[error("failed reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MalformedLine { .. } => EXIT_MALFORMED,
            Self::MissingFile { .. } | Self::Io { .. } => EXIT_USAGE,
        }
    }

    /// Read a whole input file, mapping a missing path to [`GenError::MissingFile`].
    pub fn read_input(path: &std::path::Path) -> Result<String, GenError> {
        std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                GenError::MissingFile { path: path.to_path_buf() }
            } else {
                GenError::Io { path: path.to_path_buf(), source }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exit_codes() {
        let malformed = GenError::MalformedLine {
            path: PathBuf::from("p"),
            line_no: 3,
            line: "a b".to_string(),
            found: 2,
        };
        assert_eq!(malformed.exit_code(), 1);

        let missing = GenError::MissingFile { path: PathBuf::from("nope") };
        assert_eq!(missing.exit_code(), 2);
        assert_eq!(missing.to_string(), "file nope does not exist");
    }

    #[test]
    fn test_read_input_missing_file() {
        let tmp = TempDir::new().expect("tmp");
        let err = GenError::read_input(&tmp.path().join("absent")).expect_err("missing");
        assert!(matches!(err, GenError::MissingFile { .. }));
    }

    #[test]
    fn test_read_input_directory_is_io_error() {
        let tmp = TempDir::new().expect("tmp");
        let err = GenError::read_input(tmp.path()).expect_err("directory");
        assert_eq!(err.exit_code(), 2);
    }
}
