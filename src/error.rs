//! Per-item failure reasons.
//!
//! Run-level (infrastructure) errors use `anyhow`; a single file's failure is a
//! [`ConvertError`] carried inside [`ConversionResult::Failure`](crate::ConversionResult).

use std::path::PathBuf;

/// Why one source file could not be converted.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// I/O or UTF-8 decoding error while reading the given (1-based) line.
    #[error("failed to read line {line}: {source}")]
    Read { line: usize, source: std::io::Error },

    /// The line holds a character that cannot appear in a document (XML 1.0).
    #[error("line {line} contains character {ch:?} that is not allowed in a document")]
    InvalidText { line: usize, ch: char },

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to build document container: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// The finished temp file could not be moved onto the destination.
    #[error("failed to move document into place at {path:?}: {source}")]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ConvertError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
