//! Error types for wavelift-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the wavelift-io crate.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when a stored signal holds fewer bytes than requested.
    #[error(
        "stored signal {} too small: expected at least {expected} bytes, got {got}",
        path.display()
    )]
    StorageSizeMismatch {
        /// Path to the file that was inspected.
        path: PathBuf,
        /// Bytes required for the requested length.
        expected: u64,
        /// Actual file size in bytes.
        got: u64,
    },

    /// Returned when the requested length cannot be expressed in bytes.
    #[error(
        "requested length {length} of {} overflows the addressable byte count",
        path.display()
    )]
    LengthOverflow {
        /// Path that was about to be read.
        path: PathBuf,
        /// Requested sample count.
        length: usize,
    },

    /// Wraps any other filesystem failure.
    #[error("i/o error on {}: {reason}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },
}

impl IoError {
    /// Classifies a `std::io::Error` raised while touching `path`.
    pub(crate) fn from_std(path: &std::path::Path, e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => IoError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => IoError::Io {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        }
    }
}
