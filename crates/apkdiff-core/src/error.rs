//! Error types for APK comparison operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `DiffError`.
pub type Result<T> = std::result::Result<T, DiffError>;

/// Errors that can occur while comparing two APKs.
///
/// A comparison that completes with differing archives is not an error;
/// differences are reported through [`crate::Verdict`]. These variants cover
/// the cases where the comparison itself cannot run to completion.
#[derive(Error, Debug)]
pub enum DiffError {
    /// Archive file could not be opened.
    #[error("cannot open {path}: {source}")]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// File is not a readable zip container.
    #[error("invalid archive {path}: {reason}")]
    InvalidArchive {
        /// Path to the unreadable archive.
        path: PathBuf,
        /// Description of the parse failure.
        reason: String,
    },

    /// A listed entry could not be opened for reading.
    #[error("cannot read entry {name} from {path}: {reason}")]
    EntryRead {
        /// Path to the archive holding the entry.
        path: PathBuf,
        /// Name of the entry that failed.
        name: String,
        /// Description of the read failure.
        reason: String,
    },

    /// I/O operation failed mid-comparison.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
