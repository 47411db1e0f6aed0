//! Error conversion utilities for CLI.
//!
//! Converts apkdiff-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use apkdiff_core::DiffError;
use std::path::Path;

/// Converts `DiffError` to user-friendly anyhow error with context
pub fn convert_diff_error(err: DiffError, source: &Path, destination: &Path) -> anyhow::Error {
    match err {
        DiffError::Open { .. } => {
            anyhow!(
                "{err}\n\
                 HINT: Check that both APK paths exist and are readable."
            )
        }
        DiffError::InvalidArchive { .. } => {
            anyhow!(
                "{err}\n\
                 HINT: The file may be corrupted or not a ZIP-based package."
            )
        }
        DiffError::EntryRead { .. } => {
            anyhow!(
                "{err}\n\
                 HINT: The archive's central directory and entry data disagree; \
                 the file may be truncated."
            )
        }
        DiffError::Io(_) => anyhow::Error::from(err).context(format!(
            "I/O error while comparing '{}' and '{}'",
            source.display(),
            destination.display()
        )),
    }
}
