//! The comparison pipeline: manifest diff, then entry-by-entry content diff.
//!
//! # Examples
//!
//! ```no_run
//! use apkdiff_core::CompareConfig;
//! use apkdiff_core::Verdict;
//! use apkdiff_core::compare_apks;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let verdict = compare_apks("reference.apk", "rebuilt.apk", &CompareConfig::compat())?;
//! match verdict {
//!     Verdict::Match { .. } => println!("APKs match!"),
//!     other => println!("APKs differ: {other:?}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod content;
pub mod manifest;
pub mod stream;

pub use content::compare_entries;
pub use manifest::ManifestDiff;
pub use manifest::diff_manifests;
pub use stream::streams_equal;

use std::path::Path;

use crate::ApkArchive;
use crate::CompareConfig;
use crate::Result;

/// Terminal outcome of one comparison run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every compared entry was byte-identical.
    Match {
        /// Number of entry pairs whose bytes were actually compared.
        entries_compared: usize,
    },
    /// The archives hold different entry-name sets.
    ManifestMismatch(ManifestDiff),
    /// Entry counts differ despite matching name sets (duplicate names).
    LengthMismatch {
        /// Entry count of the source archive.
        source_entries: usize,
        /// Entry count of the destination archive.
        destination_entries: usize,
    },
    /// A pair of corresponding entries holds different bytes.
    ContentMismatch {
        /// Entry name on the source side.
        source_entry: String,
        /// Entry name on the destination side.
        destination_entry: String,
    },
}

impl Verdict {
    /// Returns `true` for [`Verdict::Match`].
    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }
}

/// Compares two APK files end to end.
///
/// Opens both archives, checks that their entry-name sets agree, then
/// compares entry contents according to `config`. A manifest mismatch stops
/// the run before any content is read. Both archives are closed on every
/// exit path.
///
/// # Errors
///
/// Returns an error if either archive cannot be opened or read. Archives
/// that merely differ produce an `Ok` verdict, not an error.
pub fn compare_apks<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
    config: &CompareConfig,
) -> Result<Verdict> {
    let mut source = ApkArchive::open(source)?;
    let mut destination = ApkArchive::open(destination)?;

    let diff = diff_manifests(&source, &destination);
    if !diff.is_empty() {
        return Ok(Verdict::ManifestMismatch(diff));
    }

    compare_entries(&mut source, &mut destination, config)
}
