//! Entry-name set comparison.

use crate::ApkArchive;

/// Names present in one archive but not the other.
///
/// Both directions are reported together so a single failure names every
/// differing entry. Lists are sorted for deterministic output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ManifestDiff {
    /// Entries present in the source archive, missing from the destination.
    pub source_only: Vec<String>,
    /// Entries present in the destination archive, missing from the source.
    pub destination_only: Vec<String>,
}

impl ManifestDiff {
    /// Returns `true` if both archives contain exactly the same entry names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source_only.is_empty() && self.destination_only.is_empty()
    }
}

/// Computes both set differences over the archives' entry names.
///
/// Name comparison is exact and case-sensitive; entry order is irrelevant
/// here. A non-empty result is a precondition failure for content
/// comparison.
#[must_use]
pub fn diff_manifests(source: &ApkArchive, destination: &ApkArchive) -> ManifestDiff {
    let source_names = source.name_set();
    let destination_names = destination.name_set();

    let mut source_only: Vec<String> = source_names
        .difference(&destination_names)
        .cloned()
        .collect();
    let mut destination_only: Vec<String> = destination_names
        .difference(&source_names)
        .cloned()
        .collect();
    source_only.sort_unstable();
    destination_only.sort_unstable();

    ManifestDiff {
        source_only,
        destination_only,
    }
}
