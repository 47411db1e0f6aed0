//! Read-only access to an APK as a zip container.

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use std::path::PathBuf;

use zip::ZipArchive;

use crate::DiffError;
use crate::Result;

/// An APK opened for random-access reading.
///
/// Wraps [`zip::ZipArchive`] together with the originating path so that
/// errors can name the file they came from. The archive is closed when the
/// value is dropped.
pub struct ApkArchive {
    path: PathBuf,
    inner: ZipArchive<File>,
}

/// Metadata for one stored entry, in central-directory order.
///
/// The index is significant: positional comparison pairs entry *i* of one
/// archive with entry *i* of the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// Entry name as stored in the archive.
    pub name: String,
    /// Position in the central directory.
    pub index: usize,
    /// Uncompressed size in bytes.
    pub size: u64,
}

impl ApkArchive {
    /// Opens an APK file for reading.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::Open`] if the file cannot be opened and
    /// [`DiffError::InvalidArchive`] if it is not a readable zip container.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| DiffError::Open {
            path: path.clone(),
            source,
        })?;
        let inner = ZipArchive::new(file).map_err(|e| DiffError::InvalidArchive {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { path, inner })
    }

    /// Returns the path the archive was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of entries in the archive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the archive holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the set of entry names.
    ///
    /// Entry names are compared exactly; no case folding or path-separator
    /// normalization is applied.
    #[must_use]
    pub fn name_set(&self) -> HashSet<String> {
        self.inner.file_names().map(str::to_string).collect()
    }

    /// Returns entry metadata in central-directory order.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::InvalidArchive`] if an entry record cannot be
    /// decoded.
    pub fn entries(&mut self) -> Result<Vec<EntryInfo>> {
        let mut entries = Vec::with_capacity(self.inner.len());
        for index in 0..self.inner.len() {
            let entry = self
                .inner
                .by_index(index)
                .map_err(|e| DiffError::InvalidArchive {
                    path: self.path.clone(),
                    reason: format!("failed to read entry {index}: {e}"),
                })?;
            entries.push(EntryInfo {
                name: entry.name().to_string(),
                index,
                size: entry.size(),
            });
        }
        Ok(entries)
    }

    /// Opens the entry at `index` as a sequential byte stream.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::EntryRead`] if the entry cannot be opened.
    pub fn entry_reader(&mut self, index: usize) -> Result<zip::read::ZipFile<'_, File>> {
        let path = self.path.clone();
        self.inner
            .by_index(index)
            .map_err(|e| DiffError::EntryRead {
                path,
                name: format!("#{index}"),
                reason: e.to_string(),
            })
    }

    /// Opens the named entry as a sequential byte stream.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::EntryRead`] if no such entry exists or it cannot
    /// be opened.
    pub fn entry_reader_by_name(&mut self, name: &str) -> Result<zip::read::ZipFile<'_, File>> {
        let path = self.path.clone();
        self.inner.by_name(name).map_err(|e| DiffError::EntryRead {
            path,
            name: name.to_string(),
            reason: e.to_string(),
        })
    }
}

impl std::fmt::Debug for ApkArchive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApkArchive")
            .field("path", &self.path)
            .field("entries", &self.inner.len())
            .finish()
    }
}
