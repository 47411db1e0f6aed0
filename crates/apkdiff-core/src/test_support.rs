//! Shared fixture helpers for unit tests.

#![allow(clippy::unwrap_used)]

use std::io::Write;

use tempfile::NamedTempFile;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Writes a zip file holding `entries` in the given order and returns the
/// backing temp file. Entries are stored uncompressed so tests control the
/// exact stream lengths the comparator sees.
pub(crate) fn write_apk(entries: &[(&str, &[u8])]) -> NamedTempFile {
    let file = NamedTempFile::with_suffix(".apk").unwrap();
    let mut zip = ZipWriter::new(file.reopen().unwrap());

    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (name, data) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(data).unwrap();
    }
    zip.finish().unwrap();

    file
}
