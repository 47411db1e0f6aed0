//! Entry-by-entry content comparison for archives with matching manifests.

use crate::ApkArchive;
use crate::CompareConfig;
use crate::CompareMode;
use crate::Result;
use crate::compare::Verdict;
use crate::compare::stream::streams_equal;

/// Compares corresponding entries of two archives byte-for-byte.
///
/// Callers are expected to have checked the manifests first; this function
/// only pairs entries and delegates to the byte comparator.
///
/// # Errors
///
/// Returns an error if an entry cannot be opened or read.
pub fn compare_entries(
    source: &mut ApkArchive,
    destination: &mut ApkArchive,
    config: &CompareConfig,
) -> Result<Verdict> {
    if source.len() != destination.len() {
        // Unreachable when the manifests matched and names are unique, but
        // duplicate entry names would otherwise slip through the set check.
        return Ok(Verdict::LengthMismatch {
            source_entries: source.len(),
            destination_entries: destination.len(),
        });
    }

    match config.mode {
        CompareMode::ByName => compare_by_name(source, destination, config),
        CompareMode::Positional => compare_positional(source, destination, config),
    }
}

/// Name-keyed comparison: every entry except the signature entry is checked.
fn compare_by_name(
    source: &mut ApkArchive,
    destination: &mut ApkArchive,
    config: &CompareConfig,
) -> Result<Verdict> {
    let entries = source.entries()?;
    let mut entries_compared = 0;

    for entry in &entries {
        if entry.name == config.signature_entry {
            continue;
        }

        let equal = streams_equal(
            source.entry_reader(entry.index)?,
            destination.entry_reader_by_name(&entry.name)?,
            config.length_check,
        )?;
        if !equal {
            return Ok(Verdict::ContentMismatch {
                source_entry: entry.name.clone(),
                destination_entry: entry.name.clone(),
            });
        }
        entries_compared += 1;
    }

    Ok(Verdict::Match { entries_compared })
}

/// Positional comparison reproducing the historical tool: entry *i* against
/// entry *i*, stopping the whole run at the signature entry.
fn compare_positional(
    source: &mut ApkArchive,
    destination: &mut ApkArchive,
    config: &CompareConfig,
) -> Result<Verdict> {
    let source_entries = source.entries()?;
    let destination_entries = destination.entries()?;
    let mut entries_compared = 0;

    for (source_entry, destination_entry) in source_entries.iter().zip(&destination_entries) {
        if source_entry.name == destination_entry.name
            && source_entry.name == config.signature_entry
        {
            // Signature reached: the rest of the listing is never examined.
            return Ok(Verdict::Match { entries_compared });
        }

        // Bytes are compared even when the names at this position differ;
        // a mismatch report names both sides.
        let equal = streams_equal(
            source.entry_reader(source_entry.index)?,
            destination.entry_reader(destination_entry.index)?,
            config.length_check,
        )?;
        if !equal {
            return Ok(Verdict::ContentMismatch {
                source_entry: source_entry.name.clone(),
                destination_entry: destination_entry.name.clone(),
            });
        }
        entries_compared += 1;
    }

    Ok(Verdict::Match { entries_compared })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::LengthCheck;
    use crate::SIGNATURE_ENTRY;
    use crate::test_support::write_apk;

    fn open(file: &tempfile::NamedTempFile) -> ApkArchive {
        ApkArchive::open(file.path()).unwrap()
    }

    #[test]
    fn test_identical_archives_match() {
        let a = write_apk(&[("AndroidManifest.xml", b"manifest"), ("classes.dex", b"dex")]);
        let b = write_apk(&[("AndroidManifest.xml", b"manifest"), ("classes.dex", b"dex")]);

        for config in [CompareConfig::default(), CompareConfig::compat()] {
            let verdict =
                compare_entries(&mut open(&a), &mut open(&b), &config).unwrap();
            assert_eq!(verdict, Verdict::Match { entries_compared: 2 });
        }
    }

    #[test]
    fn test_content_difference_detected() {
        let a = write_apk(&[("classes.dex", b"aaaa")]);
        let b = write_apk(&[("classes.dex", b"aaab")]);

        let verdict =
            compare_entries(&mut open(&a), &mut open(&b), &CompareConfig::default()).unwrap();
        assert_eq!(
            verdict,
            Verdict::ContentMismatch {
                source_entry: "classes.dex".to_string(),
                destination_entry: "classes.dex".to_string(),
            }
        );
    }

    #[test]
    fn test_length_mismatch_detected() {
        let a = write_apk(&[("a.txt", b"1"), ("b.txt", b"2")]);
        let b = write_apk(&[("a.txt", b"1")]);

        let verdict =
            compare_entries(&mut open(&a), &mut open(&b), &CompareConfig::default()).unwrap();
        assert_eq!(
            verdict,
            Verdict::LengthMismatch {
                source_entries: 2,
                destination_entries: 1,
            }
        );
    }

    #[test]
    fn test_positional_mode_flips_on_reorder() {
        // Same names and bytes, swapped listing order: positional pairing
        // compares x against y, name-keyed pairing still matches.
        let a = write_apk(&[("x.txt", b"xx"), ("y.txt", b"yy")]);
        let b = write_apk(&[("y.txt", b"yy"), ("x.txt", b"xx")]);

        let by_name =
            compare_entries(&mut open(&a), &mut open(&b), &CompareConfig::default()).unwrap();
        assert_eq!(by_name, Verdict::Match { entries_compared: 2 });

        let positional =
            compare_entries(&mut open(&a), &mut open(&b), &CompareConfig::compat()).unwrap();
        assert_eq!(
            positional,
            Verdict::ContentMismatch {
                source_entry: "x.txt".to_string(),
                destination_entry: "y.txt".to_string(),
            }
        );
    }

    #[test]
    fn test_positional_signature_short_circuits_rest() {
        // Differing signature content and a differing entry AFTER the
        // signature: the historical walk stops at the signature and reports
        // a full match.
        let a = write_apk(&[
            ("AndroidManifest.xml", b"manifest"),
            (SIGNATURE_ENTRY, b"\x09"),
            ("after.txt", b"one"),
        ]);
        let b = write_apk(&[
            ("AndroidManifest.xml", b"manifest"),
            (SIGNATURE_ENTRY, b"\x08"),
            ("after.txt", b"two"),
        ]);

        let verdict =
            compare_entries(&mut open(&a), &mut open(&b), &CompareConfig::compat()).unwrap();
        assert_eq!(verdict, Verdict::Match { entries_compared: 1 });
    }

    #[test]
    fn test_by_name_checks_entries_after_signature() {
        // Same archives as above: name-keyed mode skips only the signature
        // entry itself and catches the difference behind it.
        let a = write_apk(&[
            ("AndroidManifest.xml", b"manifest"),
            (SIGNATURE_ENTRY, b"\x09"),
            ("after.txt", b"one"),
        ]);
        let b = write_apk(&[
            ("AndroidManifest.xml", b"manifest"),
            (SIGNATURE_ENTRY, b"\x08"),
            ("after.txt", b"two"),
        ]);

        let verdict =
            compare_entries(&mut open(&a), &mut open(&b), &CompareConfig::default()).unwrap();
        assert_eq!(
            verdict,
            Verdict::ContentMismatch {
                source_entry: "after.txt".to_string(),
                destination_entry: "after.txt".to_string(),
            }
        );
    }

    #[test]
    fn test_by_name_signature_content_exempt() {
        let a = write_apk(&[("AndroidManifest.xml", b"m"), (SIGNATURE_ENTRY, b"\x09")]);
        let b = write_apk(&[("AndroidManifest.xml", b"m"), (SIGNATURE_ENTRY, b"\x08")]);

        let verdict =
            compare_entries(&mut open(&a), &mut open(&b), &CompareConfig::default()).unwrap();
        assert_eq!(verdict, Verdict::Match { entries_compared: 1 });
    }

    #[test]
    fn test_custom_signature_entry_name() {
        let a = write_apk(&[("META-INF/CERT.EC", b"\x09"), ("data.bin", b"d")]);
        let b = write_apk(&[("META-INF/CERT.EC", b"\x08"), ("data.bin", b"d")]);

        let config = CompareConfig {
            signature_entry: "META-INF/CERT.EC".to_string(),
            ..CompareConfig::default()
        };
        let verdict = compare_entries(&mut open(&a), &mut open(&b), &config).unwrap();
        assert_eq!(verdict, Verdict::Match { entries_compared: 1 });
    }

    #[test]
    fn test_prefix_entry_passes_legacy_fails_strict() {
        // One entry is a 1024-byte-aligned prefix of the other.
        let long = vec![0u8; 2048];
        let short = vec![0u8; 1024];
        let a = write_apk(&[("blob.bin", long.as_slice())]);
        let b = write_apk(&[("blob.bin", short.as_slice())]);

        let legacy =
            compare_entries(&mut open(&a), &mut open(&b), &CompareConfig::default()).unwrap();
        assert_eq!(legacy, Verdict::Match { entries_compared: 1 });

        let config = CompareConfig {
            length_check: LengthCheck::Strict,
            ..CompareConfig::default()
        };
        let strict = compare_entries(&mut open(&a), &mut open(&b), &config).unwrap();
        assert_eq!(
            strict,
            Verdict::ContentMismatch {
                source_entry: "blob.bin".to_string(),
                destination_entry: "blob.bin".to_string(),
            }
        );
    }
}
