//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use apkdiff_core::Verdict;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_verdict(&self, source: &Path, destination: &Path, verdict: &Verdict) -> Result<()> {
        #[derive(Serialize)]
        struct CompareOutput {
            source: String,
            destination: String,
            verdict: &'static str,
            #[serde(skip_serializing_if = "Option::is_none")]
            entries_compared: Option<usize>,
            #[serde(skip_serializing_if = "Vec::is_empty")]
            missing_from_destination: Vec<String>,
            #[serde(skip_serializing_if = "Vec::is_empty")]
            missing_from_source: Vec<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            source_entry: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            destination_entry: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            source_entries: Option<usize>,
            #[serde(skip_serializing_if = "Option::is_none")]
            destination_entries: Option<usize>,
        }

        let mut data = CompareOutput {
            source: source.display().to_string(),
            destination: destination.display().to_string(),
            verdict: "match",
            entries_compared: None,
            missing_from_destination: Vec::new(),
            missing_from_source: Vec::new(),
            source_entry: None,
            destination_entry: None,
            source_entries: None,
            destination_entries: None,
        };

        match verdict {
            Verdict::Match { entries_compared } => {
                data.entries_compared = Some(*entries_compared);
            }
            Verdict::ManifestMismatch(diff) => {
                data.verdict = "manifest_mismatch";
                data.missing_from_destination = diff.source_only.clone();
                data.missing_from_source = diff.destination_only.clone();
            }
            Verdict::LengthMismatch {
                source_entries,
                destination_entries,
            } => {
                data.verdict = "length_mismatch";
                data.source_entries = Some(*source_entries);
                data.destination_entries = Some(*destination_entries);
            }
            Verdict::ContentMismatch {
                source_entry,
                destination_entry,
            } => {
                data.verdict = "content_mismatch";
                data.source_entry = Some(source_entry.clone());
                data.destination_entry = Some(destination_entry.clone());
            }
        }

        let output = JsonOutput::success("compare", data);
        Self::output(&output)
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("compare", format!("{error:#}"));
        let _ = Self::output(&output);
    }
}
