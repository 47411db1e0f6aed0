//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use apkdiff_core::ManifestDiff;
use apkdiff_core::Verdict;
use console::Term;
use console::style;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn write_manifest_diff(&self, source: &Path, destination: &Path, diff: &ManifestDiff) {
        for name in &diff.source_only {
            let _ = self.term.write_line(&format!(
                "{} contains {}, which is missing from {}",
                source.display(),
                name,
                destination.display()
            ));
        }
        for name in &diff.destination_only {
            let _ = self.term.write_line(&format!(
                "{} contains {}, which is missing from {}",
                destination.display(),
                name,
                source.display()
            ));
        }
    }

    fn write_no_match(&self) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} APKs don't match!", style("✗").red().bold()));
        } else {
            let _ = self.term.write_line("APKs don't match!");
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_verdict(&self, source: &Path, destination: &Path, verdict: &Verdict) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        match verdict {
            Verdict::Match { entries_compared } => {
                if self.use_colors {
                    let _ = self
                        .term
                        .write_line(&format!("{} APKs match!", style("✓").green().bold()));
                } else {
                    let _ = self.term.write_line("APKs match!");
                }
                if self.verbose {
                    let _ = self
                        .term
                        .write_line(&format!("  Entries compared: {entries_compared}"));
                }
            }
            Verdict::ManifestMismatch(diff) => {
                self.write_manifest_diff(source, destination, diff);
            }
            Verdict::LengthMismatch { .. } => {
                let _ = self.term.write_line("APK info lists of different length!");
                self.write_no_match();
            }
            Verdict::ContentMismatch {
                source_entry,
                destination_entry,
            } => {
                let _ = self.term.write_line(&format!(
                    "APK entry {source_entry} does not match {destination_entry}!"
                ));
                self.write_no_match();
            }
        }

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        let term = Term::stderr();
        if self.use_colors {
            let _ = term.write_line(&format!("{} {error:#}", style("Error:").red().bold()));
        } else {
            let _ = term.write_line(&format!("Error: {error:#}"));
        }
    }
}
