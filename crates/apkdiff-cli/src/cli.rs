//! CLI argument parsing using clap.

use apkdiff_core::CompareConfig;
use apkdiff_core::CompareMode;
use apkdiff_core::LengthCheck;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "apkdiff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the reference APK
    #[arg(value_name = "SOURCE_APK")]
    pub source: PathBuf,

    /// Path to the rebuilt APK to verify against the reference
    #[arg(value_name = "DESTINATION_APK")]
    pub destination: PathBuf,

    /// Compare entries by list position and stop at the signature entry,
    /// reproducing the historical comparison exactly
    #[arg(long)]
    pub positional: bool,

    /// Report a mismatch when one entry is a byte-prefix of the other
    /// instead of tolerating it
    #[arg(long)]
    pub strict_length: bool,

    /// Name of the signature entry exempt from content comparison
    #[arg(long, value_name = "ENTRY", default_value = apkdiff_core::SIGNATURE_ENTRY)]
    pub signature: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,
}

impl Cli {
    /// Builds the comparison configuration selected by the flags.
    pub fn config(&self) -> CompareConfig {
        CompareConfig {
            mode: if self.positional {
                CompareMode::Positional
            } else {
                CompareMode::ByName
            },
            length_check: if self.strict_length {
                LengthCheck::Strict
            } else {
                LengthCheck::Legacy
            },
            signature_entry: self.signature.clone(),
        }
    }
}
