//! Compare command implementation

use crate::cli::Cli;
use crate::error::convert_diff_error;
use crate::output::OutputFormatter;
use anyhow::Result;
use apkdiff_core::compare_apks;

/// Runs the comparison and reports the verdict.
///
/// Returns `Ok(true)` when the APKs match and `Ok(false)` on any mismatch;
/// the caller maps this to the process exit code.
pub fn execute(cli: &Cli, formatter: &dyn OutputFormatter) -> Result<bool> {
    let config = cli.config();

    let verdict = compare_apks(&cli.source, &cli.destination, &config)
        .map_err(|e| convert_diff_error(e, &cli.source, &cli.destination))?;

    formatter.format_verdict(&cli.source, &cli.destination, &verdict)?;

    Ok(verdict.is_match())
}
