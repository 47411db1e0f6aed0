//! Apkdiff CLI - verifies that two APKs match apart from their signature.

mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use clap::error::ErrorKind;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            // Usage errors go to stdout and exit 1, matching the tool's
            // documented CLI contract.
            println!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match commands::compare::execute(&cli, &*formatter) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            formatter.format_error(&err);
            ExitCode::FAILURE
        }
    }
}
