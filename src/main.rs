//! dsalgo - classic algorithms and data structures from the command line
//!
//! Builds weighted undirected graphs and runs minimum spanning tree and
//! shortest-path algorithms on them, plus a heap sort.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::Cli;
use dsalgo_core::error::DsaError;
use dsalgo_core::format::OutputFormat;
use dsalgo_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return argument_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e, cli.format == Some(OutputFormat::Json), cli.quiet),
    }
}

/// Help and version print as usual. Other argument errors keep clap's own
/// output unless `--format json` was requested, in which case they become a
/// `usage_error` envelope.
fn argument_failure(err: clap::Error) -> ExitCode {
    let informational = matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion);
    if informational || !argv_requests_json() {
        err.exit();
    }
    report(&DsaError::UsageError(err.to_string()), true, false)
}

fn report(error: &DsaError, json: bool, quiet: bool) -> ExitCode {
    if json {
        eprintln!("{}", error.to_json());
    } else if !quiet {
        eprintln!("error: {}", error);
    }
    ExitCode::from(error.exit_code() as u8)
}

/// `--format` has not been parsed when clap itself fails
fn argv_requests_json() -> bool {
    let args: Vec<String> = env::args().skip(1).collect();
    args.iter().any(|arg| arg == "--format=json")
        || args
            .windows(2)
            .any(|pair| pair[0] == "--format" && pair[1] == "json")
}
