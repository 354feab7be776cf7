//! Stubgate: pre-acceptance validation of service-virtualization stubs.
//!
//! This is the main entry point for the `stubgate` CLI. It parses arguments,
//! installs the log subscriber, dispatches to the appropriate command handler,
//! and handles errors with proper exit codes.

use std::process::ExitCode;
use stubgate::cli::Cli;
use stubgate::{commands, exit_codes};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `stubgate=debug`).
const LOG_ENV: &str = "STUBGATE_LOG";

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
