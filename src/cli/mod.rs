//! CLI argument parsing for stubgate.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Stubgate: pre-acceptance validation of service-virtualization stubs.
///
/// Each stub in a batch is checked for structure, for use of `inject`,
/// and by a dry run against a synthetic `GET /` request.
#[derive(Parser, Debug)]
#[command(name = "stubgate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for stubgate.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a batch of stubs.
    ///
    /// Reads a JSON document of the form `{"stubs": [...]}` and prints a
    /// report. Exits with 2 when any stub is rejected.
    Validate(ValidateArgs),

    /// Print the effective configuration as YAML.
    Config(ConfigArgs),
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Request file to validate. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Path to a stubgate.yaml config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Allow stubs to declare `inject` (overrides config).
    #[arg(long)]
    pub allow_injection: bool,

    /// Report format: json or text (overrides config).
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for the `config` command.
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Path to a stubgate.yaml config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
