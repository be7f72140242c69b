//! Command-line interface for fontswap.
//!
//! This module handles CLI argument parsing and the one-shot subcommands;
//! the default invocation runs the interactive stdio session.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fontswap - bulk font inventory and replacement for design documents
#[derive(Parser)]
#[command(name = "fontswap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Document file to operate on (overrides the configured default)
    #[arg(long, value_name = "PATH")]
    pub document: Option<PathBuf>,

    /// Write the document back to disk after each successful replace batch
    #[arg(long)]
    pub write: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<log::LevelFilter>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the fonts used in the document, grouped by family, as JSON
    Scan,
    /// Print every font available to the catalog, grouped by family, as JSON
    Fonts,
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    /// Document file to operate on
    pub document: Option<PathBuf>,
    /// Write the document back after successful batches
    pub write: bool,
    /// Log level override from the command line
    pub log_level: Option<log::LevelFilter>,
    /// Config file override
    pub config: Option<PathBuf>,
}

/// Result of CLI processing
pub enum CliResult {
    /// Run the interactive stdio session
    Session(RuntimeOptions),
    /// Print the document inventory and exit
    Scan(RuntimeOptions),
    /// Print the font catalog and exit
    Fonts(RuntimeOptions),
}

/// Process CLI arguments into a run mode plus runtime options.
pub fn process_cli() -> CliResult {
    let cli = Cli::parse();
    let options = RuntimeOptions {
        document: cli.document,
        write: cli.write,
        log_level: cli.log_level,
        config: cli.config,
    };
    match cli.command {
        Some(Commands::Scan) => CliResult::Scan(options),
        Some(Commands::Fonts) => CliResult::Fonts(options),
        None => CliResult::Session(options),
    }
}
