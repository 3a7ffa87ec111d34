//! # clawcheck CLI entry point
//!
//! Parses command-line arguments, sets up logging, and dispatches to the
//! subcommand handlers. With no subcommand the validate handler runs, so a
//! bare `clawcheck` checks the bundled config set.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use clawcheck_cli::strip::{run_strip, StripArgs};
use clawcheck_cli::validate::{run_validate, ValidateArgs};

/// Validate OpenClaw gateway configuration files.
///
/// Checks that every strictly parsed config defines the required key paths
/// and reports one VALID/INVALID line per file.
#[derive(Parser, Debug)]
#[command(name = "clawcheck", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Validate options given before any subcommand.
    #[command(flatten)]
    validate: ValidateArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate the bundled config set or a manifest (the default).
    Validate(ValidateArgs),

    /// Print a config file with its comments removed.
    Strip(StripArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Report lines own stdout; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "clawcheck starting");

    let work_dir = std::env::current_dir().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not read current directory; using .");
        PathBuf::from(".")
    });

    let result = match cli.command {
        Some(Commands::Validate(args)) => run_validate(&args.or(&cli.validate), &work_dir),
        Some(Commands::Strip(args)) => run_strip(&args, &work_dir),
        None => run_validate(&cli.validate, &work_dir),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
