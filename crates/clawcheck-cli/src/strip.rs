//! # Strip Subcommand
//!
//! Prints a config with its `//` and `/* */` comments removed, exactly as
//! the validator sees it before strict parsing.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use clawcheck_core::{strip_comments, ConfigFile};

/// Arguments for `clawcheck strip`.
#[derive(Args, Debug, Clone)]
pub struct StripArgs {
    /// File to strip.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Execute the strip subcommand against stdout.
pub fn run_strip(args: &StripArgs, work_dir: &Path) -> Result<u8> {
    let stdout = io::stdout();
    run_strip_to(args, work_dir, &mut stdout.lock())
}

/// Execute the strip subcommand, writing the stripped text to `out`.
pub fn run_strip_to(args: &StripArgs, work_dir: &Path, out: &mut impl Write) -> Result<u8> {
    let path = crate::resolve_path(&args.file, work_dir);
    let file = ConfigFile::read(&path).context("failed to read config")?;
    out.write_all(strip_comments(file.text()).as_bytes())?;
    out.flush()?;
    Ok(0)
}
