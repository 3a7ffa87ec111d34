//! # clawcheck-cli — OpenClaw Config Validator
//!
//! Provides the `clawcheck` command-line interface.
//!
//! ## Subcommands
//!
//! - `clawcheck validate` — validate the bundled config set or a manifest.
//!   This is also what a bare `clawcheck` does.
//! - `clawcheck strip <FILE>` — print a file with its comments removed.
//!
//! ```bash
//! clawcheck
//! clawcheck --config-dir /opt/nasopenclaw/configs
//! clawcheck validate --manifest clawcheck.yaml --scan-credentials --format json
//! clawcheck strip configs/openclaw.g.json | jq .gateway
//! ```
//!
//! Valid lines go to stdout, invalid lines to stderr. The exit code is 0
//! only when every file passed.

pub mod strip;
pub mod validate;

use std::path::{Path, PathBuf};

/// Directory name searched for when no `--config-dir` is given.
pub const CONFIG_DIR_NAME: &str = "configs";

/// Resolve a user-supplied path against the working directory.
pub fn resolve_path(path: &Path, work_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        work_dir.join(path)
    }
}

/// Walk up from `start` to the first directory containing `configs/`.
pub fn find_config_dir(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .find(|candidate| candidate.is_dir())
}
