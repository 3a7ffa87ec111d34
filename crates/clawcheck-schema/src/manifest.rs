//! # Validation Manifest
//!
//! The [`Manifest`] says which files to check, how to parse each one, and
//! which paths every strictly parsed file must define. It is either the
//! bundled OpenClaw layout ([`Manifest::bundled`]) or loaded from a YAML (or
//! JSON) file:
//!
//! ```yaml
//! config_dir: configs
//! scan_credentials: false
//! required_paths: [gateway.port, models.providers]
//! files:
//!   - path: openclaw.a.json
//!     mode: native-jsonc
//!   - path: openclaw.g.json
//! ```
//!
//! `config_dir` is relative to the manifest's directory; file paths are
//! relative to `config_dir`. Absolute paths are used as-is.

use std::path::{Path, PathBuf};

use clawcheck_core::{default_required_paths, RequiredPath};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a configuration file is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParseMode {
    /// Strip comments, parse as JSON, check required paths.
    #[default]
    Strict,
    /// JS object syntax consumed natively by OpenClaw; acknowledged without parsing.
    NativeJsonc,
}

/// One file to validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigEntry {
    /// Location of the file.
    pub path: PathBuf,
    /// Parsing mode, `strict` unless stated.
    #[serde(default)]
    pub mode: ParseMode,
}

impl ConfigEntry {
    /// A strictly parsed entry.
    pub fn strict(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mode: ParseMode::Strict,
        }
    }

    /// An entry acknowledged as native JSONC.
    pub fn native_jsonc(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mode: ParseMode::NativeJsonc,
        }
    }
}

/// The OpenClaw configuration set shipped in `configs/`.
pub const BUNDLED_CONFIGS: [(&str, ParseMode); 5] = [
    ("openclaw.a.json", ParseMode::NativeJsonc),
    ("openclaw.o.json", ParseMode::NativeJsonc),
    ("openclaw.g.json", ParseMode::Strict),
    ("openclaw.z.json", ParseMode::Strict),
    ("openclaw.all.json", ParseMode::Strict),
];

/// Errors loading a manifest file.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("failed to read manifest {path}: {source}")]
    Read {
        /// Manifest path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid YAML, has unknown fields, or holds a bad
    /// required path.
    #[error("failed to parse manifest {path}: {reason}")]
    Parse {
        /// Manifest path.
        path: String,
        /// Parser message.
        reason: String,
    },

    /// The manifest lists no files.
    #[error("manifest {path} lists no files")]
    NoFiles {
        /// Manifest path.
        path: String,
    },
}

/// On-disk manifest shape.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    #[serde(default)]
    config_dir: Option<PathBuf>,
    #[serde(default)]
    scan_credentials: bool,
    #[serde(default)]
    required_paths: Option<Vec<RequiredPath>>,
    files: Vec<ConfigEntry>,
}

/// Files to check, their modes, and the required-path schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ConfigEntry>,
    required_paths: Vec<RequiredPath>,
    scan_credentials: bool,
}

impl Manifest {
    /// A manifest over explicit entries and paths, credential scan off.
    pub fn new(entries: Vec<ConfigEntry>, required_paths: Vec<RequiredPath>) -> Self {
        Self {
            entries,
            required_paths,
            scan_credentials: false,
        }
    }

    /// The bundled five-file set under `config_dir` with the default paths.
    pub fn bundled(config_dir: &Path) -> Self {
        let entries = BUNDLED_CONFIGS
            .iter()
            .map(|(name, mode)| ConfigEntry {
                path: config_dir.join(name),
                mode: *mode,
            })
            .collect();
        Self::new(entries, default_required_paths())
    }

    /// Load a manifest file.
    ///
    /// # Errors
    ///
    /// See [`ManifestError`].
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_yaml_str(&text, base_dir, &path.display().to_string())
    }

    /// Parse manifest text, resolving relative paths against `base_dir`.
    ///
    /// `origin` names the manifest in error messages.
    pub fn from_yaml_str(text: &str, base_dir: &Path, origin: &str) -> Result<Self, ManifestError> {
        let file: ManifestFile =
            serde_yaml::from_str(text).map_err(|e| ManifestError::Parse {
                path: origin.to_string(),
                reason: e.to_string(),
            })?;

        if file.files.is_empty() {
            return Err(ManifestError::NoFiles {
                path: origin.to_string(),
            });
        }

        let config_dir = match file.config_dir {
            Some(dir) => base_dir.join(dir),
            None => base_dir.to_path_buf(),
        };

        let entries = file
            .files
            .into_iter()
            .map(|entry| ConfigEntry {
                path: config_dir.join(entry.path),
                mode: entry.mode,
            })
            .collect();

        Ok(Self {
            entries,
            required_paths: file.required_paths.unwrap_or_else(default_required_paths),
            scan_credentials: file.scan_credentials,
        })
    }

    /// Turn the credential scan on or off.
    pub fn with_credential_scan(mut self, enabled: bool) -> Self {
        self.scan_credentials = enabled;
        self
    }

    /// Entries in validation order.
    pub fn entries(&self) -> &[ConfigEntry] {
        &self.entries
    }

    /// Paths every strict file must define.
    pub fn required_paths(&self) -> &[RequiredPath] {
        &self.required_paths
    }

    /// Whether raw text is scanned for committed API keys.
    pub fn scan_credentials(&self) -> bool {
        self.scan_credentials
    }
}
