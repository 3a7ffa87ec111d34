//! # Config Validation
//!
//! Runs every [`ConfigEntry`] of a [`Manifest`] through the same pipeline:
//! read, optional credential scan, native-JSONC short-circuit, comment
//! stripping and strict parsing, then the required-path check.
//!
//! Failures never abort the run. Each file gets a [`FileReport`]; the
//! [`ValidationReport`] aggregates them and decides overall success.
//!
//! A valid strict file also carries two cosmetic fields for the success
//! line: the primary model (`agents.defaults.model.primary`) and the
//! provider names under `models.providers`. They are echoed, not checked.

use std::fmt;
use std::path::PathBuf;

use clawcheck_core::{find_missing, resolve_segments, ConfigFile, DocumentError};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::manifest::{ConfigEntry, Manifest, ParseMode};
use crate::secrets::{CredentialFinding, CredentialScanner, ScannerError};

/// Why a file failed validation. The message is the text after `INVALID: <name> — `.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationFailure {
    /// The file could not be read.
    #[error("{message}")]
    Read {
        /// I/O error message.
        message: String,
    },

    /// The comment-stripped text is not JSON.
    #[error("{message}")]
    Parse {
        /// Parser error message.
        message: String,
    },

    /// Required paths that did not resolve, in declaration order.
    #[error("missing: {}", .missing.join(", "))]
    MissingPaths {
        /// Dotted paths.
        missing: Vec<String>,
    },

    /// The raw text contains something shaped like a real API key.
    #[error("embedded credential: {}", join_display(.findings))]
    Credentials {
        /// Redacted matches.
        findings: Vec<CredentialFinding>,
    },
}

impl From<DocumentError> for ValidationFailure {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::Read { .. } => Self::Read {
                message: err.to_string(),
            },
            DocumentError::Parse(_) => Self::Parse {
                message: err.to_string(),
            },
        }
    }
}

fn join_display<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result of validating one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Parsed and every required path is present.
    Valid {
        /// Primary model identifier, or `(unset)`.
        primary: String,
        /// Provider names in document order.
        providers: Vec<String>,
    },
    /// Declared native JSONC; not strictly parsed.
    Skipped,
    /// Failed for the given reason.
    Invalid {
        /// What went wrong.
        failure: ValidationFailure,
    },
}

impl FileOutcome {
    /// Valid and skipped files both count as passing.
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid { .. })
    }
}

impl From<ValidationFailure> for FileOutcome {
    fn from(failure: ValidationFailure) -> Self {
        Self::Invalid { failure }
    }
}

/// A file's identity and outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Path that was checked.
    pub path: PathBuf,
    /// Base name shown in output.
    pub name: String,
    /// What happened.
    pub outcome: FileOutcome,
}

impl FileReport {
    /// See [`FileOutcome::is_valid`].
    pub fn is_valid(&self) -> bool {
        self.outcome.is_valid()
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            FileOutcome::Valid { primary, providers } => write!(
                f,
                "VALID: {} | primary={} | providers={}",
                self.name,
                primary,
                providers.join(", ")
            ),
            FileOutcome::Skipped => write!(
                f,
                "VALID: {} | JS object syntax (JSONC) — OpenClaw native, skipping strict parse",
                self.name
            ),
            FileOutcome::Invalid { failure } => write!(f, "INVALID: {} — {}", self.name, failure),
        }
    }
}

/// All file reports from one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Files attempted.
    pub total: usize,
    /// Valid or skipped.
    pub passed: usize,
    /// Invalid.
    pub failed: usize,
    /// Per-file reports in manifest order.
    pub files: Vec<FileReport>,
}

impl ValidationReport {
    /// Tally `files`.
    pub fn from_files(files: Vec<FileReport>) -> Self {
        let passed = files.iter().filter(|f| f.is_valid()).count();
        Self {
            total: files.len(),
            passed,
            failed: files.len() - passed,
            files,
        }
    }

    /// True when no file failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Validates the files of a [`Manifest`].
#[derive(Debug)]
pub struct ConfigValidator {
    manifest: Manifest,
    scanner: Option<CredentialScanner>,
}

impl ConfigValidator {
    /// Build a validator; compiles credential patterns when the manifest asks
    /// for scanning.
    ///
    /// # Errors
    ///
    /// Returns [`ScannerError`] if a credential pattern fails to compile.
    pub fn new(manifest: Manifest) -> Result<Self, ScannerError> {
        let scanner = if manifest.scan_credentials() {
            Some(CredentialScanner::new()?)
        } else {
            None
        };
        Ok(Self { manifest, scanner })
    }

    /// Validate every entry in order.
    pub fn validate_all(&self) -> ValidationReport {
        let files: Vec<FileReport> = self
            .manifest
            .entries()
            .iter()
            .map(|entry| self.validate_entry(entry))
            .collect();

        let report = ValidationReport::from_files(files);
        tracing::info!(
            total = report.total,
            passed = report.passed,
            failed = report.failed,
            "config validation finished"
        );
        report
    }

    /// Read and validate one entry.
    pub fn validate_entry(&self, entry: &ConfigEntry) -> FileReport {
        let name = clawcheck_core::document::display_name(&entry.path);
        let outcome = match ConfigFile::read(&entry.path) {
            Ok(file) => self.validate_file(&file, entry.mode),
            Err(err) => {
                tracing::debug!(path = %entry.path.display(), error = %err, "config read failed");
                ValidationFailure::from(err).into()
            }
        };

        tracing::debug!(
            name = %name,
            mode = ?entry.mode,
            valid = outcome.is_valid(),
            "validated config"
        );

        FileReport {
            path: entry.path.clone(),
            name,
            outcome,
        }
    }

    /// Validate text already read.
    pub fn validate_file(&self, file: &ConfigFile, mode: ParseMode) -> FileOutcome {
        if let Some(scanner) = &self.scanner {
            let findings = scanner.scan(file.text());
            if !findings.is_empty() {
                tracing::warn!(
                    name = file.name(),
                    count = findings.len(),
                    "credential-shaped strings in config"
                );
                return ValidationFailure::Credentials { findings }.into();
            }
        }

        if mode == ParseMode::NativeJsonc {
            return FileOutcome::Skipped;
        }

        let doc = match file.parse() {
            Ok(doc) => doc,
            Err(err) => return ValidationFailure::from(err).into(),
        };

        let missing = find_missing(&doc, self.manifest.required_paths());
        if !missing.is_empty() {
            return ValidationFailure::MissingPaths {
                missing: missing.iter().map(|p| p.to_string()).collect(),
            }
            .into();
        }

        let (primary, providers) = summarize(&doc);
        FileOutcome::Valid { primary, providers }
    }
}

const PRIMARY_MODEL: [&str; 4] = ["agents", "defaults", "model", "primary"];
const PROVIDERS: [&str; 2] = ["models", "providers"];

/// Primary model and provider names for the success line.
fn summarize(doc: &Value) -> (String, Vec<String>) {
    let primary = match resolve_segments(doc, &PRIMARY_MODEL) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "(unset)".to_string(),
    };

    let providers = resolve_segments(doc, &PROVIDERS)
        .and_then(Value::as_object)
        .map(|providers| providers.keys().cloned().collect())
        .unwrap_or_default();

    (primary, providers)
}
