//! # clawcheck-schema — Required-Path Validation of OpenClaw Configs
//!
//! Applies the required-path schema to a set of configuration files and
//! produces a structured report.
//!
//! ## Modules
//!
//! - [`manifest`] — which files to check and how ([`Manifest`],
//!   [`ConfigEntry`], [`ParseMode`]). The bundled OpenClaw set is
//!   [`Manifest::bundled`]; any other set can be loaded from YAML.
//! - [`validate`] — the per-file pipeline ([`ConfigValidator`]) and the
//!   results ([`FileReport`], [`ValidationReport`]).
//! - [`secrets`] — opt-in scan for API keys committed in place of `${VAR}`
//!   references.
//!
//! ## Failure Policy
//!
//! Per-file failures (unreadable file, malformed JSON, missing paths,
//! credentials) are data in the report, never `Err`. Only setting up the run
//! (manifest loading, pattern compilation) returns errors.

pub mod manifest;
pub mod secrets;
pub mod validate;

pub use manifest::{ConfigEntry, Manifest, ManifestError, ParseMode, BUNDLED_CONFIGS};
pub use secrets::{CredentialFinding, CredentialScanner, ScannerError};
pub use validate::{ConfigValidator, FileOutcome, FileReport, ValidationFailure, ValidationReport};
