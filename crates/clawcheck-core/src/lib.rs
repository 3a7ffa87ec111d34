//! # clawcheck-core — Foundational Types
//!
//! The two pieces of clawcheck that carry real logic, plus the file type
//! they operate on:
//!
//! - [`jsonc`] — turns JSON-with-comments into strict JSON text without
//!   touching string contents.
//! - [`path`] — dotted required paths ([`RequiredPath`]) and the presence
//!   check ([`find_missing`]) over any [`KeyedDocument`].
//! - [`document`] — [`ConfigFile`], a config read once from disk and parsed
//!   into a `serde_json::Value`.
//!
//! ## Crate Policy
//!
//! - No I/O outside [`document`].
//! - Absence and `null` are different things: a path whose leaf is `null`
//!   is present.

pub mod document;
pub mod error;
pub mod jsonc;
pub mod path;

pub use document::ConfigFile;
pub use error::{DocumentError, PathError};
pub use jsonc::strip_comments;
pub use path::{
    default_required_paths, find_missing, resolve, resolve_segments, KeyedDocument, RequiredPath,
    DEFAULT_REQUIRED_PATHS,
};
