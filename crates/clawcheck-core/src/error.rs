//! # Error Types
//!
//! Structured errors for the core crate, built with `thiserror`. Each variant
//! carries enough context (the offending path or file) to be printed to an
//! operator as-is.

use thiserror::Error;

/// A dotted required path that cannot be turned into key segments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path string was empty or only whitespace.
    #[error("required path is empty")]
    Empty,

    /// The path contains an empty segment, e.g. `gateway..port` or `.port`.
    #[error("required path \"{path}\" has an empty segment at position {position}")]
    EmptySegment {
        /// The full dotted path as given.
        path: String,
        /// Zero-based index of the empty segment.
        position: usize,
    },
}

/// Errors while loading or parsing a single configuration file.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file could not be read (missing, permissions, invalid UTF-8).
    #[error("{path}: {source}")]
    Read {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The comment-stripped text is not valid JSON.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}
