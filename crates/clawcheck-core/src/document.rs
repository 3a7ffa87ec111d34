//! # Configuration Files
//!
//! [`ConfigFile`] is one configuration read from disk: its path, the display
//! name used in reports (the file's base name), and its raw text. It is read
//! once and never written back.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::DocumentError;
use crate::jsonc::strip_comments;

/// A configuration file's identity and raw contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    path: PathBuf,
    name: String,
    text: String,
}

impl ConfigFile {
    /// Read `path` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Read`] if the file is missing, unreadable, or
    /// not valid UTF-8.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.display().to_string(),
            source,
        })?;
        tracing::trace!(path = %path.display(), bytes = text.len(), "read config file");
        Ok(Self::from_text(path, text))
    }

    /// Build a file from text already in memory.
    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let path = path.into();
        let name = display_name(&path);
        Self {
            path,
            name,
            text: text.into(),
        }
    }

    /// The path the file was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The base name shown in reports, e.g. `openclaw.g.json`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw, unstripped text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Strip comments and parse the result as strict JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Parse`] with the parser's message.
    pub fn parse(&self) -> Result<Value, DocumentError> {
        let stripped = strip_comments(&self.text);
        Ok(serde_json::from_str(&stripped)?)
    }
}

/// Base name of `path`, falling back to the whole path when it has none.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
