//! # Required Paths
//!
//! A [`RequiredPath`] is a dotted key path such as `agents.defaults.model.primary`
//! that must resolve to a value for a configuration to be accepted.
//!
//! Resolution folds over the segments from the document root. Every
//! intermediate value must be a mapping; a missing key, or a scalar/array/null
//! in the middle of the path, resolves to absent. The leaf itself may be any
//! value including `null`: only absence makes a path missing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PathError;

/// The paths every OpenClaw configuration must define.
pub const DEFAULT_REQUIRED_PATHS: [&str; 4] = [
    "gateway.port",
    "models.providers",
    "agents.defaults.model.primary",
    "channels.whatsapp",
];

/// A semi-structured document that can be walked by string key.
///
/// `field` returns `None` both when the key is absent and when `self` is not
/// a mapping; it returns `Some` for a present key even if the value is null.
pub trait KeyedDocument {
    /// Look up a direct child of this mapping.
    fn field(&self, key: &str) -> Option<&Self>;
}

impl KeyedDocument for Value {
    fn field(&self, key: &str) -> Option<&Self> {
        self.as_object()?.get(key)
    }
}

/// An ordered, non-empty sequence of non-empty key segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RequiredPath {
    segments: Vec<String>,
}

impl RequiredPath {
    /// Parse a dotted path, rejecting empty input and empty segments.
    pub fn parse(dotted: &str) -> Result<Self, PathError> {
        let trimmed = dotted.trim();
        if trimmed.is_empty() {
            return Err(PathError::Empty);
        }

        let segments: Vec<String> = trimmed.split('.').map(str::to_string).collect();
        if let Some(position) = segments.iter().position(|s| s.is_empty()) {
            return Err(PathError::EmptySegment {
                path: trimmed.to_string(),
                position,
            });
        }

        Ok(Self { segments })
    }

    /// The key segments in lookup order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for RequiredPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl FromStr for RequiredPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RequiredPath {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RequiredPath> for String {
    fn from(path: RequiredPath) -> Self {
        path.to_string()
    }
}

/// [`DEFAULT_REQUIRED_PATHS`] as parsed paths.
pub fn default_required_paths() -> Vec<RequiredPath> {
    DEFAULT_REQUIRED_PATHS
        .iter()
        .map(|dotted| RequiredPath {
            segments: dotted.split('.').map(str::to_string).collect(),
        })
        .collect()
}

/// Resolve `path` in `doc`. `None` means absent.
pub fn resolve<'d, D: KeyedDocument>(doc: &'d D, path: &RequiredPath) -> Option<&'d D> {
    resolve_segments(doc, path.segments())
}

/// Resolve a key sequence in `doc`. Only mappings are descended.
pub fn resolve_segments<'d, D, S>(doc: &'d D, segments: &[S]) -> Option<&'d D>
where
    D: KeyedDocument,
    S: AsRef<str>,
{
    segments
        .iter()
        .try_fold(doc, |current, segment| current.field(segment.as_ref()))
}

/// Return the paths that do not resolve in `doc`, in declaration order.
pub fn find_missing<'p, D: KeyedDocument>(
    doc: &D,
    paths: &'p [RequiredPath],
) -> Vec<&'p RequiredPath> {
    paths
        .iter()
        .filter(|path| resolve(doc, path).is_none())
        .collect()
}
