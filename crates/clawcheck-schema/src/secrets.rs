//! # Credential Scanning
//!
//! OpenClaw configs reference provider keys through `${VAR}` placeholders.
//! The scanner looks at raw file text (comments included, before any
//! parsing) for strings shaped like real Anthropic, OpenAI, or Google API
//! keys. Matches are reported with a redacted excerpt only.

use std::fmt;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Provider name and pattern for each recognised key shape.
const KEY_PATTERNS: [(&str, &str); 3] = [
    ("anthropic", r"sk-ant-api\d{2}-[A-Za-z0-9_-]+"),
    ("openai", r"sk-[A-Za-z0-9]{20,}"),
    ("google", r"AIzaSy[A-Za-z0-9_-]{30,}"),
];

/// Characters of a match kept in the excerpt.
const EXCERPT_LEN: usize = 12;

/// Failure to build the scanner.
#[derive(Error, Debug)]
pub enum ScannerError {
    /// A built-in pattern did not compile.
    #[error("invalid credential pattern for {provider}: {source}")]
    Pattern {
        /// Provider the pattern belongs to.
        provider: &'static str,
        /// Regex compile error.
        #[source]
        source: regex::Error,
    },
}

/// One suspected credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialFinding {
    /// Provider whose key shape matched.
    pub provider: String,
    /// One-based line of the match.
    pub line: usize,
    /// Leading characters of the match followed by `…`.
    pub excerpt: String,
}

impl fmt::Display for CredentialFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} key on line {} ({})", self.provider, self.line, self.excerpt)
    }
}

/// Compiled key patterns.
#[derive(Debug, Clone)]
pub struct CredentialScanner {
    patterns: Vec<(&'static str, Regex)>,
}

impl CredentialScanner {
    /// Compile the built-in patterns.
    pub fn new() -> Result<Self, ScannerError> {
        let patterns = KEY_PATTERNS
            .iter()
            .map(|&(provider, pattern)| {
                Regex::new(pattern)
                    .map(|regex| (provider, regex))
                    .map_err(|source| ScannerError::Pattern { provider, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Every match in `text`, ordered by pattern then position.
    pub fn scan(&self, text: &str) -> Vec<CredentialFinding> {
        let mut findings = Vec::new();
        for (provider, regex) in &self.patterns {
            for m in regex.find_iter(text) {
                findings.push(CredentialFinding {
                    provider: (*provider).to_string(),
                    line: line_of(text, m.start()),
                    excerpt: redact(m.as_str()),
                });
            }
        }
        findings
    }
}

fn line_of(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}

fn redact(secret: &str) -> String {
    let head: String = secret.chars().take(EXCERPT_LEN).collect();
    format!("{head}…")
}
