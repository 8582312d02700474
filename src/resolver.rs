use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Identifier of a single textbook page, as minted by the backend.
///
/// Always a non-empty alphanumeric token. Constructed by [`resolve`] from a
/// scanned or pasted URL, or deserialized verbatim from a backend payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageId(String);

impl PageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ResolutionError {
    #[error("no page identifier found in input")]
    NoMatch,
}

/// Extracts a page identifier from a QR payload or a manually entered URL.
///
/// Looks for the leftmost `/pages/<token>` segment; the token is the
/// alphanumeric run directly after the segment, so trailing punctuation or
/// query strings are never captured. Unrecognized input fails with
/// [`ResolutionError::NoMatch`] rather than guessing.
pub fn resolve(raw: &str) -> Result<PageId, ResolutionError> {
    let pattern = Regex::new(r"/pages/([a-zA-Z0-9]+)").unwrap();

    pattern
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|token| PageId(token.as_str().to_string()))
        .ok_or(ResolutionError::NoMatch)
}
