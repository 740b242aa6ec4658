//! Cache key parsing

use crate::error::{Result, StoreError};
use std::fmt;

/// A validated status code used as the store's only index.
///
/// The digits are kept verbatim, so `0201` and `201` name different entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Parse a raw path segment. Accepts one or more ASCII decimal digits and
    /// nothing else.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(StoreError::InvalidKey(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// Parse the key out of a request path such as `/404`.
    ///
    /// Only the leading separator is stripped; `/404/` and `/4/04` are invalid.
    pub fn from_path(path: &str) -> Result<Self> {
        Self::parse(path.strip_prefix('/').unwrap_or(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the entry inside the cache directory
    pub fn file_name(&self) -> String {
        format!("{}.jpg", self.0)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
