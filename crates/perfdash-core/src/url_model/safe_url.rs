//! Typed wrapper for a normalized, non-empty external URL.

use std::fmt;

use super::normalize::normalize_with_policy;
use super::scheme::SchemePolicy;

/// A URL that passed normalization and is safe to place in `href`.
///
/// Always starts with `http://` or `https://` (any casing). The empty
/// rejection sentinel is represented as `None` from [`SafeUrl::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafeUrl(String);

impl SafeUrl {
    /// Normalizes `raw` with the default policy.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::parse_with_policy(raw, SchemePolicy::default())
    }

    pub fn parse_with_policy(raw: &str, policy: SchemePolicy) -> Option<Self> {
        let normalized = normalize_with_policy(raw, policy);
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SafeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SafeUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SafeUrl> for String {
    fn from(url: SafeUrl) -> Self {
        url.0
    }
}
