//! External URL normalization.

use super::scheme::{explicit_scheme, has_denied_scheme, has_web_scheme, SchemePolicy};

/// Normalizes an arbitrary string into a safe absolute URL, or `""` if it must
/// not become a link.
///
/// - Trims whitespace; empty input yields `""`.
/// - `javascript:`, `data:` and `vbscript:` (any casing) yield `""`.
/// - `//host/path` gets `https:` prepended.
/// - `http://` / `https://` values are returned as given (after trimming).
/// - Anything else is treated as a bare host and gets `https://` prepended.
///
/// Total and deterministic: it never fails.
pub fn normalize_external_url(raw: &str) -> String {
    normalize_with_policy(raw, SchemePolicy::Denylist)
}

/// Same as [`normalize_external_url`]; absent input is treated as empty.
pub fn normalize_external_url_opt(raw: Option<&str>) -> String {
    normalize_external_url(raw.unwrap_or_default())
}

/// Normalizes `raw` under the given [`SchemePolicy`].
pub fn normalize_with_policy(raw: &str, policy: SchemePolicy) -> String {
    let value = raw.trim();
    if value.is_empty() {
        return String::new();
    }

    // Must run before any prefixing.
    if has_denied_scheme(value) {
        tracing::debug!(raw = value, "rejected pseudo-scheme URL");
        return String::new();
    }

    let normalized = if value.starts_with("//") {
        format!("https:{value}")
    } else if has_web_scheme(value) {
        value.to_string()
    } else {
        if policy == SchemePolicy::WebOnly {
            if let Some(scheme) = explicit_scheme(value) {
                tracing::debug!(raw = value, scheme, "rejected non-web scheme");
                return String::new();
            }
        }
        format!("https://{value}")
    };

    if policy == SchemePolicy::WebOnly && !has_host(&normalized) {
        tracing::debug!(raw = value, "rejected URL without a host");
        return String::new();
    }
    normalized
}

fn has_host(candidate: &str) -> bool {
    url::Url::parse(candidate)
        .ok()
        .is_some_and(|u| u.host_str().is_some_and(|h| !h.is_empty()))
}
