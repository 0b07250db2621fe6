//! Scheme detection and the policy deciding which schemes may become links.

use serde::{Deserialize, Serialize};

/// Pseudo-schemes that execute code or embed content when placed in `href`.
pub const DENIED_SCHEMES: [&str; 3] = ["javascript:", "data:", "vbscript:"];

/// Which explicit schemes survive normalization.
///
/// `Denylist` blocks only [`DENIED_SCHEMES`]; anything else without an
/// `http(s)://` prefix is treated as a bare host and gets `https://`.
/// `WebOnly` also rejects every other explicit scheme (`ftp:`, `file:`,
/// `mailto:`, ...) and requires the result to parse with a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemePolicy {
    #[default]
    Denylist,
    WebOnly,
}

/// ASCII case-insensitive `starts_with`. Never panics on char boundaries.
pub(crate) fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// True if `value` starts with one of [`DENIED_SCHEMES`], in any casing.
pub fn has_denied_scheme(value: &str) -> bool {
    DENIED_SCHEMES
        .iter()
        .any(|scheme| starts_with_ignore_case(value, scheme))
}

/// True if `value` starts with `http://` or `https://`, in any casing.
pub fn has_web_scheme(value: &str) -> bool {
    starts_with_ignore_case(value, "http://") || starts_with_ignore_case(value, "https://")
}

/// Returns the explicit scheme of `value` (without the colon), if it has one.
///
/// `host:port` forms such as `localhost:8080/x` or `example.com:443` are not
/// schemes: a colon followed only by digits up to the end of the authority
/// is read as a port.
pub fn explicit_scheme(value: &str) -> Option<&str> {
    let (candidate, rest) = value.split_once(':')?;
    let mut chars = candidate.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic()
        || !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        return None;
    }

    let port_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let after_port = &rest[port_len..];
    let looks_like_port = port_len > 0
        && (after_port.is_empty() || after_port.starts_with(['/', '?', '#']));
    if looks_like_port {
        return None;
    }
    Some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denied_schemes_any_casing() {
        assert!(has_denied_scheme("javascript:alert(1)"));
        assert!(has_denied_scheme("JavaScript:alert(1)"));
        assert!(has_denied_scheme("DATA:text/html;base64,AAAA"));
        assert!(has_denied_scheme("vbScript:msgbox"));
        assert!(!has_denied_scheme("https://javascript.info"));
        assert!(!has_denied_scheme("java"));
    }

    #[test]
    fn prefix_check_is_boundary_safe() {
        // 'é' is two bytes; slicing at 5 would split it.
        assert!(!starts_with_ignore_case("javaé:x", "javas"));
        assert!(!has_denied_scheme("ééééééééé"));
    }

    #[test]
    fn explicit_scheme_detection() {
        assert_eq!(explicit_scheme("mailto:a@example.com"), Some("mailto"));
        assert_eq!(explicit_scheme("ftp://files.example.com"), Some("ftp"));
        assert_eq!(explicit_scheme("git+ssh://host/repo"), Some("git+ssh"));
        assert_eq!(explicit_scheme("example.com"), None);
        assert_eq!(explicit_scheme("localhost:8080"), None);
        assert_eq!(explicit_scheme("localhost:8080/dash"), None);
        assert_eq!(explicit_scheme("example.com:443?x=1"), None);
        assert_eq!(explicit_scheme("1abc:foo"), None);
        assert_eq!(explicit_scheme(":nothing"), None);
    }

    #[test]
    fn policy_serde_names() {
        #[derive(Deserialize)]
        struct Wrap {
            policy: SchemePolicy,
        }
        let w: Wrap = toml::from_str(r#"policy = "web-only""#).unwrap();
        assert_eq!(w.policy, SchemePolicy::WebOnly);
        let w: Wrap = toml::from_str(r#"policy = "denylist""#).unwrap();
        assert_eq!(w.policy, SchemePolicy::Denylist);
    }
}
