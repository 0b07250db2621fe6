//! URL and filename handling for links and downloads.
//!
//! Normalizes untrusted strings into safe absolute `http(s)` URLs (or the
//! empty rejection sentinel) and derives safe on-disk names for downloads.

mod normalize;
mod safe_url;
mod sanitize;
mod scheme;

pub use normalize::{normalize_external_url, normalize_external_url_opt, normalize_with_policy};
pub use safe_url::SafeUrl;
pub use sanitize::sanitize_download_filename;
pub use scheme::{explicit_scheme, has_denied_scheme, has_web_scheme, SchemePolicy, DENIED_SCHEMES};

/// Filename used when the suggested name sanitizes to nothing.
pub const DEFAULT_FILENAME: &str = "download.bin";

/// Derives the on-disk name for a download from the suggested filename.
///
/// # Examples
///
/// - `download_filename("report.csv")` → `"report.csv"`
/// - `download_filename("../")` → `"download.bin"`
pub fn download_filename(suggested: &str) -> String {
    let sanitized = sanitize_download_filename(suggested);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        DEFAULT_FILENAME.to_string()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_filename_passthrough() {
        assert_eq!(download_filename("report.csv"), "report.csv");
        assert_eq!(download_filename("perf 2024-Q3.csv"), "perf 2024-Q3.csv");
    }

    #[test]
    fn download_filename_fallback() {
        assert_eq!(download_filename(""), DEFAULT_FILENAME);
        assert_eq!(download_filename("   "), DEFAULT_FILENAME);
        assert_eq!(download_filename("."), DEFAULT_FILENAME);
        assert_eq!(download_filename("../"), DEFAULT_FILENAME);
    }

    #[test]
    fn download_filename_strips_directories() {
        assert_eq!(download_filename("/tmp/evil.sh"), "tmp_evil.sh");
    }
}
