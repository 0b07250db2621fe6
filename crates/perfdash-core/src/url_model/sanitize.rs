//! Download filename sanitization.

/// Longest filename Linux accepts, in bytes (NAME_MAX).
const NAME_MAX: usize = 255;

/// Sanitizes a suggested download filename for saving to disk.
///
/// - Replaces NUL, `/`, `\` and control characters with `_`
/// - Collapses runs of replaced characters into a single `_`
/// - Trims leading/trailing whitespace and dots (no hidden files, no `..`)
/// - Limits length to 255 bytes on a char boundary
///
/// Interior spaces are kept; browsers keep them too.
pub fn sanitize_download_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_replaced = false;

    for c in name.chars() {
        if c == '\0' || c == '/' || c == '\\' || c.is_control() {
            if !prev_replaced {
                out.push('_');
            }
            prev_replaced = true;
        } else {
            out.push(c);
            prev_replaced = false;
        }
    }

    let trimmed = out.trim_matches(|c: char| c.is_whitespace() || c == '.' || c == '_');

    if trimmed.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_path_separators() {
        assert_eq!(sanitize_download_filename("a/b\\c.csv"), "a_b_c.csv");
        assert_eq!(sanitize_download_filename("../../etc/passwd"), "etc_passwd");
    }

    #[test]
    fn trims_dots_and_spaces() {
        assert_eq!(sanitize_download_filename("  ..  report.csv  ..  "), "report.csv");
        assert_eq!(sanitize_download_filename(".hidden"), "hidden");
    }

    #[test]
    fn keeps_interior_spaces() {
        assert_eq!(
            sanitize_download_filename("Q3 team report.csv"),
            "Q3 team report.csv"
        );
    }

    #[test]
    fn control_chars_collapse() {
        assert_eq!(sanitize_download_filename("file\x00\x01name.txt"), "file_name.txt");
    }

    #[test]
    fn caps_length_on_char_boundary() {
        let long = "é".repeat(200);
        let out = sanitize_download_filename(&long);
        assert!(out.len() <= NAME_MAX);
        assert_eq!(out.len(), 254);
    }
}
