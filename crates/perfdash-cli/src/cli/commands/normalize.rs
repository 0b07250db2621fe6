//! `perfdash normalize <url>...` – print normalized URLs.

use anyhow::Result;
use perfdash_core::url_model::{normalize_with_policy, SchemePolicy};

/// Prints one line per input; a rejected input prints an empty line and a
/// note on stderr so output lines stay aligned with inputs.
pub fn run_normalize(urls: &[String], policy: SchemePolicy) -> Result<()> {
    for raw in urls {
        let normalized = normalize_with_policy(raw, policy);
        if normalized.is_empty() {
            eprintln!("rejected: {raw:?}");
        }
        println!("{normalized}");
    }
    Ok(())
}
