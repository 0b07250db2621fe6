//! `perfdash export <payload.json>` – save the payload as CSV.

use anyhow::{Context, Result};
use perfdash_core::download::FsDocument;
use perfdash_core::export::{default_export_name, export_payload};
use perfdash_core::payload::PerformancePayload;
use perfdash_core::url_model::SchemePolicy;
use std::path::Path;

pub fn run_export(
    payload_path: &Path,
    out: Option<&str>,
    dir: &Path,
    policy: SchemePolicy,
) -> Result<()> {
    let payload = PerformancePayload::from_path(payload_path)?;
    let name = out
        .map(str::to_string)
        .unwrap_or_else(|| default_export_name(&payload));

    let mut doc = FsDocument::new(dir)?;
    export_payload(&mut doc, &payload, &name, policy)
        .with_context(|| format!("export {} as {name}", payload_path.display()))?;

    for path in doc.saved_paths() {
        println!(
            "Exported {} projects to {}",
            payload.projects.len(),
            path.display()
        );
    }
    Ok(())
}
