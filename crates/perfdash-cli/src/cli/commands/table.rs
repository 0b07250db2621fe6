//! `perfdash table <payload.json>` – print the project table as HTML.

use anyhow::Result;
use perfdash_core::link::project_table;
use perfdash_core::payload::PerformancePayload;
use perfdash_core::url_model::SchemePolicy;
use std::path::Path;

pub fn run_table(payload_path: &Path, policy: SchemePolicy, link_class: Option<&str>) -> Result<()> {
    let payload = PerformancePayload::from_path(payload_path)?;
    println!("{}", project_table(&payload, policy, link_class).into_string());
    Ok(())
}
