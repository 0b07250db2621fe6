//! CSV export of a performance payload through the download helper.

use crate::download::{download_blob, HostDocument, HostError};
use crate::payload::PerformancePayload;
use crate::url_model::{normalize_with_policy, SchemePolicy};

pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

const HEADER: [&str; 7] = [
    "project",
    "owner",
    "homepage",
    "score",
    "tasks_completed",
    "tasks_total",
    "completion",
];

/// Renders the payload as CSV (RFC 4180 quoting, CRLF line endings).
///
/// The homepage column holds the normalized URL, empty when rejected.
pub fn payload_to_csv(payload: &PerformancePayload, policy: SchemePolicy) -> String {
    let mut out = String::new();
    push_row(&mut out, HEADER.iter().map(|h| h.to_string()));
    for project in &payload.projects {
        let homepage = normalize_with_policy(project.homepage.as_deref().unwrap_or_default(), policy);
        push_row(
            &mut out,
            [
                project.name.clone(),
                project.owner.clone().unwrap_or_default(),
                homepage,
                format!("{:.2}", project.score),
                project.tasks_completed.to_string(),
                project.tasks_total.to_string(),
                format!("{:.4}", project.completion_ratio()),
            ],
        );
    }
    out
}

/// Default export filename for a payload: `performance-<period>.csv`.
pub fn default_export_name(payload: &PerformancePayload) -> String {
    let period = payload.period.trim();
    if period.is_empty() {
        "performance.csv".to_string()
    } else {
        format!("performance-{period}.csv")
    }
}

/// Renders the payload as CSV and saves it through `host`.
pub fn export_payload<H>(
    host: &mut H,
    payload: &PerformancePayload,
    filename: &str,
    policy: SchemePolicy,
) -> Result<(), HostError>
where
    H: HostDocument + ?Sized,
{
    let csv = payload_to_csv(payload, policy);
    download_blob(host, csv, filename, Some(CSV_MIME))
}

fn push_row(out: &mut String, fields: impl IntoIterator<Item = String>) {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, &field);
    }
    out.push_str("\r\n");
}

fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\r', '\n']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}
