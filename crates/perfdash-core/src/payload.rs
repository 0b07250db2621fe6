//! Performance data payload, as served to the dashboard (camelCase JSON).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePayload {
    /// Reporting period label, e.g. `2024-Q3`.
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub projects: Vec<ProjectPerformance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPerformance {
    pub name: String,
    #[serde(default)]
    pub owner: Option<String>,
    /// Untrusted; normalized before it becomes a link.
    #[serde(default)]
    pub homepage: Option<String>,
    pub score: f64,
    #[serde(default)]
    pub tasks_completed: u32,
    #[serde(default)]
    pub tasks_total: u32,
}

impl ProjectPerformance {
    /// Completed over total tasks; 0.0 when there are no tasks.
    pub fn completion_ratio(&self) -> f64 {
        if self.tasks_total == 0 {
            0.0
        } else {
            f64::from(self.tasks_completed) / f64::from(self.tasks_total)
        }
    }
}

impl PerformancePayload {
    pub fn from_json(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read payload file: {}", path.display()))?;
        let payload = Self::from_json(&bytes)
            .with_context(|| format!("parse payload JSON: {}", path.display()))?;
        tracing::debug!(
            period = %payload.period,
            projects = payload.projects.len(),
            "loaded performance payload"
        );
        Ok(payload)
    }
}
