use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::download::DEFAULT_TEXT_MIME;
use crate::url_model::SchemePolicy;

/// Global configuration loaded from `~/.config/perfdash/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerfdashConfig {
    /// Which URL schemes may become links: "denylist" (default) or "web-only".
    #[serde(default)]
    pub scheme_policy: SchemePolicy,
    /// Directory downloads are saved into (None = current directory).
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// MIME type for text downloads.
    #[serde(default = "default_mime")]
    pub default_mime: String,
    /// CSS class applied to rendered external links.
    #[serde(default)]
    pub link_class: Option<String>,
}

fn default_mime() -> String {
    DEFAULT_TEXT_MIME.to_string()
}

impl Default for PerfdashConfig {
    fn default() -> Self {
        Self {
            scheme_policy: SchemePolicy::Denylist,
            download_dir: None,
            default_mime: default_mime(),
            link_class: None,
        }
    }
}

impl PerfdashConfig {
    /// Directory for downloads: the configured one, else the current directory.
    pub fn resolve_download_dir(&self) -> Result<PathBuf> {
        match &self.download_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("resolve current directory"),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("perfdash")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PerfdashConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PerfdashConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PerfdashConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
