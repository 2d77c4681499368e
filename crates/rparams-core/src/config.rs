use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::request::DEFAULT_REQUEST_URI_KEY;

/// How to detect the host redirection system (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyConfig {
    /// Plugin path passed to the host's "is plugin active" query.
    pub plugin_slug: String,
    /// Class names whose presence means the redirection system is loaded.
    #[serde(default)]
    pub marker_classes: Vec<String>,
    /// Constants whose definition means the redirection system is loaded.
    #[serde(default)]
    pub marker_constants: Vec<String>,
    /// Capability a user needs to see the missing-dependency notice.
    pub required_capability: String,
}

impl Default for DependencyConfig {
    fn default() -> Self {
        Self {
            plugin_slug: "redirection/redirection.php".to_string(),
            marker_classes: vec!["Red_Item".to_string()],
            marker_constants: vec!["REDIRECTION_FILE".to_string()],
            required_capability: "activate_plugins".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/rparams/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RparamsConfig {
    /// Merge request parameters into resolved redirect targets.
    pub target_hook_enabled: bool,
    /// Rewrite `sent_to` in redirect log records.
    pub log_hook_enabled: bool,
    /// Priority both filters are registered at (lower runs earlier).
    pub hook_priority: i32,
    /// Server variable holding the raw request path and query.
    pub request_uri_key: String,
    /// Optional dependency detection; if missing, built-in defaults are used.
    #[serde(default)]
    pub dependency: Option<DependencyConfig>,
}

impl Default for RparamsConfig {
    fn default() -> Self {
        Self {
            target_hook_enabled: true,
            log_hook_enabled: true,
            hook_priority: 10,
            request_uri_key: DEFAULT_REQUEST_URI_KEY.to_string(),
            dependency: None,
        }
    }
}

impl RparamsConfig {
    /// Dependency detection settings, falling back to defaults.
    pub fn dependency(&self) -> DependencyConfig {
        self.dependency.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rparams")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RparamsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RparamsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<RparamsConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let cfg: RparamsConfig = toml::from_str(&data)
        .with_context(|| format!("parse config file: {}", path.display()))?;
    Ok(cfg)
}
