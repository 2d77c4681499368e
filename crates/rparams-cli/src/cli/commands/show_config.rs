//! `rparams config` – print the effective configuration.

use anyhow::Result;
use rparams_core::config::RparamsConfig;

pub fn run_config(cfg: &RparamsConfig) -> Result<String> {
    Ok(toml::to_string_pretty(cfg)?)
}
