//! `rparams log-record <json>` – run the log-record hook on a JSON record.

use anyhow::{Context, Result};
use rparams_core::config::RparamsConfig;
use serde_json::Value;

use super::{pipeline, RequestArgs};

pub fn run_log_record(cfg: &RparamsConfig, record: &str, request: RequestArgs) -> Result<String> {
    let record: Value = serde_json::from_str(record).context("parse log record JSON")?;
    let record = pipeline(cfg, request).apply_log(record);
    Ok(serde_json::to_string_pretty(&record)?)
}
