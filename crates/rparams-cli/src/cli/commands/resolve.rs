//! `rparams resolve <target>` – run the redirect-target hook.

use rparams_core::config::RparamsConfig;

use super::{pipeline, RequestArgs};

pub fn run_resolve(
    cfg: &RparamsConfig,
    target: &str,
    source_pattern: &str,
    request: RequestArgs,
) -> String {
    pipeline(cfg, request).apply_target(target, source_pattern)
}
