//! CLI command handlers. Each returns the text to print.

mod check_deps;
mod log_record;
mod merge;
mod resolve;
mod show_config;

pub use check_deps::run_check_deps;
pub use log_record::run_log_record;
pub use merge::run_merge;
pub use resolve::run_resolve;
pub use show_config::run_config;

use std::collections::HashMap;
use std::sync::Arc;

use clap::Args;
use rparams_core::config::RparamsConfig;
use rparams_core::hooks::{register_hooks, FilterRegistry};
use rparams_core::request::{RequestUrlResolver, ServerRequest};

/// Where the requested URL comes from when running a hook.
#[derive(Debug, Clone, Default, Args)]
pub struct RequestArgs {
    /// URL as reported by the host redirection system (takes precedence).
    #[arg(long, value_name = "URL")]
    pub requested: Option<String>,
    /// Raw request path+query as the web server saw it. Without this the
    /// configured server variable is read from the environment.
    #[arg(long, value_name = "RAW")]
    pub request_uri: Option<String>,
}

impl RequestArgs {
    fn resolver(self, cfg: &RparamsConfig) -> RequestUrlResolver {
        let server = match self.request_uri {
            Some(raw) => {
                let mut vars = HashMap::new();
                vars.insert(cfg.request_uri_key.clone(), raw);
                ServerRequest::new(vars)
            }
            None => ServerRequest::from_env(),
        }
        .with_uri_key(cfg.request_uri_key.as_str());

        let resolver = RequestUrlResolver::new(server);
        match self.requested {
            Some(url) => resolver.with_host_accessor(move || url.clone()),
            None => resolver,
        }
    }
}

/// Pipeline with the rparams hooks registered per `cfg`.
fn pipeline(cfg: &RparamsConfig, request: RequestArgs) -> FilterRegistry {
    let mut registry = FilterRegistry::new();
    register_hooks(&mut registry, Arc::new(request.resolver(cfg)), cfg);
    registry
}
