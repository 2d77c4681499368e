//! Registration against the host's redirect pipeline.
//!
//! The host exposes two named filter points. [`RedirectPipeline`] is the
//! seam; [`FilterRegistry`] is an in-process implementation that runs
//! filters in priority order (lower first, ties in registration order).

use std::sync::Arc;

use serde_json::Value;

use crate::config::RparamsConfig;
use crate::request::RequestedUrl;

use super::{on_build_log_record, on_resolve_target};

/// Filter point invoked with `(target_url, source_pattern)`.
pub const TARGET_HOOK: &str = "redirection_url_target";
/// Filter point invoked with the log record about to be stored.
pub const LOG_HOOK: &str = "redirection_log_data";

pub type TargetFilter = Box<dyn Fn(&str, &str) -> String + Send + Sync>;
pub type LogFilter = Box<dyn Fn(Value) -> Value + Send + Sync>;

/// Extension points offered by the host redirection system.
pub trait RedirectPipeline {
    fn add_target_filter(&mut self, priority: i32, filter: TargetFilter);
    fn add_log_filter(&mut self, priority: i32, filter: LogFilter);
}

/// Registers the target and log adapters (as enabled in `config`) at
/// `config.hook_priority`, reading the requested URL from `requested`.
pub fn register_hooks<P>(
    pipeline: &mut P,
    requested: Arc<dyn RequestedUrl + Send + Sync>,
    config: &RparamsConfig,
) where
    P: RedirectPipeline + ?Sized,
{
    if config.target_hook_enabled {
        let requested = Arc::clone(&requested);
        pipeline.add_target_filter(
            config.hook_priority,
            Box::new(move |target: &str, source_pattern: &str| {
                on_resolve_target(target, source_pattern, requested.as_ref())
            }),
        );
        tracing::debug!(hook = TARGET_HOOK, priority = config.hook_priority, "filter registered");
    }

    if config.log_hook_enabled {
        pipeline.add_log_filter(
            config.hook_priority,
            Box::new(move |record: Value| on_build_log_record(record, requested.as_ref())),
        );
        tracing::debug!(hook = LOG_HOOK, priority = config.hook_priority, "filter registered");
    }
}

struct Registered<F> {
    priority: i32,
    filter: F,
}

/// Ordered filter chains for both hook points.
#[derive(Default)]
pub struct FilterRegistry {
    target: Vec<Registered<TargetFilter>>,
    log: Vec<Registered<LogFilter>>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `target_url` through every target filter.
    pub fn apply_target(&self, target_url: &str, source_pattern: &str) -> String {
        self.target
            .iter()
            .fold(target_url.to_string(), |acc, r| (r.filter)(acc.as_str(), source_pattern))
    }

    /// Runs `record` through every log filter.
    pub fn apply_log(&self, record: Value) -> Value {
        self.log.iter().fold(record, |acc, r| (r.filter)(acc))
    }

    /// Number of filters registered on `hook`.
    pub fn filter_count(&self, hook: &str) -> usize {
        match hook {
            TARGET_HOOK => self.target.len(),
            LOG_HOOK => self.log.len(),
            _ => 0,
        }
    }
}

impl RedirectPipeline for FilterRegistry {
    fn add_target_filter(&mut self, priority: i32, filter: TargetFilter) {
        insert_ordered(&mut self.target, Registered { priority, filter });
    }

    fn add_log_filter(&mut self, priority: i32, filter: LogFilter) {
        insert_ordered(&mut self.log, Registered { priority, filter });
    }
}

/// Keeps `chain` sorted by priority, new entries after equal priorities.
fn insert_ordered<F>(chain: &mut Vec<Registered<F>>, entry: Registered<F>) {
    let at = chain.partition_point(|r| r.priority <= entry.priority);
    chain.insert(at, entry);
}
