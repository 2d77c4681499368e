//! `rparams merge <target> <source>` – merge query parameters directly.

use rparams_core::merge_queries;

pub fn run_merge(target: &str, source: &str) -> String {
    merge_queries(target, source)
}
