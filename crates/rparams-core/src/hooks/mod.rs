//! Hook adapters invoked by the host redirection system.
//!
//! Both adapters are fail-open: any input they cannot use is returned as
//! given. They take the requested URL as an explicit [`RequestedUrl`] so
//! they stay pure and testable without a live request.
//!
//! [`RequestedUrl`]: crate::request::RequestedUrl

mod log_data;
mod pipeline;
mod target;

pub use log_data::{on_build_log_record, SENT_TO_FIELD};
pub use pipeline::{
    register_hooks, FilterRegistry, LogFilter, RedirectPipeline, TargetFilter, LOG_HOOK,
    TARGET_HOOK,
};
pub use target::on_resolve_target;
