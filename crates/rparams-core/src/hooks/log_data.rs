//! Adapter for the host's log-record construction hook.

use serde_json::Value;

use crate::merge::merge_queries;
use crate::request::RequestedUrl;

/// Field of a redirect log record naming the final destination.
pub const SENT_TO_FIELD: &str = "sent_to";

/// Rewrites the record's `sent_to` so the log shows the merged destination.
///
/// Returns `record` unchanged if it is not a non-empty object, has no
/// non-empty string `sent_to`, or no requested URL is available. No field
/// other than `sent_to` is ever touched.
pub fn on_build_log_record<R>(mut record: Value, requested: &R) -> Value
where
    R: RequestedUrl + ?Sized,
{
    let Some(fields) = record.as_object_mut().filter(|m| !m.is_empty()) else {
        return record;
    };

    let Some(sent_to) = fields
        .get(SENT_TO_FIELD)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
    else {
        return record;
    };

    let requested_url = requested.requested_url();
    if requested_url.is_empty() {
        tracing::debug!("no requested URL available, log record unchanged");
        return record;
    }

    let merged = merge_queries(sent_to, &requested_url);
    tracing::debug!(sent_to = %merged, "log record destination rewritten");
    fields.insert(SENT_TO_FIELD.to_string(), Value::String(merged));
    record
}
