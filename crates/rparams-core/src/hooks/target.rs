//! Adapter for the host's redirect-target resolution hook.

use crate::merge::merge_queries;
use crate::request::RequestedUrl;

/// Folds the requested URL's query parameters into a resolved redirect
/// target.
///
/// `source_pattern` is the stored redirect source the host matched; it is
/// accepted for signature compatibility and not used. Pure and idempotent:
/// the host may call this more than once per request.
pub fn on_resolve_target<R>(target: &str, source_pattern: &str, requested: &R) -> String
where
    R: RequestedUrl + ?Sized,
{
    if target.is_empty() {
        return target.to_string();
    }

    let requested_url = requested.requested_url();
    if requested_url.is_empty() {
        tracing::debug!(source_pattern, "no requested URL available, target unchanged");
        return target.to_string();
    }

    let merged = merge_queries(target, &requested_url);
    tracing::debug!(
        target_url = target,
        requested_url = %requested_url,
        merged_url = %merged,
        "redirect target resolved"
    );
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_requested_params_into_target() {
        assert_eq!(
            on_resolve_target("https://example.com/page?a=1", "/old", "/old?a=2&b=3"),
            "https://example.com/page?a=1&b=3"
        );
    }

    #[test]
    fn empty_target_passes_through() {
        assert_eq!(on_resolve_target("", "/old", "/old?a=1"), "");
    }

    #[test]
    fn empty_requested_url_passes_through() {
        assert_eq!(on_resolve_target("/new", "/old", ""), "/new");
    }

    #[test]
    fn oversized_list_index_in_request_does_not_panic() {
        assert_eq!(
            on_resolve_target("/new", "/old", "/old?a[18446744073709551615]=x&a[]=y"),
            "/new?a%5B18446744073709551615%5D=x"
        );
    }

    #[test]
    fn repeated_invocation_is_stable() {
        let requested = "/old?utm_source=ads&utm_medium=cpc";
        let once = on_resolve_target("https://example.com/new?utm_source=site", "/old", requested);
        let twice = on_resolve_target(&once, "/old", requested);
        assert_eq!(once, "https://example.com/new?utm_source=site&utm_medium=cpc");
        assert_eq!(twice, once);
    }
}
