//! Folding the query parameters of one URL into another.

use crate::url_model::{query_params, QuerySet, UrlParts};

/// Merges the query parameters of `source` into `target`.
///
/// Keys already on `target` keep their value (structured values included,
/// compared by top-level name only). Keys only on `source` are appended in
/// `source` order. Scheme, authority, path and fragment of `target` are
/// preserved.
///
/// Returns `target` unchanged when either input is empty, when `source`
/// carries no parameters, or when `target` cannot be split into components.
///
/// # Examples
///
/// - `merge_queries("https://example.com/page?a=1", "/page?a=2&b=3")` → `"https://example.com/page?a=1&b=3"`
/// - `merge_queries("/relative/path", "/y?ref=abc")` → `"/relative/path?ref=abc"`
pub fn merge_queries(target: &str, source: &str) -> String {
    if target.is_empty() || source.is_empty() {
        return target.to_string();
    }

    let donor = query_params(source);
    if donor.is_empty() {
        return target.to_string();
    }

    let parts = match UrlParts::parse(target) {
        Ok(parts) => parts,
        Err(err) => {
            tracing::debug!(target_url = target, error = %err, "target URL not splittable, left unchanged");
            return target.to_string();
        }
    };

    let mut merged = parts.query.map(QuerySet::parse).unwrap_or_default();
    let added = merged.extend_missing(donor);
    tracing::trace!(target_url = target, source_url = source, added, "merged query parameters");

    let query = merged.to_query_string();
    if parts.is_absolute() {
        assemble_absolute(&parts, &query)
    } else {
        assemble_relative(&parts, &query)
    }
}

/// Rebuilds a URL that has a scheme or authority from its components.
///
/// `//` is written only when the target had an authority, so `mailto:` and
/// protocol-relative targets keep their shape. User info is not re-emitted.
fn assemble_absolute(parts: &UrlParts<'_>, query: &str) -> String {
    let mut out = String::new();

    if let Some(scheme) = parts.scheme {
        out.push_str(scheme);
        out.push(':');
    }
    if let Some(host) = parts.host {
        out.push_str("//");
        out.push_str(host);
        if let Some(port) = parts.port {
            out.push(':');
            out.push_str(&port.to_string());
        }
    }
    if let Some(path) = parts.path {
        out.push_str(path);
    }

    push_query_and_fragment(out, query, parts.fragment)
}

/// Relative references are anchored to their original path text.
fn assemble_relative(parts: &UrlParts<'_>, query: &str) -> String {
    push_query_and_fragment(parts.path.unwrap_or_default().to_string(), query, parts.fragment)
}

fn push_query_and_fragment(mut out: String, query: &str, fragment: Option<&str>) -> String {
    if !query.is_empty() {
        out.push(if out.contains('?') { '&' } else { '?' });
        out.push_str(query);
    }
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_value_wins_source_only_keys_appended() {
        assert_eq!(
            merge_queries("https://example.com/page?a=1", "/page?a=2&b=3"),
            "https://example.com/page?a=1&b=3"
        );
    }

    #[test]
    fn absolute_target_without_query() {
        assert_eq!(
            merge_queries("https://example.com/page", "/x?utm_source=ads"),
            "https://example.com/page?utm_source=ads"
        );
    }

    #[test]
    fn relative_target() {
        assert_eq!(
            merge_queries("/relative/path", "/y?ref=abc"),
            "/relative/path?ref=abc"
        );
    }

    #[test]
    fn empty_inputs_short_circuit() {
        assert_eq!(merge_queries("", "/y?ref=abc"), "");
        assert_eq!(merge_queries("/a?x=1", ""), "/a?x=1");
    }

    #[test]
    fn source_without_params_returns_target_verbatim() {
        let target = "https://example.com/a?q=hello%20world";
        assert_eq!(merge_queries(target, "/x"), target);
        assert_eq!(merge_queries(target, "/x?"), target);
        assert_eq!(merge_queries(target, "/x?&&"), target);
    }

    #[test]
    fn fragment_preserved_after_query() {
        assert_eq!(
            merge_queries("https://example.com/docs#install", "/d?v=2"),
            "https://example.com/docs?v=2#install"
        );
        assert_eq!(merge_queries("/docs?a=1#top", "/d?v=2"), "/docs?a=1&v=2#top");
    }

    #[test]
    fn fragment_only_target() {
        assert_eq!(merge_queries("#section", "/y?ref=abc"), "?ref=abc#section");
    }

    #[test]
    fn query_only_target() {
        assert_eq!(merge_queries("?a=1", "/y?a=2&b=3"), "?a=1&b=3");
    }

    #[test]
    fn bare_question_mark_target_is_no_query() {
        assert_eq!(merge_queries("/landing?", "/y?b=3"), "/landing?b=3");
        assert_eq!(
            merge_queries("https://example.com/landing?", "/y?b=3"),
            "https://example.com/landing?b=3"
        );
    }

    #[test]
    fn host_and_port_kept_user_info_dropped() {
        assert_eq!(
            merge_queries("http://user@example.com:8080?a=1", "/y?b=2"),
            "http://example.com:8080?a=1&b=2"
        );
        assert_eq!(
            merge_queries("https://user:pw@example.com/p", "/s?x=1"),
            "https://example.com/p?x=1"
        );
    }

    #[test]
    fn scheme_without_authority_gets_no_slashes() {
        assert_eq!(
            merge_queries("mailto:a@b.c", "/s?x=1"),
            "mailto:a@b.c?x=1"
        );
    }

    #[test]
    fn protocol_relative_target_keeps_slashes() {
        assert_eq!(
            merge_queries("//cdn.example.com/x", "/y?b=2"),
            "//cdn.example.com/x?b=2"
        );
    }

    #[test]
    fn structured_values_win_whole() {
        assert_eq!(
            merge_queries("/t?tags[]=a", "/s?tags[]=b&tags[]=c&page=2"),
            "/t?tags%5B0%5D=a&page=2"
        );
    }

    #[test]
    fn structured_source_values_carried() {
        assert_eq!(
            merge_queries("/t", "/s?f[color]=red"),
            "/t?f%5Bcolor%5D=red"
        );
    }

    #[test]
    fn target_query_is_re_encoded() {
        assert_eq!(
            merge_queries("/t?q=hello%20world", "/s?x=1"),
            "/t?q=hello+world&x=1"
        );
    }

    #[test]
    fn unparseable_target_left_alone() {
        let target = "http://example.com:http/x";
        assert_eq!(merge_queries(target, "/s?x=1"), target);
    }

    #[test]
    fn unparseable_source_donates_nothing() {
        let target = "/t?a=1";
        assert_eq!(merge_queries(target, "http://[::1/?x=1"), target);
    }
}
