//! Table-driven checks of the merge invariants over a spread of target and
//! source URLs (absolute, relative, query-only, fragments, structured keys).

use rparams_core::merge_queries;
use rparams_core::url_model::{query_params, UrlParts};

const TARGETS: &[&str] = &[
    "https://example.com/page?a=1",
    "https://example.com/page",
    "https://example.com",
    "http://example.com:8080/p?x=1&y=2#frag",
    "//cdn.example.com/asset.js?v=3",
    "/relative/path",
    "/relative/path?a=9#section",
    "?only=query",
    "#only-fragment",
    "/landing?",
    "/list?tags[]=a&tags[]=b",
    "/search?q=hello+world&page=2",
];

const SOURCES: &[&str] = &[
    "/page?a=2&b=3",
    "/x?utm_source=ads&utm_medium=cpc",
    "/y?ref=abc",
    "/z?tags[]=c&filter[color]=red",
    "/q?q=other&lang=en",
    "https://old.example.com/p?campaign=spring#ignored",
];

const NO_PARAM_SOURCES: &[&str] = &["/plain", "/plain?", "/plain?&&", "https://example.com/#x"];

#[test]
fn source_without_params_is_identity() {
    for t in TARGETS {
        for s in NO_PARAM_SOURCES {
            assert_eq!(merge_queries(t, s), *t, "target {t:?} source {s:?}");
        }
    }
}

#[test]
fn target_values_survive() {
    for t in TARGETS {
        let before = query_params(t);
        for s in SOURCES {
            let after = query_params(&merge_queries(t, s));
            for (key, value) in before.iter() {
                assert_eq!(after.get(key), Some(value), "key {key:?} in {t:?} + {s:?}");
            }
        }
    }
}

#[test]
fn source_only_keys_carried_with_source_values() {
    for t in TARGETS {
        let target_params = query_params(t);
        for s in SOURCES {
            let source_params = query_params(s);
            let after = query_params(&merge_queries(t, s));
            for (key, value) in source_params.iter() {
                if !target_params.contains_key(key) {
                    assert_eq!(after.get(key), Some(value), "key {key:?} in {t:?} + {s:?}");
                }
            }
        }
    }
}

#[test]
fn no_foreign_keys() {
    for t in TARGETS {
        let target_params = query_params(t);
        for s in SOURCES {
            let source_params = query_params(s);
            let merged = merge_queries(t, s);
            for key in query_params(&merged).keys() {
                assert!(
                    target_params.contains_key(key) || source_params.contains_key(key),
                    "foreign key {key:?} in {merged:?}"
                );
            }
        }
    }
}

#[test]
fn merging_twice_adds_nothing() {
    for t in TARGETS {
        for s in SOURCES {
            let once = merge_queries(t, s);
            assert_eq!(merge_queries(&once, s), once, "target {t:?} source {s:?}");
        }
    }
}

#[test]
fn target_fragment_kept_at_end() {
    for t in TARGETS {
        let Some(fragment) = UrlParts::parse(t).unwrap().fragment else {
            continue;
        };
        for s in SOURCES {
            let merged = merge_queries(t, s);
            assert!(
                merged.ends_with(&format!("#{fragment}")),
                "{merged:?} lost fragment of {t:?}"
            );
        }
    }
}

#[test]
fn source_fragment_never_leaks() {
    let merged = merge_queries("/t", "https://old.example.com/p?campaign=spring#ignored");
    assert_eq!(merged, "/t?campaign=spring");
}

#[test]
fn documented_scenarios() {
    assert_eq!(
        merge_queries("https://example.com/page?a=1", "/page?a=2&b=3"),
        "https://example.com/page?a=1&b=3"
    );
    assert_eq!(
        merge_queries("https://example.com/page", "/x?utm_source=ads"),
        "https://example.com/page?utm_source=ads"
    );
    assert_eq!(
        merge_queries("/relative/path", "/y?ref=abc"),
        "/relative/path?ref=abc"
    );
    assert_eq!(merge_queries("", "/y?ref=abc"), "");
}
