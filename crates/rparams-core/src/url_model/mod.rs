//! URL modeling: component splitting, reassembly and query parameter sets.
//!
//! Works on relative references as well as absolute URLs, since redirect
//! targets and requested paths are frequently both.

mod error;
mod parts;
mod query;

pub use error::UrlParseError;
pub use parts::UrlParts;
pub use query::{QuerySet, QueryValue};

/// Query parameters of `url`, or an empty set if it has none or cannot be
/// split.
pub fn query_params(url: &str) -> QuerySet {
    match UrlParts::parse(url) {
        Ok(parts) => parts.query.map(QuerySet::parse).unwrap_or_default(),
        Err(err) => {
            tracing::debug!(url, error = %err, "could not split URL, treating as having no query");
            QuerySet::default()
        }
    }
}
