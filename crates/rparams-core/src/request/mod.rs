//! Where "the URL the visitor requested" comes from.
//!
//! Adapters never read ambient request state themselves; they take a
//! [`RequestedUrl`] supplied by the caller. [`RequestUrlResolver`] is the
//! usual one: it prefers the host redirection system's own accessor and
//! falls back to the raw `REQUEST_URI` from server request metadata.

mod sanitize;

pub use sanitize::sanitize_text_field;

use std::collections::HashMap;
use std::sync::Arc;

/// Server variable holding the raw request path and query.
pub const DEFAULT_REQUEST_URI_KEY: &str = "REQUEST_URI";

/// Source of the currently requested URL. An empty string means unknown.
pub trait RequestedUrl {
    fn requested_url(&self) -> String;
}

impl RequestedUrl for str {
    fn requested_url(&self) -> String {
        self.to_string()
    }
}

impl RequestedUrl for String {
    fn requested_url(&self) -> String {
        self.clone()
    }
}

/// Accessor exposed by the host redirection system, returning the URL it
/// matched against (after its own normalization).
pub type HostAccessor = Arc<dyn Fn() -> String + Send + Sync>;

/// Raw server request metadata (CGI-style variables).
#[derive(Debug, Clone)]
pub struct ServerRequest {
    vars: HashMap<String, String>,
    uri_key: String,
}

impl ServerRequest {
    pub fn new(vars: HashMap<String, String>) -> Self {
        Self {
            vars,
            uri_key: DEFAULT_REQUEST_URI_KEY.to_string(),
        }
    }

    /// Reads request metadata from the process environment, as a CGI
    /// gateway would pass it.
    pub fn from_env() -> Self {
        Self::new(std::env::vars().collect())
    }

    /// Uses `key` instead of `REQUEST_URI` to locate the raw path+query.
    pub fn with_uri_key(mut self, key: impl Into<String>) -> Self {
        self.uri_key = key.into();
        self
    }
}

impl Default for ServerRequest {
    fn default() -> Self {
        Self::new(HashMap::new())
    }
}

impl RequestedUrl for ServerRequest {
    fn requested_url(&self) -> String {
        self.vars
            .get(&self.uri_key)
            .map(|raw| sanitize_text_field(raw))
            .unwrap_or_default()
    }
}

/// Host accessor when the host provides one, server metadata otherwise.
///
/// The fallback is taken only when no accessor is installed; an accessor
/// that returns an empty string is trusted as "unknown".
#[derive(Clone, Default)]
pub struct RequestUrlResolver {
    host: Option<HostAccessor>,
    server: ServerRequest,
}

impl RequestUrlResolver {
    pub fn new(server: ServerRequest) -> Self {
        Self { host: None, server }
    }

    pub fn with_host_accessor<F>(mut self, accessor: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.host = Some(Arc::new(accessor));
        self
    }

    pub fn has_host_accessor(&self) -> bool {
        self.host.is_some()
    }
}

impl std::fmt::Debug for RequestUrlResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestUrlResolver")
            .field("host", &self.host.as_ref().map(|_| "<accessor>"))
            .field("server", &self.server)
            .finish()
    }
}

impl RequestedUrl for RequestUrlResolver {
    fn requested_url(&self) -> String {
        match &self.host {
            Some(accessor) => {
                tracing::trace!("requested URL from host accessor");
                accessor()
            }
            None => {
                tracing::trace!(key = %self.server.uri_key, "requested URL from server metadata");
                self.server.requested_url()
            }
        }
    }
}
