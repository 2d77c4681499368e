//! Error type for URL component parsing.

use thiserror::Error;

/// Reasons a URL string could not be split into components.
///
/// These never escape the public entry points: the merger treats an
/// unparseable target as "leave it alone" and an unparseable source as
/// "no parameters to donate".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlParseError {
    /// Port was present but not a decimal number in `0..=65535`.
    #[error("invalid port {0:?}")]
    InvalidPort(String),
    /// IPv6 literal opened with `[` but never closed.
    #[error("unterminated IPv6 literal in authority {0:?}")]
    UnterminatedIpv6(String),
    /// Authority carried a port or user info but no host.
    #[error("authority {0:?} has no host")]
    MissingHost(String),
}
