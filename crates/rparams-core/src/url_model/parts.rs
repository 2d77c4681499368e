//! Splitting a URL string into its RFC 3986 components.
//!
//! Unlike `url::Url`, this accepts relative references (`/path?q`, `?q`,
//! `#frag`) and does no normalization, so the pieces can be glued back
//! together without changing anything the caller did not ask to change.

use super::UrlParseError;

/// Borrowed view of the components of a URL or relative reference.
///
/// A component is `None` when it is absent from the input. `host` is
/// `Some("")` for an empty authority such as `file:///etc/hosts`, and
/// `fragment` is `Some("")` for a trailing bare `#`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlParts<'a> {
    pub scheme: Option<&'a str>,
    pub user_info: Option<&'a str>,
    pub host: Option<&'a str>,
    pub port: Option<u16>,
    pub path: Option<&'a str>,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> UrlParts<'a> {
    /// Splits `input` into components.
    ///
    /// Fails only when the authority is unusable (bad port, unterminated
    /// IPv6 literal, port or user info without a host).
    pub fn parse(input: &'a str) -> Result<Self, UrlParseError> {
        let mut parts = UrlParts::default();

        let rest = match input.split_once('#') {
            Some((before, fragment)) => {
                parts.fragment = Some(fragment);
                before
            }
            None => input,
        };

        let rest = match rest.split_once('?') {
            Some((before, query)) => {
                parts.query = Some(query);
                before
            }
            None => rest,
        };

        let rest = match split_scheme(rest) {
            Some((scheme, after)) => {
                parts.scheme = Some(scheme);
                after
            }
            None => rest,
        };

        let path = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after.find('/').unwrap_or(after.len());
                let (user_info, host, port) = parse_authority(&after[..end])?;
                parts.user_info = user_info;
                parts.host = Some(host);
                parts.port = port;
                &after[end..]
            }
            None => rest,
        };

        if !path.is_empty() {
            parts.path = Some(path);
        }

        Ok(parts)
    }

    /// True when the reference carries a scheme or an authority, i.e. it can
    /// be rebuilt from components alone.
    pub fn is_absolute(&self) -> bool {
        self.scheme.is_some() || self.host.is_some()
    }
}

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )` followed by `:`.
fn split_scheme(s: &str) -> Option<(&str, &str)> {
    let (candidate, rest) = s.split_once(':')?;
    let mut chars = candidate.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some((candidate, rest))
    } else {
        None
    }
}

type Authority<'a> = (Option<&'a str>, &'a str, Option<u16>);

fn parse_authority(authority: &str) -> Result<Authority<'_>, UrlParseError> {
    let (user_info, host_port) = match authority.rfind('@') {
        Some(at) => (Some(&authority[..at]), &authority[at + 1..]),
        None => (None, authority),
    };

    let (host, port) = if host_port.starts_with('[') {
        let close = host_port
            .find(']')
            .ok_or_else(|| UrlParseError::UnterminatedIpv6(authority.to_string()))?;
        let after = &host_port[close + 1..];
        let port = if after.is_empty() {
            None
        } else {
            match after.strip_prefix(':') {
                Some(port) => Some(port),
                None => return Err(UrlParseError::InvalidPort(after.to_string())),
            }
        };
        (&host_port[..=close], port)
    } else {
        match host_port.rfind(':') {
            Some(colon) => (&host_port[..colon], Some(&host_port[colon + 1..])),
            None => (host_port, None),
        }
    };

    let port = match port {
        None | Some("") => None,
        Some(p) if p.bytes().all(|b| b.is_ascii_digit()) => Some(
            p.parse::<u16>()
                .map_err(|_| UrlParseError::InvalidPort(p.to_string()))?,
        ),
        Some(p) => return Err(UrlParseError::InvalidPort(p.to_string())),
    };

    if host.is_empty() && (port.is_some() || user_info.is_some()) {
        return Err(UrlParseError::MissingHost(authority.to_string()));
    }

    Ok((user_info, host, port))
}
