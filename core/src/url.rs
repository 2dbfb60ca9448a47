//! Host/path decomposition of `http://` URLs.
//!
//! # Design
//! The parser does exactly what the HTTP client needs and nothing more: strip
//! the scheme prefix, split host from path at the first `/`. No normalization,
//! no percent-decoding, and no port extraction — a host like
//! `example.com:8080` is handed to the resolver as-is.

use crate::error::PlatformError;

/// The only accepted scheme prefix, matched case-sensitively.
const SCHEME_PREFIX: &str = "http://";

/// The host/path decomposition of an `http://` URL.
///
/// Transient: constructed per request and discarded once the request
/// completes. `path` always starts with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    host: String,
    path: String,
}

impl ParsedUrl {
    /// Split `url` into host and path.
    ///
    /// Fails with `UnsupportedScheme` unless the input starts with the
    /// literal prefix `http://`. With no `/` after the prefix the path
    /// defaults to `/`; otherwise the path runs from the first `/` onward,
    /// verbatim.
    pub fn parse(url: &str) -> Result<Self, PlatformError> {
        let rest = url
            .strip_prefix(SCHEME_PREFIX)
            .ok_or(PlatformError::UnsupportedScheme)?;

        match rest.find('/') {
            None => Ok(Self {
                host: rest.to_string(),
                path: "/".to_string(),
            }),
            Some(slash) => Ok(Self {
                host: rest[..slash].to_string(),
                path: rest[slash..].to_string(),
            }),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}
