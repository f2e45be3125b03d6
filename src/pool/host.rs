//! Host entry abstraction.
//!
//! # Responsibilities
//! - Parse a configured `scheme://host[:port]` string
//! - Discard path, query, fragment and credentials
//! - Pre-build the URI components used to rewrite requests

use std::fmt;
use std::str::FromStr;

use http::uri::{Authority, Scheme};
use url::Url;

use crate::error::ConfigError;

/// A normalized upstream host: scheme, host and optional port.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostEntry {
    scheme: Scheme,
    authority: Authority,
    host: String,
    port: Option<u16>,
}

impl HostEntry {
    /// Parse and normalize a host string.
    ///
    /// Default ports are folded away (`https://h:443` becomes `https://h`).
    /// Only `http` and `https` are accepted since the entry is used to
    /// address HTTP requests.
    pub fn parse(entry: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(entry.trim())
            .map_err(|e| ConfigError::invalid_host(entry, e.to_string()))?;

        let scheme = match url.scheme() {
            "http" => Scheme::HTTP,
            "https" => Scheme::HTTPS,
            other => {
                return Err(ConfigError::invalid_host(
                    entry,
                    format!("unsupported scheme '{}'", other),
                ))
            }
        };

        let host = match url.host_str() {
            Some(h) if !h.is_empty() => h.to_string(),
            _ => return Err(ConfigError::invalid_host(entry, "missing host")),
        };

        let port = url.port();
        let authority = match port {
            Some(p) => Authority::from_str(&format!("{}:{}", host, p)),
            None => Authority::from_str(&host),
        }
        .map_err(|e| ConfigError::invalid_host(entry, e.to_string()))?;

        if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
            tracing::debug!(entry = %entry, "Ignoring path/query/fragment of host entry");
        }

        Ok(Self {
            scheme,
            authority,
            host,
            port,
        })
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Host name or IP literal (IPv6 literals keep their brackets).
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// `host[:port]`, as placed in the request URI.
    pub fn authority(&self) -> &Authority {
        &self.authority
    }
}

impl FromStr for HostEntry {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HostEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.authority)
    }
}
