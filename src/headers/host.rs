//! Host / port binding resolution.
//!
//! # Responsibilities
//! - Read the `Host` header, falling back to the request URI authority
//! - Split host and port (IPv6 literals in brackets supported)
//! - Build the `http://host:port` base URL
//!
//! # Design Decisions
//! - A missing port is the http default (80)
//! - A malformed port is `InvalidFormat`, never silently dropped

use std::fmt;

use axum::http::{header::HOST, HeaderMap, Uri};

use crate::headers::HeaderError;

const DEFAULT_HTTP_PORT: u16 = 80;

/// Host and port the request was addressed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostBinding {
    pub host: String,
    pub port: u16,
}

impl HostBinding {
    /// Resolve the binding for a request.
    pub fn resolve(headers: &HeaderMap, uri: &Uri) -> Result<Self, HeaderError> {
        if let Some(value) = headers.get(HOST) {
            let raw = value
                .to_str()
                .map_err(|e| HeaderError::invalid(HOST.as_str(), String::from_utf8_lossy(value.as_bytes()), e))?;
            return Self::parse(raw);
        }

        if let Some(authority) = uri.authority() {
            return Ok(Self {
                host: authority.host().to_string(),
                port: authority.port_u16().unwrap_or(DEFAULT_HTTP_PORT),
            });
        }

        Err(HeaderError::missing(HOST.as_str()))
    }

    /// Parse a `Host` header value (`host`, `host:port`, `[v6]` or `[v6]:port`).
    pub fn parse(raw: &str) -> Result<Self, HeaderError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(HeaderError::missing(HOST.as_str()));
        }

        let separator = if value.starts_with('[') {
            let close = value
                .find(']')
                .ok_or_else(|| HeaderError::invalid(HOST.as_str(), raw, "unterminated IPv6 literal"))?;
            match &value[close + 1..] {
                "" => None,
                rest if rest.starts_with(':') => Some(close + 1),
                _ => return Err(HeaderError::invalid(HOST.as_str(), raw, "unexpected text after IPv6 literal")),
            }
        } else {
            value.rfind(':')
        };

        let (host, port) = match separator {
            Some(idx) => {
                let port = value[idx + 1..]
                    .parse::<u16>()
                    .map_err(|e| HeaderError::invalid(HOST.as_str(), raw, e))?;
                (&value[..idx], port)
            }
            None => (value, DEFAULT_HTTP_PORT),
        };

        if host.is_empty() {
            return Err(HeaderError::invalid(HOST.as_str(), raw, "empty host name"));
        }

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl fmt::Display for HostBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_parse_host_and_port() {
        let binding = HostBinding::parse("localhost:8080").unwrap();
        assert_eq!(binding.host, "localhost");
        assert_eq!(binding.port, 8080);
        assert_eq!(binding.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_parse_default_port() {
        let binding = HostBinding::parse("example.com").unwrap();
        assert_eq!(binding.base_url(), "http://example.com:80");
    }

    #[test]
    fn test_parse_ipv6() {
        let binding = HostBinding::parse("[::1]:3000").unwrap();
        assert_eq!(binding.host, "[::1]");
        assert_eq!(binding.port, 3000);

        let bare = HostBinding::parse("[::1]").unwrap();
        assert_eq!(bare.port, 80);

        assert!(HostBinding::parse("[::1").is_err());
    }

    #[test]
    fn test_parse_bad_port() {
        assert!(matches!(
            HostBinding::parse("localhost:http"),
            Err(HeaderError::InvalidFormat { .. })
        ));
        assert!(matches!(
            HostBinding::parse("localhost:70000"),
            Err(HeaderError::InvalidFormat { .. })
        ));
        assert!(matches!(
            HostBinding::parse("example.com:"),
            Err(HeaderError::InvalidFormat { .. })
        ));
        assert!(matches!(
            HostBinding::parse(":8080"),
            Err(HeaderError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_resolve_prefers_header() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("localhost:8080"));
        let uri: Uri = "http://other.example:9000/api/v1/getBaseUrl".parse().unwrap();

        let binding = HostBinding::resolve(&headers, &uri).unwrap();
        assert_eq!(binding.to_string(), "localhost:8080");
    }

    #[test]
    fn test_resolve_falls_back_to_uri() {
        let uri: Uri = "http://other.example:9000/api/v1/getBaseUrl".parse().unwrap();
        let binding = HostBinding::resolve(&HeaderMap::new(), &uri).unwrap();
        assert_eq!(binding.base_url(), "http://other.example:9000");
    }

    #[test]
    fn test_resolve_missing() {
        let uri: Uri = "/api/v1/getBaseUrl".parse().unwrap();
        assert_eq!(
            HostBinding::resolve(&HeaderMap::new(), &uri),
            Err(HeaderError::missing("host"))
        );
    }
}
