//! HTTP plumbing for the registry client.
//!
//! # Design
//! Requests and responses are plain data. `RegistryClient` builds an
//! `HttpRequest` and parses an `HttpResponse` without touching the network;
//! the `Transport` trait is the one seam where I/O happens. `UreqTransport`
//! is the default, and tests can swap in a stub that returns canned bytes.

use std::time::Duration;

use thiserror::Error;

/// HTTP method for a request. The registry's public API is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data. `body` is the raw payload.
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// First value of the header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Failure reported by a `Transport` before a complete response was received.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] ureq::Error),

    /// The response arrived but its body is over the configured limit.
    #[error("response body exceeds {limit} bytes")]
    BodyTooLarge { limit: u64 },

    #[error("{0}")]
    Other(String),
}

/// Executes one `HttpRequest`.
///
/// Implementations are shared between threads by `RegistryClient`, so they
/// must be safe to call concurrently. Non-2xx responses are returned as data,
/// not as errors.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Blocking transport backed by a shared `ureq::Agent`.
///
/// The agent's connection pool is reused across calls. With a timeout set,
/// every request is aborted once it runs past the deadline. Bodies are read
/// in full up to `max_body_bytes`; `None` means no cap.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    max_body_bytes: u64,
}

impl UreqTransport {
    pub fn new(timeout: Option<Duration>, max_body_bytes: Option<u64>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self {
            agent,
            max_body_bytes: max_body_bytes.unwrap_or(u64::MAX),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.agent.get(&request.url),
        };
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        let mut response = builder.call()?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let limit = self.max_body_bytes;
        let body = response
            .body_mut()
            .with_config()
            .limit(limit)
            .read_to_vec()
            .map_err(|e| match e {
                ureq::Error::BodyExceedsLimit(_) => TransportError::BodyTooLarge { limit },
                other => TransportError::Http(other),
            })?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_names_match_the_wire() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
    }

    #[test]
    fn header_lookup_ignores_case() {
        let response = HttpResponse {
            status: 200,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Vec::new(),
        };
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("content-length"), None);
    }

    #[test]
    fn body_too_large_reports_the_limit() {
        let err = TransportError::BodyTooLarge { limit: 1024 };
        assert_eq!(err.to_string(), "response body exceeds 1024 bytes");
    }

    #[test]
    fn other_transport_error_displays_its_message() {
        let err = TransportError::Other("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn unreachable_host_is_a_transport_error() {
        let transport = UreqTransport::new(Some(Duration::from_secs(2)), None);
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: "http://127.0.0.1:1/certificate-actions?date=2001-05-18".to_string(),
            headers: Vec::new(),
        };
        assert!(transport.execute(&request).is_err());
    }
}
