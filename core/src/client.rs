//! Registry client: request building, transport and response parsing.
//!
//! # Design
//! `RegistryClient` holds an immutable `ClientConfig` and a shared
//! `Transport`. `list_actions` is split into `build_list_actions`, which
//! produces an `HttpRequest`, and `parse_list_actions`, which consumes an
//! `HttpResponse`. Both halves are pure; only the transport does I/O. The
//! client carries no per-call state, so one instance can be cloned or shared
//! across threads freely.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::ClientConfig;
use crate::decode::decode_actions;
use crate::error::RegistryError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError, UreqTransport};
use crate::request::build_url;
use crate::types::{Action, ISO8601_DATE};

/// Resource path of the certificate-actions endpoint.
pub const CERTIFICATE_ACTIONS: &str = "certificate-actions";

/// Client for the REC Registry public-register API.
#[derive(Clone)]
pub struct RegistryClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for RegistryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RegistryClient {
    /// Client with the default configuration. Without a transport a
    /// `UreqTransport` is used.
    pub fn new(transport: Option<Arc<dyn Transport>>) -> Self {
        Self::with_config(ClientConfig::default(), transport)
    }

    pub fn with_config(config: ClientConfig, transport: Option<Arc<dyn Transport>>) -> Self {
        let transport: Arc<dyn Transport> = match transport {
            Some(transport) => transport,
            None => Arc::new(UreqTransport::new(config.timeout, config.max_body_bytes)),
        };
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Certificate actions completed on `date`.
    ///
    /// Dates before `FIRST_DATE` are forwarded unchanged; whatever the
    /// registry answers is returned.
    pub fn list_actions(&self, date: NaiveDate) -> Result<Vec<Action>, RegistryError> {
        let request = self.build_list_actions(date);
        tracing::debug!(url = %request.url, "requesting certificate actions");

        let response = self.transport.execute(&request).map_err(|source| {
            tracing::warn!(url = %request.url, error = %source, "registry request failed");
            match source {
                TransportError::BodyTooLarge { limit } => RegistryError::BodyTooLarge {
                    url: request.url.clone(),
                    limit,
                },
                source => RegistryError::Transport {
                    url: request.url.clone(),
                    source,
                },
            }
        })?;

        self.parse_list_actions(response)
    }

    pub fn build_list_actions(&self, date: NaiveDate) -> HttpRequest {
        let date = date.format(ISO8601_DATE).to_string();
        let url = build_url(&self.config.base_url, CERTIFICATE_ACTIONS, &[("date", date)]);
        HttpRequest {
            method: HttpMethod::Get,
            url: url.into(),
            headers: vec![("User-Agent".to_string(), self.config.user_agent.clone())],
        }
    }

    /// Decode a certificate-actions response. The HTTP status is only logged;
    /// the body decides the outcome.
    pub fn parse_list_actions(&self, response: HttpResponse) -> Result<Vec<Action>, RegistryError> {
        tracing::debug!(
            status = response.status,
            content_type = response.header("content-type").unwrap_or(""),
            bytes = response.body.len(),
            "received registry response"
        );
        decode_actions(&response.body)
    }
}

impl Default for RegistryClient {
    fn default() -> Self {
        Self::new(None)
    }
}
