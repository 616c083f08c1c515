//! Client configuration: base address, identifying header and limits for
//! the default transport.

use std::time::Duration;

use url::Url;

use crate::error::RegistryError;

/// Public-register API root of the REC Registry.
pub const DEFAULT_BASE_URL: &str = "http://rec-registry.gov.au/rec-registry/app/api/public-register/";

/// User-Agent sent with every request unless overridden.
pub const DEFAULT_USER_AGENT: &str = "recreg-rs";

/// Fixed settings for a `RegistryClient`. Immutable once the client is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root that resource paths are joined onto.
    pub base_url: Url,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Deadline for a whole request when the default transport is used.
    pub timeout: Option<Duration>,
    /// Largest response body the default transport reads. `None` is no cap.
    pub max_body_bytes: Option<u64>,
}

impl ClientConfig {
    /// Configuration pointing at `base_url` with the default user agent.
    pub fn new(base_url: &str) -> Result<Self, RegistryError> {
        let parsed = Url::parse(base_url).map_err(|e| RegistryError::config(base_url, e))?;
        if parsed.cannot_be_a_base() {
            return Err(RegistryError::config(base_url, "URL cannot be used as a base"));
        }
        Ok(Self {
            base_url: parsed,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            max_body_bytes: None,
        })
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: u64) -> Self {
        self.max_body_bytes = Some(max_body_bytes);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid absolute URL")
    }
}
