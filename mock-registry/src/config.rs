use crate::error::MockError;

/// Path the real registry serves its public-register API under.
pub const DEFAULT_BASE_PATH: &str = "/rec-registry/app/api/public-register";

#[derive(Debug, Clone)]
pub struct MockConfig {
    pub port: u16,
    pub base_path: String,
}

impl MockConfig {
    pub fn from_env() -> Result<Self, MockError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, MockError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| MockError::config("PORT must be a valid number"))?,
            None => 3000,
        };

        let base_path = lookup("MOCK_REGISTRY_BASE_PATH")
            .map(|v| normalize_base_path(&v))
            .unwrap_or_else(|| DEFAULT_BASE_PATH.to_string());

        Ok(Self { port, base_path })
    }
}

/// Leading slash, no trailing slash. The root path becomes the empty string.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_defaults() {
        let config = MockConfig::from_lookup(|_| None).expect("config should be valid");
        assert_eq!(config.port, 3000);
        assert_eq!(config.base_path, DEFAULT_BASE_PATH);
    }

    #[test]
    fn rejects_invalid_port() {
        let result = MockConfig::from_lookup(|key| match key {
            "PORT" => Some("http".to_string()),
            _ => None,
        });
        assert_eq!(
            result.unwrap_err().to_string(),
            "invalid configuration: PORT must be a valid number"
        );
    }

    #[test]
    fn normalizes_base_path() {
        assert_eq!(normalize_base_path("api/v1/"), "/api/v1");
        assert_eq!(normalize_base_path("/"), "");
        assert_eq!(normalize_base_path(" /registry "), "/registry");
    }
}
