use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NodeflowError, Result};

/// Connection settings for the backend workflow service.
///
/// The bearer token is attached by the surrounding application; the engine
/// only needs somewhere to read it from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token for authenticated endpoints.
    #[serde(default)]
    pub token: Option<String>,
    /// Request timeout for bridge calls, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Load the config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|_| NodeflowError::ConfigNotFound(path.display().to_string()))?;

        toml::from_str(&content).map_err(|e| NodeflowError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(config.token.is_none());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ApiConfig = toml::from_str(r#"base_url = "https://api.example.com""#).unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_missing_file() {
        let err = ApiConfig::load(Path::new("/nonexistent/nodeflow.toml")).unwrap_err();
        assert!(matches!(err, NodeflowError::ConfigNotFound(_)));
    }
}
