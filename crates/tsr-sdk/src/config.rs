//! Channel configuration.
//!
//! Loaded from TOML; only `endpoint` is required.

use crate::error::SdkError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for reaching the analytics service over HTTP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Base URL of the analytics service (e.g., "http://localhost:8004")
    pub endpoint: String,

    /// Path the message batches are posted to
    #[serde(default = "default_messages_path")]
    pub messages_path: String,

    /// Request timeout in seconds; absent means wait indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Bearer token sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// User-Agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_messages_path() -> String {
    "/api/analytics/messages".to_string()
}

fn default_user_agent() -> String {
    format!("tsr-sdk/{}", env!("CARGO_PKG_VERSION"))
}

impl ChannelConfig {
    /// Create a configuration with defaults for everything but the endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            messages_path: default_messages_path(),
            timeout_secs: None,
            api_token: None,
            user_agent: default_user_agent(),
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SdkError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ChannelConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Full URL message batches are posted to
    pub fn messages_url(&self) -> Result<String, SdkError> {
        let invalid = |reason: String| SdkError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason,
        };

        let base = self.endpoint.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(invalid("endpoint is empty".to_string()));
        }

        let url = reqwest::Url::parse(base).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }

        let path = self.messages_path.trim();
        if path.starts_with('/') {
            Ok(format!("{}{}", base, path))
        } else {
            Ok(format!("{}/{}", base, path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ChannelConfig::new("http://localhost:8004");
        assert_eq!(config.messages_path, "/api/analytics/messages");
        assert!(config.timeout().is_none());
        assert!(config.api_token.is_none());
        assert!(config.user_agent.starts_with("tsr-sdk/"));
    }

    #[test]
    fn test_messages_url() {
        let config = ChannelConfig::new("http://localhost:8004/");
        assert_eq!(
            config.messages_url().unwrap(),
            "http://localhost:8004/api/analytics/messages"
        );

        let mut config = ChannelConfig::new("https://dma.example.com");
        config.messages_path = "relations".to_string();
        assert_eq!(
            config.messages_url().unwrap(),
            "https://dma.example.com/relations"
        );
    }

    #[test]
    fn test_invalid_endpoints() {
        assert!(matches!(
            ChannelConfig::new("").messages_url(),
            Err(SdkError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            ChannelConfig::new("not a url").messages_url(),
            Err(SdkError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            ChannelConfig::new("ftp://localhost").messages_url(),
            Err(SdkError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            endpoint = "http://10.0.0.5:8004"
            timeout_secs = 30
            api_token = "secret"
        "#;

        let config: ChannelConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.endpoint, "http://10.0.0.5:8004");
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.api_token.as_deref(), Some("secret"));
        assert_eq!(config.messages_path, "/api/analytics/messages");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint = \"http://localhost:9000\"").unwrap();

        let config = ChannelConfig::from_file(file.path()).unwrap();
        assert_eq!(config.endpoint, "http://localhost:9000");
    }

    #[test]
    fn test_from_missing_file() {
        let result = ChannelConfig::from_file("/nonexistent/channel.toml");
        assert!(matches!(result, Err(SdkError::ConfigRead(_))));
    }
}
