//! Client configuration
//!
//! A config names one TPF endpoint. It can be built in code, loaded from
//! YAML, and overridden from the environment:
//!
//! ```yaml
//! endpoint: https://vivo.metabolomics.info/tpf/core
//! cache_ttl_ms: 30000
//! request_timeout_ms: 10000
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{TpfError, TpfResult};

/// Default validity window of a cached resource
pub const DEFAULT_CACHE_TTL_MS: u64 = 30_000;

/// Default upper bound on pages followed for one pattern
pub const DEFAULT_MAX_PAGES: usize = 10_000;

/// Path at which TPF servers conventionally expose the core dataset
pub const DEFAULT_ENDPOINT_PATH: &str = "/tpf/core";

/// Configuration for a `TpfClient`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// URL of the TPF server
    pub endpoint: String,
    /// How long a cached resource stays valid
    #[serde(default = "default_cache_ttl_ms")]
    pub cache_ttl_ms: u64,
    /// Per-request timeout for the HTTP transport (none by default)
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
    /// Connect timeout for the HTTP transport (none by default)
    #[serde(default)]
    pub connect_timeout_ms: Option<u64>,
    /// Maximum number of pages followed for a single pattern
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
}

fn default_cache_ttl_ms() -> u64 {
    DEFAULT_CACHE_TTL_MS
}

fn default_max_pages() -> usize {
    DEFAULT_MAX_PAGES
}

impl ClientConfig {
    /// Create a config for `endpoint` with default settings
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            cache_ttl_ms: DEFAULT_CACHE_TTL_MS,
            request_timeout_ms: None,
            connect_timeout_ms: None,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Config for the conventional endpoint on a host, e.g.
    /// `https://example.org` → `https://example.org/tpf/core`
    pub fn for_host(base_url: &str) -> Self {
        Self::new(format!(
            "{}{}",
            base_url.trim_end_matches('/'),
            DEFAULT_ENDPOINT_PATH
        ))
    }

    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> TpfResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> TpfResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Apply `TPF_ENDPOINT` and `TPF_CACHE_TTL_MS` when set
    pub fn with_env_overrides(mut self) -> TpfResult<Self> {
        if let Ok(endpoint) = std::env::var("TPF_ENDPOINT") {
            self.endpoint = endpoint;
        }
        if let Ok(ttl) = std::env::var("TPF_CACHE_TTL_MS") {
            self.cache_ttl_ms = ttl
                .parse()
                .map_err(|_| TpfError::Config(format!("invalid TPF_CACHE_TTL_MS: {}", ttl)))?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl_ms = ttl.as_millis() as u64;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_ms = Some(timeout.as_millis() as u64);
        self
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Check the config is usable
    pub fn validate(&self) -> TpfResult<()> {
        if self.endpoint.trim().is_empty() {
            return Err(TpfError::Config("endpoint must not be empty".to_string()));
        }
        if self.max_pages == 0 {
            return Err(TpfError::Config("max_pages must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("http://localhost/tpf/core");
        assert_eq!(config.cache_ttl_ms, 30_000);
        assert_eq!(config.request_timeout_ms, None);
        assert_eq!(config.max_pages, DEFAULT_MAX_PAGES);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_helpers() {
        let config = ClientConfig::new("http://x/tpf/core")
            .with_cache_ttl(Duration::from_secs(5))
            .with_request_timeout(Duration::from_millis(1500))
            .with_max_pages(3);
        assert_eq!(config.cache_ttl_ms, 5_000);
        assert_eq!(config.request_timeout_ms, Some(1500));
        assert_eq!(config.max_pages, 3);
        assert!(config.with_max_pages(0).validate().is_err());
    }

    #[test]
    fn test_for_host() {
        let config = ClientConfig::for_host("https://example.org/");
        assert_eq!(config.endpoint, "https://example.org/tpf/core");
    }

    #[test]
    fn test_yaml_defaults_fill_in() {
        let config = ClientConfig::from_yaml_str("endpoint: http://x/tpf/core\n").unwrap();
        assert_eq!(config.cache_ttl_ms, DEFAULT_CACHE_TTL_MS);
        assert_eq!(config.max_pages, DEFAULT_MAX_PAGES);
    }

    #[test]
    fn test_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint: http://x/tpf/core").unwrap();
        writeln!(file, "cache_ttl_ms: 500").unwrap();
        writeln!(file, "request_timeout_ms: 2000").unwrap();

        let config = ClientConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.cache_ttl(), Duration::from_millis(500));
        assert_eq!(config.request_timeout_ms, Some(2000));
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            ClientConfig::from_yaml_str("endpoint: ''\n"),
            Err(TpfError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::from_yaml_str("cache_ttl_ms: 5\n"),
            Err(TpfError::Yaml(_))
        ));
    }
}
