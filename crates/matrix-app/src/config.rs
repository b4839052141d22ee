use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::Result;

/// Default request timeout for the statistics service, in seconds
pub const DEFAULT_STATS_TIMEOUT_SECS: u64 = 10;

/// Main configuration, loaded once at startup and shared read-only
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Statistics service configuration
    #[serde(default)]
    pub stats: StatsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Base URL of the stats service, without the `/matrix/stats` path
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            timeout_secs: DEFAULT_STATS_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Config pointing at the given stats service, defaults elsewhere
    pub fn with_stats_url(base_url: impl Into<String>) -> Self {
        Self {
            stats: StatsConfig {
                base_url: base_url.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Load config from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.check()?;
        Ok(config)
    }

    /// Save config to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the server cannot run with
    pub fn check(&self) -> Result<()> {
        if self.stats.base_url.trim().is_empty() {
            return Err(crate::Error::Config("stats.base_url must not be empty".into()));
        }
        if self.stats.timeout_secs == 0 {
            return Err(crate::Error::Config(
                "stats.timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Get the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Full URL of the stats endpoint
    pub fn stats_url(&self) -> String {
        format!("{}/matrix/stats", self.stats.base_url.trim_end_matches('/'))
    }

    pub fn stats_timeout(&self) -> Duration {
        Duration::from_secs(self.stats.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server_addr(), "127.0.0.1:3000");
        assert_eq!(config.stats_url(), "http://localhost:3001/matrix/stats");
        assert_eq!(config.stats_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_stats_url_trailing_slash() {
        let config = Config::with_stats_url("http://stats.internal:8080/");
        assert_eq!(config.stats_url(), "http://stats.internal:8080/matrix/stats");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::with_stats_url("http://10.0.0.5:3001");
        config.server.port = 8088;
        config.save(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"server": {"host": "0.0.0.0", "port": 9000}}"#).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.server_addr(), "0.0.0.0:9000");
        assert_eq!(loaded.stats, StatsConfig::default());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"stats": {"base_url": "http://localhost:3001", "timeout_secs": 0}}"#,
        )
        .unwrap();

        assert!(matches!(
            Config::from_file(&path),
            Err(crate::Error::Config(_))
        ));
    }
}
