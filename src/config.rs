//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::analysis::AnalysisConfig as RuntimeAnalysisConfig;
use crate::api::ApiConfig as RuntimeApiConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:8084".to_string(),
        "http://127.0.0.1:8084".to_string(),
    ]
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl From<&ApiConfig> for RuntimeApiConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
            cors_origins: config.cors_origins.clone(),
        }
    }
}

/// Mock analysis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Simulated processing time per request
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_delay_ms() -> u64 {
    2000
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

impl From<&AnalysisConfig> for RuntimeAnalysisConfig {
    fn from(config: &AnalysisConfig) -> Self {
        RuntimeAnalysisConfig::with_delay_ms(config.delay_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Whether structured JSON output was requested
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }

    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    pub fn filter_directive(&self) -> String {
        format!("basewatch={level},tower_http={level}", level = self.level)
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("basewatch").join("config.toml")),
            Some(PathBuf::from("/etc/basewatch/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Runtime API server settings
    pub fn api_config(&self) -> RuntimeApiConfig {
        RuntimeApiConfig::from(&self.api)
    }

    /// Runtime analyzer settings
    pub fn analysis_config(&self) -> RuntimeAnalysisConfig {
        RuntimeAnalysisConfig::from(&self.analysis)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(host) = lookup("BASEWATCH_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("BASEWATCH_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }
        if let Some(origins) = lookup("BASEWATCH_CORS_ORIGINS") {
            self.api.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }

        // Analysis overrides
        if let Some(delay) = lookup("BASEWATCH_ANALYSIS_DELAY_MS") {
            if let Ok(ms) = delay.parse() {
                self.analysis.delay_ms = ms;
            }
        }

        // Logging overrides
        if let Some(level) = lookup("BASEWATCH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("BASEWATCH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Basewatch Configuration
#
# Environment variables override these settings:
# - BASEWATCH_API_HOST
# - BASEWATCH_API_PORT
# - BASEWATCH_CORS_ORIGINS (comma separated)
# - BASEWATCH_ANALYSIS_DELAY_MS
# - BASEWATCH_LOG_LEVEL
# - BASEWATCH_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8082

# Allowed CORS origins (empty list allows any origin)
cors_origins = ["http://localhost:8084", "http://127.0.0.1:8084"]

[analysis]
# Simulated processing time for each analysis request (ms)
delay_ms = 2000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.api.port, 8082);
        assert_eq!(config.api.cors_origins.len(), 2);
        assert_eq!(config.analysis.delay_ms, 2000);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_generated_config_round_trips_to_defaults() {
        let parsed: Config = toml::from_str(&generate_default_config()).unwrap();
        let defaults = Config::default();

        assert_eq!(parsed.api.host, defaults.api.host);
        assert_eq!(parsed.api.port, defaults.api.port);
        assert_eq!(parsed.api.cors_origins, defaults.api.cors_origins);
        assert_eq!(parsed.analysis.delay_ms, defaults.analysis.delay_ms);
        assert_eq!(parsed.logging.format, defaults.logging.format);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[analysis]\ndelay_ms = 10\n\n[logging]\nformat = \"json\"").unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.analysis.delay_ms, 10);
        assert!(config.logging.is_json());
        assert_eq!(config.api.port, 8082);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nport = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("BASEWATCH_API_PORT", "9090"),
            ("BASEWATCH_CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("BASEWATCH_ANALYSIS_DELAY_MS", "0"),
            ("BASEWATCH_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.port, 9090);
        assert_eq!(config.api.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.analysis.delay_ms, 0);
        assert_eq!(config.logging.filter_directive(), "basewatch=debug,tower_http=debug");
    }

    #[test]
    fn test_invalid_numeric_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "BASEWATCH_API_PORT" => Some("not-a-port".to_string()),
            _ => None,
        });

        assert_eq!(config.api.port, 8082);
    }

    #[test]
    fn test_runtime_conversions() {
        let mut config = Config::default();
        config.api.port = 7000;
        config.analysis.delay_ms = 125;

        assert_eq!(config.api_config().addr(), "0.0.0.0:7000");
        assert_eq!(config.analysis_config().delay, Duration::from_millis(125));
    }
}
