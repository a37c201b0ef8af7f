//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub pages: PagesConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Application identity shared by every page title
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
}

fn default_app_name() -> String {
    "Orderdesk".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_path")]
    pub path: String,
}

fn default_database_path() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("orderdesk").join("orderdesk.db").to_string_lossy().to_string())
        .unwrap_or_else(|| "./orderdesk.db".to_string())
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

/// Page rendering configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PagesConfig {
    /// Require a session cookie on dashboard routes
    #[serde(default)]
    pub dashboard_guard: bool,

    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
}

fn default_session_cookie() -> String {
    "orderdesk_session".to_string()
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            dashboard_guard: false,
            session_cookie: default_session_cookie(),
        }
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

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Default config file locations, in search order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("orderdesk").join("config.toml")),
            Some(PathBuf::from("/etc/orderdesk/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load from default locations or environment
    ///
    /// Returns the path the config came from, `None` when only the
    /// environment was used. A file that exists but fails to load is an error.
    pub fn load_default() -> Result<(Self, Option<PathBuf>), ConfigError> {
        Self::load_first(&Self::default_paths())
    }

    /// Load the first existing file among `paths`, falling back to the environment
    pub fn load_first(paths: &[PathBuf]) -> Result<(Self, Option<PathBuf>), ConfigError> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => Ok((Self::load_with_env(path)?, Some(path.clone()))),
            None => Ok((Self::from_env()?, None)),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("ORDERDESK_APP_NAME") {
            self.app.name = name;
        }

        if let Some(host) = lookup("ORDERDESK_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("ORDERDESK_API_PORT") {
            self.api.port = port.parse().map_err(|_| ConfigError::InvalidOverride {
                key: "ORDERDESK_API_PORT".to_string(),
                value: port.clone(),
            })?;
        }

        if let Some(path) = lookup("ORDERDESK_DATABASE_PATH") {
            self.database.path = path;
        }

        if let Some(guard) = lookup("ORDERDESK_DASHBOARD_GUARD") {
            self.pages.dashboard_guard = guard.to_lowercase() == "true" || guard == "1";
        }

        if let Some(level) = lookup("ORDERDESK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("ORDERDESK_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidOverride { key: String, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Orderdesk Configuration
#
# Environment variables override these settings:
# - ORDERDESK_APP_NAME
# - ORDERDESK_API_HOST
# - ORDERDESK_API_PORT
# - ORDERDESK_DATABASE_PATH
# - ORDERDESK_DASHBOARD_GUARD
# - ORDERDESK_LOG_LEVEL
# - ORDERDESK_LOG_FORMAT

[app]
# Shown in every page title
name = "Orderdesk"

[api]
host = "0.0.0.0"
port = 3000

[database]
# SQLite database file
path = "./orderdesk.db"

[pages]
# Redirect dashboard requests without a session cookie to the login page
dashboard_guard = false
session_cookie = "orderdesk_session"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
