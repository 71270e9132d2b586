//! Configuration management
//!
//! This module handles loading and parsing configuration for the admin console backend.
//! Configuration can be loaded from:
//! - config.yml file
//! - Environment variables (override file settings)
//!
//! Missing optional values are filled with sensible defaults.

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Pagination defaults for list screens
    #[serde(default)]
    pub pagination: PaginationConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS allowed origin (the console front-end)
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "http://localhost:3000".to_string()
}

/// Pagination configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when a request does not specify one
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    /// Largest page size a list may request
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

fn default_page_size() -> u32 {
    10
}

fn default_max_page_size() -> u32 {
    100
}

/// Error type for configuration parsing
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {message}")]
    ParseError {
        path: String,
        message: String,
    },
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

impl Config {
    /// Load configuration from file
    ///
    /// If the file doesn't exist, returns default configuration.
    /// If the file exists but is invalid YAML, returns an error with details.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&content).map_err(|e| {
            ConfigError::ParseError {
                path: path.display().to_string(),
                message: format_yaml_error(&e),
            }
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file with environment variable overrides
    ///
    /// Environment variables follow the pattern:
    /// - BAZAAR_SERVER_HOST
    /// - BAZAAR_SERVER_PORT
    /// - BAZAAR_SERVER_CORS_ORIGIN
    /// - BAZAAR_PAGINATION_DEFAULT_PAGE_SIZE
    /// - BAZAAR_PAGINATION_MAX_PAGE_SIZE
    pub fn load_with_env(path: &std::path::Path) -> anyhow::Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pagination = &self.pagination;
        if pagination.default_page_size == 0 {
            return Err(ConfigError::ValidationError(
                "pagination.default_page_size must be at least 1".to_string(),
            ));
        }
        if pagination.max_page_size == 0 {
            return Err(ConfigError::ValidationError(
                "pagination.max_page_size must be at least 1".to_string(),
            ));
        }
        if pagination.default_page_size > pagination.max_page_size {
            return Err(ConfigError::ValidationError(format!(
                "pagination.default_page_size ({}) exceeds max_page_size ({})",
                pagination.default_page_size, pagination.max_page_size
            )));
        }
        Ok(())
    }

    /// Apply environment variable overrides to the configuration
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("BAZAAR_SERVER_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("BAZAAR_SERVER_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                self.server.port = port;
            }
        }
        if let Ok(cors_origin) = std::env::var("BAZAAR_SERVER_CORS_ORIGIN") {
            self.server.cors_origin = cors_origin;
        }

        if let Ok(size) = std::env::var("BAZAAR_PAGINATION_DEFAULT_PAGE_SIZE") {
            if let Ok(size) = size.parse::<u32>() {
                self.pagination.default_page_size = size;
            }
        }
        if let Ok(size) = std::env::var("BAZAAR_PAGINATION_MAX_PAGE_SIZE") {
            if let Ok(size) = size.parse::<u32>() {
                self.pagination.max_page_size = size;
            }
        }
    }
}

/// Format YAML parsing error with location and context
fn format_yaml_error(e: &serde_yaml::Error) -> String {
    if let Some(location) = e.location() {
        format!(
            "at line {}, column {}: {}",
            location.line(),
            location.column(),
            e
        )
    } else {
        e.to_string()
    }
}

// Shared mutex for all config tests that modify environment variables.
#[cfg(test)]
static CONFIG_ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
const ENV_VARS: [&str; 5] = [
    "BAZAAR_SERVER_HOST",
    "BAZAAR_SERVER_PORT",
    "BAZAAR_SERVER_CORS_ORIGIN",
    "BAZAAR_PAGINATION_DEFAULT_PAGE_SIZE",
    "BAZAAR_PAGINATION_MAX_PAGE_SIZE",
];

#[cfg(test)]
fn clear_env() {
    for var in ENV_VARS {
        std::env::remove_var(var);
    }
}
