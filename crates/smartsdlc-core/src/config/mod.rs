//! Configuration management for SmartSDLC.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `smartsdlc.toml` file
//! 3. User config `~/.config/smartsdlc/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hosted model API configuration.
    pub upstream: UpstreamConfig,

    /// Feedback storage configuration.
    pub storage: StorageConfig,

    /// HTTP server configuration.
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./smartsdlc.toml` (project local)
    /// 2. `~/.config/smartsdlc/config.toml` (user config)
    /// 3. Falls back to defaults
    ///
    /// Environment overrides are applied in every case.
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new("smartsdlc.toml").exists() {
            return Self::from_file("smartsdlc.toml");
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("smartsdlc").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        // Upstream overrides
        if let Ok(key) = std::env::var("API_KEY") {
            self.upstream.api_key = Some(key);
        }
        if let Ok(project) = std::env::var("PROJECT_ID") {
            self.upstream.project_id = project;
        }
        if let Ok(url) = std::env::var("SMARTSDLC_BASE_URL") {
            self.upstream.base_url = url;
        }
        if let Ok(url) = std::env::var("SMARTSDLC_IDENTITY_URL") {
            self.upstream.identity_url = url;
        }
        if let Ok(model) = std::env::var("SMARTSDLC_MODEL_ID") {
            self.upstream.model_id = model;
        }
        if let Ok(model) = std::env::var("SMARTSDLC_CHAT_MODEL_ID") {
            self.upstream.chat_model_id = model;
        }

        // Storage overrides
        if let Ok(dir) = std::env::var("SMARTSDLC_DATA_DIR") {
            self.storage.data_dir = dir;
        }

        // Server overrides
        if let Ok(host) = std::env::var("SMARTSDLC_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("SMARTSDLC_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("SMARTSDLC_PORT is not a port: {port}")))?;
        }

        Ok(())
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Hosted model API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// API key exchanged for bearer tokens (usually set via `API_KEY`).
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Project the requests are billed against.
    pub project_id: String,

    /// Base URL of the chat API.
    pub base_url: String,

    /// Identity endpoint for the API key grant.
    pub identity_url: String,

    /// `version` query parameter of the chat API.
    pub api_version: String,

    /// Model used by the code-oriented features.
    pub model_id: String,

    /// Model used by the chat feature.
    pub chat_model_id: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_key: None, // Load from env
            project_id: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            identity_url: DEFAULT_IDENTITY_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            chat_model_id: DEFAULT_CHAT_MODEL_ID.to_string(),
        }
    }
}

impl UpstreamConfig {
    /// Full URL of the chat completion endpoint.
    pub fn chat_url(&self) -> String {
        format!(
            "{}/ml/v1/text/chat?version={}",
            self.base_url.trim_end_matches('/'),
            self.api_version
        )
    }

    /// Model id for a feature profile.
    pub fn model_for(&self, profile: &FeatureProfile) -> &str {
        if profile.chat_model {
            &self.chat_model_id
        } else {
            &self.model_id
        }
    }
}

/// Feedback storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the feedback file.
    pub data_dir: String,

    /// Feedback file name.
    pub feedback_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            feedback_file: DEFAULT_FEEDBACK_FILE.to_string(),
        }
    }
}

impl StorageConfig {
    /// Get the full path to the feedback file.
    pub fn feedback_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.feedback_file)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum request body size in bytes.
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}
