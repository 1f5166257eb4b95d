//! Configuration for the exam vault service

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable holding the generative-language API key
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";
/// Environment variable pointing at an optional TOML config file
pub const CONFIG_PATH_ENV: &str = "EXAM_VAULT_CONFIG";

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Blob and database locations
    #[serde(default)]
    pub storage: StorageConfig,
    /// Generative-language model configuration
    #[serde(default)]
    pub llm: LlmConfig,
}

impl AppConfig {
    /// Load configuration: defaults, then the TOML file named by
    /// `EXAM_VAULT_CONFIG` (if set), then environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(Path::new(path.trim()))?,
            _ => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Self::from_toml(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config file '{}': {}", path.display(), e)))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply overrides from an environment lookup function
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.llm.api_key = Some(key);
        }
        if let Some(host) = lookup("EXAM_VAULT_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("EXAM_VAULT_PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        if let Some(dir) = lookup("EXAM_VAULT_STATIC_DIR") {
            self.storage.static_dir = PathBuf::from(dir);
        }
        if let Some(db) = lookup("EXAM_VAULT_DATABASE") {
            self.storage.database_path = PathBuf::from(db);
        }
        if let Some(model) = lookup("EXAM_VAULT_MODEL") {
            self.llm.model = model;
        }
    }

    /// Validate all configuration fields, reporting every problem at once.
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();

        if self.server.port == 0 {
            errors.push("server port must be positive".to_string());
        }
        if self.server.max_upload_size == 0 {
            errors.push("max_upload_size must be positive".to_string());
        }
        if self.storage.static_dir.as_os_str().is_empty() {
            errors.push("static_dir must not be empty".to_string());
        }
        if self.llm.model.trim().is_empty() {
            errors.push("llm model must not be empty".to_string());
        }
        if self.llm.timeout_secs == 0 {
            errors.push("llm timeout_secs must be positive".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Config(errors.join("; ")))
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS (allow any origin, method and header)
    pub enable_cors: bool,
    /// Maximum upload size in bytes (default: 100MB)
    pub max_upload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            enable_cors: true,
            max_upload_size: 100 * 1024 * 1024, // 100MB
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Root of the blob tree, served under `/static`
    pub static_dir: PathBuf,
    /// SQLite database file holding question records
    pub database_path: PathBuf,
    /// Landing page served at `/`
    pub landing_page: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            database_path: PathBuf::from("exam_vault.db"),
            landing_page: PathBuf::from("frontend").join("index.html"),
        }
    }
}

/// Generative-language model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// API key; usually supplied through `GOOGLE_API_KEY`
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
    /// REST endpoint base URL
    pub base_url: String,
    /// Sampling temperature; the model default applies when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            temperature: None,
            timeout_secs: 60,
        }
    }
}

impl LlmConfig {
    /// The API key, or a configuration error if it was never supplied
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| Error::Config(format!("{} not found in environment or .env file", API_KEY_ENV)))
    }
}
