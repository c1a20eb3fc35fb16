// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::infra::paths;

/// Environment override for the answer service base URL.
pub const SERVICE_URL_ENV: &str = "HAQOOQ_SERVICE_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_chat_path")]
    pub chat_path: String,
    /// Unset means the client waits until the transport resolves.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            chat_path: default_chat_path(),
            timeout_seconds: None,
        }
    }
}

impl ServiceConfig {
    /// Full URL of the chat endpoint.
    pub fn chat_url(&self) -> String {
        self.join(&self.chat_path)
    }

    /// Join a path onto the base URL without doubling slashes.
    pub fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

fn default_base_url() -> String {
    "http://localhost:8001".into()
}

fn default_chat_path() -> String {
    "/chat".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_timestamps: bool,
    #[serde(default = "default_example_questions")]
    pub example_questions: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_timestamps: true,
            example_questions: default_example_questions(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_example_questions() -> Vec<String> {
    [
        "What are my property rights as a woman in Pakistan?",
        "How can I file for khula?",
        "What is the minimum age for marriage?",
        "What protection do I have under the Women Protection Act?",
        "Can I inherit property from my father?",
        "What are my rights in case of domestic violence?",
    ]
    .iter()
    .map(|q| q.to_string())
    .collect()
}

impl Config {
    /// Load config from file, falling back to defaults, then apply env overrides.
    pub fn load() -> anyhow::Result<Self> {
        let path = paths::config_file_path();
        let config = if path.exists() {
            Self::load_from(&path)?
        } else {
            Self::default()
        };
        Ok(config.with_env_overrides())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(SERVICE_URL_ENV) {
            if !url.trim().is_empty() {
                self.service.base_url = url.trim().to_string();
            }
        }
        self
    }

    /// Apply a `--endpoint` flag. Highest precedence.
    pub fn with_endpoint(mut self, endpoint: Option<&str>) -> Self {
        if let Some(url) = endpoint {
            self.service.base_url = url.to_string();
        }
        self
    }
}
