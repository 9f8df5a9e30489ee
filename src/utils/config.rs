use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub processing: ProcessingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
    pub max_retries: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    pub target_language: String,
    pub detection_sample_chars: usize,
    pub min_sentence_chars: usize,
    pub max_chars_per_request: usize,
    pub retry_failed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.anthropic.com/v1/messages".to_string(),
            model: "claude-3-5-sonnet-20241022".to_string(),
            api_key: None,
            timeout_seconds: 120,
            max_retries: 3,
        }
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            target_language: "en".to_string(),
            detection_sample_chars: 1000,
            min_sentence_chars: 10,
            max_chars_per_request: 4000,
            retry_failed: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> crate::utils::errors::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::utils::errors::LangProcError::ConfigError(e.to_string()))?;
        toml::from_str(&content)
            .map_err(|e| crate::utils::errors::LangProcError::ConfigError(e.to_string()))
    }

    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(p) if p.exists() => Self::load_from_file(p).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Fills in the API key from the environment when the config file left it
    /// unset. Called once at startup; nothing reads the environment later.
    pub fn resolve_api_key(&mut self) {
        if self.api.api_key.is_none() {
            self.api.api_key = std::env::var("TRANSLATE_API_KEY").ok();
        }
    }
}
