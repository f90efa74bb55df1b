use crate::core::ConfigProvider;
use crate::utils::error::{Result, SplitError};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SETTINGS_PATH: &str = "./data/settings.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_settings_path")]
    pub path: String,
    /// Keep settings in memory only; nothing survives the process.
    #[serde(default)]
    pub ephemeral: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_speech_command")]
    pub command: String,
    #[serde(default = "default_speech_args")]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub json: bool,
}

fn default_settings_path() -> String {
    DEFAULT_SETTINGS_PATH.to_string()
}

fn default_true() -> bool {
    true
}

fn default_speech_command() -> String {
    "espeak-ng".to_string()
}

fn default_speech_args() -> Vec<String> {
    vec!["-v".to_string(), "pt-br".to_string()]
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_settings_path(),
            ephemeral: false,
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: default_speech_command(),
            args: default_speech_args(),
        }
    }
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| SplitError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SplitError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SplitError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for AppConfig {
    fn settings_path(&self) -> &str {
        &self.storage.path
    }

    fn ephemeral(&self) -> bool {
        self.storage.ephemeral
    }

    fn speech_enabled(&self) -> bool {
        self.speech.enabled
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        if !self.storage.ephemeral {
            validate_path("storage.path", &self.storage.path)?;
        }
        if self.speech.enabled {
            validate_non_empty_string("speech.command", &self.speech.command)?;
        }
        Ok(())
    }
}
