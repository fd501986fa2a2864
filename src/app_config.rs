/*!
 * Application configuration: loading, validating and saving settings.
 *
 * The configuration supplies the target language, the initial
 * enabled/disabled state of every translator, detection and analytics
 * settings, and the log level. Persisted as plain JSON.
 */

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::language;
use crate::providers::TranslatorKind;

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Target language display name (from the closed language table)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Per-translator settings, in invocation-priority order
    #[serde(default = "default_translators")]
    pub translators: Vec<TranslatorConfig>,

    /// Language detection settings
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Analytics settings
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings for one translator backend
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslatorConfig {
    /// Translator type identifier
    #[serde(rename = "type")]
    pub translator_type: String,

    /// Whether the translator starts enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Service URL; empty means the backend's public endpoint
    #[serde(default = "String::new")]
    pub endpoint: String,

    /// API key, for backends that need one (Yandex)
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl TranslatorConfig {
    /// Default settings for a translator kind
    pub fn new(kind: TranslatorKind) -> Self {
        Self {
            translator_type: kind.to_lowercase_string(),
            enabled: default_enabled(),
            endpoint: String::new(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// The translator kind this entry configures
    pub fn kind(&self) -> Result<TranslatorKind> {
        TranslatorKind::from_str(&self.translator_type)
    }
}

/// Language detection settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DetectionConfig {
    /// Detector endpoint; empty means the public endpoint
    #[serde(default = "String::new")]
    pub endpoint: String,

    /// Detection request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Analytics settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnalyticsConfig {
    /// Whether event tracking is enabled at all
    #[serde(default)]
    pub enabled: bool,

    /// Measurement protocol tracking id
    #[serde(default = "String::new")]
    pub tracking_id: String,

    /// Endpoint; empty means the public collect endpoint
    #[serde(default = "String::new")]
    pub endpoint: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            tracking_id: String::new(),
            endpoint: String::new(),
        }
    }
}

/// Log level configuration
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's level filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_target_language() -> String {
    "Turkish".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_translators() -> Vec<TranslatorConfig> {
    TranslatorKind::ALL
        .iter()
        .map(|&kind| TranslatorConfig::new(kind))
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_language: default_target_language(),
            translators: default_translators(),
            detection: DetectionConfig::default(),
            analytics: AnalyticsConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file. When the file does not exist a
    /// default configuration is written there first, so a fresh install
    /// starts from a file the user can edit.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Validate the loaded settings against the closed language table and
    /// the known translator kinds
    pub fn validate(&self) -> Result<()> {
        language::from_name(&self.target_language)
            .map_err(|_| anyhow!("Unknown target language: {}", self.target_language))?;

        for translator in &self.translators {
            translator.kind()?;
            if translator.timeout_secs == 0 {
                return Err(anyhow!(
                    "Timeout for {} must be greater than zero",
                    translator.translator_type
                ));
            }
        }
        Ok(())
    }

    /// Settings for one translator kind, when configured
    pub fn translator(&self, kind: TranslatorKind) -> Option<&TranslatorConfig> {
        self.translators
            .iter()
            .find(|t| t.kind().map(|k| k == kind).unwrap_or(false))
    }
}
