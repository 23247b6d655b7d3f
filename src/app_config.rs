use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::PathBuf;

use crate::text::detect::{LanguageDetector, LanguageProfile};
use crate::text::vocabulary::VocabularyMode;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO 639-1), or "auto" to detect per request
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language code (ISO 639-1)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Language detection config
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Which word-level vocabulary variant the pipeline emits
    #[serde(default)]
    pub vocabulary_mode: VocabularyMode,

    /// Translation provider config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Language detection configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DetectionConfig {
    /// Language codes to score; each must have a built-in stopword profile
    #[serde(default = "default_detection_languages")]
    pub languages: Vec<String>,

    /// Code returned on ties or when no stopword signal is found
    #[serde(default = "default_detection_default")]
    pub default_language: String,
}

impl DetectionConfig {
    /// Build a detector from the configured language codes.
    ///
    /// Codes without a built-in profile were already rejected by
    /// `Config::validate`, so they are simply skipped here.
    pub fn build_detector(&self) -> LanguageDetector {
        let profiles: Vec<LanguageProfile> = self
            .languages
            .iter()
            .filter_map(|code| LanguageProfile::builtin(code))
            .collect();

        LanguageDetector::new(profiles, self.default_language.clone())
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            languages: default_detection_languages(),
            default_language: default_detection_default(),
        }
    }
}

/// Translation provider type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProviderKind {
    // @provider: Free Google web endpoint
    #[default]
    Google,
    // @provider: In-memory mock
    Mock,
}

impl TranslationProviderKind {
    // @returns: Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Google => "Google",
            Self::Mock => "Mock",
        }
    }

    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Google => "google".to_string(),
            Self::Mock => "mock".to_string(),
        }
    }
}

// Implement Display trait for TranslationProviderKind
impl std::fmt::Display for TranslationProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for TranslationProviderKind
impl std::str::FromStr for TranslationProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "mock" => Ok(Self::Mock),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Provider configuration wrapper
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Provider type identifier
    #[serde(rename = "type")]
    pub provider_type: String,

    // @field: Service URL
    #[serde(default = "String::new")]
    pub endpoint: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    // @param kind: Provider enum
    // @returns: Provider config with defaults
    pub fn new(kind: TranslationProviderKind) -> Self {
        match kind {
            TranslationProviderKind::Google => Self {
                provider_type: "google".to_string(),
                endpoint: default_google_endpoint(),
                timeout_secs: default_timeout_secs(),
            },
            TranslationProviderKind::Mock => Self {
                provider_type: "mock".to_string(),
                endpoint: String::new(),
                timeout_secs: default_timeout_secs(),
            },
        }
    }
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Translation provider to use
    #[serde(default)]
    pub provider: TranslationProviderKind,

    /// Available translation providers
    #[serde(default)]
    pub available_providers: Vec<ProviderConfig>,
}

impl TranslationConfig {
    /// Get the active provider configuration from the available_providers array
    pub fn get_active_provider_config(&self) -> Option<&ProviderConfig> {
        let provider_str = self.provider.to_lowercase_string();
        self.available_providers
            .iter()
            .find(|p| p.provider_type == provider_str)
    }

    /// Get the endpoint for the active provider
    pub fn get_endpoint(&self) -> String {
        if let Some(provider_config) = self.get_active_provider_config() {
            if !provider_config.endpoint.is_empty() {
                return provider_config.endpoint.clone();
            }
        }

        // Default fallback based on provider type
        match self.provider {
            TranslationProviderKind::Google => default_google_endpoint(),
            TranslationProviderKind::Mock => String::new(),
        }
    }

    /// Get the request timeout for the active provider
    pub fn get_timeout_secs(&self) -> u64 {
        if let Some(provider_config) = self.get_active_provider_config() {
            if provider_config.timeout_secs > 0 {
                return provider_config.timeout_secs;
            }
        }

        default_timeout_secs()
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        let mut config = Self {
            provider: TranslationProviderKind::default(),
            available_providers: Vec::new(),
        };

        // Add default providers
        config
            .available_providers
            .push(ProviderConfig::new(TranslationProviderKind::Google));
        config
            .available_providers
            .push(ProviderConfig::new(TranslationProviderKind::Mock));

        config
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_source_language() -> String {
    "auto".to_string()
}

fn default_target_language() -> String {
    "en".to_string()
}

fn default_detection_languages() -> Vec<String> {
    vec!["es".to_string(), "en".to_string()]
}

fn default_detection_default() -> String {
    "es".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_google_endpoint() -> String {
    "https://translate.googleapis.com".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate languages; "auto" delegates to detection
        if self.source_language != "auto" {
            let _source_name = crate::language_utils::get_language_name(&self.source_language)?;
        }
        let _target_name = crate::language_utils::get_language_name(&self.target_language)?;

        // Every detection language needs a built-in stopword profile
        for code in &self.detection.languages {
            if crate::text::detect::LanguageProfile::builtin(code).is_none() {
                return Err(anyhow!(
                    "No built-in detection profile for language: {}",
                    code
                ));
            }
        }

        // The detection default must be one of the scored languages
        if !self
            .detection
            .languages
            .iter()
            .any(|code| code == &self.detection.default_language)
        {
            return Err(anyhow!(
                "Detection default language '{}' is not among the configured languages",
                self.detection.default_language
            ));
        }

        Ok(())
    }

    /// Default location for the config file in the user config directory.
    pub fn default_config_dir_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lyriclens").join("conf.json"))
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            detection: DetectionConfig::default(),
            vocabulary_mode: VocabularyMode::default(),
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
