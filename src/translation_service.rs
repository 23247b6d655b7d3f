/*!
 * Translation service selecting a concrete provider from configuration.
 *
 * The service is the only place the controller touches providers; it owns
 * one provider implementation chosen at construction time and forwards
 * translation requests to it.
 */

use anyhow::Result;
use log::debug;

use crate::app_config::{TranslationConfig, TranslationProviderKind};
use crate::errors::{ProviderError, TranslationError};
use crate::providers::gtranslate::GoogleTranslate;
use crate::providers::mock::MockProvider;
use crate::providers::{TranslationProvider, TranslationRequest};

/// Translation provider implementation variants
#[derive(Debug)]
enum ProviderImpl {
    /// Free Google web endpoint
    Google(GoogleTranslate),
    /// In-memory mock, for tests and offline runs
    Mock(MockProvider),
}

impl ProviderImpl {
    fn as_provider(&self) -> &dyn TranslationProvider {
        match self {
            Self::Google(p) => p,
            Self::Mock(p) => p,
        }
    }
}

/// Service that obtains translations from the configured provider.
#[derive(Debug)]
pub struct TranslationService {
    provider: ProviderImpl,
}

impl TranslationService {
    /// Build the service for the provider selected in the configuration.
    pub fn from_config(config: &TranslationConfig) -> Result<Self> {
        let provider = match config.provider {
            TranslationProviderKind::Google => ProviderImpl::Google(GoogleTranslate::with_config(
                config.get_endpoint(),
                config.get_timeout_secs(),
            )),
            TranslationProviderKind::Mock => ProviderImpl::Mock(MockProvider::identity()),
        };

        Ok(Self { provider })
    }

    /// Build the service over an explicit mock provider.
    pub fn from_mock(mock: MockProvider) -> Self {
        Self {
            provider: ProviderImpl::Mock(mock),
        }
    }

    /// Short identifier of the active provider, for logs.
    pub fn provider_name(&self) -> &'static str {
        self.provider.as_provider().name()
    }

    /// Translate a text between a language pair.
    ///
    /// Empty input short-circuits to an empty translation without touching
    /// the provider. A provider success that carries no text for non-empty
    /// input is reported as [`TranslationError::EmptyTranslation`].
    pub async fn translate_text(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        debug!(
            "Translating {} chars via {} ({} -> {})",
            text.chars().count(),
            self.provider_name(),
            source_language,
            target_language
        );

        let request = TranslationRequest::new(text, source_language, target_language);
        let response = self.provider.as_provider().translate(request).await?;

        if response.text.trim().is_empty() {
            return Err(TranslationError::EmptyTranslation);
        }

        Ok(response.text)
    }

    /// Test the connection to the active provider.
    pub async fn test_connection(&self) -> Result<(), ProviderError> {
        self.provider.as_provider().test_connection().await
    }
}
