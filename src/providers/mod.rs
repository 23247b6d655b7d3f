/*!
 * Provider implementations for external translation services.
 *
 * This module contains the client seam the controller uses to obtain the
 * translated text:
 * - GoogleTranslate: the free, unauthenticated web translation endpoint
 * - MockProvider: configurable in-memory provider for tests
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::errors::ProviderError;

/// One translation request: the text plus its language pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate, line breaks preserved
    pub text: String,

    /// Source language code (lowercase ISO 639-1)
    pub source_language: String,

    /// Target language code (lowercase ISO 639-1)
    pub target_language: String,
}

impl TranslationRequest {
    /// Create a new translation request.
    pub fn new(
        text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }
}

/// The translated text returned by a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResponse {
    /// Translated text, line breaks preserved
    pub text: String,
}

/// Common trait for translation providers.
///
/// Providers are expected to preserve line breaks 1:1 with the source text;
/// the downstream line alignment relies on it.
#[async_trait]
pub trait TranslationProvider: Send + Sync + Debug {
    /// Translate the request's text between its language pair.
    async fn translate(&self, request: TranslationRequest)
        -> Result<TranslationResponse, ProviderError>;

    /// Test the connection to the provider.
    async fn test_connection(&self) -> Result<(), ProviderError>;

    /// Short provider identifier for logs.
    fn name(&self) -> &'static str;
}

pub mod gtranslate;
pub mod mock;
