/*!
 * Mock provider implementation for testing.
 *
 * Simulates translation behaviors without network access:
 * - `MockProvider::working()` - marks each line as translated
 * - `MockProvider::identity()` - echoes the input text
 * - `MockProvider::empty()` - returns an empty translation
 * - `MockProvider::failing()` - always fails with an error
 *
 * A custom response generator can replace the canned behaviors, e.g. to
 * return a fixture translation for a known fixture input.
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::providers::{TranslationProvider, TranslationRequest, TranslationResponse};

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Succeeds, prefixing every line so tests can spot the pass-through
    Working,
    /// Succeeds, returning the input text unchanged
    Identity,
    /// Succeeds with an empty translation
    Empty,
    /// Always fails with an error
    Failing,
}

/// Mock provider for testing translation-dependent behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of translate calls received
    request_count: Arc<AtomicUsize>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&TranslationRequest) -> String>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            custom_response: None,
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock that echoes the source text
    pub fn identity() -> Self {
        Self::new(MockBehavior::Identity)
    }

    /// Create a mock that returns empty translations
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Set a custom response generator
    pub fn with_custom_response(mut self, generator: fn(&TranslationRequest) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of translate calls this mock has received
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationResponse, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        if let Some(generator) = self.custom_response {
            return Ok(TranslationResponse {
                text: generator(&request),
            });
        }

        match self.behavior {
            MockBehavior::Working => {
                // One output line per input line keeps the downstream
                // alignment assumption intact
                let text = request
                    .text
                    .lines()
                    .map(|line| format!("[{}] {}", request.target_language, line))
                    .collect::<Vec<_>>()
                    .join("\n");
                Ok(TranslationResponse { text })
            }
            MockBehavior::Identity => Ok(TranslationResponse {
                text: request.text.clone(),
            }),
            MockBehavior::Empty => Ok(TranslationResponse {
                text: String::new(),
            }),
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "mock provider configured to fail".to_string(),
            )),
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "mock provider configured to fail".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
