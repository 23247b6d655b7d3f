use async_trait::async_trait;
use log::{error, warn};
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::errors::ProviderError;
use crate::providers::{TranslationProvider, TranslationRequest, TranslationResponse};

const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Client for the free Google web translation endpoint.
///
/// Uses the unauthenticated `translate_a/single` endpoint with the `gtx`
/// client id. No API key is involved and no retries are attempted; a failed
/// request surfaces as a [`ProviderError`] for the caller to handle.
#[derive(Debug)]
pub struct GoogleTranslate {
    /// Base URL of the translation endpoint
    base_url: String,
    /// HTTP client for making requests
    client: Client,
}

impl GoogleTranslate {
    /// Create a client against the default endpoint with a 10 second timeout.
    pub fn new() -> Self {
        Self::with_config(DEFAULT_ENDPOINT, 10)
    }

    /// Create a client with an explicit endpoint and timeout.
    ///
    /// A malformed endpoint falls back to the default rather than failing;
    /// the first request would surface any real connectivity problem.
    pub fn with_config(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        let endpoint = endpoint.into();
        let base_url = match Url::parse(&endpoint) {
            Ok(_) => endpoint.trim_end_matches('/').to_string(),
            Err(_) => {
                if !endpoint.is_empty() {
                    warn!("Invalid translation endpoint '{}', using default", endpoint);
                }
                DEFAULT_ENDPOINT.to_string()
            }
        };

        Self {
            base_url,
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Extract the translated text from the endpoint's nested-array response.
    ///
    /// The response body is a JSON array whose first element is a list of
    /// segments, each segment an array whose first element is the translated
    /// chunk. Segments concatenate to the full translation with line breaks
    /// intact.
    fn parse_segments(value: &serde_json::Value) -> Option<String> {
        let segments = value.get(0)?.as_array()?;

        let mut text = String::new();
        for segment in segments {
            if let Some(chunk) = segment.get(0).and_then(|v| v.as_str()) {
                text.push_str(chunk);
            }
        }

        if text.is_empty() { None } else { Some(text) }
    }
}

impl Default for GoogleTranslate {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslate {
    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationResponse, ProviderError> {
        let url = format!("{}/translate_a/single", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", request.source_language.as_str()),
                ("tl", request.target_language.as_str()),
                ("dt", "t"),
                ("q", request.text.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Translation endpoint error ({}): {}", status, message);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        match Self::parse_segments(&body) {
            Some(text) => Ok(TranslationResponse { text }),
            None => {
                error!("Unexpected translation response shape: {}", body);
                Err(ProviderError::ParseError(
                    "no translated segments in response".to_string(),
                ))
            }
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let probe = TranslationRequest::new("hola", "es", "en");
        self.translate(probe).await.map(|_| ())
    }

    fn name(&self) -> &'static str {
        "google"
    }
}
