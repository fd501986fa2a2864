use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::errors::ProviderError;
use crate::language::Language;
use crate::providers::{TranslateRequest, TranslateResult, Translator, TranslatorKind};

/// Google Translate client using the public web endpoint
#[derive(Debug)]
pub struct GoogleTranslator {
    /// HTTP client for API requests
    client: Client,
    /// Endpoint URL (defaults to the public web endpoint)
    endpoint: String,
    /// Target language for all requests
    target: Language,
    /// Request timeout, also reported in timeout diagnostics
    timeout_secs: u64,
}

impl GoogleTranslator {
    pub const DEFAULT_ENDPOINT: &'static str = "https://translate.googleapis.com";

    /// Create a new Google client
    pub fn new(endpoint: impl Into<String>, target: Language, timeout_secs: u64) -> Self {
        let endpoint = endpoint.into();
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: if endpoint.is_empty() {
                Self::DEFAULT_ENDPOINT.to_string()
            } else {
                endpoint
            },
            target,
            timeout_secs,
        }
    }

    async fn fetch(&self, request: &TranslateRequest) -> Result<String, ProviderError> {
        let base = format!("{}/translate_a/single", self.endpoint.trim_end_matches('/'));
        let url = Url::parse_with_params(
            &base,
            &[
                ("client", "gtx"),
                ("dt", "t"),
                ("sl", request.from_language()),
                ("tl", self.target.code()),
                ("q", request.text()),
            ],
        )
        .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout(self.timeout_secs)
            } else {
                ProviderError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(ProviderError::RateLimitExceeded(
                "Google translate endpoint throttled the request".to_string(),
            ));
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Google API error ({}): {}", status, message);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Self::extract_translation(&body)
    }

    /// The gtx response is a nested array; the first element holds one
    /// segment per sentence, each with the translated text at index 0.
    fn extract_translation(body: &Value) -> Result<String, ProviderError> {
        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| ProviderError::ParseError("Missing segment array".to_string()))?;

        let translated: String = segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(Value::as_str))
            .collect();

        if translated.trim().is_empty() {
            return Err(ProviderError::ParseError(
                "Response contained no translated text".to_string(),
            ));
        }
        Ok(translated)
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn kind(&self) -> TranslatorKind {
        TranslatorKind::Google
    }

    fn can_support(&self, _target: Language) -> bool {
        true
    }

    async fn find(&self, request: &TranslateRequest) -> TranslateResult {
        TranslateResult::from_outcome(self.kind(), request, self.fetch(request).await)
    }
}
