use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::ProviderError;
use crate::language::Language;
use crate::providers::{TranslateRequest, TranslateResult, Translator, TranslatorKind};

/// Yandex Translate API client
#[derive(Debug)]
pub struct YandexTranslator {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// Endpoint URL (defaults to the public API)
    endpoint: String,
    /// Target language for all requests
    target: Language,
    /// Request timeout, also reported in timeout diagnostics
    timeout_secs: u64,
}

/// Yandex translate response
#[derive(Debug, Deserialize)]
struct YandexResponse {
    /// API status code; 200 on success
    code: u16,
    /// Translated lines
    #[serde(default)]
    text: Vec<String>,
    /// Error message on failure
    #[serde(default)]
    message: Option<String>,
}

impl YandexTranslator {
    pub const DEFAULT_ENDPOINT: &'static str = "https://translate.yandex.net";

    /// Create a new Yandex client
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        target: Language,
        timeout_secs: u64,
    ) -> Self {
        let endpoint = endpoint.into();
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
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
        let api_url = format!(
            "{}/api/v1.5/tr.json/translate",
            self.endpoint.trim_end_matches('/')
        );
        let lang_pair = format!("{}-{}", request.from_language(), self.target.code());

        let response = self
            .client
            .post(&api_url)
            .form(&[
                ("key", self.api_key.as_str()),
                ("lang", lang_pair.as_str()),
                ("text", request.text()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout(self.timeout_secs)
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Yandex API error ({}): {}", status, message);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response
            .json::<YandexResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        // Yandex reports errors through its own status field as well
        if body.code != 200 {
            return Err(ProviderError::ApiError {
                status_code: body.code,
                message: body
                    .message
                    .unwrap_or_else(|| "Yandex reported an error".to_string()),
            });
        }

        let translated = body.text.join(" ");
        if translated.trim().is_empty() {
            return Err(ProviderError::ParseError(
                "Response contained no translated text".to_string(),
            ));
        }
        Ok(translated)
    }
}

#[async_trait]
impl Translator for YandexTranslator {
    fn kind(&self) -> TranslatorKind {
        TranslatorKind::Yandex
    }

    fn can_support(&self, _target: Language) -> bool {
        true
    }

    async fn find(&self, request: &TranslateRequest) -> TranslateResult {
        TranslateResult::from_outcome(self.kind(), request, self.fetch(request).await)
    }
}
