use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::language::Language;
use crate::providers::{TranslateRequest, TranslateResult, Translator, TranslatorKind};

/// PROMT (online-translator.com) client
#[derive(Debug)]
pub struct PromptTranslator {
    /// HTTP client for API requests
    client: Client,
    /// Endpoint URL (defaults to the public service)
    endpoint: String,
    /// Target language for all requests
    target: Language,
    /// Request timeout, also reported in timeout diagnostics
    timeout_secs: u64,
}

/// PROMT translation request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PromptRequestBody<'a> {
    /// Language pair, e.g. "en-tr"
    dir_code: String,
    /// Topic template; "General" for plain text
    template: &'static str,
    /// The text to translate
    text: &'a str,
    /// Whether the service may auto-correct the source language
    use_auto_detect: bool,
}

/// PROMT translation response
#[derive(Debug, Deserialize)]
struct PromptResponse {
    /// Wrapped response payload
    d: PromptPayload,
}

#[derive(Debug, Deserialize)]
struct PromptPayload {
    /// The translated text
    #[serde(default)]
    result: String,
    /// Error description when the service rejects the request
    #[serde(default, rename = "errMessage")]
    err_message: Option<String>,
}

impl PromptTranslator {
    pub const DEFAULT_ENDPOINT: &'static str = "https://www.online-translator.com";

    /// Create a new PROMT client
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
        let api_url = format!(
            "{}/services/soap.asmx/GetTranslation",
            self.endpoint.trim_end_matches('/')
        );
        let body = PromptRequestBody {
            dir_code: format!("{}-{}", request.from_language(), self.target.code()),
            template: "General",
            text: request.text(),
            use_auto_detect: true,
        };

        let response = self
            .client
            .post(&api_url)
            .json(&body)
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
            error!("PROMT API error ({}): {}", status, message);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let parsed = response
            .json::<PromptResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        if let Some(message) = parsed.d.err_message {
            if !message.is_empty() {
                return Err(ProviderError::ApiError {
                    status_code: status.as_u16(),
                    message,
                });
            }
        }

        let translated = parsed.d.result.trim().to_string();
        if translated.is_empty() {
            return Err(ProviderError::ParseError(
                "Response contained no translated text".to_string(),
            ));
        }
        Ok(translated)
    }
}

#[async_trait]
impl Translator for PromptTranslator {
    fn kind(&self) -> TranslatorKind {
        TranslatorKind::Prompt
    }

    fn can_support(&self, _target: Language) -> bool {
        true
    }

    async fn find(&self, request: &TranslateRequest) -> TranslateResult {
        TranslateResult::from_outcome(self.kind(), request, self.fetch(request).await)
    }
}
