use std::time::Duration;

use async_trait::async_trait;
use log::error;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;

use crate::errors::ProviderError;
use crate::language::Language;
use crate::providers::{TranslateRequest, TranslateResult, Translator, TranslatorKind};

/// Matches the translated-sentence span on a SesliSozluk response page
static RESULT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<span[^>]*id="translatedText"[^>]*>(.*?)</span>"#)
        .unwrap_or_else(|e| panic!("Invalid SesliSozluk result pattern: {}", e))
});

/// Strips residual markup from the scraped translation
static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^>]+>").unwrap_or_else(|e| panic!("Invalid tag pattern: {}", e))
});

/// SesliSozluk sentence-translation client; Turkish targets only.
#[derive(Debug)]
pub struct SesliSozlukTranslator {
    /// HTTP client for page requests
    client: Client,
    /// Endpoint URL (defaults to the public site)
    endpoint: String,
    /// Request timeout, also reported in timeout diagnostics
    timeout_secs: u64,
}

impl SesliSozlukTranslator {
    pub const DEFAULT_ENDPOINT: &'static str = "https://www.seslisozluk.net";

    /// Create a new SesliSozluk client
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
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
            timeout_secs,
        }
    }

    async fn fetch(&self, request: &TranslateRequest) -> Result<String, ProviderError> {
        let page_url = format!("{}/c%C3%BCmle-%C3%A7eviri/", self.endpoint.trim_end_matches('/'));

        let response = self
            .client
            .post(&page_url)
            .form(&[
                ("word", request.text()),
                ("from", request.from_language()),
                ("to", "tr"),
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
            error!("SesliSozluk error ({}): {}", status, message);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        Self::extract_translation(&html)
    }

    fn extract_translation(html: &str) -> Result<String, ProviderError> {
        let raw = RESULT_PATTERN
            .captures(html)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| {
                ProviderError::ParseError("No translated text on result page".to_string())
            })?;

        let cleaned = TAG_PATTERN.replace_all(raw, "").trim().to_string();
        if cleaned.is_empty() {
            return Err(ProviderError::ParseError(
                "Translated text block was empty".to_string(),
            ));
        }
        Ok(cleaned)
    }
}

#[async_trait]
impl Translator for SesliSozlukTranslator {
    fn kind(&self) -> TranslatorKind {
        TranslatorKind::SesliSozluk
    }

    fn can_support(&self, target: Language) -> bool {
        target.is_turkish()
    }

    async fn find(&self, request: &TranslateRequest) -> TranslateResult {
        TranslateResult::from_outcome(self.kind(), request, self.fetch(request).await)
    }
}
