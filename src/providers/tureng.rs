use std::time::Duration;

use async_trait::async_trait;
use log::error;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use url::Url;

use crate::errors::ProviderError;
use crate::language::Language;
use crate::providers::{TranslateRequest, TranslateResult, Translator, TranslatorKind};

/// Matches the Turkish result cells on a Tureng search page
static RESULT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<td class="tr ts">\s*<a[^>]*>([^<]+)</a>"#)
        .unwrap_or_else(|e| panic!("Invalid Tureng result pattern: {}", e))
});

/// Tureng dictionary client. Tureng is an English-Turkish dictionary site,
/// so the adapter only participates when the target language is Turkish.
#[derive(Debug)]
pub struct TurengTranslator {
    /// HTTP client for page requests
    client: Client,
    /// Endpoint URL (defaults to the public site)
    endpoint: String,
    /// Request timeout, also reported in timeout diagnostics
    timeout_secs: u64,
}

impl TurengTranslator {
    pub const DEFAULT_ENDPOINT: &'static str = "https://tureng.com";

    /// Maximum number of dictionary meanings carried into one result line
    const MAX_MEANINGS: usize = 5;

    /// Create a new Tureng client
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

    /// Search page URL for `text`. The query lands in a path segment, so it
    /// is percent-encoded; form encoding would turn spaces into literal `+`.
    fn page_url(&self, text: &str) -> Result<Url, ProviderError> {
        let mut url = Url::parse(&self.endpoint)
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| {
                ProviderError::RequestFailed("Endpoint cannot be a base URL".to_string())
            })?
            .pop_if_empty()
            .extend(["en", "turkish-english", text]);
        Ok(url)
    }

    async fn fetch(&self, request: &TranslateRequest) -> Result<String, ProviderError> {
        let page_url = self.page_url(request.text())?;

        let response = self.client.get(page_url).send().await.map_err(|e| {
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
            error!("Tureng error ({}): {}", status, message);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        Self::extract_meanings(&html)
    }

    /// Scrape distinct Turkish meanings from the result table, keeping the
    /// page's own ranking order.
    fn extract_meanings(html: &str) -> Result<String, ProviderError> {
        let mut meanings: Vec<String> = Vec::new();
        for capture in RESULT_PATTERN.captures_iter(html) {
            let meaning = capture[1].trim().to_string();
            if meaning.is_empty() || meanings.iter().any(|m| m.eq_ignore_ascii_case(&meaning)) {
                continue;
            }
            meanings.push(meaning);
            if meanings.len() == Self::MAX_MEANINGS {
                break;
            }
        }

        if meanings.is_empty() {
            return Err(ProviderError::ParseError(
                "No dictionary entries found on result page".to_string(),
            ));
        }
        Ok(meanings.join(", "))
    }
}

#[async_trait]
impl Translator for TurengTranslator {
    fn kind(&self) -> TranslatorKind {
        TranslatorKind::Tureng
    }

    fn can_support(&self, target: Language) -> bool {
        target.is_turkish()
    }

    async fn find(&self, request: &TranslateRequest) -> TranslateResult {
        TranslateResult::from_outcome(self.kind(), request, self.fetch(request).await)
    }
}
