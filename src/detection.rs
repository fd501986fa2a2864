/*!
 * Source-language detection.
 *
 * Detection gates which translators are eligible for a run; it is
 * network-bound and may fail, in which case the run is aborted and the
 * failure surfaces as a single "Error" notification.
 */

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::errors::DetectionError;
use crate::language;

/// Detects the language of a piece of text
#[async_trait]
pub trait LanguageDetector: Send + Sync {
    /// Best-guess source-language code for `text`
    async fn detect(&self, text: &str) -> Result<String, DetectionError>;
}

/// Language detector backed by the Google Translate web endpoint.
///
/// The gtx response reports the detected source code alongside an (ignored)
/// translation, so detection is a single GET.
pub struct GoogleDetector {
    client: Client,
    endpoint: String,
}

impl GoogleDetector {
    pub const DEFAULT_ENDPOINT: &'static str = "https://translate.googleapis.com";

    /// Create a new detector
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
        }
    }

    fn extract_code(body: &Value) -> Result<String, DetectionError> {
        // Index 2 of the gtx array carries the detected source code
        body.get(2)
            .and_then(Value::as_str)
            .map(|code| code.to_string())
            .ok_or_else(|| DetectionError::NoLanguage(body.to_string()))
    }
}

#[async_trait]
impl LanguageDetector for GoogleDetector {
    async fn detect(&self, text: &str) -> Result<String, DetectionError> {
        let base = format!("{}/translate_a/single", self.endpoint.trim_end_matches('/'));
        let url = Url::parse_with_params(
            &base,
            &[
                ("client", "gtx"),
                ("dt", "t"),
                ("sl", "auto"),
                ("tl", "en"),
                ("q", text),
            ],
        )
        .map_err(|e| DetectionError::RequestFailed(e.to_string()))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DetectionError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DetectionError::RequestFailed(format!(
                "Detector responded with status {}",
                status
            )));
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| DetectionError::RequestFailed(e.to_string()))?;

        let code = Self::extract_code(&body)?;
        match language::detected_name(&code) {
            Some(name) => debug!("Detected source language: {} ({})", name, code),
            None => debug!("Detected source language code: {}", code),
        }
        Ok(code)
    }
}

/// Detector returning a fixed code; used by tests and offline runs
pub struct StaticDetector {
    code: String,
}

impl StaticDetector {
    /// Create a detector that always reports `code`
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

#[async_trait]
impl LanguageDetector for StaticDetector {
    async fn detect(&self, _text: &str) -> Result<String, DetectionError> {
        Ok(self.code.clone())
    }
}

/// Detector that always fails; used to exercise detection-failure paths
pub struct FailingDetector {
    message: String,
}

impl FailingDetector {
    /// Create a detector that always fails with `message`
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl LanguageDetector for FailingDetector {
    async fn detect(&self, _text: &str) -> Result<String, DetectionError> {
        Err(DetectionError::RequestFailed(self.message.clone()))
    }
}
