/*!
 * Provider implementations for different translation services.
 *
 * This module contains client implementations for the translation backends:
 * - Google: Google Translate web endpoint
 * - Yandex: Yandex Translate API
 * - Tureng: Tureng dictionary (Turkish targets only)
 * - SesliSozluk: SesliSozluk dictionary (Turkish targets only)
 * - Prompt: online-translator.com (PROMT) service
 */

use std::fmt::Debug;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::language::Language;

/// Identifies a translation backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslatorKind {
    Google,
    Yandex,
    Tureng,
    SesliSozluk,
    Prompt,
}

impl TranslatorKind {
    /// Every known backend, in invocation-priority order
    pub const ALL: [TranslatorKind; 5] = [
        TranslatorKind::Google,
        TranslatorKind::Yandex,
        TranslatorKind::Tureng,
        TranslatorKind::SesliSozluk,
        TranslatorKind::Prompt,
    ];

    /// Capitalized backend name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Yandex => "Yandex",
            Self::Tureng => "Tureng",
            Self::SesliSozluk => "SesliSozluk",
            Self::Prompt => "Prompt",
        }
    }

    /// Lowercase backend identifier, as used in config files
    pub fn to_lowercase_string(&self) -> String {
        self.display_name().to_lowercase()
    }
}

impl std::fmt::Display for TranslatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for TranslatorKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "yandex" => Ok(Self::Yandex),
            "tureng" => Ok(Self::Tureng),
            "seslisozluk" => Ok(Self::SesliSozluk),
            "prompt" => Ok(Self::Prompt),
            _ => Err(anyhow!("Invalid translator type: {}", s)),
        }
    }
}

/// An immutable translation request: the copied text plus the detected
/// source-language code. The target language is part of each adapter's own
/// read-only configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateRequest {
    text: String,
    from_language: String,
}

impl TranslateRequest {
    /// Build a request; the text must be non-empty
    pub fn new(text: impl Into<String>, from_language: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(anyhow!("Cannot build a translate request from empty text"));
        }
        Ok(Self {
            text,
            from_language: from_language.into(),
        })
    }

    /// The text to translate
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Detected source-language code
    pub fn from_language(&self) -> &str {
        &self.from_language
    }
}

/// Outcome of one adapter invocation; never mutated after creation
#[derive(Debug, Clone)]
pub struct TranslateResult {
    /// Which backend produced this result
    pub kind: TranslatorKind,
    /// The text that was submitted
    pub source_text: String,
    /// The translation, when the call succeeded
    pub translated_text: Option<String>,
    /// Whether the call succeeded
    pub succeeded: bool,
    /// Failure description, when the call failed
    pub diagnostic: Option<String>,
}

impl TranslateResult {
    /// A successful outcome
    pub fn success(kind: TranslatorKind, request: &TranslateRequest, translated: String) -> Self {
        Self {
            kind,
            source_text: request.text().to_string(),
            translated_text: Some(translated),
            succeeded: true,
            diagnostic: None,
        }
    }

    /// A failed outcome carrying the provider error as diagnostic text
    pub fn failure(kind: TranslatorKind, request: &TranslateRequest, error: &ProviderError) -> Self {
        Self {
            kind,
            source_text: request.text().to_string(),
            translated_text: None,
            succeeded: false,
            diagnostic: Some(error.to_string()),
        }
    }

    /// Fold a fallible fetch outcome into a result, capturing errors as
    /// diagnostics instead of propagating them
    pub fn from_outcome(
        kind: TranslatorKind,
        request: &TranslateRequest,
        outcome: Result<String, ProviderError>,
    ) -> Self {
        match outcome {
            Ok(translated) => Self::success(kind, request, translated),
            Err(error) => Self::failure(kind, request, &error),
        }
    }
}

/// Common trait for all translation backends.
///
/// `find` must never return an error: every failure mode (network error,
/// timeout, malformed response, rate limit) is captured into a
/// `TranslateResult` with `succeeded = false`, so one misbehaving backend
/// can never abort a fan-out batch.
#[async_trait]
pub trait Translator: Send + Sync + Debug {
    /// Which backend this adapter speaks to
    fn kind(&self) -> TranslatorKind;

    /// Pure eligibility predicate, evaluated before invocation so an
    /// ineligible backend costs no network call
    fn can_support(&self, target: Language) -> bool;

    /// Translate the request, folding every failure into the result
    async fn find(&self, request: &TranslateRequest) -> TranslateResult;
}

pub mod google;
pub mod mock;
pub mod prompt;
pub mod seslisozluk;
pub mod tureng;
pub mod yandex;
