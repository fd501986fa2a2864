/*!
 * Mock translator implementations for testing.
 *
 * This module provides mock translators that simulate different behaviors:
 * - `MockTranslator::working(kind, text)` - Always succeeds with a fixed translation
 * - `MockTranslator::failing(kind, message)` - Always fails with a diagnostic
 * - `MockTranslator::slow(kind, text, delay_ms)` - Succeeds after a delay
 */

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::language::Language;
use crate::providers::{TranslateRequest, TranslateResult, Translator, TranslatorKind};

/// Behavior mode for the mock translator
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with the given translation
    Working { text: String },
    /// Always fails with the given diagnostic message
    Failing { message: String },
    /// Succeeds with the given translation after a delay
    Slow { text: String, delay_ms: u64 },
}

/// Mock translator for exercising pipeline behavior without the network
#[derive(Debug)]
pub struct MockTranslator {
    /// Which backend this mock impersonates
    kind: TranslatorKind,
    /// Behavior mode
    behavior: MockBehavior,
    /// Optional language-pair restriction: only eligible for this target
    only_for_target: Option<&'static str>,
    /// Number of `find` invocations observed
    invocations: Arc<AtomicUsize>,
}

impl MockTranslator {
    /// Create a new mock with the specified behavior
    pub fn new(kind: TranslatorKind, behavior: MockBehavior) -> Self {
        Self {
            kind,
            behavior,
            only_for_target: None,
            invocations: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock that always returns `text`
    pub fn working(kind: TranslatorKind, text: impl Into<String>) -> Self {
        Self::new(kind, MockBehavior::Working { text: text.into() })
    }

    /// Create a failing mock that always errors with `message`
    pub fn failing(kind: TranslatorKind, message: impl Into<String>) -> Self {
        Self::new(
            kind,
            MockBehavior::Failing {
                message: message.into(),
            },
        )
    }

    /// Create a slow mock that succeeds after `delay_ms`
    pub fn slow(kind: TranslatorKind, text: impl Into<String>, delay_ms: u64) -> Self {
        Self::new(
            kind,
            MockBehavior::Slow {
                text: text.into(),
                delay_ms,
            },
        )
    }

    /// Restrict eligibility to a single target language code
    pub fn only_for_target(mut self, code: &'static str) -> Self {
        self.only_for_target = Some(code);
        self
    }

    /// Handle to the invocation counter, for asserting call counts
    pub fn invocation_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.invocations)
    }
}

#[async_trait]
impl Translator for MockTranslator {
    fn kind(&self) -> TranslatorKind {
        self.kind
    }

    fn can_support(&self, target: Language) -> bool {
        match self.only_for_target {
            Some(code) => target.code().eq_ignore_ascii_case(code),
            None => true,
        }
    }

    async fn find(&self, request: &TranslateRequest) -> TranslateResult {
        self.invocations.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Working { text } => {
                TranslateResult::success(self.kind, request, text.clone())
            }
            MockBehavior::Failing { message } => TranslateResult::failure(
                self.kind,
                request,
                &ProviderError::RequestFailed(message.clone()),
            ),
            MockBehavior::Slow { text, delay_ms } => {
                tokio::time::sleep(Duration::from_millis(*delay_ms)).await;
                TranslateResult::success(self.kind, request, text.clone())
            }
        }
    }
}
