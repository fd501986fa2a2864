/*!
 * The aggregator: one pipeline run per distinct input.
 *
 * For each new clipboard text the aggregator detects the source language,
 * snapshots the eligible translator set, invokes every eligible translator
 * concurrently, waits for all of them, and hands the outcomes to the
 * organizer. A single-flight guard keyed on the last processed text ensures
 * identical consecutive inputs never trigger a second run.
 */

use std::sync::Arc;
use std::time::Duration;

use futures::future;
use log::{debug, info};
use parking_lot::Mutex;

use crate::detection::LanguageDetector;
use crate::errors::{PipelineError, ProviderError};
use crate::language::Language;
use crate::pipeline::organizer::{organize, OrganizedResult};
use crate::providers::{TranslateRequest, TranslateResult, Translator};
use crate::registry::TranslatorRegistry;

/// Upper bound on one translator call, over and above the adapter's own
/// HTTP timeout; bounds even an adapter whose client timeout misbehaves.
const DEFAULT_MAX_WAIT_SECS: u64 = 30;

/// Orchestrates concurrent translator invocation for one input
pub struct Aggregator {
    detector: Arc<dyn LanguageDetector>,
    registry: Arc<TranslatorRegistry>,
    target: Language,
    /// Single-flight guard: the last processed text. Locked around the
    /// read-modify-write so concurrent runs cannot both pass the guard.
    last_text: Mutex<Option<String>>,
    max_wait_secs: u64,
}

impl Aggregator {
    /// Create a new aggregator for the given target language
    pub fn new(
        detector: Arc<dyn LanguageDetector>,
        registry: Arc<TranslatorRegistry>,
        target: Language,
    ) -> Self {
        Self {
            detector,
            registry,
            target,
            last_text: Mutex::new(None),
            max_wait_secs: DEFAULT_MAX_WAIT_SECS,
        }
    }

    /// Override the per-translator wait bound
    pub fn with_max_wait_secs(mut self, max_wait_secs: u64) -> Self {
        self.max_wait_secs = max_wait_secs;
        self
    }

    /// The configured target language
    pub fn target(&self) -> Language {
        self.target
    }

    /// Run the pipeline for `text`.
    ///
    /// Returns `Ok(None)` when the single-flight guard rejects the input
    /// (identical to the last processed text, or blank). The guard is
    /// updated before any network call, so repeated failures on the same
    /// text are not retried; a new attempt requires a new, different input.
    pub async fn translate(&self, text: &str) -> Result<Option<OrganizedResult>, PipelineError> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        {
            let mut guard = self.last_text.lock();
            if guard.as_deref() == Some(text) {
                debug!("Skipping duplicate input: {:?}", text);
                return Ok(None);
            }
            *guard = Some(text.to_string());
        }

        let from_language = self.detector.detect(text).await?;
        let eligible = self.registry.eligible(self.target);
        if eligible.is_empty() {
            debug!("No eligible translators for target {}", self.target);
            return Ok(Some(OrganizedResult::default()));
        }

        let request = TranslateRequest::new(text, from_language)
            .map_err(|e| PipelineError::Unknown(e.to_string()))?;

        info!(
            "Translating {:?} with {} translator(s)",
            text,
            eligible.len()
        );

        let results = self.find_all(&eligible, &request).await;
        Ok(Some(organize(&results, text)))
    }

    /// Invoke every eligible translator concurrently and wait for ALL of
    /// them; stragglers are never cancelled, so observable latency is
    /// bounded by the slowest translator (or the wait bound). `join_all`
    /// yields outcomes in input order, which keeps the organizer's output
    /// independent of completion order.
    async fn find_all(
        &self,
        eligible: &[Arc<dyn Translator>],
        request: &TranslateRequest,
    ) -> Vec<TranslateResult> {
        let wait_secs = self.max_wait_secs;
        let max_wait = Duration::from_secs(wait_secs);

        let calls = eligible.iter().map(|translator| {
            let translator = Arc::clone(translator);
            let request = request.clone();
            async move {
                match tokio::time::timeout(max_wait, translator.find(&request)).await {
                    Ok(result) => result,
                    Err(_) => TranslateResult::failure(
                        translator.kind(),
                        &request,
                        &ProviderError::Timeout(wait_secs),
                    ),
                }
            }
        });

        future::join_all(calls).await
    }
}
