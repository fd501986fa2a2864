/*!
 * Result organization: merge raw per-translator outcomes into a final
 * presentation payload with a separate failure channel.
 */

use log::debug;

use crate::providers::TranslateResult;

/// The organized outcome of one pipeline run; derived, never persisted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizedResult {
    /// Newline-joined, deduplicated translations in translator-priority order
    pub merged_text: String,
    /// Newline-joined per-translator failure diagnostics
    pub failure_text: String,
}

impl OrganizedResult {
    /// Whether the run produced no translations
    pub fn is_empty(&self) -> bool {
        self.merged_text.is_empty()
    }

    /// Whether any translator reported a failure
    pub fn has_failures(&self) -> bool {
        !self.failure_text.is_empty()
    }
}

/// Merge per-translator outcomes into an `OrganizedResult`.
///
/// Successes are deduplicated by normalized translated text (trimmed,
/// case-insensitive); the first occurrence wins and output order is the
/// input order, which the aggregator guarantees to be the eligible-set
/// order rather than completion order. Failures are tagged with the
/// translator identity. An empty input yields an empty result and is not
/// an error: zero eligible translators is a valid outcome.
pub fn organize(results: &[TranslateResult], original_text: &str) -> OrganizedResult {
    let mut merged: Vec<&str> = Vec::new();
    let mut seen: Vec<String> = Vec::new();
    let mut failures: Vec<String> = Vec::new();

    for result in results {
        if result.succeeded {
            let translated = match result.translated_text.as_deref() {
                Some(text) if !text.trim().is_empty() => text,
                _ => continue,
            };
            let normalized = translated.trim().to_lowercase();
            if seen.contains(&normalized) {
                continue;
            }
            seen.push(normalized);
            merged.push(translated.trim());
        } else {
            let diagnostic = result
                .diagnostic
                .as_deref()
                .unwrap_or("unknown failure");
            failures.push(format!("{}: {}", result.kind, diagnostic));
        }
    }

    debug!(
        "Organized {} result(s) for {:?}: {} translation(s), {} failure(s)",
        results.len(),
        original_text,
        merged.len(),
        failures.len()
    );

    OrganizedResult {
        merged_text: merged.join("\n"),
        failure_text: failures.join("\n"),
    }
}
