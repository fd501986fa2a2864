/*!
 * Tests for result organization: dedup, ordering, failure channel
 */

use cliptrans::pipeline::organize;
use cliptrans::providers::{TranslateResult, TranslatorKind};

fn success(kind: TranslatorKind, translated: &str) -> TranslateResult {
    TranslateResult {
        kind,
        source_text: "hello".to_string(),
        translated_text: Some(translated.to_string()),
        succeeded: true,
        diagnostic: None,
    }
}

fn failure(kind: TranslatorKind, diagnostic: &str) -> TranslateResult {
    TranslateResult {
        kind,
        source_text: "hello".to_string(),
        translated_text: None,
        succeeded: false,
        diagnostic: Some(diagnostic.to_string()),
    }
}

#[test]
fn test_organize_withDistinctTranslations_shouldKeepInputOrder() {
    let results = vec![
        success(TranslatorKind::Google, "merhaba"),
        success(TranslatorKind::Yandex, "selam"),
        success(TranslatorKind::Prompt, "merhabalar"),
    ];
    let organized = organize(&results, "hello");
    assert_eq!(organized.merged_text, "merhaba\nselam\nmerhabalar");
    assert!(!organized.has_failures());
}

#[test]
fn test_organize_withCaseAndWhitespaceDuplicates_shouldKeepFirstSeen() {
    let results = vec![
        success(TranslatorKind::Google, "merhaba"),
        success(TranslatorKind::Yandex, "  Merhaba "),
        success(TranslatorKind::Prompt, "MERHABA"),
    ];
    let organized = organize(&results, "hello");
    assert_eq!(organized.merged_text, "merhaba");
}

#[test]
fn test_organize_isIdempotentOnDedup() {
    let results = vec![
        success(TranslatorKind::Google, "selam"),
        success(TranslatorKind::Yandex, "selam"),
    ];
    let first = organize(&results, "hi");
    // No two case/whitespace-equal lines may survive
    let lines: Vec<&str> = first.merged_text.lines().collect();
    assert_eq!(lines.len(), 1);
}

#[test]
fn test_organize_withMixedOutcomes_shouldSplitChannels() {
    let results = vec![
        success(TranslatorKind::Google, "merhaba"),
        failure(TranslatorKind::Yandex, "Request timed out after 10s"),
    ];
    let organized = organize(&results, "hello");
    assert_eq!(organized.merged_text, "merhaba");
    assert_eq!(organized.failure_text, "Yandex: Request timed out after 10s");
}

#[test]
fn test_organize_withAllFailed_shouldListEveryDiagnostic() {
    let results = vec![
        failure(TranslatorKind::Google, "boom"),
        failure(TranslatorKind::Tureng, "bust"),
    ];
    let organized = organize(&results, "hello");
    assert!(organized.merged_text.is_empty());
    assert_eq!(organized.failure_text.lines().count(), 2);
    assert!(organized.failure_text.contains("Google: boom"));
    assert!(organized.failure_text.contains("Tureng: bust"));
}

#[test]
fn test_organize_withEmptyInput_shouldYieldEmptyResultWithoutFailures() {
    let organized = organize(&[], "hello");
    assert!(organized.is_empty());
    assert!(!organized.has_failures());
}

#[test]
fn test_organize_withBlankTranslation_shouldDropIt() {
    let results = vec![
        success(TranslatorKind::Google, "   "),
        success(TranslatorKind::Yandex, "selam"),
    ];
    let organized = organize(&results, "hi");
    assert_eq!(organized.merged_text, "selam");
}
