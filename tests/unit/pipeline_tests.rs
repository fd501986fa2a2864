/*!
 * Tests for the aggregator: single-flight guard, fan-out, failure isolation
 */

use std::sync::atomic::Ordering;
use std::sync::Arc;

use cliptrans::detection::{FailingDetector, StaticDetector};
use cliptrans::pipeline::Aggregator;
use cliptrans::providers::mock::MockTranslator;
use cliptrans::providers::TranslatorKind;
use cliptrans::registry::TranslatorRegistry;

use crate::common::{aggregator_with, registry_with, turkish};

#[tokio::test]
async fn test_translate_withTwoWorkingTranslators_shouldMergeDeduplicated() {
    let google = MockTranslator::working(TranslatorKind::Google, "merhaba");
    let yandex = MockTranslator::working(TranslatorKind::Yandex, "merhaba");
    let aggregator = aggregator_with(vec![Arc::new(google), Arc::new(yandex)]);

    let organized = aggregator.translate("hello").await.unwrap().unwrap();
    assert_eq!(organized.merged_text, "merhaba");
    assert!(!organized.has_failures());
}

#[tokio::test]
async fn test_translate_withSameTextTwice_shouldInvokeTranslatorsOnce() {
    let google = MockTranslator::working(TranslatorKind::Google, "merhaba");
    let counter = google.invocation_counter();
    let aggregator = aggregator_with(vec![Arc::new(google)]);

    let first = aggregator.translate("hello").await.unwrap();
    assert!(first.is_some());
    let second = aggregator.translate("hello").await.unwrap();
    assert!(second.is_none(), "duplicate input must be a no-op");
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_translate_withNewTextAfterDuplicate_shouldRunAgain() {
    let google = MockTranslator::working(TranslatorKind::Google, "merhaba");
    let counter = google.invocation_counter();
    let aggregator = aggregator_with(vec![Arc::new(google)]);

    aggregator.translate("hello").await.unwrap();
    aggregator.translate("hello").await.unwrap();
    aggregator.translate("world").await.unwrap();
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}

#[test]
fn test_translate_withBlankText_shouldBeNoOp() {
    let google = MockTranslator::working(TranslatorKind::Google, "merhaba");
    let counter = google.invocation_counter();
    let aggregator = aggregator_with(vec![Arc::new(google)]);

    tokio_test::block_on(async {
        assert!(aggregator.translate("   ").await.unwrap().is_none());
    });
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_translate_withSlowTranslator_shouldKeepEligibleOrder() {
    // Google answers last but is registered first; the merged order must
    // follow registration order, not completion order
    let google = MockTranslator::slow(TranslatorKind::Google, "birinci", 100);
    let yandex = MockTranslator::working(TranslatorKind::Yandex, "ikinci");
    let aggregator = aggregator_with(vec![Arc::new(google), Arc::new(yandex)]);

    let organized = aggregator.translate("hello").await.unwrap().unwrap();
    assert_eq!(organized.merged_text, "birinci\nikinci");
}

#[tokio::test]
async fn test_translate_withOneFailingTranslator_shouldIsolateFailure() {
    let google = MockTranslator::working(TranslatorKind::Google, "merhaba");
    let yandex = MockTranslator::failing(TranslatorKind::Yandex, "timeout");
    let aggregator = aggregator_with(vec![Arc::new(google), Arc::new(yandex)]);

    let organized = aggregator.translate("hello").await.unwrap().unwrap();
    assert_eq!(organized.merged_text, "merhaba");
    assert!(organized.failure_text.starts_with("Yandex:"));
    assert!(organized.failure_text.contains("timeout"));
}

#[tokio::test]
async fn test_translate_withAllTranslatorsFailing_shouldReportEveryDiagnostic() {
    let google = MockTranslator::failing(TranslatorKind::Google, "down");
    let yandex = MockTranslator::failing(TranslatorKind::Yandex, "also down");
    let aggregator = aggregator_with(vec![Arc::new(google), Arc::new(yandex)]);

    let organized = aggregator.translate("hello").await.unwrap().unwrap();
    assert!(organized.merged_text.is_empty());
    assert_eq!(organized.failure_text.lines().count(), 2);
}

#[tokio::test]
async fn test_translate_withZeroEligibleTranslators_shouldYieldEmptyResult() {
    // Both mocks only support Turkish, but the target here is German
    let tureng = MockTranslator::working(TranslatorKind::Tureng, "never").only_for_target("tr");
    let seslisozluk =
        MockTranslator::working(TranslatorKind::SesliSozluk, "never").only_for_target("tr");
    let registry = registry_with(vec![Arc::new(tureng), Arc::new(seslisozluk)]);
    let detector = Arc::new(StaticDetector::new("en"));
    let german = cliptrans::language::from_name("German").unwrap();
    let aggregator = Aggregator::new(detector, registry, german);

    let organized = aggregator.translate("hello").await.unwrap().unwrap();
    assert!(organized.is_empty());
    assert!(!organized.has_failures());
}

#[tokio::test]
async fn test_translate_withDetectionFailure_shouldAbortRunWithoutRetry() {
    let google = MockTranslator::working(TranslatorKind::Google, "merhaba");
    let counter = google.invocation_counter();
    let registry = registry_with(vec![Arc::new(google)]);
    let detector = Arc::new(FailingDetector::new("dns exploded"));
    let aggregator = Aggregator::new(detector, registry, turkish());

    let outcome = aggregator.translate("hello").await;
    assert!(outcome.is_err());
    assert_eq!(counter.load(Ordering::SeqCst), 0);

    // The guard was updated before detection, so the same text is not retried
    let retry = aggregator.translate("hello").await.unwrap();
    assert!(retry.is_none());
}

#[tokio::test]
async fn test_translate_withTranslatorExceedingWaitBound_shouldTimeOutThatTranslatorOnly() {
    let slow = MockTranslator::slow(TranslatorKind::Google, "too late", 2_000);
    let fast = MockTranslator::working(TranslatorKind::Yandex, "merhaba");
    let registry = registry_with(vec![Arc::new(slow), Arc::new(fast)]);
    let detector = Arc::new(StaticDetector::new("en"));
    let aggregator = Aggregator::new(detector, registry, turkish()).with_max_wait_secs(1);

    let organized = aggregator.translate("hello").await.unwrap().unwrap();
    assert_eq!(organized.merged_text, "merhaba");
    assert!(organized.failure_text.starts_with("Google:"));
    assert!(organized.failure_text.contains("timed out"));
}

#[tokio::test]
async fn test_translate_concurrentRunsWithDistinctTexts_shouldBothComplete() {
    let google = Arc::new(MockTranslator::working(TranslatorKind::Google, "sonuç"));
    let counter = google.invocation_counter();
    let aggregator = aggregator_with(vec![google]);

    let (a, b) = tokio::join!(aggregator.translate("hello"), aggregator.translate("world"));
    assert!(a.unwrap().is_some());
    assert!(b.unwrap().is_some());
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_registry_toggle_betweenRuns_shouldAffectNextSnapshot() {
    let google = MockTranslator::working(TranslatorKind::Google, "bir");
    let yandex = MockTranslator::working(TranslatorKind::Yandex, "iki");
    let registry = registry_with(vec![Arc::new(google), Arc::new(yandex)]);
    let detector = Arc::new(StaticDetector::new("en"));
    let aggregator = Aggregator::new(detector, Arc::clone(&registry), turkish());

    let first = aggregator.translate("hello").await.unwrap().unwrap();
    assert_eq!(first.merged_text, "bir\niki");

    registry.deactivate(TranslatorKind::Google);
    let second = aggregator.translate("world").await.unwrap().unwrap();
    assert_eq!(second.merged_text, "iki");
}

#[test]
fn test_registry_helper_shouldBuildFromTrait() {
    // Guard for the common helper itself: it must accept any Translator impl
    let registry: Arc<TranslatorRegistry> = registry_with(vec![Arc::new(
        MockTranslator::working(TranslatorKind::Prompt, "x"),
    )]);
    assert_eq!(registry.registered_kinds(), vec![TranslatorKind::Prompt]);
}
