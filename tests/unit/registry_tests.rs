/*!
 * Tests for the active-provider registry
 */

use std::sync::Arc;

use cliptrans::language;
use cliptrans::providers::mock::MockTranslator;
use cliptrans::providers::{Translator, TranslatorKind};
use cliptrans::registry::TranslatorRegistry;

use crate::common::turkish;

fn registry_with_three() -> TranslatorRegistry {
    let registry = TranslatorRegistry::new();
    registry.register(
        Arc::new(MockTranslator::working(TranslatorKind::Google, "a")),
        true,
    );
    registry.register(
        Arc::new(MockTranslator::working(TranslatorKind::Yandex, "b")),
        true,
    );
    registry.register(
        Arc::new(MockTranslator::working(TranslatorKind::Tureng, "c").only_for_target("tr")),
        true,
    );
    registry
}

#[test]
fn test_eligible_withAllEnabled_shouldKeepRegistrationOrder() {
    let registry = registry_with_three();
    let eligible = registry.eligible(turkish());
    let kinds: Vec<TranslatorKind> = eligible.iter().map(|t| t.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            TranslatorKind::Google,
            TranslatorKind::Yandex,
            TranslatorKind::Tureng
        ]
    );
}

#[test]
fn test_eligible_withNonTurkishTarget_shouldFilterByCanSupport() {
    let registry = registry_with_three();
    let german = language::from_name("German").unwrap();
    let kinds: Vec<TranslatorKind> = registry.eligible(german).iter().map(|t| t.kind()).collect();
    assert_eq!(kinds, vec![TranslatorKind::Google, TranslatorKind::Yandex]);
}

#[test]
fn test_deactivate_shouldRemoveFromEligibleSet() {
    let registry = registry_with_three();
    registry.deactivate(TranslatorKind::Yandex);
    let kinds: Vec<TranslatorKind> = registry
        .eligible(turkish())
        .iter()
        .map(|t| t.kind())
        .collect();
    assert_eq!(kinds, vec![TranslatorKind::Google, TranslatorKind::Tureng]);
}

#[test]
fn test_eligible_withNoneEnabled_shouldFallBackToAllRegistered() {
    let registry = registry_with_three();
    registry.passivate_all();
    assert!(registry.active_kinds().is_empty());

    // Default-to-all policy: an empty active set must not produce an empty run
    let kinds: Vec<TranslatorKind> = registry
        .eligible(turkish())
        .iter()
        .map(|t| t.kind())
        .collect();
    assert_eq!(
        kinds,
        vec![
            TranslatorKind::Google,
            TranslatorKind::Yandex,
            TranslatorKind::Tureng
        ]
    );
}

#[test]
fn test_activate_afterPassivateAll_shouldRestrictToActivated() {
    let registry = registry_with_three();
    registry.passivate_all();
    registry.activate(TranslatorKind::Yandex);
    let kinds: Vec<TranslatorKind> = registry
        .eligible(turkish())
        .iter()
        .map(|t| t.kind())
        .collect();
    assert_eq!(kinds, vec![TranslatorKind::Yandex]);
}

#[test]
fn test_register_withExistingKind_shouldReplaceInPlace() {
    let registry = registry_with_three();
    registry.register(
        Arc::new(MockTranslator::working(TranslatorKind::Google, "replacement")),
        false,
    );
    assert_eq!(registry.registered_kinds().len(), 3);
    assert_eq!(
        registry.registered_kinds()[0],
        TranslatorKind::Google,
        "replacement keeps the original position"
    );
    assert!(!registry
        .active_kinds()
        .contains(&TranslatorKind::Google));
}

#[test]
fn test_activate_withUnregisteredKind_shouldBeIgnored() {
    let registry = registry_with_three();
    registry.activate(TranslatorKind::Prompt);
    assert_eq!(registry.registered_kinds().len(), 3);
}
