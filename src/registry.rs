/*!
 * Active-provider registry.
 *
 * Holds the ordered set of registered translators together with their
 * enabled/disabled state. Toggles come from user-facing actions only and are
 * serialized by the caller; pipeline runs never mutate the registry, they
 * take a consistent eligibility snapshot at invocation start.
 */

use std::sync::Arc;

use log::warn;
use parking_lot::RwLock;

use crate::language::Language;
use crate::providers::{Translator, TranslatorKind};

struct Entry {
    translator: Arc<dyn Translator>,
    enabled: bool,
}

/// Explicit registry of translator descriptors, iterated in registration
/// order. Registration order is invocation-priority order: merged results
/// keep this order regardless of which backend answers first.
pub struct TranslatorRegistry {
    entries: RwLock<Vec<Entry>>,
}

impl TranslatorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Register a translator with its initial enabled state. A translator
    /// kind already present is replaced in place, keeping its position.
    pub fn register(&self, translator: Arc<dyn Translator>, enabled: bool) {
        let mut entries = self.entries.write();
        let kind = translator.kind();
        match entries.iter_mut().find(|e| e.translator.kind() == kind) {
            Some(entry) => {
                entry.translator = translator;
                entry.enabled = enabled;
            }
            None => entries.push(Entry {
                translator,
                enabled,
            }),
        }
    }

    /// Enable a translator
    pub fn activate(&self, kind: TranslatorKind) {
        self.set_enabled(kind, true);
    }

    /// Disable a translator
    pub fn deactivate(&self, kind: TranslatorKind) {
        self.set_enabled(kind, false);
    }

    /// Disable every registered translator
    pub fn passivate_all(&self) {
        let mut entries = self.entries.write();
        for entry in entries.iter_mut() {
            entry.enabled = false;
        }
    }

    fn set_enabled(&self, kind: TranslatorKind, enabled: bool) {
        let mut entries = self.entries.write();
        match entries.iter_mut().find(|e| e.translator.kind() == kind) {
            Some(entry) => entry.enabled = enabled,
            None => warn!("Ignoring toggle for unregistered translator: {}", kind),
        }
    }

    /// Kinds of every registered translator, in registration order
    pub fn registered_kinds(&self) -> Vec<TranslatorKind> {
        self.entries
            .read()
            .iter()
            .map(|e| e.translator.kind())
            .collect()
    }

    /// Kinds currently enabled, in registration order
    pub fn active_kinds(&self) -> Vec<TranslatorKind> {
        self.entries
            .read()
            .iter()
            .filter(|e| e.enabled)
            .map(|e| e.translator.kind())
            .collect()
    }

    /// Snapshot of the translators eligible for `target`, in registration
    /// order.
    ///
    /// When no translator is enabled at all, every registered translator is
    /// treated as active (default-to-all policy) rather than producing an
    /// empty result set; `can_support` still filters the outcome.
    pub fn eligible(&self, target: Language) -> Vec<Arc<dyn Translator>> {
        let entries = self.entries.read();
        let none_enabled = entries.iter().all(|e| !e.enabled);

        entries
            .iter()
            .filter(|e| e.enabled || none_enabled)
            .filter(|e| e.translator.can_support(target))
            .map(|e| Arc::clone(&e.translator))
            .collect()
    }
}

impl Default for TranslatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
