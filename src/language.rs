/*!
 * Language table and lookup helpers.
 *
 * Target languages come from a fixed closed mapping of display name to
 * extension code; values are looked up, never constructed ad hoc. Detector
 * output is a plain code string and is resolved through isolang, since the
 * detector may report languages outside the closed table.
 */

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;

/// A language from the closed mapping table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    name: &'static str,
    code: &'static str,
}

impl Language {
    /// Display name, e.g. "Turkish"
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Extension code used on provider query strings, e.g. "tr"
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Whether this is the Turkish target (gates the Turkish-only providers)
    pub fn is_turkish(&self) -> bool {
        self.code == "tr"
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The closed language mapping table, in display order
static LANGUAGE_TABLE: Lazy<Vec<Language>> = Lazy::new(|| {
    [
        ("Arabic", "ar"),
        ("Chinese", "zh-CN"),
        ("Czech", "cs"),
        ("Danish", "da"),
        ("Dutch", "nl"),
        ("English", "en"),
        ("Finnish", "fi"),
        ("French", "fr"),
        ("German", "de"),
        ("Greek", "el"),
        ("Hebrew", "he"),
        ("Hindi", "hi"),
        ("Hungarian", "hu"),
        ("Italian", "it"),
        ("Japanese", "ja"),
        ("Korean", "ko"),
        ("Norwegian", "no"),
        ("Polish", "pl"),
        ("Portuguese", "pt"),
        ("Romanian", "ro"),
        ("Russian", "ru"),
        ("Spanish", "es"),
        ("Swedish", "sv"),
        ("Turkish", "tr"),
        ("Ukrainian", "uk"),
    ]
    .iter()
    .map(|&(name, code)| Language { name, code })
    .collect()
});

/// All languages in the closed table, in display order
pub fn all() -> &'static [Language] {
    &LANGUAGE_TABLE
}

/// Look up a language by its extension code (case-insensitive)
pub fn from_code(code: &str) -> Result<Language> {
    let normalized = code.trim();
    LANGUAGE_TABLE
        .iter()
        .find(|l| l.code.eq_ignore_ascii_case(normalized))
        .copied()
        .ok_or_else(|| anyhow!("Unknown language code: {}", code))
}

/// Look up a language by its display name (case-insensitive)
pub fn from_name(name: &str) -> Result<Language> {
    let normalized = name.trim();
    LANGUAGE_TABLE
        .iter()
        .find(|l| l.name.eq_ignore_ascii_case(normalized))
        .copied()
        .ok_or_else(|| anyhow!("Unknown language name: {}", name))
}

/// Resolve a detector-reported code to a display name.
///
/// Codes outside the closed table fall back to isolang, so a detection of,
/// say, "sw" still yields "Swahili" for logging instead of an error.
pub fn detected_name(code: &str) -> Option<&'static str> {
    let normalized = code.trim().to_lowercase();

    if let Ok(lang) = from_code(&normalized) {
        return Some(lang.name());
    }

    // Detector codes are two-letter, possibly with a region suffix like zh-CN
    let base = normalized.split('-').next().unwrap_or(&normalized);
    isolang::Language::from_639_1(base).map(|l| l.to_name())
}
