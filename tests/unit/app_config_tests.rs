/*!
 * Tests for app configuration
 */

use cliptrans::app_config::{Config, LogLevel, TranslatorConfig};
use cliptrans::providers::TranslatorKind;

#[test]
fn test_default_config_shouldEnableEveryKnownTranslator() {
    let config = Config::default();
    assert_eq!(config.target_language, "Turkish");
    assert_eq!(config.translators.len(), TranslatorKind::ALL.len());
    assert!(config.translators.iter().all(|t| t.enabled));
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_withPartialJson_shouldFillDefaults() {
    let json = r#"{
        "target_language": "German",
        "translators": [
            { "type": "google" },
            { "type": "yandex", "enabled": false, "api_key": "k" }
        ]
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.target_language, "German");
    assert_eq!(config.translators.len(), 2);
    assert!(config.translators[0].enabled);
    assert!(!config.translators[1].enabled);
    assert_eq!(config.translators[1].api_key, "k");
    assert_eq!(config.translators[0].timeout_secs, 10);
    assert!(!config.analytics.enabled);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_withUnknownTargetLanguage_shouldFail() {
    let mut config = Config::default();
    config.target_language = "Klingon".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withUnknownTranslatorType_shouldFail() {
    let json = r#"{ "translators": [ { "type": "babelfish" } ] }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withZeroTimeout_shouldFail() {
    let mut config = Config::default();
    config.translators[0].timeout_secs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_translator_lookup_shouldFindConfiguredKind() {
    let config = Config::default();
    let entry = config.translator(TranslatorKind::Tureng).unwrap();
    assert_eq!(entry.translator_type, "tureng");
    assert!(config.translator(TranslatorKind::Google).is_some());
}

#[test]
fn test_translator_config_roundtrip_shouldPreserveKind() {
    for &kind in TranslatorKind::ALL.iter() {
        let entry = TranslatorConfig::new(kind);
        assert_eq!(entry.kind().unwrap(), kind);
    }
}

#[test]
fn test_log_level_serde_shouldUseLowercase() {
    let json = r#"{ "log_level": "debug" }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Debug);
}
