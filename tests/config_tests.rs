use std::collections::HashMap;

use hello_services::core::config::{LogConfig, LogFormat};
use hello_services::errors::ServiceError;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_defaults_when_unset() {
    let config = LogConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, LogConfig::default());
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, "info");
}

#[test]
fn test_text_format_and_level() {
    let config =
        LogConfig::from_lookup(lookup(&[("LOG_FORMAT", "TEXT"), ("LOG_LEVEL", "debug")])).unwrap();
    assert_eq!(config.format, LogFormat::Text);
    assert_eq!(config.level, "debug");
}

#[test]
fn test_blank_values_fall_back_to_defaults() {
    let config =
        LogConfig::from_lookup(lookup(&[("LOG_FORMAT", "  "), ("LOG_LEVEL", "")])).unwrap();
    assert_eq!(config, LogConfig::default());
}

#[test]
fn test_unknown_format_is_rejected() {
    let err = LogConfig::from_lookup(lookup(&[("LOG_FORMAT", "xml")])).unwrap_err();
    match err {
        ServiceError::Config(msg) => assert!(msg.contains("LOG_FORMAT")),
        ServiceError::Serialization(_) => panic!("Unexpected error type"),
    }
}

#[test]
fn test_invalid_level_is_rejected() {
    let err =
        LogConfig::from_lookup(lookup(&[("LOG_LEVEL", "not a [valid directive")])).unwrap_err();
    match err {
        ServiceError::Config(msg) => assert!(msg.contains("LOG_LEVEL")),
        ServiceError::Serialization(_) => panic!("Unexpected error type"),
    }
}

#[test]
fn test_target_directives_are_accepted() {
    let config =
        LogConfig::from_lookup(lookup(&[("LOG_LEVEL", "warn,hello_services=debug")])).unwrap();
    assert_eq!(config.level, "warn,hello_services=debug");
}
