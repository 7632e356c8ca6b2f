use super::*;

#[test]
fn defaults_match_original_page() {
    let config = AppConfig::default();
    assert_eq!(config.greeting_name, "Leptos");
    assert_eq!(config.batch_step, 3);
    assert_eq!(config.level().expect("default level parses"), log::Level::Debug);
}

#[test]
fn empty_object_yields_defaults() {
    assert_eq!(AppConfig::from_json("{}").expect("valid"), AppConfig::default());
}

#[test]
fn partial_object_overrides_only_given_keys() {
    let config = AppConfig::from_json(r#"{"greetingName": "StackBlitz", "batchStep": 5}"#)
        .expect("valid");
    assert_eq!(config.greeting_name, "StackBlitz");
    assert_eq!(config.batch_step, 5);
    assert_eq!(config.log_level, "debug");
}

#[test]
fn log_level_names_are_case_insensitive() {
    let config = AppConfig::from_json(r#"{"logLevel": "WARN"}"#).expect("valid");
    assert_eq!(config.level().expect("parses"), log::Level::Warn);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = AppConfig::from_json("{greetingName:").expect_err("malformed");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn negative_batch_step_is_rejected() {
    let err = AppConfig::from_json(r#"{"batchStep": -3}"#).expect_err("u32 only");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = AppConfig::from_json(r#"{"logLevel": "loud"}"#).expect_err("bad level");
    assert!(matches!(err, ConfigError::LogLevel(level) if level == "loud"));
}

#[test]
fn load_without_page_falls_back_to_defaults() {
    let (config, err) = load();
    assert_eq!(config, AppConfig::default());
    assert!(err.is_none());
}
