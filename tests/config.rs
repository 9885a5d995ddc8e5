use std::time::Duration;

use commodity_hub::config::AppConfig;
use commodity_hub::domain::errors::AppError;
use commodity_hub::domain::logging::LogLevel;

#[test]
fn partial_override_keeps_defaults() {
    let config = AppConfig::from_json(r#"{"redirect_delay_ms": 500, "log_level": "warn"}"#).unwrap();

    assert_eq!(config.redirect_delay(), Duration::from_millis(500));
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.toast_duration_ms, AppConfig::default().toast_duration_ms);
    assert_eq!(config.mobile_breakpoint_px, 768);
}

#[test]
fn empty_object_is_the_default() {
    assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
}

#[test]
fn unknown_fields_are_rejected() {
    let err = AppConfig::from_json(r#"{"redirect_delay": 10}"#).unwrap_err();
    assert!(matches!(err, AppError::ConfigError(ref msg) if msg.contains("redirect_delay")));
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = AppConfig::from_json("{redirect_delay_ms: 10").unwrap_err();
    assert!(err.to_string().starts_with("Config Error:"));
}

#[test]
fn defaults() {
    let config = AppConfig::default();
    assert_eq!(config.redirect_delay(), Duration::from_millis(1500));
    assert_eq!(config.toast_duration(), Duration::from_secs(4));
    assert!(config.is_mobile_width(767.0));
    assert!(!config.is_mobile_width(768.0));
}
