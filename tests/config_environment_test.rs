// ABOUTME: Integration tests for environment-driven application and engine configuration
// ABOUTME: Validates defaults, overrides, parse failures, and engine config validation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use vitalis::config::{AppConfig, ConfigError, EngineConfig, Environment};
use vitalis::errors::ErrorCode;

const ENV_KEYS: [&str; 7] = [
    "ENVIRONMENT",
    "VITALIS_STRICT_VALIDATION",
    "VITALIS_SCORE_EXERCISE_WEIGHT",
    "VITALIS_SCORE_NUTRITION_WEIGHT",
    "VITALIS_SCORE_SLEEP_WEIGHT",
    "VITALIS_BODY_FAT_MIN_PERCENT",
    "VITALIS_BODY_FAT_MAX_PERCENT",
];

fn clear_env() {
    for key in ENV_KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_app_config_defaults() {
    clear_env();
    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.environment, Environment::Development);
    assert!(config.strict_validation);
    assert_eq!(config.engine, EngineConfig::default());
}

#[test]
#[serial]
fn test_app_config_reads_environment() {
    clear_env();
    env::set_var("ENVIRONMENT", "production");
    env::set_var("VITALIS_STRICT_VALIDATION", "off");

    let config = AppConfig::from_env();
    clear_env();
    let config = config.unwrap();

    assert!(config.environment.is_production());
    assert!(!config.strict_validation);
    assert!(config.summary().contains("Strict Validation: false"));
}

#[test]
#[serial]
fn test_invalid_strict_flag_is_config_error() {
    clear_env();
    env::set_var("VITALIS_STRICT_VALIDATION", "sometimes");

    let result = AppConfig::from_env();
    clear_env();

    assert_eq!(result.unwrap_err().code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_engine_weight_overrides_must_still_sum_to_one() {
    clear_env();
    env::set_var("VITALIS_SCORE_EXERCISE_WEIGHT", "0.4");
    env::set_var("VITALIS_SCORE_NUTRITION_WEIGHT", "0.2");

    let balanced = EngineConfig::load();

    env::set_var("VITALIS_SCORE_NUTRITION_WEIGHT", "0.5");
    let unbalanced = EngineConfig::load();
    clear_env();

    let balanced = balanced.unwrap();
    assert!((balanced.overall_score.exercise_weight - 0.4).abs() < 1e-9);
    assert!(matches!(unbalanced, Err(ConfigError::InvalidWeights(_))));
}

#[test]
#[serial]
fn test_engine_error_surfaces_through_app_config() {
    clear_env();
    env::set_var("VITALIS_BODY_FAT_MAX_PERCENT", "2");

    let result = AppConfig::from_env();
    clear_env();

    let error = result.unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("body_fat_percent"));
}

#[test]
#[serial]
fn test_nan_body_fat_bound_is_config_error() {
    clear_env();
    env::set_var("VITALIS_BODY_FAT_MIN_PERCENT", "NaN");

    let engine = EngineConfig::load();
    let app = AppConfig::from_env();
    clear_env();

    assert!(matches!(engine, Err(ConfigError::InvalidRange(_))));
    assert_eq!(app.unwrap_err().code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_nan_score_weight_is_config_error() {
    clear_env();
    env::set_var("VITALIS_SCORE_SLEEP_WEIGHT", "NaN");

    let engine = EngineConfig::load();
    let app = AppConfig::from_env();
    clear_env();

    assert!(matches!(engine, Err(ConfigError::InvalidWeights(_))));
    assert_eq!(app.unwrap_err().code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_engine_config_round_trips_through_json() {
    let config = EngineConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let parsed: EngineConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
    assert!(parsed.validate().is_ok());
}
