// ABOUTME: Unit tests for logging functionality
// ABOUTME: Validates logging configuration from the environment and builder overrides
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use vitalis::logging::{LogFormat, LoggingConfig};

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "test-service");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "debug");
    assert!(matches!(config.format, LogFormat::Json));
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "test-service");
    assert!(config.include_location); // Always on in production

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
    env::remove_var("SERVICE_NAME");
}

#[test]
#[serial]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert!(matches!(config.format, LogFormat::Pretty));
    assert_eq!(config.service_name, "vitalis");
    assert!(!config.include_location);
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
}

#[test]
fn test_builder_overrides() {
    let config = LoggingConfig::default()
        .with_level("warn")
        .with_service_name("vitalis-cli");

    assert_eq!(config.level, "warn");
    assert_eq!(config.service_name, "vitalis-cli");
}

#[test]
#[serial]
fn test_second_init_fails_instead_of_panicking() {
    let config = LoggingConfig {
        format: LogFormat::Compact,
        ..LoggingConfig::default()
    }
    .with_level("error");

    let first = config.init();
    let second = config.init();

    assert!(first.is_ok());
    assert!(second.is_err());
}
