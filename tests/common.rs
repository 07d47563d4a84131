// ABOUTME: Shared test fixtures and setup functions for integration tests
// ABOUTME: Provides answer records for typical profiles and quiet tracing initialization
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `vitalis`

use std::env;
use std::sync::Once;
use tracing::Level;
use vitalis::config::AppConfig;
use vitalis::models::AnswerRecord;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// A complete, valid questionnaire for a healthy 30 year old man
///
/// Section scores: exercise 70, nutrition 90, sleep 80, mental health 80.
/// BMI is normal, so the overall score is 80.
pub fn complete_answers() -> AnswerRecord {
    AnswerRecord::new()
        .with("age", 30.0)
        .with("gender", "male")
        .with("height", 175.0)
        .with("weight", 70.0)
        .with("goals", vec!["overall-health"])
        .with("activityLevel", "moderate")
        .with("exerciseIntensity", "moderate")
        .with("exerciseDuration", "30-45")
        .with("exerciseType", vec!["cardio", "strength", "flexibility"])
        .with("diet", "healthy")
        .with("mealFrequency", "3-4")
        .with("lastMeal", "before-8pm")
        .with("sleepDuration", "7-9")
        .with("sleepQuality", "good")
        .with("recovery", "good")
        .with("mentalHealth", "rarely")
        .with("socializing", "regularly")
        .with("stress", "moderate")
}

/// Only the body measurements of the complete record
pub fn measurements_only() -> AnswerRecord {
    AnswerRecord::new()
        .with("age", 30.0)
        .with("gender", "male")
        .with("height", 175.0)
        .with("weight", 70.0)
}

/// Application config that skips strict validation
pub fn lenient_config() -> AppConfig {
    AppConfig {
        strict_validation: false,
        ..AppConfig::default()
    }
}

/// Assert two floats are within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}
