// ABOUTME: Environment-based application configuration for the assessment service and CLI
// ABOUTME: Reads deployment environment, validation strictness, logging, and engine overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::info;
use vitalis_intelligence::config::EngineConfig;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Logging setup
    pub logging: LoggingConfig,
    /// Reject answer records that fail questionnaire validation before scoring
    pub strict_validation: bool,
    /// Scoring engine configuration
    pub engine: EngineConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            logging: LoggingConfig::default(),
            strict_validation: true,
            engine: EngineConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error when a variable cannot be parsed or
    /// the engine overrides fail validation
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            logging: LoggingConfig::from_env(),
            strict_validation: parse_bool(
                "VITALIS_STRICT_VALIDATION",
                &env_var_or("VITALIS_STRICT_VALIDATION", "true"),
            )?,
            engine: EngineConfig::load()?,
        };

        info!(
            environment = %config.environment,
            strict_validation = config.strict_validation,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        let weights = &self.engine.overall_score;
        format!(
            "Vitalis Configuration:\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Strict Validation: {}\n\
             - Score Weights: exercise {}, nutrition {}, mental health {}, sleep {}",
            self.environment,
            self.logging.level,
            self.strict_validation,
            weights.exercise_weight,
            weights.nutrition_weight,
            weights.mental_health_weight,
            weights.sleep_weight,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_bool(key: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(AppError::config(format!("Invalid {key} value: {other}"))),
    }
}
