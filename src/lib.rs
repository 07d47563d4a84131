// ABOUTME: Main library entry point for the Vitalis health self-assessment application
// ABOUTME: Wires configuration, logging, questionnaire validation, assessment, and narrative feedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vitalis
//!
//! Health self-assessment: a questionnaire's answers go in, body composition,
//! calorie and macronutrient targets, section scores, an overall health
//! score, dashboard pillars, and contextual warnings come out.
//!
//! ## Architecture
//!
//! - **vitalis-core**: errors, answer records, categorical answer vocabulary
//! - **vitalis-intelligence**: the pure scoring engine
//! - **this crate**: configuration, logging, the questionnaire schema and
//!   strict validator, the assessment service, and narrative feedback
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use vitalis::assessment::AssessmentService;
//! use vitalis::config::AppConfig;
//! use vitalis::errors::AppResult;
//! use vitalis::models::AnswerRecord;
//!
//! fn main() -> AppResult<()> {
//!     let service = AssessmentService::new(AppConfig::from_env()?);
//!     let answers: AnswerRecord = serde_json::from_str(r#"{"weight": 70, "height": 175}"#)?;
//!     let report = service.assess(&answers)?;
//!     println!("Health score: {}", report.score);
//!     Ok(())
//! }
//! ```

/// Assessment orchestration and report types
pub mod assessment;

/// Application configuration from the environment
pub mod config;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Narrative feedback seam
pub mod narrative;

/// Questionnaire schema and strict validation
pub mod questionnaire;

/// Answer records and the categorical answer vocabulary
pub mod models {
    pub use vitalis_core::models::*;
}

/// The scoring engine
pub mod intelligence {
    pub use vitalis_intelligence::*;
}
