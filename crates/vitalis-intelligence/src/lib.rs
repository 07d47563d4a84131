// ABOUTME: Health metrics and scoring engine crate for the Vitalis self-assessment
// ABOUTME: Body composition, intake, section scores, overall score, pillars, and contextual rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vitalis Intelligence
//!
//! The pure calculation core of Vitalis. Every entry point is a synchronous
//! function over in-memory data: no I/O, no shared mutable state, and no
//! error path for malformed answers (they degrade to absent values).
//!
//! ```text
//! AnswerRecord -> HealthProfile -> BodyComposition -> IntakeRecommendation
//!                               -> SectionScores
//!              => HealthCalculations -> overall score / pillars / warnings
//! ```

/// Engine configuration (weights, coefficients, clamps)
pub mod config;

/// Typed view of an answer record
pub mod profile;

/// BMI, body-fat estimate, ideal weight range
pub mod body_composition;
/// BMR, TDEE, calories, and macronutrients
pub mod nutrition_calculator;

/// Literal point tables for the section scores
pub mod scoring_tables;
/// Exercise, nutrition, sleep, and wellbeing scores
pub mod section_scores;

/// Canonical overall score
pub mod overall_score;
/// Five-pillar dashboard breakdown
pub mod pillars;

/// Answer-combination warnings
pub mod contextual_rules;
/// Goal advice lookup
pub mod goal_advice;

/// Pipeline facade
pub mod engine;

pub use body_composition::{BmiCategory, BodyComposition};
pub use config::{ConfigError, EngineConfig};
pub use contextual_rules::{
    analyze_profile, get_contextual_analysis, AnalysisCategory, ContextualWarning, Severity,
    UnknownCategoryError,
};
pub use engine::{
    calculate_health_metrics, calculate_health_pillars, calculate_overall_score, calculate_score,
    HealthCalculations, HealthEngine,
};
pub use goal_advice::get_health_goal_advice;
pub use nutrition_calculator::{CalorieGoal, IntakeRecommendation};
pub use pillars::{HealthPillarScores, Pillar, PillarRating, PillarScore};
pub use profile::HealthProfile;
pub use section_scores::SectionScores;
