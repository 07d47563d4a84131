// ABOUTME: Health engine facade turning an answer record into calculations, score, and pillars
// ABOUTME: Owns an EngineConfig; free functions run the same pipeline on the global config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Health Engine
//!
//! The pipeline is pure: answers are converted into a [`HealthProfile`],
//! then body composition, intake, and section scores are derived from it.
//! Calling it twice with the same answers yields identical output.

use crate::body_composition::{calculate_body_composition, BmiCategory, BodyComposition};
use crate::config::intelligence::EngineConfig;
use crate::nutrition_calculator::{calculate_intake, IntakeRecommendation};
use crate::overall_score;
use crate::pillars::{self, HealthPillarScores};
use crate::profile::HealthProfile;
use crate::section_scores::SectionScores;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vitalis_core::models::AnswerRecord;

/// Flat result of the metrics pipeline
///
/// `Default` is the all-absent, all-zero record callers fall back to when a
/// calculation cannot be shown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCalculations {
    /// Body mass index
    pub bmi: Option<f64>,
    /// BMI classification
    pub bmi_category: Option<BmiCategory>,
    /// Body fat (%), supplied or estimated
    pub body_fat: Option<f64>,
    /// True when body fat was estimated from BMI, age, and sex
    pub is_body_fat_estimated: bool,
    /// Healthy weight range lower bound (kg)
    pub ideal_weight_low: Option<f64>,
    /// Healthy weight range upper bound (kg)
    pub ideal_weight_high: Option<f64>,
    /// Basal metabolic rate (kcal/day)
    pub bmr: Option<f64>,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: Option<f64>,
    /// Goal-adjusted calories (kcal/day)
    pub recommended_calories: Option<f64>,
    /// Protein target (g/day)
    pub protein_grams: Option<f64>,
    /// Carbohydrate target (g/day)
    pub carb_grams: Option<f64>,
    /// Fat target (g/day)
    pub fat_grams: Option<f64>,
    /// Exercise section score (0-100)
    pub exercise_score: u32,
    /// Nutrition section score (0-100)
    pub nutrition_score: u32,
    /// Mental health section score (0-100)
    #[serde(alias = "wellbeingScore")]
    pub mental_health_score: u32,
    /// Sleep section score (0-100)
    pub sleep_score: u32,
}

impl HealthCalculations {
    /// Assemble the flat record from the pipeline stages
    #[must_use]
    pub fn from_parts(
        body: BodyComposition,
        intake: IntakeRecommendation,
        sections: SectionScores,
    ) -> Self {
        Self {
            bmi: body.bmi,
            bmi_category: body.bmi_category,
            body_fat: body.body_fat,
            is_body_fat_estimated: body.is_body_fat_estimated,
            ideal_weight_low: body.ideal_weight_low,
            ideal_weight_high: body.ideal_weight_high,
            bmr: intake.bmr,
            tdee: intake.tdee,
            recommended_calories: intake.recommended_calories,
            protein_grams: intake.protein_grams,
            carb_grams: intake.carb_grams,
            fat_grams: intake.fat_grams,
            exercise_score: sections.exercise,
            nutrition_score: sections.nutrition,
            mental_health_score: sections.mental_health,
            sleep_score: sections.sleep,
        }
    }

    /// The four section scores
    #[must_use]
    pub const fn section_scores(&self) -> SectionScores {
        SectionScores {
            exercise: self.exercise_score,
            nutrition: self.nutrition_score,
            mental_health: self.mental_health_score,
            sleep: self.sleep_score,
        }
    }
}

/// Scoring engine bound to one configuration
#[derive(Debug, Clone, Default)]
pub struct HealthEngine {
    config: EngineConfig,
}

impl HealthEngine {
    /// Create an engine with an explicit configuration
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Create an engine using the global configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(EngineConfig::global().clone())
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the metrics pipeline on a raw answer record
    #[must_use]
    pub fn calculate_health_metrics(&self, answers: &AnswerRecord) -> HealthCalculations {
        self.calculate_for_profile(&HealthProfile::from_answers(answers))
    }

    /// Run the metrics pipeline on an already converted profile
    #[must_use]
    pub fn calculate_for_profile(&self, profile: &HealthProfile) -> HealthCalculations {
        let body = calculate_body_composition(profile, &self.config.body_composition);
        let intake = calculate_intake(profile, &body, &self.config.nutrition);
        let sections = SectionScores::from_profile(profile);
        debug!(
            bmi = ?body.bmi,
            exercise = sections.exercise,
            nutrition = sections.nutrition,
            mental_health = sections.mental_health,
            sleep = sections.sleep,
            "health metrics calculated"
        );
        HealthCalculations::from_parts(body, intake, sections)
    }

    /// Canonical overall score (0-100)
    #[must_use]
    pub fn calculate_overall_score(&self, calculations: &HealthCalculations) -> u32 {
        overall_score::calculate_overall_score(calculations, &self.config.overall_score)
    }

    /// Dashboard pillar breakdown
    #[must_use]
    pub fn calculate_health_pillars(
        &self,
        answers: &AnswerRecord,
        calculations: &HealthCalculations,
    ) -> HealthPillarScores {
        pillars::calculate_pillars(&HealthProfile::from_answers(answers), calculations)
    }
}

/// Run the metrics pipeline with the global configuration
#[must_use]
pub fn calculate_health_metrics(answers: &AnswerRecord) -> HealthCalculations {
    HealthEngine::from_global().calculate_health_metrics(answers)
}

/// Canonical overall score with the global configuration
#[must_use]
pub fn calculate_overall_score(calculations: &HealthCalculations) -> u32 {
    overall_score::calculate_overall_score(calculations, &EngineConfig::global().overall_score)
}

/// Overall score for an answer record and its calculations
///
/// The score only depends on the calculations; the answers are accepted so
/// callers holding both can use a single entry point.
#[must_use]
pub fn calculate_score(_answers: &AnswerRecord, calculations: &HealthCalculations) -> u32 {
    calculate_overall_score(calculations)
}

/// Dashboard pillar breakdown
#[must_use]
pub fn calculate_health_pillars(
    answers: &AnswerRecord,
    calculations: &HealthCalculations,
) -> HealthPillarScores {
    pillars::calculate_pillars(&HealthProfile::from_answers(answers), calculations)
}
