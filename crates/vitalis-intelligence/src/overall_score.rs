// ABOUTME: Canonical overall health score from weighted section scores and a BMI adjustment
// ABOUTME: round(0.3 exercise + 0.3 nutrition + 0.2 mental + 0.2 sleep) + penalty, clamped 0-100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::body_composition::BmiCategory;
use crate::config::intelligence::OverallScoreConfig;
use crate::engine::HealthCalculations;

/// Highest possible overall score
pub const MAX_OVERALL_SCORE: u32 = 100;

/// Score adjustment for a BMI value (zero or negative)
///
/// Unknown BMI is not penalized.
#[must_use]
pub fn bmi_adjustment(bmi: Option<f64>, config: &OverallScoreConfig) -> i32 {
    match bmi.map(BmiCategory::from_bmi) {
        Some(BmiCategory::Underweight | BmiCategory::Obese) => -config.underweight_or_obese_penalty,
        Some(BmiCategory::Overweight) => -config.overweight_penalty,
        Some(BmiCategory::Normal) | None => 0,
    }
}

/// Weighted section average before the BMI adjustment, unrounded
#[must_use]
pub fn weighted_section_average(
    calculations: &HealthCalculations,
    config: &OverallScoreConfig,
) -> f64 {
    let scores = [
        calculations.exercise_score,
        calculations.nutrition_score,
        calculations.mental_health_score,
        calculations.sleep_score,
    ];
    config
        .weights()
        .iter()
        .zip(scores)
        .map(|(weight, score)| weight * f64::from(score))
        .sum()
}

/// Calculate the canonical overall score (0-100)
///
/// Non-decreasing in each section score since every weight is non-negative.
#[must_use]
pub fn calculate_overall_score(
    calculations: &HealthCalculations,
    config: &OverallScoreConfig,
) -> u32 {
    let base = weighted_section_average(calculations, config).round();
    let adjusted = base + f64::from(bmi_adjustment(calculations.bmi, config));
    // Safe: clamped to 0..=100 before the cast
    adjusted.clamp(0.0, f64::from(MAX_OVERALL_SCORE)) as u32
}
