// ABOUTME: Overall score configuration for combining section scores
// ABOUTME: Configures section weights and BMI-based penalties for the composite health score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Weights and adjustments of the canonical overall score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallScoreConfig {
    /// Exercise section weight: 0.3
    pub exercise_weight: f64,
    /// Nutrition section weight: 0.3
    pub nutrition_weight: f64,
    /// Mental health section weight: 0.2
    pub mental_health_weight: f64,
    /// Sleep section weight: 0.2
    pub sleep_weight: f64,
    /// Points removed when BMI < 18.5 or BMI >= 30: 10
    pub underweight_or_obese_penalty: i32,
    /// Points removed when 25 <= BMI < 30: 5
    pub overweight_penalty: i32,
}

impl OverallScoreConfig {
    pub(crate) fn weights(&self) -> [f64; 4] {
        [
            self.exercise_weight,
            self.nutrition_weight,
            self.mental_health_weight,
            self.sleep_weight,
        ]
    }
}

impl Default for OverallScoreConfig {
    fn default() -> Self {
        Self {
            exercise_weight: 0.3,
            nutrition_weight: 0.3,
            mental_health_weight: 0.2,
            sleep_weight: 0.2,
            underweight_or_obese_penalty: 10,
            overweight_penalty: 5,
        }
    }
}
