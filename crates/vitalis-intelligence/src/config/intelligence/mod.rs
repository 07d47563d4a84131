// ABOUTME: Engine configuration for the health metrics and scoring pipeline
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration Module
//!
//! Provides type-safe configuration for the scoring engine. Defaults reproduce
//! the published formulas exactly; overrides exist for experimentation and
//! are validated before use.
//!
//! # Module Structure
//!
//! - `body_composition` - Body-fat estimation and healthy BMI range
//! - `nutrition` - BMR coefficients, activity factors, goal factors, macro split
//! - `scoring` - Overall score weights and BMI penalties

pub mod body_composition;
pub mod error;
pub mod nutrition;
pub mod scoring;

pub use body_composition::BodyCompositionConfig;
pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, CalorieGoalConfig, MacronutrientConfig, NutritionConfig,
};
pub use scoring::OverallScoreConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Tolerance when checking that weights sum to one
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Main engine configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Body-fat estimation and healthy BMI range
    pub body_composition: BodyCompositionConfig,
    /// Energy expenditure and macronutrient settings
    pub nutrition: NutritionConfig,
    /// Overall score weights and adjustments
    pub overall_score: OverallScoreConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when any value is not finite, weights are negative or
    /// don't sum to 1.0, clamp bounds are inverted, or multipliers are not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = self.overall_score.weights();
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(ConfigError::InvalidWeights(
                "overall score weights must be finite",
            ));
        }
        if self.float_values().iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::InvalidRange(
                "configuration values must be finite",
            ));
        }
        if weights.iter().any(|w| *w < 0.0) {
            return Err(ConfigError::InvalidWeights(
                "overall score weights must be non-negative",
            ));
        }
        if (weights.iter().sum::<f64>() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(
                "overall score weights must sum to 1.0",
            ));
        }
        if self.overall_score.underweight_or_obese_penalty < 0
            || self.overall_score.overweight_penalty < 0
        {
            return Err(ConfigError::InvalidRange("BMI penalties must be >= 0"));
        }

        let body = &self.body_composition;
        if body.min_body_fat_percent >= body.max_body_fat_percent {
            return Err(ConfigError::InvalidRange(
                "min_body_fat_percent must be < max_body_fat_percent",
            ));
        }
        if body.healthy_bmi_low >= body.healthy_bmi_high {
            return Err(ConfigError::InvalidRange(
                "healthy_bmi_low must be < healthy_bmi_high",
            ));
        }

        let factors = &self.nutrition.activity_factors;
        let all_factors = [
            factors.sedentary,
            factors.light,
            factors.moderate,
            factors.active,
            factors.very_active,
        ];
        if all_factors.iter().any(|f| *f <= 0.0) {
            return Err(ConfigError::InvalidRange("activity factors must be > 0"));
        }

        let goals = &self.nutrition.goal_adjustments;
        if goals.weight_loss_factor <= 0.0 || goals.muscle_gain_factor <= 0.0 {
            return Err(ConfigError::InvalidRange("calorie goal factors must be > 0"));
        }

        let macros = &self.nutrition.macronutrients;
        if macros.protein_g_per_kg_lean_mass <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "protein_g_per_kg_lean_mass must be > 0",
            ));
        }
        if macros
            .carb_ratios()
            .iter()
            .any(|r| !(0.0..=1.0).contains(r))
        {
            return Err(ConfigError::InvalidRange("carb ratios must be within [0, 1]"));
        }

        Ok(())
    }

    /// Every floating-point setting
    fn float_values(&self) -> Vec<f64> {
        let body = &self.body_composition;
        let bmr = &self.nutrition.bmr;
        let factors = &self.nutrition.activity_factors;
        let goals = &self.nutrition.goal_adjustments;
        let macros = &self.nutrition.macronutrients;

        let mut values = vec![
            body.male_body_fat_baseline,
            body.female_body_fat_baseline,
            body.reference_bmi,
            body.bmi_coefficient,
            body.reference_age,
            body.age_coefficient,
            body.min_body_fat_percent,
            body.max_body_fat_percent,
            body.healthy_bmi_low,
            body.healthy_bmi_high,
            bmr.msj_weight_coef,
            bmr.msj_height_coef,
            bmr.msj_age_coef,
            bmr.msj_male_constant,
            bmr.msj_female_constant,
            factors.sedentary,
            factors.light,
            factors.moderate,
            factors.active,
            factors.very_active,
            goals.weight_loss_factor,
            goals.muscle_gain_factor,
            macros.protein_g_per_kg_lean_mass,
        ];
        values.extend(macros.carb_ratios());
        values.extend(self.overall_score.weights());
        values
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable does not parse
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Overall score weights
        Self::apply_env_var(
            "VITALIS_SCORE_EXERCISE_WEIGHT",
            &mut self.overall_score.exercise_weight,
        )?;
        Self::apply_env_var(
            "VITALIS_SCORE_NUTRITION_WEIGHT",
            &mut self.overall_score.nutrition_weight,
        )?;
        Self::apply_env_var(
            "VITALIS_SCORE_MENTAL_HEALTH_WEIGHT",
            &mut self.overall_score.mental_health_weight,
        )?;
        Self::apply_env_var(
            "VITALIS_SCORE_SLEEP_WEIGHT",
            &mut self.overall_score.sleep_weight,
        )?;

        // Calorie goals
        Self::apply_env_var(
            "VITALIS_WEIGHT_LOSS_FACTOR",
            &mut self.nutrition.goal_adjustments.weight_loss_factor,
        )?;
        Self::apply_env_var(
            "VITALIS_MUSCLE_GAIN_FACTOR",
            &mut self.nutrition.goal_adjustments.muscle_gain_factor,
        )?;

        // Protein target
        Self::apply_env_var(
            "VITALIS_PROTEIN_G_PER_KG",
            &mut self.nutrition.macronutrients.protein_g_per_kg_lean_mass,
        )?;

        // Body-fat clamp
        Self::apply_env_var(
            "VITALIS_BODY_FAT_MIN_PERCENT",
            &mut self.body_composition.min_body_fat_percent,
        )?;
        Self::apply_env_var(
            "VITALIS_BODY_FAT_MAX_PERCENT",
            &mut self.body_composition.max_body_fat_percent,
        )?;

        Ok(self)
    }
}
