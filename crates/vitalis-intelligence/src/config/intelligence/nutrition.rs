// ABOUTME: Nutrition configuration for energy expenditure and macro recommendations
// ABOUTME: Configures Mifflin-St Jeor coefficients, activity factors, goal factors, and carb ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010). Exercise Physiology

use serde::{Deserialize, Serialize};
use vitalis_core::models::{ActivityLevel, CarbPreference};

/// Nutrition Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie adjustments for weight goals
    pub goal_adjustments: CalorieGoalConfig,
    /// Protein target and carbohydrate split
    pub macronutrients: MacronutrientConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2, also used when the level is unknown
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub light: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderate: f64,
    /// Very active (6-7 days/week): 1.725
    pub active: f64,
    /// Extra active (athlete or physical job): 1.9
    pub very_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level; unknown levels use the sedentary factor
    #[must_use]
    pub fn factor_for(&self, level: Option<ActivityLevel>) -> f64 {
        match level {
            Some(ActivityLevel::Light) => self.light,
            Some(ActivityLevel::Moderate) => self.moderate,
            Some(ActivityLevel::Active) => self.active,
            Some(ActivityLevel::VeryActive) => self.very_active,
            Some(ActivityLevel::Sedentary) | None => self.sedentary,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

/// Calorie multipliers applied to TDEE for weight goals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieGoalConfig {
    /// Deficit factor for weight loss: 0.8
    pub weight_loss_factor: f64,
    /// Surplus factor for muscle gain: 1.1
    pub muscle_gain_factor: f64,
}

impl Default for CalorieGoalConfig {
    fn default() -> Self {
        Self {
            weight_loss_factor: 0.8,
            muscle_gain_factor: 1.1,
        }
    }
}

/// Macronutrient recommendation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Protein per kilogram of lean mass: 2.0 g
    pub protein_g_per_kg_lean_mass: f64,
    /// Share of non-protein calories from carbs, very low preference: 0.20
    pub carb_ratio_very_low: f64,
    /// Low preference: 0.35
    pub carb_ratio_low: f64,
    /// Moderate preference (also the fallback): 0.50
    pub carb_ratio_moderate: f64,
    /// High preference: 0.65
    pub carb_ratio_high: f64,
    /// Very high preference: 0.80
    pub carb_ratio_very_high: f64,
}

impl MacronutrientConfig {
    /// Carb share of the remaining calories; unknown preference uses the moderate ratio
    #[must_use]
    pub fn carb_ratio_for(&self, preference: Option<CarbPreference>) -> f64 {
        match preference {
            Some(CarbPreference::VeryLow) => self.carb_ratio_very_low,
            Some(CarbPreference::Low) => self.carb_ratio_low,
            Some(CarbPreference::High) => self.carb_ratio_high,
            Some(CarbPreference::VeryHigh) => self.carb_ratio_very_high,
            Some(CarbPreference::Moderate) | None => self.carb_ratio_moderate,
        }
    }

    pub(crate) fn carb_ratios(&self) -> [f64; 5] {
        [
            self.carb_ratio_very_low,
            self.carb_ratio_low,
            self.carb_ratio_moderate,
            self.carb_ratio_high,
            self.carb_ratio_very_high,
        ]
    }
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_g_per_kg_lean_mass: 2.0,
            carb_ratio_very_low: 0.20,
            carb_ratio_low: 0.35,
            carb_ratio_moderate: 0.50,
            carb_ratio_high: 0.65,
            carb_ratio_very_high: 0.80,
        }
    }
}
