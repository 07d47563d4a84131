// ABOUTME: Energy expenditure and intake recommendations using peer-reviewed formulas
// ABOUTME: BMR, TDEE, goal-adjusted calories, lean-mass protein, and carb/fat split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Turns a profile and its body composition into daily energy and
//! macronutrient targets. All outputs are optional: a missing measurement
//! nulls out exactly the values that depend on it.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Jäger, R., et al. (2017). ISSN position stand: protein and exercise.
//!   *Journal of the International Society of Sports Nutrition*, 14, 20.
//!   <https://doi.org/10.1186/s12970-017-0177-8>

use crate::body_composition::BodyComposition;
use crate::config::intelligence::{
    ActivityFactorsConfig, BmrConfig, CalorieGoalConfig, MacronutrientConfig, NutritionConfig,
};
use crate::profile::HealthProfile;
use serde::{Deserialize, Serialize};
use vitalis_core::models::{ActivityLevel, CarbPreference, Gender, Goal};

/// Energy content of protein and carbohydrate (kcal/g)
const KCAL_PER_GRAM_PROTEIN_OR_CARB: f64 = 4.0;
/// Energy content of fat (kcal/g)
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Calorie direction implied by the selected goals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalorieGoal {
    /// Eat at TDEE
    Maintenance,
    /// Caloric deficit
    WeightLoss,
    /// Caloric surplus
    MuscleGain,
}

impl CalorieGoal {
    /// Resolve the calorie goal from the selected goals
    ///
    /// Weight loss takes priority when both weight loss and muscle gain are
    /// selected: a surplus for someone trying to lose weight is the more
    /// harmful mistake.
    #[must_use]
    pub fn from_goals(goals: &[Goal]) -> Self {
        if goals.contains(&Goal::WeightLoss) {
            Self::WeightLoss
        } else if goals.contains(&Goal::MuscleGain) {
            Self::MuscleGain
        } else {
            Self::Maintenance
        }
    }
}

/// Daily energy and macronutrient targets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntakeRecommendation {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: Option<f64>,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: Option<f64>,
    /// Goal-adjusted calorie target (kcal/day)
    pub recommended_calories: Option<f64>,
    /// Protein target (g/day)
    pub protein_grams: Option<f64>,
    /// Carbohydrate target (g/day)
    pub carb_grams: Option<f64>,
    /// Fat target (g/day)
    pub fat_grams: Option<f64>,
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Men: +5
/// - Everyone else: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age_years: f64,
    gender: Option<Gender>,
    config: &BmrConfig,
) -> f64 {
    let sex_constant = match gender {
        Some(Gender::Male) => config.msj_male_constant,
        Some(Gender::Female) | None => config.msj_female_constant,
    };
    config.msj_age_coef.mul_add(
        age_years,
        config
            .msj_height_coef
            .mul_add(height_cm, config.msj_weight_coef * weight_kg),
    ) + sex_constant
}

/// Calculate Total Daily Energy Expenditure: `BMR x activity factor`
///
/// An unknown activity level uses the sedentary factor (1.2).
#[must_use]
pub fn calculate_tdee(
    bmr: f64,
    activity_level: Option<ActivityLevel>,
    config: &ActivityFactorsConfig,
) -> f64 {
    bmr * config.factor_for(activity_level)
}

/// Apply the goal factor to TDEE
#[must_use]
pub fn calculate_recommended_calories(
    tdee: f64,
    goal: CalorieGoal,
    config: &CalorieGoalConfig,
) -> f64 {
    match goal {
        CalorieGoal::Maintenance => tdee,
        CalorieGoal::WeightLoss => tdee * config.weight_loss_factor,
        CalorieGoal::MuscleGain => tdee * config.muscle_gain_factor,
    }
}

/// Lean body mass; the whole weight when body fat is unknown
#[must_use]
pub fn calculate_lean_mass(weight_kg: f64, body_fat_percent: Option<f64>) -> f64 {
    body_fat_percent.map_or(weight_kg, |fat| weight_kg * (1.0 - fat / 100.0))
}

/// Daily protein target, rounded to whole grams
#[must_use]
pub fn calculate_protein_grams(lean_mass_kg: f64, config: &MacronutrientConfig) -> f64 {
    (lean_mass_kg * config.protein_g_per_kg_lean_mass).round()
}

/// Split the calories left after protein into carbohydrate and fat grams
///
/// Returns `(carb_grams, fat_grams)`, each rounded. A protein target that
/// exceeds the calorie budget leaves nothing to split.
#[must_use]
pub fn split_remaining_calories(
    calories: f64,
    protein_grams: f64,
    preference: Option<CarbPreference>,
    config: &MacronutrientConfig,
) -> (f64, f64) {
    let remaining = (protein_grams.mul_add(-KCAL_PER_GRAM_PROTEIN_OR_CARB, calories)).max(0.0);
    let carb_ratio = config.carb_ratio_for(preference);
    (
        (remaining * carb_ratio / KCAL_PER_GRAM_PROTEIN_OR_CARB).round(),
        (remaining * (1.0 - carb_ratio) / KCAL_PER_GRAM_FAT).round(),
    )
}

/// Calculate the full intake recommendation for a profile
///
/// BMR needs weight, height, and age; everything calorie-based follows BMR.
/// Protein only needs weight (and uses lean mass when body fat is known).
#[must_use]
pub fn calculate_intake(
    profile: &HealthProfile,
    body: &BodyComposition,
    config: &NutritionConfig,
) -> IntakeRecommendation {
    let bmr = match (profile.weight_kg, profile.height_cm, profile.age_years) {
        (Some(weight), Some(height), Some(age)) if height > 0.0 => Some(
            calculate_mifflin_st_jeor(weight, height, age, profile.gender, &config.bmr),
        ),
        _ => None,
    };

    let tdee = bmr.map(|bmr| calculate_tdee(bmr, profile.activity_level, &config.activity_factors));

    let goal = CalorieGoal::from_goals(&profile.goals);
    let recommended_calories =
        tdee.map(|tdee| calculate_recommended_calories(tdee, goal, &config.goal_adjustments));

    let protein_grams = profile.weight_kg.map(|weight| {
        let lean_mass = calculate_lean_mass(weight, body.body_fat);
        calculate_protein_grams(lean_mass, &config.macronutrients)
    });

    let split = match (recommended_calories, protein_grams) {
        (Some(calories), Some(protein)) => Some(split_remaining_calories(
            calories,
            protein,
            profile.carb_preference,
            &config.macronutrients,
        )),
        _ => None,
    };

    IntakeRecommendation {
        bmr,
        tdee,
        recommended_calories,
        protein_grams,
        carb_grams: split.map(|(carbs, _)| carbs),
        fat_grams: split.map(|(_, fat)| fat),
    }
}
