// ABOUTME: Body composition estimates derived from height, weight, age, and sex
// ABOUTME: BMI and category, BMI-based body-fat estimate, and healthy weight range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body Composition Calculator
//!
//! Every function here is total: missing or non-positive inputs produce
//! `None` instead of `NaN` or an error.
//!
//! # Scientific References
//!
//! - WHO (2000). Obesity: preventing and managing the global epidemic.
//!   Technical Report Series 894 (BMI classification cut-offs).
//! - Deurenberg, P., et al. (1991). Body mass index as a measure of body fatness.
//!   *British Journal of Nutrition*, 65(2), 105-114.
//!   <https://doi.org/10.1079/BJN19910073>

use crate::config::intelligence::BodyCompositionConfig;
use crate::profile::HealthProfile;
use serde::{Deserialize, Serialize};
use std::fmt;
use vitalis_core::models::Gender;

/// BMI classification (WHO adult cut-offs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// 18.5 <= BMI < 25
    Normal,
    /// 25 <= BMI < 30
    Overweight,
    /// BMI of 30 or more
    Obese,
}

impl BmiCategory {
    /// Underweight/normal boundary
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Normal/overweight boundary
    pub const OVERWEIGHT_FROM: f64 = 25.0;
    /// Overweight/obese boundary
    pub const OBESE_FROM: f64 = 30.0;

    /// Classify a BMI value; lower bounds are inclusive
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < Self::UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if bmi < Self::OVERWEIGHT_FROM {
            Self::Normal
        } else if bmi < Self::OBESE_FROM {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Display name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the body composition step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyComposition {
    /// Body mass index
    pub bmi: Option<f64>,
    /// BMI classification
    pub bmi_category: Option<BmiCategory>,
    /// Body fat (%), user supplied or estimated
    pub body_fat: Option<f64>,
    /// True when `body_fat` was derived rather than supplied
    pub is_body_fat_estimated: bool,
    /// Lower end of the healthy weight range (kg)
    pub ideal_weight_low: Option<f64>,
    /// Upper end of the healthy weight range (kg)
    pub ideal_weight_high: Option<f64>,
}

/// Body mass index: `weight / (height_m)^2`
///
/// Returns `None` when height or weight is not a positive finite number.
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !(weight_kg.is_finite() && height_cm.is_finite()) || weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

/// Estimate body fat percentage from BMI, age, and sex
///
/// Formula: `baseline(sex) + (bmi - 22) x 1.2 + (age - 30) x 0.1`, clamped to [5, 50].
/// Baseline is 20 for men and 28 otherwise; an unspecified sex takes the
/// non-male baseline, matching the sex constant used for BMR.
#[must_use]
pub fn estimate_body_fat(
    bmi: f64,
    age_years: f64,
    gender: Option<Gender>,
    config: &BodyCompositionConfig,
) -> f64 {
    let baseline = match gender {
        Some(Gender::Male) => config.male_body_fat_baseline,
        Some(Gender::Female) | None => config.female_body_fat_baseline,
    };
    let estimate = (age_years - config.reference_age).mul_add(
        config.age_coefficient,
        (bmi - config.reference_bmi).mul_add(config.bmi_coefficient, baseline),
    );
    // Unvalidated bounds (NaN or inverted) must not panic
    estimate
        .max(config.min_body_fat_percent)
        .min(config.max_body_fat_percent)
}

/// Healthy weight range for a height, rounded to whole kilograms
///
/// Uses the healthy BMI bounds (18.5-24.9). Returns `None` for non-positive heights.
#[must_use]
pub fn ideal_weight_range(height_cm: f64, config: &BodyCompositionConfig) -> Option<(f64, f64)> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    let squared = height_m * height_m;
    Some((
        (config.healthy_bmi_low * squared).round(),
        (config.healthy_bmi_high * squared).round(),
    ))
}

/// Run the body composition step for a profile
///
/// A supplied body fat value is used verbatim. Otherwise it is estimated when
/// BMI is known; a missing age contributes nothing to the estimate.
#[must_use]
pub fn calculate_body_composition(
    profile: &HealthProfile,
    config: &BodyCompositionConfig,
) -> BodyComposition {
    let bmi = match (profile.weight_kg, profile.height_cm) {
        (Some(weight), Some(height)) => calculate_bmi(weight, height),
        _ => None,
    };

    let (body_fat, is_body_fat_estimated) = match (profile.body_fat_percent, bmi) {
        (Some(supplied), _) => (Some(supplied), false),
        (None, Some(bmi)) => {
            let age = profile.age_years.unwrap_or(config.reference_age);
            (Some(estimate_body_fat(bmi, age, profile.gender, config)), true)
        }
        (None, None) => (None, false),
    };

    let ideal = profile
        .height_cm
        .and_then(|height| ideal_weight_range(height, config));

    BodyComposition {
        bmi,
        bmi_category: bmi.map(BmiCategory::from_bmi),
        body_fat,
        is_body_fat_estimated,
        ideal_weight_low: ideal.map(|(low, _)| low),
        ideal_weight_high: ideal.map(|(_, high)| high),
    }
}
