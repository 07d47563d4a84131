// ABOUTME: Body composition configuration for BMI-based estimates
// ABOUTME: Configures body-fat estimation coefficients, clamp bounds, and healthy BMI range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body Composition Configuration
//!
//! The body-fat estimate is a linear model anchored at a reference adult
//! (BMI 22, age 30) with a sex-specific baseline.

use serde::{Deserialize, Serialize};

/// Body composition estimation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyCompositionConfig {
    /// Baseline body fat (%) for men at the reference point: 20
    pub male_body_fat_baseline: f64,
    /// Baseline body fat (%) for women at the reference point: 28
    pub female_body_fat_baseline: f64,
    /// Reference BMI of the linear model: 22
    pub reference_bmi: f64,
    /// Body fat percentage points per BMI unit: 1.2
    pub bmi_coefficient: f64,
    /// Reference age of the linear model: 30
    pub reference_age: f64,
    /// Body fat percentage points per year: 0.1
    pub age_coefficient: f64,
    /// Lower clamp for estimated body fat: 5%
    pub min_body_fat_percent: f64,
    /// Upper clamp for estimated body fat: 50%
    pub max_body_fat_percent: f64,
    /// Lower bound of the healthy BMI range: 18.5
    pub healthy_bmi_low: f64,
    /// Upper bound of the healthy BMI range: 24.9
    pub healthy_bmi_high: f64,
}

impl Default for BodyCompositionConfig {
    fn default() -> Self {
        Self {
            male_body_fat_baseline: 20.0,
            female_body_fat_baseline: 28.0,
            reference_bmi: 22.0,
            bmi_coefficient: 1.2,
            reference_age: 30.0,
            age_coefficient: 0.1,
            min_body_fat_percent: 5.0,
            max_body_fat_percent: 50.0,
            healthy_bmi_low: 18.5,
            healthy_bmi_high: 24.9,
        }
    }
}
