// ABOUTME: Question identifiers and service-wide constants for the Vitalis workspace
// ABOUTME: Single source of truth for answer keys shared by schema, engine, and rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Answer keys are part of the persisted record format, so they are spelled
//! exactly as the questionnaire front end submits them.

/// Question ids (keys of an answer record)
pub mod question_ids {
    /// Age in years
    pub const AGE: &str = "age";
    /// Biological sex used by the metabolic formulas
    pub const GENDER: &str = "gender";
    /// Height in centimeters
    pub const HEIGHT: &str = "height";
    /// Body weight in kilograms
    pub const WEIGHT: &str = "weight";
    /// Optional self-reported body fat percentage
    pub const BODY_FAT: &str = "bodyFat";
    /// Daily activity level
    pub const ACTIVITY_LEVEL: &str = "activityLevel";
    /// Health goals (multi-select)
    pub const GOALS: &str = "goals";
    /// Carbohydrate preference for macro split
    pub const CARB_PREFERENCE: &str = "carbPreference";
    /// Typical exercise intensity
    pub const EXERCISE_INTENSITY: &str = "exerciseIntensity";
    /// Typical session duration
    pub const EXERCISE_DURATION: &str = "exerciseDuration";
    /// Exercise types practiced (multi-select)
    pub const EXERCISE_TYPE: &str = "exerciseType";
    /// Self-rated diet quality
    pub const DIET: &str = "diet";
    /// Meals per day
    pub const MEAL_FREQUENCY: &str = "mealFrequency";
    /// Timing of the last meal of the day
    pub const LAST_MEAL: &str = "lastMeal";
    /// Nightly sleep duration
    pub const SLEEP_DURATION: &str = "sleepDuration";
    /// Self-rated sleep quality
    pub const SLEEP_QUALITY: &str = "sleepQuality";
    /// Self-rated recovery between sessions
    pub const RECOVERY: &str = "recovery";
    /// How often the user feels anxious or low
    pub const MENTAL_HEALTH: &str = "mentalHealth";
    /// How often the user socializes
    pub const SOCIALIZING: &str = "socializing";
    /// Perceived stress level
    pub const STRESS: &str = "stress";
}

/// Service identification used in structured logs
pub mod service_names {
    /// Default service name
    pub const VITALIS: &str = "vitalis";
    /// CLI binary name
    pub const VITALIS_CLI: &str = "vitalis-cli";
}
