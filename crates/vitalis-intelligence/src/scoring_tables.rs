// ABOUTME: Literal point tables mapping categorical answers to section sub-score points
// ABOUTME: Exercise, nutrition, sleep, and wellbeing factor weights kept as auditable data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scoring point tables
//!
//! Each section score is the clamped sum of its factor points. The tables are
//! plain data so every value can be audited and tested on its own. Options
//! missing from a table score 0.

use vitalis_core::models::{
    ActivityLevel, DietQuality, DistressFrequency, ExerciseDuration, ExerciseIntensity,
    LastMealTiming, MealFrequency, QualityRating, SleepDuration, SocialFrequency, StressLevel,
};

/// Ceiling of every section score
pub const MAX_SECTION_SCORE: u32 = 100;

/// Look up the points for an answer; absent answers and unlisted options give 0
#[must_use]
pub fn points_for<T: PartialEq + Copy>(table: &[(T, u32)], answer: Option<T>) -> u32 {
    answer
        .and_then(|value| {
            table
                .iter()
                .find(|(option, _)| *option == value)
                .map(|(_, points)| *points)
        })
        .unwrap_or(0)
}

/// Highest value in a table (the factor's weight)
#[must_use]
pub fn max_points<T>(table: &[(T, u32)]) -> u32 {
    table.iter().map(|(_, points)| *points).max().unwrap_or(0)
}

/// Exercise section (100 points)
pub mod exercise {
    use super::{ActivityLevel, ExerciseDuration, ExerciseIntensity};

    /// Activity level: 35 points
    pub const ACTIVITY_LEVEL: &[(ActivityLevel, u32)] = &[
        (ActivityLevel::Sedentary, 5),
        (ActivityLevel::Light, 15),
        (ActivityLevel::Moderate, 25),
        (ActivityLevel::Active, 35),
        (ActivityLevel::VeryActive, 35),
    ];

    /// Intensity: 25 points (very intense scores below vigorous)
    pub const INTENSITY: &[(ExerciseIntensity, u32)] = &[
        (ExerciseIntensity::Light, 10),
        (ExerciseIntensity::Moderate, 15),
        (ExerciseIntensity::Vigorous, 25),
        (ExerciseIntensity::VeryIntense, 20),
    ];

    /// Session duration: 25 points (over an hour scores below 45-60)
    pub const DURATION: &[(ExerciseDuration, u32)] = &[
        (ExerciseDuration::Under30, 10),
        (ExerciseDuration::From30To45, 15),
        (ExerciseDuration::From45To60, 25),
        (ExerciseDuration::Over60, 20),
    ];

    /// Points per distinct exercise type
    pub const POINTS_PER_TYPE: u32 = 5;

    /// Cap on exercise-type variety points
    pub const MAX_TYPE_POINTS: u32 = 15;
}

/// Nutrition section (100 points)
pub mod nutrition {
    use super::{DietQuality, LastMealTiming, MealFrequency};

    /// Diet quality: 40 points
    pub const DIET: &[(DietQuality, u32)] = &[
        (DietQuality::Unhealthy, 0),
        (DietQuality::Average, 20),
        (DietQuality::Healthy, 30),
        (DietQuality::VeryHealthy, 40),
    ];

    /// Meal frequency: 25 points
    pub const MEAL_FREQUENCY: &[(MealFrequency, u32)] = &[
        (MealFrequency::OneToTwo, 10),
        (MealFrequency::ThreeToFour, 25),
        (MealFrequency::FivePlus, 20),
    ];

    /// Last meal timing: 20 points
    pub const LAST_MEAL: &[(LastMealTiming, u32)] = &[
        (LastMealTiming::Before8pm, 20),
        (LastMealTiming::From8To10pm, 15),
        (LastMealTiming::After10pm, 5),
    ];

    /// Flat bonus when any nutrition-relevant goal is selected
    pub const GOAL_ALIGNMENT_BONUS: u32 = 15;
}

/// Sleep section (100 points)
pub mod sleep {
    use super::{QualityRating, SleepDuration};

    /// Sleep duration: 35 points
    pub const DURATION: &[(SleepDuration, u32)] = &[
        (SleepDuration::Under5, 0),
        (SleepDuration::From5To7, 20),
        (SleepDuration::From7To9, 35),
        (SleepDuration::Over9, 25),
    ];

    /// Sleep quality: 35 points
    pub const QUALITY: &[(QualityRating, u32)] = &[
        (QualityRating::Poor, 0),
        (QualityRating::Fair, 15),
        (QualityRating::Good, 25),
        (QualityRating::Excellent, 35),
    ];

    /// Recovery: 30 points
    pub const RECOVERY: &[(QualityRating, u32)] = &[
        (QualityRating::Poor, 0),
        (QualityRating::Fair, 10),
        (QualityRating::Good, 20),
        (QualityRating::Excellent, 30),
    ];
}

/// Mental health / wellbeing section (100 points)
pub mod wellbeing {
    use super::{DistressFrequency, SocialFrequency, StressLevel};

    /// Frequency of distress: 40 points, inverted (less distress scores higher)
    pub const DISTRESS: &[(DistressFrequency, u32)] = &[
        (DistressFrequency::Often, 10),
        (DistressFrequency::Sometimes, 20),
        (DistressFrequency::Rarely, 30),
        (DistressFrequency::Never, 40),
    ];

    /// Socializing: 35 points
    pub const SOCIALIZING: &[(SocialFrequency, u32)] = &[
        (SocialFrequency::Rarely, 10),
        (SocialFrequency::Occasionally, 20),
        (SocialFrequency::Regularly, 30),
        (SocialFrequency::Frequently, 35),
    ];

    /// Stress: 25 points
    pub const STRESS: &[(StressLevel, u32)] = &[
        (StressLevel::VeryHigh, 5),
        (StressLevel::High, 10),
        (StressLevel::Moderate, 20),
        (StressLevel::Low, 25),
    ];
}
