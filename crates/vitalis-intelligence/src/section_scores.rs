// ABOUTME: Categorical section scorers for exercise, nutrition, sleep, and wellbeing
// ABOUTME: Sums table points per factor and clamps each section score to 0-100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Section Scores
//!
//! Four independent scorers, one per questionnaire section. Each one only
//! reads its own answers, so an entirely skipped section scores exactly 0.

use crate::profile::HealthProfile;
use crate::scoring_tables::{self, exercise, nutrition, points_for, sleep, wellbeing};
use serde::{Deserialize, Serialize};
use vitalis_core::models::Goal;

/// Goals that earn the nutrition goal-alignment bonus
const NUTRITION_ALIGNED_GOALS: [Goal; 3] =
    [Goal::WeightLoss, Goal::MuscleGain, Goal::OverallHealth];

/// The four section scores (0-100 each)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScores {
    /// Exercise section
    pub exercise: u32,
    /// Nutrition section
    pub nutrition: u32,
    /// Mental health / wellbeing section
    pub mental_health: u32,
    /// Sleep section
    pub sleep: u32,
}

impl SectionScores {
    /// Score every section of a profile
    #[must_use]
    pub fn from_profile(profile: &HealthProfile) -> Self {
        Self {
            exercise: score_exercise(profile),
            nutrition: score_nutrition(profile),
            mental_health: score_mental_health(profile),
            sleep: score_sleep(profile),
        }
    }
}

fn clamp_section(points: u32) -> u32 {
    points.min(scoring_tables::MAX_SECTION_SCORE)
}

/// Exercise score: activity level, intensity, duration, and variety of types
#[must_use]
pub fn score_exercise(profile: &HealthProfile) -> u32 {
    let type_count = u32::try_from(profile.exercise_types.len()).unwrap_or(u32::MAX);
    let variety = type_count
        .saturating_mul(exercise::POINTS_PER_TYPE)
        .min(exercise::MAX_TYPE_POINTS);

    clamp_section(
        points_for(exercise::ACTIVITY_LEVEL, profile.activity_level)
            + points_for(exercise::INTENSITY, profile.exercise_intensity)
            + points_for(exercise::DURATION, profile.exercise_duration)
            + variety,
    )
}

/// Nutrition score: diet quality, meal frequency, last meal timing, goal alignment
#[must_use]
pub fn score_nutrition(profile: &HealthProfile) -> u32 {
    let goal_bonus = if NUTRITION_ALIGNED_GOALS
        .iter()
        .any(|goal| profile.has_goal(*goal))
    {
        nutrition::GOAL_ALIGNMENT_BONUS
    } else {
        0
    };

    clamp_section(
        points_for(nutrition::DIET, profile.diet)
            + points_for(nutrition::MEAL_FREQUENCY, profile.meal_frequency)
            + points_for(nutrition::LAST_MEAL, profile.last_meal)
            + goal_bonus,
    )
}

/// Sleep score: duration, quality, and recovery
#[must_use]
pub fn score_sleep(profile: &HealthProfile) -> u32 {
    clamp_section(
        points_for(sleep::DURATION, profile.sleep_duration)
            + points_for(sleep::QUALITY, profile.sleep_quality)
            + points_for(sleep::RECOVERY, profile.recovery),
    )
}

/// Wellbeing score: distress frequency (inverted), socializing, stress
#[must_use]
pub fn score_mental_health(profile: &HealthProfile) -> u32 {
    clamp_section(
        points_for(wellbeing::DISTRESS, profile.mental_health)
            + points_for(wellbeing::SOCIALIZING, profile.socializing)
            + points_for(wellbeing::STRESS, profile.stress),
    )
}
