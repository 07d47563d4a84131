// ABOUTME: Core data models for questionnaire answers and their categorical vocabulary
// ABOUTME: Re-exports answer records and option enums used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod answers;
mod categories;

pub use answers::{AnswerRecord, AnswerValue};
pub use categories::{
    ActivityLevel, AnswerOption, CarbPreference, DietQuality, DistressFrequency,
    ExerciseDuration, ExerciseIntensity, ExerciseType, Gender, Goal, LastMealTiming,
    MealFrequency, QualityRating, SleepDuration, SocialFrequency, StressLevel,
};
