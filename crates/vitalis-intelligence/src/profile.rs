// ABOUTME: Typed health profile converted once from a raw answer record
// ABOUTME: Unknown option ids and non-positive measurements degrade to absent values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Health Profile
//!
//! The questionnaire submits an untyped bag of answers. `HealthProfile`
//! converts it once at the engine boundary so every calculator downstream
//! works with typed, optional fields. The conversion is fail-soft: anything
//! unrecognized is dropped (and logged at debug level), never rejected.
//! Strict rejection is the questionnaire validator's job.

use serde::{Deserialize, Serialize};
use tracing::debug;
use vitalis_core::constants::question_ids;
use vitalis_core::models::{
    ActivityLevel, AnswerOption, AnswerRecord, CarbPreference, DietQuality, DistressFrequency,
    ExerciseDuration, ExerciseIntensity, ExerciseType, Gender, Goal, LastMealTiming,
    MealFrequency, QualityRating, SleepDuration, SocialFrequency, StressLevel,
};

/// Typed view of an answer record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthProfile {
    /// Body weight (kg)
    pub weight_kg: Option<f64>,
    /// Height (cm)
    pub height_cm: Option<f64>,
    /// Age (years)
    pub age_years: Option<f64>,
    /// Biological sex
    pub gender: Option<Gender>,
    /// Self-reported body fat (%)
    pub body_fat_percent: Option<f64>,
    /// Daily activity level
    pub activity_level: Option<ActivityLevel>,
    /// Selected goals, deduplicated, in selection order
    pub goals: Vec<Goal>,
    /// Carbohydrate preference
    pub carb_preference: Option<CarbPreference>,
    /// Typical exercise intensity
    pub exercise_intensity: Option<ExerciseIntensity>,
    /// Typical session duration
    pub exercise_duration: Option<ExerciseDuration>,
    /// Distinct exercise types practiced
    pub exercise_types: Vec<ExerciseType>,
    /// Diet quality
    pub diet: Option<DietQuality>,
    /// Meals per day
    pub meal_frequency: Option<MealFrequency>,
    /// Last meal timing
    pub last_meal: Option<LastMealTiming>,
    /// Sleep duration
    pub sleep_duration: Option<SleepDuration>,
    /// Sleep quality
    pub sleep_quality: Option<QualityRating>,
    /// Recovery between sessions
    pub recovery: Option<QualityRating>,
    /// Frequency of distress
    pub mental_health: Option<DistressFrequency>,
    /// Socializing frequency
    pub socializing: Option<SocialFrequency>,
    /// Perceived stress
    pub stress: Option<StressLevel>,
}

impl HealthProfile {
    /// Convert an answer record, substituting absent values for anything unusable
    #[must_use]
    pub fn from_answers(answers: &AnswerRecord) -> Self {
        Self {
            weight_kg: positive(answers, question_ids::WEIGHT),
            height_cm: positive(answers, question_ids::HEIGHT),
            age_years: positive(answers, question_ids::AGE),
            gender: single(answers, question_ids::GENDER),
            body_fat_percent: positive(answers, question_ids::BODY_FAT),
            activity_level: single(answers, question_ids::ACTIVITY_LEVEL),
            goals: multi(answers, question_ids::GOALS),
            carb_preference: single(answers, question_ids::CARB_PREFERENCE),
            exercise_intensity: single(answers, question_ids::EXERCISE_INTENSITY),
            exercise_duration: single(answers, question_ids::EXERCISE_DURATION),
            exercise_types: multi(answers, question_ids::EXERCISE_TYPE),
            diet: single(answers, question_ids::DIET),
            meal_frequency: single(answers, question_ids::MEAL_FREQUENCY),
            last_meal: single(answers, question_ids::LAST_MEAL),
            sleep_duration: single(answers, question_ids::SLEEP_DURATION),
            sleep_quality: single(answers, question_ids::SLEEP_QUALITY),
            recovery: single(answers, question_ids::RECOVERY),
            mental_health: single(answers, question_ids::MENTAL_HEALTH),
            socializing: single(answers, question_ids::SOCIALIZING),
            stress: single(answers, question_ids::STRESS),
        }
    }

    /// Whether a goal was selected
    #[must_use]
    pub fn has_goal(&self, goal: Goal) -> bool {
        self.goals.contains(&goal)
    }
}

fn positive(answers: &AnswerRecord, id: &str) -> Option<f64> {
    let value = answers.number(id)?;
    if value > 0.0 {
        Some(value)
    } else {
        debug!(question = id, value, "ignoring non-positive measurement");
        None
    }
}

fn single<T: AnswerOption>(answers: &AnswerRecord, id: &str) -> Option<T> {
    let raw = answers.text(id)?;
    let parsed = T::from_id(raw);
    if parsed.is_none() {
        debug!(question = id, value = raw, "unrecognized option, scoring as absent");
    }
    parsed
}

fn multi<T: AnswerOption + PartialEq>(answers: &AnswerRecord, id: &str) -> Vec<T> {
    let mut selected: Vec<T> = Vec::new();
    for raw in answers.choices(id) {
        match T::from_id(raw) {
            Some(option) if !selected.contains(&option) => selected.push(option),
            Some(_) => {}
            None => debug!(question = id, value = raw, "unrecognized option ignored"),
        }
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_options_become_absent() {
        let answers = AnswerRecord::new()
            .with("activityLevel", "couch-potato")
            .with("goals", vec!["weight-loss", "fly", "weight-loss"])
            .with("height", 0.0);

        let profile = HealthProfile::from_answers(&answers);
        assert_eq!(profile.activity_level, None);
        assert_eq!(profile.goals, vec![Goal::WeightLoss]);
        assert_eq!(profile.height_cm, None);
    }

    #[test]
    fn test_empty_record_gives_empty_profile() {
        let profile = HealthProfile::from_answers(&AnswerRecord::new());
        assert_eq!(profile, HealthProfile::default());
    }
}
