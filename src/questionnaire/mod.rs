// ABOUTME: Fixed, ordered questionnaire schema with option sets, numeric bounds, and visibility
// ABOUTME: Supplies the domain of valid answer keys and values for strict validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Questionnaire
//!
//! The schema is static data. Each question declares its kind (numeric with
//! bounds, single select, or multi select), whether it is required, and a
//! visibility rule evaluated against the answers given so far.

mod validation;

use serde::Serialize;
use std::fmt;
use vitalis_core::constants::question_ids;
use vitalis_core::models::{
    ActivityLevel, AnswerOption, AnswerRecord, CarbPreference, DietQuality, DistressFrequency,
    ExerciseDuration, ExerciseIntensity, ExerciseType, Gender, Goal, LastMealTiming,
    MealFrequency, QualityRating, SleepDuration, SocialFrequency, StressLevel,
};

/// Questionnaire step a question belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    /// Age, sex, and body measurements
    AboutYou,
    /// Goals and dietary preference
    Goals,
    /// Activity and training
    Exercise,
    /// Eating habits
    Nutrition,
    /// Sleep and recovery
    Sleep,
    /// Mood, social life, and stress
    MentalHealth,
}

impl Section {
    /// Display title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AboutYou => "About You",
            Self::Goals => "Goals",
            Self::Exercise => "Exercise",
            Self::Nutrition => "Nutrition",
            Self::Sleep => "Sleep & Recovery",
            Self::MentalHealth => "Mental Health",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One selectable option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionChoice {
    /// Wire id stored in the answer record
    pub id: &'static str,
    /// Label shown to the user
    pub label: &'static str,
}

/// What kind of answer a question takes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum QuestionKind {
    /// Number within inclusive bounds
    Numeric {
        /// Lowest accepted value
        min: f64,
        /// Highest accepted value
        max: f64,
        /// Unit shown next to the input
        unit: &'static str,
    },
    /// Exactly one option
    SingleSelect {
        /// Declared options
        options: Vec<OptionChoice>,
    },
    /// Any number of distinct options
    MultiSelect {
        /// Declared options
        options: Vec<OptionChoice>,
    },
}

impl QuestionKind {
    fn single<T: AnswerOption>() -> Self {
        Self::SingleSelect {
            options: choices::<T>(),
        }
    }

    fn multi<T: AnswerOption>() -> Self {
        Self::MultiSelect {
            options: choices::<T>(),
        }
    }

    /// Declared options (empty for numeric questions)
    #[must_use]
    pub fn options(&self) -> &[OptionChoice] {
        match self {
            Self::Numeric { .. } => &[],
            Self::SingleSelect { options } | Self::MultiSelect { options } => options,
        }
    }

    /// Whether an option id is declared
    #[must_use]
    pub fn has_option(&self, id: &str) -> bool {
        self.options().iter().any(|option| option.id == id)
    }
}

fn choices<T: AnswerOption>() -> Vec<OptionChoice> {
    T::ALL
        .iter()
        .map(|option| OptionChoice {
            id: option.id(),
            label: option.label(),
        })
        .collect()
}

/// Visibility predicate over earlier answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "when", rename_all = "camelCase")]
pub enum Visibility {
    /// Always shown
    Always,
    /// Hidden while another question holds a specific option
    UnlessAnswered {
        /// Question whose answer is checked
        question_id: &'static str,
        /// Option id that hides this question
        value: &'static str,
    },
}

impl Visibility {
    /// Evaluate against an answer record
    #[must_use]
    pub fn is_visible(&self, answers: &AnswerRecord) -> bool {
        match self {
            Self::Always => true,
            Self::UnlessAnswered { question_id, value } => {
                answers.text(question_id) != Some(*value)
            }
        }
    }
}

/// One question of the questionnaire
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Answer key
    pub id: &'static str,
    /// Step the question belongs to
    pub section: Section,
    /// Prompt shown to the user
    pub prompt: &'static str,
    /// Answer kind, options, and bounds
    pub kind: QuestionKind,
    /// Must be answered when visible
    pub required: bool,
    /// When the question is shown
    pub visibility: Visibility,
}

impl Question {
    fn new(
        id: &'static str,
        section: Section,
        prompt: &'static str,
        kind: QuestionKind,
    ) -> Self {
        Self {
            id,
            section,
            prompt,
            kind,
            required: true,
            visibility: Visibility::Always,
        }
    }

    const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    fn hidden_for_sedentary(mut self) -> Self {
        self.visibility = Visibility::UnlessAnswered {
            question_id: question_ids::ACTIVITY_LEVEL,
            value: ActivityLevel::Sedentary.id(),
        };
        self
    }

    /// Whether the question is shown for these answers
    #[must_use]
    pub fn is_visible(&self, answers: &AnswerRecord) -> bool {
        self.visibility.is_visible(answers)
    }
}

/// The ordered question list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::standard()
    }
}

impl Questionnaire {
    /// The standard health self-assessment
    #[must_use]
    #[rustfmt::skip]
    pub fn standard() -> Self {
        use Section::{AboutYou, Exercise, Goals, MentalHealth, Nutrition, Sleep};

        let numeric = |min, max, unit| QuestionKind::Numeric { min, max, unit };

        let questions = vec![
            Question::new(question_ids::AGE, AboutYou, "How old are you?", numeric(13.0, 120.0, "years")),
            Question::new(question_ids::GENDER, AboutYou, "What is your biological sex?", QuestionKind::single::<Gender>()),
            Question::new(question_ids::HEIGHT, AboutYou, "How tall are you?", numeric(100.0, 250.0, "cm")),
            Question::new(question_ids::WEIGHT, AboutYou, "How much do you weigh?", numeric(30.0, 300.0, "kg")),
            Question::new(question_ids::BODY_FAT, AboutYou, "Do you know your body fat percentage?", numeric(3.0, 60.0, "%")).optional(),
            Question::new(question_ids::GOALS, Goals, "What are your health goals?", QuestionKind::multi::<Goal>()),
            Question::new(question_ids::CARB_PREFERENCE, Goals, "How many carbs do you prefer to eat?", QuestionKind::single::<CarbPreference>()).optional(),
            Question::new(question_ids::ACTIVITY_LEVEL, Exercise, "How active are you on a typical week?", QuestionKind::single::<ActivityLevel>()),
            Question::new(question_ids::EXERCISE_INTENSITY, Exercise, "How intense are your workouts?", QuestionKind::single::<ExerciseIntensity>()).hidden_for_sedentary(),
            Question::new(question_ids::EXERCISE_DURATION, Exercise, "How long is a typical session?", QuestionKind::single::<ExerciseDuration>()).hidden_for_sedentary(),
            Question::new(question_ids::EXERCISE_TYPE, Exercise, "What kinds of exercise do you do?", QuestionKind::multi::<ExerciseType>()).optional().hidden_for_sedentary(),
            Question::new(question_ids::DIET, Nutrition, "How would you describe your diet?", QuestionKind::single::<DietQuality>()),
            Question::new(question_ids::MEAL_FREQUENCY, Nutrition, "How many meals do you eat per day?", QuestionKind::single::<MealFrequency>()),
            Question::new(question_ids::LAST_MEAL, Nutrition, "When do you usually eat your last meal?", QuestionKind::single::<LastMealTiming>()),
            Question::new(question_ids::SLEEP_DURATION, Sleep, "How many hours do you sleep per night?", QuestionKind::single::<SleepDuration>()),
            Question::new(question_ids::SLEEP_QUALITY, Sleep, "How would you rate your sleep quality?", QuestionKind::single::<QualityRating>()),
            Question::new(question_ids::RECOVERY, Sleep, "How well do you recover between workouts?", QuestionKind::single::<QualityRating>()),
            Question::new(question_ids::MENTAL_HEALTH, MentalHealth, "How often do you feel down or anxious?", QuestionKind::single::<DistressFrequency>()),
            Question::new(question_ids::SOCIALIZING, MentalHealth, "How often do you spend time with others?", QuestionKind::single::<SocialFrequency>()),
            Question::new(question_ids::STRESS, MentalHealth, "How stressed do you feel?", QuestionKind::single::<StressLevel>()),
        ];

        Self { questions }
    }

    /// All questions in order
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look a question up by id
    #[must_use]
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    /// Questions shown for the given answers, in order
    #[must_use]
    pub fn visible_questions(&self, answers: &AnswerRecord) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.is_visible(answers))
            .collect()
    }
}
