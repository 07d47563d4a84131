// ABOUTME: Contextual rule table flagging risky or inconsistent answer combinations
// ABOUTME: Every matching rule yields a warning with severity, title, message, and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Contextual Rules
//!
//! Rules look at combinations of answers rather than single values, so they
//! catch things the numeric score cannot (an underweight user trying to lose
//! weight scores fine on every section). Rules are independent: all matching
//! rules fire, in table order.

use crate::body_composition::{calculate_bmi, BmiCategory};
use crate::engine::HealthCalculations;
use crate::profile::HealthProfile;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;
use vitalis_core::models::{
    ActivityLevel, AnswerRecord, DietQuality, DistressFrequency, ExerciseDuration,
    ExerciseIntensity, Goal, LastMealTiming, MealFrequency, QualityRating, SleepDuration,
    SocialFrequency, StressLevel,
};

/// Section a caller asks about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnalysisCategory {
    /// Body composition rules
    BodyComposition,
    /// Exercise rules
    Exercise,
    /// Nutrition rules
    Nutrition,
    /// Sleep rules
    Sleep,
    /// Mental health rules
    MentalHealth,
    /// Every rule
    Overall,
}

impl AnalysisCategory {
    /// All categories
    pub const ALL: [Self; 6] = [
        Self::BodyComposition,
        Self::Exercise,
        Self::Nutrition,
        Self::Sleep,
        Self::MentalHealth,
        Self::Overall,
    ];

    /// Wire name
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::BodyComposition => "bodyComposition",
            Self::Exercise => "exercise",
            Self::Nutrition => "nutrition",
            Self::Sleep => "sleep",
            Self::MentalHealth => "mentalHealth",
            Self::Overall => "overall",
        }
    }

    /// Human readable section title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::BodyComposition => "Body Composition",
            Self::Exercise => "Exercise",
            Self::Nutrition => "Nutrition",
            Self::Sleep => "Sleep & Recovery",
            Self::MentalHealth => "Mental Health",
            Self::Overall => "Overall Health",
        }
    }

    const fn includes(self, rule_category: Self) -> bool {
        matches!(self, Self::Overall) || self as u8 == rule_category as u8
    }
}

impl fmt::Display for AnalysisCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Analysis category id that matches no section
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown analysis category: {0}")]
pub struct UnknownCategoryError(pub String);

impl FromStr for AnalysisCategory {
    type Err = UnknownCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCategoryError(s.to_owned()))
    }
}

/// How urgent a warning is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Worth knowing
    Info,
    /// Should be addressed
    Warning,
    /// Needs attention now
    Alert,
}

/// A fired rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextualWarning {
    /// Urgency
    pub severity: Severity,
    /// Short title
    pub title: String,
    /// Explanation
    pub message: String,
    /// What to do about it
    pub recommendations: Vec<String>,
}

/// Facts a rule can inspect
struct RuleContext<'a> {
    profile: &'a HealthProfile,
    bmi_category: Option<BmiCategory>,
}

struct ContextualRule {
    category: AnalysisCategory,
    severity: Severity,
    title: &'static str,
    message: &'static str,
    recommendations: &'static [&'static str],
    applies: fn(&RuleContext<'_>) -> bool,
}

impl ContextualRule {
    fn to_warning(&self) -> ContextualWarning {
        ContextualWarning {
            severity: self.severity,
            title: self.title.to_owned(),
            message: self.message.to_owned(),
            recommendations: self
                .recommendations
                .iter()
                .map(|item| (*item).to_owned())
                .collect(),
        }
    }
}

const RULES: &[ContextualRule] = &[
    ContextualRule {
        category: AnalysisCategory::BodyComposition,
        severity: Severity::Alert,
        title: "Goal Misalignment",
        message: "Your BMI is already below the healthy range, so losing more weight could harm your health.",
        recommendations: &[
            "Reassess your goals with a healthcare provider",
            "Focus on strength and nutrition rather than weight loss",
        ],
        applies: |ctx| {
            ctx.bmi_category == Some(BmiCategory::Underweight)
                && ctx.profile.has_goal(Goal::WeightLoss)
        },
    },
    ContextualRule {
        category: AnalysisCategory::BodyComposition,
        severity: Severity::Warning,
        title: "Activity Needed for Weight Management",
        message: "A BMI in the obese range combined with a sedentary lifestyle raises cardiometabolic risk.",
        recommendations: &[
            "Start with short daily walks and build up gradually",
            "Ask a healthcare provider about a safe activity plan",
        ],
        applies: |ctx| {
            ctx.bmi_category == Some(BmiCategory::Obese)
                && ctx.profile.activity_level == Some(ActivityLevel::Sedentary)
        },
    },
    ContextualRule {
        category: AnalysisCategory::Exercise,
        severity: Severity::Warning,
        title: "Insufficient Recovery",
        message: "Hard training with poor recovery increases injury risk.",
        recommendations: &[
            "Add rest days between intense sessions",
            "Include easy or mobility days in your week",
        ],
        applies: |ctx| {
            matches!(
                ctx.profile.exercise_intensity,
                Some(ExerciseIntensity::Vigorous | ExerciseIntensity::VeryIntense)
            ) && ctx.profile.recovery == Some(QualityRating::Poor)
        },
    },
    ContextualRule {
        category: AnalysisCategory::Exercise,
        severity: Severity::Alert,
        title: "Overtraining Risk",
        message: "Very intense sessions over an hour long on less than five hours of sleep is a classic overtraining pattern.",
        recommendations: &[
            "Reduce training volume until sleep improves",
            "Prioritize at least seven hours of sleep",
            "Watch for persistent fatigue or a rising resting heart rate",
        ],
        applies: |ctx| {
            ctx.profile.exercise_intensity == Some(ExerciseIntensity::VeryIntense)
                && ctx.profile.exercise_duration == Some(ExerciseDuration::Over60)
                && ctx.profile.sleep_duration == Some(SleepDuration::Under5)
        },
    },
    ContextualRule {
        category: AnalysisCategory::Nutrition,
        severity: Severity::Warning,
        title: "Nutrition Not Supporting Muscle Gain",
        message: "Building muscle needs adequate protein and quality calories, which an unhealthy diet rarely provides.",
        recommendations: &[
            "Include a protein source with every meal",
            "Replace processed snacks with whole foods",
        ],
        applies: |ctx| {
            ctx.profile.has_goal(Goal::MuscleGain)
                && ctx.profile.diet == Some(DietQuality::Unhealthy)
        },
    },
    ContextualRule {
        category: AnalysisCategory::Nutrition,
        severity: Severity::Info,
        title: "Late Meals May Disrupt Sleep",
        message: "Eating after 10pm can interfere with sleep quality.",
        recommendations: &["Move your last meal earlier in the evening"],
        applies: |ctx| {
            ctx.profile.last_meal == Some(LastMealTiming::After10pm)
                && ctx.profile.sleep_quality == Some(QualityRating::Poor)
        },
    },
    ContextualRule {
        category: AnalysisCategory::Nutrition,
        severity: Severity::Info,
        title: "Infrequent Meals",
        message: "Eating only one or two meals a day can make a calorie deficit harder to sustain.",
        recommendations: &["Spread your intake over three or four balanced meals"],
        applies: |ctx| {
            ctx.profile.has_goal(Goal::WeightLoss)
                && ctx.profile.meal_frequency == Some(MealFrequency::OneToTwo)
        },
    },
    ContextualRule {
        category: AnalysisCategory::Sleep,
        severity: Severity::Warning,
        title: "Stress Affecting Sleep",
        message: "Very high stress together with poor sleep quality tends to reinforce itself.",
        recommendations: &[
            "Add a wind-down routine before bed",
            "Try relaxation techniques such as breathing exercises",
        ],
        applies: |ctx| {
            ctx.profile.stress == Some(StressLevel::VeryHigh)
                && ctx.profile.sleep_quality == Some(QualityRating::Poor)
        },
    },
    ContextualRule {
        category: AnalysisCategory::MentalHealth,
        severity: Severity::Warning,
        title: "Social Isolation",
        message: "Frequent low mood combined with little social contact can deepen both.",
        recommendations: &[
            "Reach out to a friend or family member this week",
            "Look for a group activity you enjoy",
        ],
        applies: |ctx| {
            ctx.profile.mental_health == Some(DistressFrequency::Often)
                && ctx.profile.socializing == Some(SocialFrequency::Rarely)
        },
    },
    ContextualRule {
        category: AnalysisCategory::MentalHealth,
        severity: Severity::Alert,
        title: "High Stress and Frequent Distress",
        message: "High stress alongside frequent distress is a signal to seek support.",
        recommendations: &[
            "Consider speaking with a mental health professional",
            "Reduce commitments where you can",
        ],
        applies: |ctx| {
            matches!(
                ctx.profile.stress,
                Some(StressLevel::High | StressLevel::VeryHigh)
            ) && ctx.profile.mental_health == Some(DistressFrequency::Often)
        },
    },
];

/// Evaluate the rules of a category against a typed profile
///
/// When no calculations are supplied, BMI is derived from the profile.
#[must_use]
pub fn analyze_profile(
    category: AnalysisCategory,
    profile: &HealthProfile,
    calculations: Option<&HealthCalculations>,
) -> Vec<ContextualWarning> {
    let bmi_category = calculations.map_or_else(
        || match (profile.weight_kg, profile.height_cm) {
            (Some(weight), Some(height)) => {
                calculate_bmi(weight, height).map(BmiCategory::from_bmi)
            }
            _ => None,
        },
        |calc| calc.bmi_category,
    );
    let ctx = RuleContext {
        profile,
        bmi_category,
    };

    RULES
        .iter()
        .filter(|rule| category.includes(rule.category) && (rule.applies)(&ctx))
        .map(|rule| {
            debug!(category = %category, rule = rule.title, "contextual rule matched");
            rule.to_warning()
        })
        .collect()
}

/// Evaluate the rules of a category against a raw answer record
#[must_use]
pub fn get_contextual_analysis(
    category: AnalysisCategory,
    answers: &AnswerRecord,
    calculations: Option<&HealthCalculations>,
) -> Vec<ContextualWarning> {
    analyze_profile(category, &HealthProfile::from_answers(answers), calculations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_id() {
        for category in AnalysisCategory::ALL {
            assert_eq!(category.id().parse::<AnalysisCategory>().ok(), Some(category));
        }
        assert_eq!("SLEEP".parse::<AnalysisCategory>(), Ok(AnalysisCategory::Sleep));

        let parsed = "lifestyle".parse::<AnalysisCategory>();
        assert_eq!(parsed, Err(UnknownCategoryError("lifestyle".to_owned())));
        assert_eq!(
            parsed.map_err(|e| e.to_string()),
            Err("Unknown analysis category: lifestyle".to_owned())
        );
    }

    #[test]
    fn test_every_rule_has_recommendations() {
        assert!(RULES.iter().all(|rule| !rule.recommendations.is_empty()));
        assert!(RULES.iter().all(|rule| rule.category != AnalysisCategory::Overall));
    }
}
