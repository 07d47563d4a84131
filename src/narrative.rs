// ABOUTME: Narrative feedback seam: section summaries and the text-generation service trait
// ABOUTME: Ships a deterministic offline narrator; external AI providers implement the same trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Narrative Feedback
//!
//! A [`SectionSummary`] condenses one section of an assessment into facts,
//! warnings, and goal advice. A [`NarrativeService`] turns that summary into
//! prose. The engine never calls a remote model; implementations that do
//! live outside this crate and plug in through the trait.
//!
//! ```rust,no_run
//! use vitalis::narrative::{NarrativeService, SectionSummary, StaticNarrator};
//!
//! async fn example(summary: &SectionSummary) {
//!     let narrator = StaticNarrator;
//!     let text = narrator.generate(summary).await;
//! }
//! ```

use crate::errors::AppResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use vitalis_core::models::AnswerOption;
use vitalis_intelligence::pillars::{calculate_pillars, PillarRating};
use vitalis_intelligence::{
    analyze_profile, get_health_goal_advice, AnalysisCategory, ContextualWarning,
    HealthCalculations, HealthProfile,
};

/// Condensed view of one assessment section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSummary {
    /// Section the summary covers
    pub category: AnalysisCategory,
    /// Section title
    pub title: String,
    /// Section score (0-100); body composition uses its pillar percentage,
    /// the overall section the overall score
    pub score: u32,
    /// Key facts, one per line
    pub facts: Vec<String>,
    /// Contextual warnings for the section
    pub warnings: Vec<ContextualWarning>,
    /// Advice for the selected goals
    pub goal_advice: Vec<String>,
}

impl SectionSummary {
    /// Summarize one section of a profile and its calculations
    #[must_use]
    pub fn build(
        category: AnalysisCategory,
        profile: &HealthProfile,
        calculations: &HealthCalculations,
        overall_score: u32,
    ) -> Self {
        let score = match category {
            AnalysisCategory::BodyComposition => {
                calculate_pillars(profile, calculations).body_composition.percent
            }
            AnalysisCategory::Overall => overall_score,
            AnalysisCategory::Exercise => calculations.exercise_score,
            AnalysisCategory::Nutrition => calculations.nutrition_score,
            AnalysisCategory::Sleep => calculations.sleep_score,
            AnalysisCategory::MentalHealth => calculations.mental_health_score,
        };
        let goal_ids: Vec<&str> = profile.goals.iter().map(|goal| goal.id()).collect();

        Self {
            category,
            title: category.title().to_owned(),
            score,
            facts: section_facts(category, profile, calculations),
            warnings: analyze_profile(category, profile, Some(calculations)),
            goal_advice: get_health_goal_advice(&goal_ids),
        }
    }

    /// Rating band of the section score
    #[must_use]
    pub const fn rating(&self) -> PillarRating {
        PillarRating::from_percent(self.score)
    }

    /// Render the summary as a prompt for a text-generation model
    #[must_use]
    pub fn to_prompt(&self) -> String {
        let mut prompt = format!(
            "Write short, encouraging health feedback for the \"{}\" section.\n\
             Section score: {}/100 ({}).\n",
            self.title,
            self.score,
            self.rating().label()
        );
        let concerns: Vec<String> = self
            .warnings
            .iter()
            .map(|warning| {
                format!(
                    "[{:?}] {}: {}",
                    warning.severity, warning.title, warning.message
                )
            })
            .collect();

        prompt.push_str(&bullet_list("Facts", &self.facts));
        prompt.push_str(&bullet_list("Concerns", &concerns));
        prompt.push_str(&bullet_list("Goals advice", &self.goal_advice));
        prompt
    }
}

/// `heading:` followed by one `- item` line per entry; empty when there are no items
fn bullet_list(heading: &str, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let lines: String = items.iter().map(|item| format!("- {item}\n")).collect();
    format!("{heading}:\n{lines}")
}

fn label_or_unknown<T: AnswerOption>(value: Option<T>) -> &'static str {
    value.map_or("not answered", AnswerOption::label)
}

fn format_optional(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(|| "unknown".to_owned(), |v| format!("{v:.0} {unit}"))
}

fn section_facts(
    category: AnalysisCategory,
    profile: &HealthProfile,
    calc: &HealthCalculations,
) -> Vec<String> {
    match category {
        AnalysisCategory::BodyComposition => {
            let mut facts = vec![match (calc.bmi, calc.bmi_category) {
                (Some(bmi), Some(band)) => format!("BMI {bmi:.1} ({band})"),
                _ => "BMI unknown".to_owned(),
            }];
            if let Some(fat) = calc.body_fat {
                let source = if calc.is_body_fat_estimated {
                    "estimated"
                } else {
                    "reported"
                };
                facts.push(format!("Body fat {fat:.1}% ({source})"));
            }
            if let (Some(low), Some(high)) = (calc.ideal_weight_low, calc.ideal_weight_high) {
                facts.push(format!("Healthy weight range {low:.0}-{high:.0} kg"));
            }
            facts
        }
        AnalysisCategory::Exercise => vec![
            format!("Activity level: {}", label_or_unknown(profile.activity_level)),
            format!("Intensity: {}", label_or_unknown(profile.exercise_intensity)),
            format!("Session length: {}", label_or_unknown(profile.exercise_duration)),
            format!("Exercise types practiced: {}", profile.exercise_types.len()),
        ],
        AnalysisCategory::Nutrition => vec![
            format!("Diet: {}", label_or_unknown(profile.diet)),
            format!("Meals per day: {}", label_or_unknown(profile.meal_frequency)),
            format!("Last meal: {}", label_or_unknown(profile.last_meal)),
            format!(
                "Recommended intake: {}",
                format_optional(calc.recommended_calories, "kcal")
            ),
            format!(
                "Protein {} / carbs {} / fat {}",
                format_optional(calc.protein_grams, "g"),
                format_optional(calc.carb_grams, "g"),
                format_optional(calc.fat_grams, "g")
            ),
        ],
        AnalysisCategory::Sleep => vec![
            format!("Sleep duration: {}", label_or_unknown(profile.sleep_duration)),
            format!("Sleep quality: {}", label_or_unknown(profile.sleep_quality)),
            format!("Recovery: {}", label_or_unknown(profile.recovery)),
        ],
        AnalysisCategory::MentalHealth => vec![
            format!("Feels down or anxious: {}", label_or_unknown(profile.mental_health)),
            format!("Socializing: {}", label_or_unknown(profile.socializing)),
            format!("Stress: {}", label_or_unknown(profile.stress)),
        ],
        AnalysisCategory::Overall => vec![
            format!("Exercise score {}/100", calc.exercise_score),
            format!("Nutrition score {}/100", calc.nutrition_score),
            format!("Mental health score {}/100", calc.mental_health_score),
            format!("Sleep score {}/100", calc.sleep_score),
        ],
    }
}

/// Text-generation service producing narrative feedback
///
/// Implement this trait to plug in an AI provider. Failures should be
/// reported as `ExternalServiceError`.
#[async_trait]
pub trait NarrativeService: Send + Sync {
    /// Provider identifier
    fn name(&self) -> &'static str;

    /// Generate feedback prose for one section summary
    async fn generate(&self, summary: &SectionSummary) -> AppResult<String>;
}

/// Deterministic narrator assembled from the summary itself
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticNarrator;

#[async_trait]
impl NarrativeService for StaticNarrator {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn generate(&self, summary: &SectionSummary) -> AppResult<String> {
        let mut sentences = vec![format!(
            "{}: {}/100, rated {}.",
            summary.title,
            summary.score,
            summary.rating().label()
        )];
        if let Some(first) = summary.facts.first() {
            sentences.push(format!("{first}."));
        }
        for warning in &summary.warnings {
            sentences.push(format!("{} - {}", warning.title, warning.message));
            if let Some(tip) = warning.recommendations.first() {
                sentences.push(format!("{tip}."));
            }
        }
        if summary.warnings.is_empty() {
            sentences.push("No concerns were flagged for this section.".to_owned());
        }
        if let Some(advice) = summary.goal_advice.first() {
            sentences.push(advice.clone());
        }
        Ok(sentences.join(" "))
    }
}
