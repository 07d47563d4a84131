// ABOUTME: Five-pillar dashboard breakdown on a 0-30 point scale with labels and colors
// ABOUTME: Also exposes the alternate 20%-per-pillar composite, kept apart from the canonical score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Health Pillars
//!
//! Pillars regroup the calculations into body composition, exercise,
//! nutrition, recovery, and mental health. Each pillar carries points on a
//! 0-30 scale plus the equivalent percentage, a rating label, a display color,
//! and recommendations.
//!
//! The pillar composite ([`HealthPillarScores::composite_score`]) weights the
//! five pillars equally, body composition acting as the BMI pillar. It is not
//! the overall health score (see [`crate::overall_score`]) and the two must
//! not be mixed.

use crate::body_composition::BmiCategory;
use crate::engine::HealthCalculations;
use crate::profile::HealthProfile;
use serde::{Deserialize, Serialize};
use std::fmt;
use vitalis_core::models::{
    ActivityLevel, DietQuality, DistressFrequency, ExerciseIntensity, LastMealTiming,
    QualityRating, SleepDuration, SocialFrequency, StressLevel,
};

/// Top of the pillar point scale
pub const MAX_PILLAR_POINTS: u32 = 30;

/// Share of each pillar in the composite
const COMPOSITE_PILLAR_WEIGHT: f64 = 0.2;

/// Body composition points per BMI category
const BODY_COMPOSITION_POINTS: &[(BmiCategory, u32)] = &[
    (BmiCategory::Normal, 30),
    (BmiCategory::Overweight, 20),
    (BmiCategory::Underweight, 15),
    (BmiCategory::Obese, 10),
];

/// The five dashboard pillars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Pillar {
    /// Body composition (BMI)
    BodyComposition,
    /// Exercise
    Exercise,
    /// Nutrition
    Nutrition,
    /// Sleep and recovery
    Recovery,
    /// Mental health
    MentalHealth,
}

impl Pillar {
    /// All pillars in dashboard order
    pub const ALL: [Self; 5] = [
        Self::BodyComposition,
        Self::Exercise,
        Self::Nutrition,
        Self::Recovery,
        Self::MentalHealth,
    ];

    /// Wire name of the pillar
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::BodyComposition => "bodyComposition",
            Self::Exercise => "exercise",
            Self::Nutrition => "nutrition",
            Self::Recovery => "recovery",
            Self::MentalHealth => "mentalHealth",
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Rating band of a pillar percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PillarRating {
    /// 80% and above
    Excellent,
    /// 60-79%
    Good,
    /// 40-59%
    Fair,
    /// Below 40%
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
}

impl PillarRating {
    /// Band for a 0-100 percentage
    #[must_use]
    pub const fn from_percent(percent: u32) -> Self {
        match percent {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::NeedsAttention,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsAttention => "Needs Attention",
        }
    }

    /// Display color (hex)
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Excellent => "#22c55e",
            Self::Good => "#84cc16",
            Self::Fair => "#eab308",
            Self::NeedsAttention => "#ef4444",
        }
    }
}

/// One pillar's result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarScore {
    /// Points on the 0-30 scale
    pub score: u32,
    /// Same result normalized to 0-100
    pub percent: u32,
    /// Rating label
    pub label: String,
    /// Display color
    pub color: String,
    /// Suggestions for improving this pillar
    pub recommendations: Vec<String>,
}

impl PillarScore {
    fn new(score: u32, percent: u32, recommendations: Vec<String>) -> Self {
        let rating = PillarRating::from_percent(percent);
        Self {
            score,
            percent,
            label: rating.label().to_owned(),
            color: rating.color().to_owned(),
            recommendations,
        }
    }

    /// Rating band of this pillar
    #[must_use]
    pub const fn rating(&self) -> PillarRating {
        PillarRating::from_percent(self.percent)
    }
}

/// Scores for all five pillars
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthPillarScores {
    /// Body composition
    pub body_composition: PillarScore,
    /// Exercise
    pub exercise: PillarScore,
    /// Nutrition
    pub nutrition: PillarScore,
    /// Sleep and recovery
    pub recovery: PillarScore,
    /// Mental health
    pub mental_health: PillarScore,
}

impl HealthPillarScores {
    /// Score of one pillar
    #[must_use]
    pub const fn get(&self, pillar: Pillar) -> &PillarScore {
        match pillar {
            Pillar::BodyComposition => &self.body_composition,
            Pillar::Exercise => &self.exercise,
            Pillar::Nutrition => &self.nutrition,
            Pillar::Recovery => &self.recovery,
            Pillar::MentalHealth => &self.mental_health,
        }
    }

    /// Pillars in dashboard order
    pub fn iter(&self) -> impl Iterator<Item = (Pillar, &PillarScore)> {
        Pillar::ALL.into_iter().map(move |pillar| (pillar, self.get(pillar)))
    }

    /// Pillar-based composite (each pillar 20%), 0-100
    ///
    /// This is the alternate dashboard figure, not the overall health score.
    #[must_use]
    pub fn composite_score(&self) -> u32 {
        let total: f64 = self
            .iter()
            .map(|(_, pillar)| COMPOSITE_PILLAR_WEIGHT * f64::from(pillar.percent))
            .sum();
        total.round().clamp(0.0, 100.0) as u32
    }
}

/// Convert a 0-100 section score to pillar points
fn section_points(section_score: u32) -> u32 {
    (f64::from(section_score.min(100)) * f64::from(MAX_PILLAR_POINTS) / 100.0).round() as u32
}

fn points_percent(points: u32) -> u32 {
    (f64::from(points) * 100.0 / f64::from(MAX_PILLAR_POINTS)).round() as u32
}

fn section_pillar(section_score: u32, recommendations: Vec<String>) -> PillarScore {
    PillarScore::new(
        section_points(section_score),
        section_score.min(100),
        recommendations,
    )
}

/// Build the pillar breakdown for a profile and its calculations
#[must_use]
pub fn calculate_pillars(
    profile: &HealthProfile,
    calculations: &HealthCalculations,
) -> HealthPillarScores {
    let body_points = calculations.bmi_category.map_or(0, |category| {
        BODY_COMPOSITION_POINTS
            .iter()
            .find(|(candidate, _)| *candidate == category)
            .map_or(0, |(_, points)| *points)
    });

    HealthPillarScores {
        body_composition: PillarScore::new(
            body_points,
            points_percent(body_points),
            body_composition_recommendations(calculations.bmi_category),
        ),
        exercise: section_pillar(calculations.exercise_score, exercise_recommendations(profile)),
        nutrition: section_pillar(
            calculations.nutrition_score,
            nutrition_recommendations(profile),
        ),
        recovery: section_pillar(calculations.sleep_score, recovery_recommendations(profile)),
        mental_health: section_pillar(
            calculations.mental_health_score,
            mental_health_recommendations(profile),
        ),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

fn body_composition_recommendations(category: Option<BmiCategory>) -> Vec<String> {
    match category {
        None => owned(&["Add your height and weight to unlock body composition insights"]),
        Some(BmiCategory::Normal) => owned(&[
            "Maintain your current weight with balanced meals and regular activity",
        ]),
        Some(BmiCategory::Underweight) => owned(&[
            "Increase calorie intake with nutrient-dense foods",
            "Add strength training to build lean mass",
            "Consider checking in with a healthcare provider",
        ]),
        Some(BmiCategory::Overweight) => owned(&[
            "Aim for a moderate calorie deficit",
            "Combine cardio with strength training",
        ]),
        Some(BmiCategory::Obese) => owned(&[
            "Work with a healthcare provider on a weight management plan",
            "Start with low-impact daily movement such as walking",
            "Focus on whole foods and portion awareness",
        ]),
    }
}

fn exercise_recommendations(profile: &HealthProfile) -> Vec<String> {
    let mut tips = Vec::new();
    match profile.activity_level {
        None | Some(ActivityLevel::Sedentary) => {
            tips.push("Build up to 150 minutes of moderate activity per week".to_owned());
        }
        Some(ActivityLevel::Light) => {
            tips.push("Add one or two structured workouts per week".to_owned());
        }
        Some(_) => {}
    }
    if profile.exercise_types.len() < 2 {
        tips.push("Mix cardio, strength, and mobility work for balanced fitness".to_owned());
    }
    if profile.exercise_intensity == Some(ExerciseIntensity::VeryIntense) {
        tips.push("Balance very intense sessions with easier days".to_owned());
    }
    if tips.is_empty() {
        tips.push("Keep up your routine and progress gradually".to_owned());
    }
    tips
}

fn nutrition_recommendations(profile: &HealthProfile) -> Vec<String> {
    let mut tips = Vec::new();
    if matches!(
        profile.diet,
        None | Some(DietQuality::Unhealthy | DietQuality::Average)
    ) {
        tips.push("Add more vegetables, fruit, and lean protein to each meal".to_owned());
    }
    if profile.last_meal == Some(LastMealTiming::After10pm) {
        tips.push("Finish eating two to three hours before bed".to_owned());
    }
    if tips.is_empty() {
        tips.push("Your eating habits are solid; stay consistent".to_owned());
    }
    tips
}

fn recovery_recommendations(profile: &HealthProfile) -> Vec<String> {
    let mut tips = Vec::new();
    if matches!(
        profile.sleep_duration,
        None | Some(SleepDuration::Under5 | SleepDuration::From5To7)
    ) {
        tips.push("Aim for 7-9 hours of sleep per night".to_owned());
    }
    if matches!(
        profile.sleep_quality,
        Some(QualityRating::Poor | QualityRating::Fair)
    ) {
        tips.push("Keep a consistent bedtime and limit screens before sleep".to_owned());
    }
    if profile.recovery == Some(QualityRating::Poor) {
        tips.push("Schedule rest days between demanding sessions".to_owned());
    }
    if tips.is_empty() {
        tips.push("Your sleep and recovery support your training well".to_owned());
    }
    tips
}

fn mental_health_recommendations(profile: &HealthProfile) -> Vec<String> {
    let mut tips = Vec::new();
    if matches!(
        profile.stress,
        Some(StressLevel::High | StressLevel::VeryHigh)
    ) {
        tips.push("Try daily stress management such as breathing exercises".to_owned());
    }
    if profile.socializing == Some(SocialFrequency::Rarely) {
        tips.push("Plan regular time with friends or family".to_owned());
    }
    if profile.mental_health == Some(DistressFrequency::Often) {
        tips.push("Consider talking with a mental health professional".to_owned());
    }
    if tips.is_empty() {
        tips.push("Keep nurturing the habits that support your wellbeing".to_owned());
    }
    tips
}
