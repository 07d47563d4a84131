// ABOUTME: Integration tests for contextual warnings and goal advice
// ABOUTME: Exercises rule triggers, category filtering, severity, and advice fallbacks
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::complete_answers;
use vitalis::intelligence::goal_advice::GENERIC_GOAL_ADVICE;
use vitalis::intelligence::{
    calculate_health_metrics, get_contextual_analysis, get_health_goal_advice, AnalysisCategory,
    Severity,
};
use vitalis::models::AnswerRecord;

fn underweight_dieter() -> AnswerRecord {
    AnswerRecord::new()
        .with("weight", 50.0)
        .with("height", 170.0)
        .with("age", 25.0)
        .with("gender", "female")
        .with("goals", vec!["weight-loss"])
}

#[test]
fn test_underweight_weight_loss_goal_raises_alert() {
    let answers = underweight_dieter();
    let calc = calculate_health_metrics(&answers);
    assert!((calc.bmi.unwrap() - 17.3).abs() < 0.01);

    let warnings =
        get_contextual_analysis(AnalysisCategory::BodyComposition, &answers, Some(&calc));
    let misalignment = warnings
        .iter()
        .find(|w| w.title.to_lowercase().contains("goal misalignment"))
        .expect("goal misalignment warning");
    assert_eq!(misalignment.severity, Severity::Alert);
    assert!(!misalignment.recommendations.is_empty());
}

#[test]
fn test_bmi_derived_when_calculations_not_supplied() {
    let warnings =
        get_contextual_analysis(AnalysisCategory::BodyComposition, &underweight_dieter(), None);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].severity, Severity::Alert);
}

#[test]
fn test_hard_training_with_poor_recovery_warns() {
    let answers = AnswerRecord::new()
        .with("exerciseIntensity", "vigorous")
        .with("recovery", "poor");

    let warnings = get_contextual_analysis(AnalysisCategory::Overall, &answers, None);
    let recovery = warnings
        .iter()
        .find(|w| w.title.to_lowercase().contains("recovery"))
        .expect("recovery warning");
    assert_eq!(recovery.severity, Severity::Warning);
}

#[test]
fn test_category_filters_rules() {
    let answers = AnswerRecord::new()
        .with("exerciseIntensity", "vigorous")
        .with("recovery", "poor");

    assert!(get_contextual_analysis(AnalysisCategory::Sleep, &answers, None).is_empty());
    assert_eq!(
        get_contextual_analysis(AnalysisCategory::Exercise, &answers, None).len(),
        1
    );
}

#[test]
fn test_all_matching_rules_fire() {
    let answers = AnswerRecord::new()
        .with("exerciseIntensity", "very-intense")
        .with("exerciseDuration", "60-plus")
        .with("sleepDuration", "under-5")
        .with("recovery", "poor")
        .with("stress", "very-high")
        .with("sleepQuality", "poor")
        .with("mentalHealth", "often")
        .with("socializing", "rarely");

    let warnings = get_contextual_analysis(AnalysisCategory::Overall, &answers, None);
    let titles: Vec<&str> = warnings.iter().map(|w| w.title.as_str()).collect();

    assert!(titles.contains(&"Insufficient Recovery"));
    assert!(titles.contains(&"Overtraining Risk"));
    assert!(titles.contains(&"Stress Affecting Sleep"));
    assert!(titles.contains(&"Social Isolation"));
    assert!(titles.contains(&"High Stress and Frequent Distress"));
    assert!(warnings.iter().any(|w| w.severity == Severity::Alert));
}

#[test]
fn test_healthy_profile_has_no_warnings() {
    let answers = complete_answers();
    let calc = calculate_health_metrics(&answers);
    assert!(get_contextual_analysis(AnalysisCategory::Overall, &answers, Some(&calc)).is_empty());
}

#[test]
fn test_goal_advice_in_order_with_fallback() {
    let advice = get_health_goal_advice(&["better-sleep", "juggling", "weight-loss"]);

    assert_eq!(advice.len(), 3);
    assert!(advice[0].to_lowercase().contains("sleep"));
    assert_eq!(advice[1], GENERIC_GOAL_ADVICE);
    assert!(advice[2].contains("deficit"));
}

#[test]
fn test_goal_advice_for_no_goals_is_empty() {
    let none: [&str; 0] = [];
    assert!(get_health_goal_advice(&none).is_empty());
}
