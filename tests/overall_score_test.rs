// ABOUTME: Integration tests for the canonical overall health score
// ABOUTME: Covers weighting, BMI penalties, bounds, monotonicity, and idempotence
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::complete_answers;
use vitalis::intelligence::config::intelligence::OverallScoreConfig;
use vitalis::intelligence::overall_score;
use vitalis::intelligence::{
    calculate_health_metrics, calculate_overall_score, calculate_score, HealthCalculations,
};
use vitalis::models::AnswerRecord;

fn sections(exercise: u32, nutrition: u32, mental_health: u32, sleep: u32) -> HealthCalculations {
    HealthCalculations {
        exercise_score: exercise,
        nutrition_score: nutrition,
        mental_health_score: mental_health,
        sleep_score: sleep,
        ..HealthCalculations::default()
    }
}

#[test]
fn test_complete_answers_score() {
    let answers = complete_answers();
    let calc = calculate_health_metrics(&answers);

    assert_eq!(calculate_overall_score(&calc), 80);
    assert_eq!(calculate_score(&answers, &calc), 80);
}

#[test]
fn test_weighted_average_without_bmi() {
    assert_eq!(calculate_overall_score(&sections(100, 100, 100, 100)), 100);
    assert_eq!(calculate_overall_score(&sections(100, 0, 0, 0)), 30);
    assert_eq!(calculate_overall_score(&sections(0, 0, 100, 0)), 20);
    assert_eq!(calculate_overall_score(&sections(0, 0, 0, 0)), 0);
}

#[test]
fn test_bmi_penalties() {
    let base = sections(80, 80, 80, 80);
    let with_bmi = |bmi: f64| HealthCalculations {
        bmi: Some(bmi),
        ..base.clone()
    };

    assert_eq!(calculate_overall_score(&base), 80);
    assert_eq!(calculate_overall_score(&with_bmi(22.0)), 80);
    assert_eq!(calculate_overall_score(&with_bmi(27.0)), 75);
    assert_eq!(calculate_overall_score(&with_bmi(17.0)), 70);
    assert_eq!(calculate_overall_score(&with_bmi(32.0)), 70);
}

#[test]
fn test_score_stays_in_bounds() {
    let config = OverallScoreConfig::default();
    for score in [0, 10, 50, 99, 100] {
        for bmi in [None, Some(15.0), Some(22.0), Some(27.0), Some(40.0)] {
            let calc = HealthCalculations {
                bmi,
                ..sections(score, score, score, score)
            };
            let overall = overall_score::calculate_overall_score(&calc, &config);
            assert!(overall <= 100, "score {overall} out of range");
        }
    }
}

#[test]
fn test_score_never_decreases_when_a_section_improves() {
    for improved in 0..4 {
        let mut previous = 0;
        for value in (0..=100).step_by(5) {
            let mut values = [40, 40, 40, 40];
            values[improved] = value;
            let calc = HealthCalculations {
                bmi: Some(27.0),
                ..sections(values[0], values[1], values[2], values[3])
            };
            let score = calculate_overall_score(&calc);
            assert!(score >= previous, "section {improved} at {value}: {score} < {previous}");
            previous = score;
        }
    }
}

#[test]
fn test_pipeline_is_idempotent() {
    let answers = complete_answers().with("bodyFat", 18.0);

    let first = calculate_health_metrics(&answers);
    let second = calculate_health_metrics(&answers);

    assert_eq!(first, second);
    assert_eq!(calculate_overall_score(&first), calculate_overall_score(&second));
}

#[test]
fn test_empty_answers_score_zero() {
    let calc = calculate_health_metrics(&AnswerRecord::new());
    assert_eq!(calc, HealthCalculations::default());
    assert_eq!(calculate_overall_score(&calc), 0);
}
