// ABOUTME: Integration tests for the exercise, nutrition, sleep, and wellbeing section scores
// ABOUTME: Checks table points, bounds, absent sections, and monotonic improvement
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::complete_answers;
use vitalis::intelligence::section_scores::{
    score_exercise, score_mental_health, score_nutrition, score_sleep, SectionScores,
};
use vitalis::intelligence::{calculate_health_metrics, HealthProfile};
use vitalis::models::AnswerRecord;

fn profile(answers: &AnswerRecord) -> HealthProfile {
    HealthProfile::from_answers(answers)
}

#[test]
fn test_complete_answers_section_scores() {
    let scores = SectionScores::from_profile(&profile(&complete_answers()));

    assert_eq!(
        scores,
        SectionScores {
            exercise: 70,
            nutrition: 90,
            mental_health: 80,
            sleep: 80,
        }
    );
}

#[test]
fn test_best_answers_reach_one_hundred() {
    let answers = AnswerRecord::new()
        .with("activityLevel", "active")
        .with("exerciseIntensity", "vigorous")
        .with("exerciseDuration", "45-60")
        .with("exerciseType", vec!["cardio", "strength", "hiit", "sports"])
        .with("diet", "very-healthy")
        .with("mealFrequency", "3-4")
        .with("lastMeal", "before-8pm")
        .with("goals", vec!["muscle-gain"])
        .with("sleepDuration", "7-9")
        .with("sleepQuality", "excellent")
        .with("recovery", "excellent")
        .with("mentalHealth", "never")
        .with("socializing", "frequently")
        .with("stress", "low");
    let p = profile(&answers);

    assert_eq!(score_exercise(&p), 100);
    assert_eq!(score_nutrition(&p), 100);
    assert_eq!(score_sleep(&p), 100);
    assert_eq!(score_mental_health(&p), 100);
}

#[test]
fn test_absent_exercise_answers_score_zero() {
    let answers = AnswerRecord::new()
        .with("weight", 80.0)
        .with("height", 180.0)
        .with("diet", "healthy")
        .with("sleepDuration", "7-9");
    let calc = calculate_health_metrics(&answers);

    assert_eq!(calc.exercise_score, 0);
    assert!(calc.nutrition_score > 0);
    assert!(calc.sleep_score > 0);
    assert_eq!(calc.mental_health_score, 0);
}

#[test]
fn test_empty_record_scores_zero_everywhere() {
    let scores = SectionScores::from_profile(&profile(&AnswerRecord::new()));
    assert_eq!(scores, SectionScores::default());
}

#[test]
fn test_unknown_options_score_as_absent() {
    let answers = AnswerRecord::new()
        .with("activityLevel", "couch")
        .with("sleepQuality", "dreamy")
        .with("stress", "none");
    let scores = SectionScores::from_profile(&profile(&answers));

    assert_eq!(scores.exercise, 0);
    assert_eq!(scores.sleep, 0);
    assert_eq!(scores.mental_health, 0);
}

#[test]
fn test_peak_intensity_and_duration_are_not_the_longest_hardest() {
    let vigorous = profile(&AnswerRecord::new().with("exerciseIntensity", "vigorous"));
    let very_intense = profile(&AnswerRecord::new().with("exerciseIntensity", "very-intense"));
    assert_eq!(score_exercise(&vigorous), 25);
    assert_eq!(score_exercise(&very_intense), 20);

    let hour = profile(&AnswerRecord::new().with("exerciseDuration", "45-60"));
    let longer = profile(&AnswerRecord::new().with("exerciseDuration", "60-plus"));
    assert!(score_exercise(&hour) > score_exercise(&longer));
}

#[test]
fn test_exercise_variety_is_capped() {
    let five = profile(&AnswerRecord::new().with(
        "exerciseType",
        vec!["cardio", "strength", "flexibility", "sports", "hiit"],
    ));
    let duplicated =
        profile(&AnswerRecord::new().with("exerciseType", vec!["cardio", "cardio", "cardio"]));

    assert_eq!(score_exercise(&five), 15);
    assert_eq!(score_exercise(&duplicated), 5);
}

#[test]
fn test_nutrition_goal_bonus_only_for_aligned_goals() {
    let base = AnswerRecord::new().with("diet", "average");
    let aligned = profile(&base.clone().with("goals", vec!["weight-loss"]));
    let unrelated = profile(&base.clone().with("goals", vec!["flexibility"]));

    assert_eq!(score_nutrition(&profile(&base)), 20);
    assert_eq!(score_nutrition(&aligned), 35);
    assert_eq!(score_nutrition(&unrelated), 20);
}

#[test]
fn test_better_sleep_answers_never_lower_the_score() {
    let durations = ["under-5", "5-7", "7-9"];
    let qualities = ["poor", "fair", "good", "excellent"];

    let mut previous = 0;
    for duration in durations {
        let score = score_sleep(&profile(&AnswerRecord::new().with("sleepDuration", duration)));
        assert!(score >= previous, "{duration} scored {score} < {previous}");
        previous = score;
    }

    let mut previous = 0;
    for quality in qualities {
        let score = score_sleep(&profile(&AnswerRecord::new().with("sleepQuality", quality)));
        assert!(score >= previous, "{quality} scored {score} < {previous}");
        previous = score;
    }
}

#[test]
fn test_less_distress_scores_higher() {
    let often = profile(&AnswerRecord::new().with("mentalHealth", "often"));
    let never = profile(&AnswerRecord::new().with("mentalHealth", "never"));
    assert!(score_mental_health(&never) > score_mental_health(&often));
}
