// ABOUTME: Integration tests for the questionnaire schema and strict answer validation
// ABOUTME: Covers visibility rules, unknown keys, bad options, ranges, and required answers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::complete_answers;
use vitalis::errors::{ErrorCode, ValidationIssueKind};
use vitalis::models::AnswerRecord;
use vitalis::questionnaire::{QuestionKind, Questionnaire, Section};

#[test]
fn test_schema_covers_every_answer_key() {
    let questionnaire = Questionnaire::standard();
    for (id, _) in complete_answers().iter() {
        assert!(questionnaire.question(id).is_some(), "no question for {id}");
    }
    assert_eq!(questionnaire.questions().len(), 20);
}

#[test]
fn test_question_declarations() {
    let questionnaire = Questionnaire::standard();

    let weight = questionnaire.question("weight").unwrap();
    assert_eq!(weight.section, Section::AboutYou);
    assert!(matches!(weight.kind, QuestionKind::Numeric { .. }));

    let goals = questionnaire.question("goals").unwrap();
    assert!(matches!(goals.kind, QuestionKind::MultiSelect { .. }));
    assert!(goals.kind.has_option("weight-loss"));
    assert!(!goals.kind.has_option("get-rich"));

    assert!(!questionnaire.question("bodyFat").unwrap().required);
}

#[test]
fn test_complete_answers_are_valid() {
    let questionnaire = Questionnaire::standard();
    assert!(questionnaire.validation_report(&complete_answers()).is_clean());
    assert!(questionnaire.validate(&complete_answers()).is_ok());
}

#[test]
fn test_sedentary_hides_workout_questions() {
    let questionnaire = Questionnaire::standard();
    let mut answers = complete_answers().with("activityLevel", "sedentary");

    let visible: Vec<&str> = questionnaire
        .visible_questions(&answers)
        .iter()
        .map(|q| q.id)
        .collect();
    assert!(!visible.contains(&"exerciseIntensity"));
    assert!(!visible.contains(&"exerciseDuration"));
    assert!(visible.contains(&"diet"));

    // Hidden questions are neither required nor checked
    answers.remove("exerciseIntensity");
    answers.insert("exerciseDuration", "forever");
    assert!(questionnaire.validate(&answers).is_ok());
}

#[test]
fn test_unknown_question_rejected() {
    let answers = complete_answers().with("favoriteColor", "blue");
    let report = Questionnaire::standard().validation_report(&answers);

    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].question_id, "favoriteColor");
    assert_eq!(report.issues[0].kind, ValidationIssueKind::UnknownQuestion);
}

#[test]
fn test_out_of_range_number_rejected() {
    let answers = complete_answers().with("weight", 500.0);
    let error = Questionnaire::standard().validate(&answers).unwrap_err();

    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert!(error.message.contains("weight"));
}

#[test]
fn test_invalid_options_rejected() {
    let answers = complete_answers()
        .with("diet", "carnivore")
        .with("goals", vec!["weight-loss", "fly"]);
    let report = Questionnaire::standard().validation_report(&answers);

    let invalid: Vec<&str> = report
        .issues
        .iter()
        .filter_map(|issue| match &issue.kind {
            ValidationIssueKind::InvalidOption { value } => Some(value.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(invalid.len(), 2);
    assert!(invalid.contains(&"carnivore"));
    assert!(invalid.contains(&"fly"));
}

#[test]
fn test_wrong_shape_rejected() {
    let answers = complete_answers().with("height", "tall").with("goals", 3.0);
    let report = Questionnaire::standard().validation_report(&answers);

    assert_eq!(report.issues.len(), 2);
    assert!(report
        .issues
        .iter()
        .all(|issue| matches!(issue.kind, ValidationIssueKind::WrongType { .. })));
}

#[test]
fn test_missing_required_answer() {
    let mut answers = complete_answers();
    answers.remove("sleepQuality");
    let error = Questionnaire::standard().validate(&answers).unwrap_err();

    assert_eq!(error.code, ErrorCode::MissingRequiredField);
}

#[test]
fn test_empty_record_lists_every_required_question() {
    let questionnaire = Questionnaire::standard();
    let report = questionnaire.validation_report(&AnswerRecord::new());
    let required = questionnaire
        .questions()
        .iter()
        .filter(|q| q.required)
        .count();

    assert_eq!(report.issues.len(), required);
    let error = questionnaire.validate(&AnswerRecord::new()).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}
