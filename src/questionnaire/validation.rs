// ABOUTME: Strict validation of an answer record against the questionnaire schema
// ABOUTME: Collects unknown keys, wrong shapes, bad options, range errors, and missing answers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Question, QuestionKind, Questionnaire};
use crate::errors::{AppResult, ValidationIssue, ValidationIssueKind, ValidationReport};
use tracing::debug;
use vitalis_core::models::{AnswerRecord, AnswerValue};

impl Questionnaire {
    /// Check an answer record and return every issue found
    ///
    /// Answers to questions hidden by their visibility rule are ignored.
    #[must_use]
    pub fn validation_report(&self, answers: &AnswerRecord) -> ValidationReport {
        let mut report = ValidationReport::default();

        for (id, value) in answers.iter() {
            match self.question(id) {
                None => report.push(ValidationIssue::new(id, ValidationIssueKind::UnknownQuestion)),
                Some(question) if !question.is_visible(answers) => {
                    debug!(question = id, "ignoring answer to hidden question");
                }
                Some(question) => {
                    if let Some(kind) = check_value(question, value) {
                        report.push(ValidationIssue::new(id, kind));
                    }
                }
            }
        }

        for question in self.visible_questions(answers) {
            if question.required && !is_answered(answers.get(question.id)) {
                report.push(ValidationIssue::new(
                    question.id,
                    ValidationIssueKind::MissingRequired,
                ));
            }
        }

        report
    }

    /// Validate an answer record
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error (or `MissingRequiredField` /
    /// `ValueOutOfRange` for a single issue) listing every problem found
    pub fn validate(&self, answers: &AnswerRecord) -> AppResult<()> {
        self.validation_report(answers).into_result()
    }
}

fn is_answered(value: Option<&AnswerValue>) -> bool {
    match value {
        None => false,
        Some(AnswerValue::Choices(items)) => !items.is_empty(),
        Some(AnswerValue::Text(text)) => !text.trim().is_empty(),
        Some(AnswerValue::Number(_)) => true,
    }
}

fn check_value(question: &Question, value: &AnswerValue) -> Option<ValidationIssueKind> {
    match &question.kind {
        QuestionKind::Numeric { min, max, .. } => {
            let Some(number) = value.as_number() else {
                return Some(ValidationIssueKind::WrongType {
                    expected: "number".to_owned(),
                });
            };
            (number < *min || number > *max).then_some(ValidationIssueKind::OutOfRange {
                value: number,
                min: *min,
                max: *max,
            })
        }
        QuestionKind::SingleSelect { .. } => {
            let Some(choice) = value.as_text() else {
                return Some(ValidationIssueKind::WrongType {
                    expected: "single option".to_owned(),
                });
            };
            (!question.kind.has_option(choice)).then(|| ValidationIssueKind::InvalidOption {
                value: choice.to_owned(),
            })
        }
        QuestionKind::MultiSelect { .. } => {
            if matches!(value, AnswerValue::Number(_)) {
                return Some(ValidationIssueKind::WrongType {
                    expected: "list of options".to_owned(),
                });
            }
            value
                .as_choices()
                .into_iter()
                .find(|choice| !question.kind.has_option(choice))
                .map(|choice| ValidationIssueKind::InvalidOption {
                    value: choice.to_owned(),
                })
        }
    }
}
