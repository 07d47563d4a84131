// ABOUTME: Structured validation issues collected while checking an answer record
// ABOUTME: Aggregates every problem into one report that converts into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Validation Issues
//!
//! Answer validation reports every problem at once instead of stopping at
//! the first one, so the questionnaire front end can highlight all offending
//! questions in a single round trip.

use super::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of problem found with a single answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssueKind {
    /// The answer key is not a known question id
    UnknownQuestion,
    /// The value has the wrong shape (e.g. text for a numeric question)
    WrongType {
        /// Shape the question expects
        expected: String,
    },
    /// A select value is not among the declared options
    InvalidOption {
        /// The offending option id
        value: String,
    },
    /// A numeric value is outside the declared bounds
    OutOfRange {
        /// Submitted value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },
    /// A required, visible question has no answer
    MissingRequired,
}

/// A validation problem attached to a question id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Question id the issue refers to
    pub question_id: String,
    /// What went wrong
    #[serde(flatten)]
    pub kind: ValidationIssueKind,
}

impl ValidationIssue {
    /// Create an issue for a question
    #[must_use]
    pub fn new(question_id: impl Into<String>, kind: ValidationIssueKind) -> Self {
        Self {
            question_id: question_id.into(),
            kind,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValidationIssueKind::UnknownQuestion => {
                write!(f, "{}: unknown question", self.question_id)
            }
            ValidationIssueKind::WrongType { expected } => {
                write!(f, "{}: expected {expected}", self.question_id)
            }
            ValidationIssueKind::InvalidOption { value } => {
                write!(f, "{}: '{value}' is not a valid option", self.question_id)
            }
            ValidationIssueKind::OutOfRange { value, min, max } => write!(
                f,
                "{}: {value} is outside [{min}, {max}]",
                self.question_id
            ),
            ValidationIssueKind::MissingRequired => {
                write!(f, "{}: answer required", self.question_id)
            }
        }
    }
}

/// Collected validation issues for one answer record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Every issue found, in question order
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Record an issue
    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// True when no issue was recorded
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Convert into `Ok(())` when clean, otherwise an `AppError` listing every issue
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` (or more specific) error when any issue was recorded
    pub fn into_result(self) -> Result<(), AppError> {
        if self.is_clean() {
            return Ok(());
        }
        Err(self.into())
    }
}

impl From<ValidationReport> for AppError {
    fn from(report: ValidationReport) -> Self {
        // A single-issue report keeps its specific code
        let code = match report.issues.as_slice() {
            [only] => match only.kind {
                ValidationIssueKind::MissingRequired => ErrorCode::MissingRequiredField,
                ValidationIssueKind::OutOfRange { .. } => ErrorCode::ValueOutOfRange,
                _ => ErrorCode::InvalidInput,
            },
            _ => ErrorCode::InvalidInput,
        };
        let message = report
            .issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        let details = serde_json::json!({ "issues": report.issues });
        Self::new(code, message).with_details(details)
    }
}
