// ABOUTME: Questionnaire answer record keyed by question id
// ABOUTME: Tagged answer values with lenient typed accessors for text, numbers, and choices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single answer as submitted by the questionnaire
///
/// Deserializes untagged from plain JSON: a number, a string, or an array of strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Numeric (scale) answer
    Number(f64),
    /// Single-select answer or free text
    Text(String),
    /// Multi-select answer, in selection order
    Choices(Vec<String>),
}

impl AnswerValue {
    /// Numeric view; numeric strings are accepted, non-finite values are not
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
            Self::Choices(_) => None,
        };
        value.filter(|n| n.is_finite())
    }

    /// Single-select view; a one-item list is accepted
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            Self::Choices(items) if items.len() == 1 => items.first().map(String::as_str),
            Self::Choices(_) | Self::Number(_) => None,
        }
    }

    /// Multi-select view; a lone string counts as a one-item list
    #[must_use]
    pub fn as_choices(&self) -> Vec<&str> {
        match self {
            Self::Choices(items) => items.iter().map(String::as_str).collect(),
            Self::Text(s) => vec![s.as_str()],
            Self::Number(_) => Vec::new(),
        }
    }

    /// Shape name used in validation messages
    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Choices(_) => "list",
        }
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(value: Vec<&str>) -> Self {
        Self::Choices(value.into_iter().map(str::to_owned).collect())
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(value: Vec<String>) -> Self {
        Self::Choices(value)
    }
}

/// The user's questionnaire responses, keyed by question id
///
/// Unanswered optional questions are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerRecord(BTreeMap<String, AnswerValue>);

impl AnswerRecord {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, question_id: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        self.insert(question_id, value);
        self
    }

    /// Insert or replace an answer
    pub fn insert(&mut self, question_id: impl Into<String>, value: impl Into<AnswerValue>) {
        self.0.insert(question_id.into(), value.into());
    }

    /// Remove an answer, returning it if present
    pub fn remove(&mut self, question_id: &str) -> Option<AnswerValue> {
        self.0.remove(question_id)
    }

    /// Raw answer lookup
    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.0.get(question_id)
    }

    /// Whether the question was answered
    #[must_use]
    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    /// Numeric answer, if present and numeric
    #[must_use]
    pub fn number(&self, question_id: &str) -> Option<f64> {
        self.get(question_id).and_then(AnswerValue::as_number)
    }

    /// Single-select answer, if present
    #[must_use]
    pub fn text(&self, question_id: &str) -> Option<&str> {
        self.get(question_id).and_then(AnswerValue::as_text)
    }

    /// Multi-select answer; empty when absent
    #[must_use]
    pub fn choices(&self, question_id: &str) -> Vec<&str> {
        self.get(question_id)
            .map(AnswerValue::as_choices)
            .unwrap_or_default()
    }

    /// Iterate answers in question-id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of answered questions
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing was answered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<AnswerValue>> FromIterator<(K, V)> for AnswerRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
