// ABOUTME: Assessment service running validation, scoring, pillars, warnings, and goal advice
// ABOUTME: Produces timestamped reports and their persistence-ready record shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Assessment Service
//!
//! Wraps the pure engine with the application concerns around it: strict
//! questionnaire validation, report identity and timestamps, structured
//! logging, and narrative feedback. The service stores nothing; callers
//! persist [`AssessmentRecord`] however they like.

use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::narrative::{NarrativeService, SectionSummary, StaticNarrator};
use crate::questionnaire::Questionnaire;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;
use vitalis_core::constants::question_ids;
use vitalis_core::models::AnswerRecord;
use vitalis_intelligence::{
    analyze_profile, get_health_goal_advice, AnalysisCategory, ContextualWarning,
    HealthCalculations, HealthEngine, HealthPillarScores, HealthProfile,
};

/// Everything computed for one submitted questionnaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    /// Report identifier
    pub id: Uuid,
    /// When the assessment was computed
    pub timestamp: DateTime<Utc>,
    /// Submitted answers
    pub answers: AnswerRecord,
    /// Metrics and section scores
    pub health_calculations: HealthCalculations,
    /// Canonical overall score (0-100)
    pub score: u32,
    /// Dashboard pillars
    pub pillars: HealthPillarScores,
    /// Equal-weight pillar composite, shown alongside but never merged into `score`
    pub pillar_composite: u32,
    /// Every contextual warning that fired
    pub warnings: Vec<ContextualWarning>,
    /// Advice for the selected goals
    pub goal_advice: Vec<String>,
}

/// Persistence shape of an assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    /// Submitted answers
    pub answers: AnswerRecord,
    /// Metrics and section scores
    pub health_calculations: HealthCalculations,
    /// Canonical overall score
    pub score: u32,
    /// When the assessment was computed
    pub timestamp: DateTime<Utc>,
}

impl AssessmentReport {
    /// The record handed to a persistence layer
    #[must_use]
    pub fn to_record(&self) -> AssessmentRecord {
        AssessmentRecord {
            answers: self.answers.clone(),
            health_calculations: self.health_calculations.clone(),
            score: self.score,
            timestamp: self.timestamp,
        }
    }

    /// Summary of one section of the report
    #[must_use]
    pub fn summary(&self, category: AnalysisCategory) -> SectionSummary {
        SectionSummary::build(
            category,
            &HealthProfile::from_answers(&self.answers),
            &self.health_calculations,
            self.score,
        )
    }
}

/// Assessment orchestration
#[derive(Clone)]
pub struct AssessmentService {
    config: AppConfig,
    engine: HealthEngine,
    questionnaire: Questionnaire,
    narrator: Arc<dyn NarrativeService>,
}

impl AssessmentService {
    /// Create a service with the offline narrator
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let engine = HealthEngine::new(config.engine.clone());
        Self {
            config,
            engine,
            questionnaire: Questionnaire::standard(),
            narrator: Arc::new(StaticNarrator),
        }
    }

    /// Replace the narrative service
    #[must_use]
    pub fn with_narrator(mut self, narrator: Arc<dyn NarrativeService>) -> Self {
        self.narrator = narrator;
        self
    }

    /// Questionnaire used for validation
    #[must_use]
    pub const fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    /// Engine in use
    #[must_use]
    pub const fn engine(&self) -> &HealthEngine {
        &self.engine
    }

    /// Score a submitted questionnaire
    ///
    /// # Errors
    ///
    /// Returns a validation error when strict validation is enabled and the
    /// answers do not match the questionnaire
    pub fn assess(&self, answers: &AnswerRecord) -> AppResult<AssessmentReport> {
        if self.config.strict_validation {
            if let Err(error) = self.questionnaire.validate(answers) {
                warn!(code = %error.code, "Rejected answers: {}", error.message);
                return Err(error);
            }
        }

        let profile = HealthProfile::from_answers(answers);
        let health_calculations = self.engine.calculate_for_profile(&profile);
        let score = self.engine.calculate_overall_score(&health_calculations);
        let pillars = self.engine.calculate_health_pillars(answers, &health_calculations);
        let warnings =
            analyze_profile(AnalysisCategory::Overall, &profile, Some(&health_calculations));
        let goal_advice = get_health_goal_advice(&answers.choices(question_ids::GOALS));

        let report = AssessmentReport {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            answers: answers.clone(),
            pillar_composite: pillars.composite_score(),
            health_calculations,
            score,
            pillars,
            warnings,
            goal_advice,
        };

        info!(
            assessment.id = %report.id,
            assessment.score = report.score,
            assessment.warnings = report.warnings.len(),
            "Assessment completed"
        );
        Ok(report)
    }

    /// Narrative feedback for one section of a report
    ///
    /// # Errors
    ///
    /// Returns the narrative service's error when generation fails
    pub async fn narrate(
        &self,
        report: &AssessmentReport,
        category: AnalysisCategory,
    ) -> AppResult<String> {
        let summary = report.summary(category);
        self.narrator.generate(&summary).await.inspect_err(|error| {
            warn!(
                narrator = self.narrator.name(),
                category = %category,
                "Narrative generation failed: {}",
                error
            );
        })
    }
}
