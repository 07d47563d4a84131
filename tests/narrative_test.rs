// ABOUTME: Integration tests for section summaries and the narrative service seam
// ABOUTME: Uses the static narrator and mock providers to check prompts, text, and failures
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use async_trait::async_trait;
use common::{complete_answers, init_test_logging, lenient_config};
use std::sync::Arc;
use vitalis::assessment::AssessmentService;
use vitalis::config::AppConfig;
use vitalis::errors::{AppError, AppResult, ErrorCode};
use vitalis::intelligence::{calculate_health_metrics, AnalysisCategory, HealthProfile};
use vitalis::models::AnswerRecord;
use vitalis::narrative::{NarrativeService, SectionSummary, StaticNarrator};

/// Provider that echoes the prompt it was given
struct EchoNarrator;

#[async_trait]
impl NarrativeService for EchoNarrator {
    fn name(&self) -> &'static str {
        "echo"
    }

    async fn generate(&self, summary: &SectionSummary) -> AppResult<String> {
        Ok(summary.to_prompt())
    }
}

/// Provider that is always down
struct FailingNarrator;

#[async_trait]
impl NarrativeService for FailingNarrator {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn generate(&self, _summary: &SectionSummary) -> AppResult<String> {
        Err(AppError::external_service("failing", "provider unavailable"))
    }
}

fn recovery_risk_answers() -> AnswerRecord {
    AnswerRecord::new()
        .with("exerciseIntensity", "vigorous")
        .with("recovery", "poor")
        .with("goals", vec!["better-sleep"])
}

#[tokio::test]
async fn test_static_narrator_mentions_score_and_rating() {
    let answers = complete_answers();
    let calc = calculate_health_metrics(&answers);
    let summary = SectionSummary::build(
        AnalysisCategory::Sleep,
        &HealthProfile::from_answers(&answers),
        &calc,
        80,
    );

    let text = StaticNarrator.generate(&summary).await.unwrap();

    assert!(text.starts_with("Sleep & Recovery: 80/100, rated Excellent."));
    assert!(text.contains("No concerns were flagged"));
}

#[tokio::test]
async fn test_static_narrator_includes_warnings() {
    let answers = recovery_risk_answers();
    let calc = calculate_health_metrics(&answers);
    let summary = SectionSummary::build(
        AnalysisCategory::Exercise,
        &HealthProfile::from_answers(&answers),
        &calc,
        0,
    );

    assert_eq!(summary.warnings.len(), 1);
    let text = StaticNarrator.generate(&summary).await.unwrap();
    assert!(text.contains("Insufficient Recovery"));
    assert!(text.contains("fixed sleep schedule"));
}

#[test]
fn test_prompt_lists_facts_concerns_and_advice() {
    let answers = recovery_risk_answers();
    let calc = calculate_health_metrics(&answers);
    let summary = SectionSummary::build(
        AnalysisCategory::Overall,
        &HealthProfile::from_answers(&answers),
        &calc,
        12,
    );
    let prompt = summary.to_prompt();

    assert!(prompt.contains("\"Overall Health\" section"));
    assert!(prompt.contains("Section score: 12/100 (Needs Attention)"));
    assert!(prompt.contains("Facts:\n- Exercise score"));
    assert!(prompt.contains("Concerns:\n- [Warning] Insufficient Recovery"));
    assert!(prompt.contains("Goals advice:"));
}

#[tokio::test]
async fn test_prompt_and_static_text_layout() {
    let summary = SectionSummary {
        category: AnalysisCategory::Sleep,
        title: "Sleep & Recovery".to_owned(),
        score: 80,
        facts: vec!["Sleep quality: Good".to_owned()],
        warnings: Vec::new(),
        goal_advice: Vec::new(),
    };

    assert_eq!(
        summary.to_prompt(),
        "Write short, encouraging health feedback for the \"Sleep & Recovery\" section.\n\
         Section score: 80/100 (Excellent).\n\
         Facts:\n\
         - Sleep quality: Good\n"
    );
    assert_eq!(
        StaticNarrator.generate(&summary).await.unwrap(),
        "Sleep & Recovery: 80/100, rated Excellent. Sleep quality: Good. \
         No concerns were flagged for this section."
    );
}

#[tokio::test]
async fn test_service_uses_injected_narrator() {
    init_test_logging();
    let service =
        AssessmentService::new(AppConfig::default()).with_narrator(Arc::new(EchoNarrator));
    let report = service.assess(&complete_answers()).unwrap();

    let text = service
        .narrate(&report, AnalysisCategory::Nutrition)
        .await
        .unwrap();
    assert!(text.contains("\"Nutrition\" section"));
    assert!(text.contains("Recommended intake"));
}

#[tokio::test]
async fn test_narrator_failure_is_propagated() {
    init_test_logging();
    let service =
        AssessmentService::new(lenient_config()).with_narrator(Arc::new(FailingNarrator));
    let report = service.assess(&AnswerRecord::new()).unwrap();

    let error = service
        .narrate(&report, AnalysisCategory::Overall)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert_eq!(error.http_status(), 502);
}
