// ABOUTME: Command implementations for vitalis-cli
// ABOUTME: Loads answer files and drives the questionnaire, assessment service, and advice lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::display;
use crate::OutputFormat;
use anyhow::{anyhow, Result};
use std::path::Path;
use tokio::fs;
use tracing::info;
use vitalis::assessment::AssessmentService;
use vitalis::config::AppConfig;
use vitalis::errors::{AppError, AppResult};
use vitalis::intelligence::{get_health_goal_advice, AnalysisCategory};
use vitalis::models::AnswerRecord;
use vitalis::questionnaire::Questionnaire;

/// Sections narrated by `assess --narrate`, in report order
const NARRATED_SECTIONS: [AnalysisCategory; 6] = [
    AnalysisCategory::Overall,
    AnalysisCategory::BodyComposition,
    AnalysisCategory::Exercise,
    AnalysisCategory::Nutrition,
    AnalysisCategory::Sleep,
    AnalysisCategory::MentalHealth,
];

/// Read a JSON answer file
async fn load_answers(path: &Path) -> AppResult<AnswerRecord> {
    let raw = fs::read_to_string(path).await.map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}: {e}", path.display())).with_source(e)
    })?;
    let answers: AnswerRecord = serde_json::from_str(&raw)?;
    info!(path = %path.display(), answers = answers.len(), "Loaded answer file");
    Ok(answers)
}

/// Print the questionnaire, optionally filtered by visibility
pub async fn questions(answers: Option<&Path>) -> Result<()> {
    let questionnaire = Questionnaire::standard();
    let visible = match answers {
        Some(path) => {
            let answers = load_answers(path).await?;
            questionnaire.visible_questions(&answers)
        }
        None => questionnaire.questions().iter().collect(),
    };
    display::print_questions(&visible);
    Ok(())
}

/// Validate an answer file
pub async fn validate(path: &Path) -> Result<()> {
    let answers = load_answers(path).await?;
    let report = Questionnaire::standard().validation_report(&answers);
    display::print_validation(&report);
    if report.is_clean() {
        Ok(())
    } else {
        Err(anyhow!("{} validation issue(s) found", report.issues.len()))
    }
}

/// Run an assessment and print it
pub async fn assess(
    config: AppConfig,
    path: &Path,
    format: OutputFormat,
    narrate: bool,
) -> Result<()> {
    let answers = load_answers(path).await?;
    let service = AssessmentService::new(config);
    let report = service.assess(&answers)?;

    let mut narratives = Vec::new();
    if narrate {
        for category in NARRATED_SECTIONS {
            narratives.push((category, service.narrate(&report, category).await?));
        }
    }

    match format {
        OutputFormat::Json => {
            let mut value = serde_json::to_value(&report)?;
            if narrate {
                value["narratives"] = narratives
                    .iter()
                    .map(|(category, text)| (category.id().to_owned(), text.clone().into()))
                    .collect::<serde_json::Map<_, _>>()
                    .into();
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Pretty => {
            display::print_report(&report);
            display::print_narratives(&narratives);
        }
    }
    Ok(())
}

/// Print advice for each goal id
pub fn advice(goals: &[String]) {
    for (goal, advice) in goals.iter().zip(get_health_goal_advice(goals)) {
        println!("{goal}: {advice}");
    }
}
