// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for vitalis-cli
// ABOUTME: Human readable rendering of questions, validation issues, and assessment reports

use vitalis::assessment::AssessmentReport;
use vitalis::errors::ValidationReport;
use vitalis::intelligence::AnalysisCategory;
use vitalis::questionnaire::{Question, QuestionKind};

fn format_optional(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(|| "-".to_owned(), |v| format!("{v:.0} {unit}"))
}

/// Print questions grouped in order
pub fn print_questions(questions: &[&Question]) {
    for question in questions {
        let required = if question.required { "" } else { " (optional)" };
        println!(
            "[{}] {}: {}{required}",
            question.section, question.id, question.prompt
        );
        match &question.kind {
            QuestionKind::Numeric { min, max, unit } => {
                println!("    number {min}-{max} {unit}");
            }
            QuestionKind::SingleSelect { options } | QuestionKind::MultiSelect { options } => {
                let kind = if matches!(question.kind, QuestionKind::MultiSelect { .. }) {
                    "any of"
                } else {
                    "one of"
                };
                let ids: Vec<&str> = options.iter().map(|option| option.id).collect();
                println!("    {kind}: {}", ids.join(", "));
            }
        }
    }
}

/// Print a validation report
pub fn print_validation(report: &ValidationReport) {
    if report.is_clean() {
        println!("Answers are valid");
        return;
    }
    println!("{} issue(s):", report.issues.len());
    for issue in &report.issues {
        println!("  - {issue}");
    }
}

/// Print an assessment report
pub fn print_report(report: &AssessmentReport) {
    let calc = &report.health_calculations;

    println!("\nHealth Assessment {}", report.id);
    println!("{}", "=".repeat(60));
    println!("Overall score: {}/100", report.score);
    println!("Pillar composite: {}/100", report.pillar_composite);

    println!("\nBody composition");
    match (calc.bmi, calc.bmi_category) {
        (Some(bmi), Some(category)) => println!("   BMI: {bmi:.1} ({category})"),
        _ => println!("   BMI: -"),
    }
    if let Some(fat) = calc.body_fat {
        let source = if calc.is_body_fat_estimated {
            "estimated"
        } else {
            "reported"
        };
        println!("   Body fat: {fat:.1}% ({source})");
    }
    if let (Some(low), Some(high)) = (calc.ideal_weight_low, calc.ideal_weight_high) {
        println!("   Healthy weight: {low:.0}-{high:.0} kg");
    }

    println!("\nEnergy and macros");
    println!("   BMR: {}", format_optional(calc.bmr, "kcal"));
    println!("   TDEE: {}", format_optional(calc.tdee, "kcal"));
    println!(
        "   Target: {}",
        format_optional(calc.recommended_calories, "kcal")
    );
    println!(
        "   Protein {} | Carbs {} | Fat {}",
        format_optional(calc.protein_grams, "g"),
        format_optional(calc.carb_grams, "g"),
        format_optional(calc.fat_grams, "g")
    );

    println!("\nPillars");
    for (pillar, score) in report.pillars.iter() {
        println!(
            "   {:<16} {:>2}/30  {:<15} {}",
            pillar.id(),
            score.score,
            score.label,
            score.recommendations.first().map_or("", String::as_str)
        );
    }

    if !report.warnings.is_empty() {
        println!("\nWarnings");
        for warning in &report.warnings {
            println!("   [{:?}] {}: {}", warning.severity, warning.title, warning.message);
            for tip in &warning.recommendations {
                println!("      - {tip}");
            }
        }
    }

    if !report.goal_advice.is_empty() {
        println!("\nGoal advice");
        for advice in &report.goal_advice {
            println!("   - {advice}");
        }
    }
}

/// Print narrative feedback per section
pub fn print_narratives(narratives: &[(AnalysisCategory, String)]) {
    if narratives.is_empty() {
        return;
    }
    println!("\nFeedback");
    for (category, text) in narratives {
        println!("   {}: {text}", category.title());
    }
}
