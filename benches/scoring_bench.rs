// ABOUTME: Criterion benchmarks for the health metrics and scoring pipeline
// ABOUTME: Measures profile conversion, full metrics, overall score, pillars, and rule evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the scoring engine.
//!
//! Answer batches are generated deterministically so runs are comparable.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vitalis::assessment::AssessmentService;
use vitalis::config::AppConfig;
use vitalis::intelligence::{
    calculate_overall_score, get_contextual_analysis, AnalysisCategory, EngineConfig,
    HealthEngine, HealthProfile,
};
use vitalis::models::AnswerRecord;

const ACTIVITY: [&str; 5] = ["sedentary", "light", "moderate", "active", "veryActive"];
const QUALITY: [&str; 4] = ["poor", "fair", "good", "excellent"];
const SLEEP: [&str; 4] = ["under-5", "5-7", "7-9", "over-9"];
const GOALS: [&str; 4] = ["weight-loss", "muscle-gain", "overall-health", "better-sleep"];

/// Generate a varied batch of answer records
#[allow(clippy::cast_precision_loss)]
fn generate_answers(count: usize) -> Vec<AnswerRecord> {
    (0..count)
        .map(|index| {
            AnswerRecord::new()
                .with("age", 20.0 + (index % 50) as f64)
                .with("gender", if index % 2 == 0 { "male" } else { "female" })
                .with("height", 150.0 + ((index * 7) % 50) as f64)
                .with("weight", 45.0 + ((index * 13) % 70) as f64)
                .with("goals", vec![GOALS[index % GOALS.len()]])
                .with("activityLevel", ACTIVITY[index % ACTIVITY.len()])
                .with("exerciseIntensity", "vigorous")
                .with("exerciseType", vec!["cardio", "strength"])
                .with("diet", "average")
                .with("sleepDuration", SLEEP[index % SLEEP.len()])
                .with("sleepQuality", QUALITY[(index / 2) % QUALITY.len()])
                .with("recovery", QUALITY[(index / 3) % QUALITY.len()])
                .with("stress", "moderate")
        })
        .collect()
}

fn bench_profile_conversion(c: &mut Criterion) {
    let answers = generate_answers(1);
    c.bench_function("profile_from_answers", |b| {
        b.iter(|| HealthProfile::from_answers(black_box(&answers[0])));
    });
}

#[allow(clippy::cast_possible_truncation)]
fn bench_health_metrics(c: &mut Criterion) {
    let engine = HealthEngine::new(EngineConfig::default());
    let mut group = c.benchmark_group("health_metrics");

    for count in [1_usize, 100, 1000] {
        let batch = generate_answers(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &batch, |b, batch| {
            b.iter(|| {
                batch
                    .iter()
                    .map(|answers| engine.calculate_health_metrics(black_box(answers)))
                    .count()
            });
        });
    }
    group.finish();
}

fn bench_overall_score(c: &mut Criterion) {
    let engine = HealthEngine::new(EngineConfig::default());
    let calculations: Vec<_> = generate_answers(100)
        .iter()
        .map(|answers| engine.calculate_health_metrics(answers))
        .collect();

    c.bench_function("overall_score", |b| {
        b.iter(|| {
            calculations
                .iter()
                .map(|calc| calculate_overall_score(black_box(calc)))
                .sum::<u32>()
        });
    });
}

fn bench_pillars_and_rules(c: &mut Criterion) {
    let engine = HealthEngine::new(EngineConfig::default());
    let answers = generate_answers(1).remove(0);
    let calc = engine.calculate_health_metrics(&answers);

    c.bench_function("health_pillars", |b| {
        b.iter(|| engine.calculate_health_pillars(black_box(&answers), black_box(&calc)));
    });
    c.bench_function("contextual_rules_overall", |b| {
        b.iter(|| {
            get_contextual_analysis(
                AnalysisCategory::Overall,
                black_box(&answers),
                Some(black_box(&calc)),
            )
        });
    });
}

fn bench_full_assessment(c: &mut Criterion) {
    let service = AssessmentService::new(AppConfig {
        strict_validation: false,
        ..AppConfig::default()
    });
    let answers = generate_answers(1).remove(0);

    c.bench_function("full_assessment", |b| {
        b.iter(|| service.assess(black_box(&answers)));
    });
}

criterion_group!(
    benches,
    bench_profile_conversion,
    bench_health_metrics,
    bench_overall_score,
    bench_pillars_and_rules,
    bench_full_assessment,
);
criterion_main!(benches);
