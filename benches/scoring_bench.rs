// ABOUTME: Criterion benchmarks for the scoring and analytics pipelines
// ABOUTME: Measures readiness scoring, strength scores, and training log aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 meetprep contributors

//! Criterion benchmarks for the scoring and analytics pipelines.
//!
//! Measures the readiness calculator, the dashboard composite, the strength
//! score formulas, and training analytics aggregation over growing windows.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, NaiveDate, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use meetprep::analysis::progress::dashboard_readiness;
use meetprep::analysis::readiness::ReadinessCalculator;
use meetprep::analysis::strength::{
    calculate_dots, calculate_dots_approx, calculate_wilks, calculate_wilks_unclamped,
};
use meetprep::analysis::training_analytics::TrainingAnalyzer;
use meetprep::models::{
    CurrentStats, LiftAttempts, LiftType, MeetInfo, PowerliftingState, Sex, TrainingEntry,
};
use meetprep::state::StateContainer;
use meetprep::storage::MemoryStore;

/// Full-year window for the largest aggregation benchmark
const LARGE_WINDOW_DAYS: usize = 365;

fn example_state() -> PowerliftingState {
    let mut state = PowerliftingState {
        current_stats: CurrentStats {
            bodyweight: 85.0,
            squat_max: 180.0,
            bench_max: 120.0,
            deadlift_max: 220.0,
        },
        sex: Sex::Male,
        ..PowerliftingState::default()
    };
    state.meet_goals.squat = LiftAttempts {
        opener: 170.0,
        second: 180.0,
        third: 190.0,
        confidence: 8,
    };
    state.meet_goals.bench = LiftAttempts {
        opener: 112.5,
        second: 120.0,
        third: 125.0,
        confidence: 7,
    };
    state.meet_goals.deadlift = LiftAttempts {
        opener: 210.0,
        second: 222.5,
        third: 232.5,
        confidence: 9,
    };
    state.meet_info = MeetInfo {
        meet_date: NaiveDate::from_ymd_opt(2026, 11, 14),
        target_weight_class: 83.0,
        meet_name: "Benchmark Open".to_owned(),
        location: "Lab".to_owned(),
    };
    for item in state.equipment_checklist.iter_mut().take(8) {
        item.checked = true;
    }
    state
}

/// Generate a training history with index-driven variety across lifts and loads
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]
fn generate_training_history(count: usize) -> Vec<TrainingEntry> {
    let today = Utc::now().date_naive();
    (0..count)
        .map(|index| {
            let lift_type = match index % 3 {
                0 => LiftType::Squat,
                1 => LiftType::Bench,
                _ => LiftType::Deadlift,
            };
            let training_date = today - Duration::days((index / 2) as i64);
            let weight = 80.0 + ((index * 7) % 120) as f64;
            let sets = 3 + (index % 3) as u32;
            let reps = 1 + (index * 5 % 8) as u32;
            let entry = TrainingEntry::new(lift_type, training_date, sets, reps, weight);
            if index % 3 == 0 {
                entry
            } else {
                entry.with_rpe(6.0 + ((index * 3) % 9) as f64 / 2.0)
            }
        })
        .collect()
}

/// Benchmark the canonical readiness calculator and the dashboard composite
fn bench_readiness_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("readiness");

    let state = example_state();

    group.bench_function("full_readiness_score", |b| {
        b.iter(|| ReadinessCalculator::calculate_readiness_score(black_box(&state)));
    });

    group.bench_function("dashboard_composite", |b| {
        b.iter(|| {
            dashboard_readiness(
                black_box(&state.current_stats),
                black_box(&state.meet_goals),
                black_box(&state.meet_info),
                black_box(&state.equipment_checklist),
            )
        });
    });

    group.finish();
}

/// Benchmark the four strength score formulas on one set of inputs
fn bench_strength_scores(c: &mut Criterion) {
    let mut group = c.benchmark_group("strength_scores");

    let (bodyweight, total) = (85.0, 520.0);

    group.bench_function("wilks", |b| {
        b.iter(|| calculate_wilks(black_box(bodyweight), black_box(total), Sex::Male));
    });
    group.bench_function("wilks_unclamped", |b| {
        b.iter(|| calculate_wilks_unclamped(black_box(bodyweight), black_box(total), Sex::Male));
    });
    group.bench_function("dots", |b| {
        b.iter(|| calculate_dots(black_box(bodyweight), black_box(total), Sex::Male));
    });
    group.bench_function("dots_approx", |b| {
        b.iter(|| calculate_dots_approx(black_box(bodyweight), black_box(total), Sex::Male));
    });

    group.finish();
}

/// Benchmark analytics aggregation over growing history windows
#[allow(clippy::cast_possible_truncation)]
fn bench_analytics_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("analytics");

    let stats = example_state().current_stats;
    let datasets = [
        (30, generate_training_history(30)),
        (90, generate_training_history(90)),
        (
            LARGE_WINDOW_DAYS,
            generate_training_history(LARGE_WINDOW_DAYS),
        ),
    ];

    for (count, entries) in datasets {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("aggregate", count),
            &entries,
            |b, entries| {
                let analyzer = TrainingAnalyzer::new(stats);
                b.iter(|| analyzer.aggregate(black_box(entries)));
            },
        );
    }

    group.finish();
}

/// Benchmark the full summary pipeline through the state container
fn bench_summary_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary_pipeline");
    group.sample_size(50);

    let mut container = StateContainer::load_or_default(MemoryStore::new());
    let state = example_state();
    let _ = container.set_stats(state.current_stats);
    let _ = container.set_meet_info(state.meet_info.clone());
    let today = Utc::now().date_naive();

    group.bench_function("state_summary", |b| {
        b.iter(|| container.summary(black_box(today)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_readiness_scoring,
    bench_strength_scores,
    bench_analytics_aggregation,
    bench_summary_pipeline,
);
criterion_main!(benches);
