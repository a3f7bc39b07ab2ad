// ABOUTME: Integration tests for training log aggregation
// ABOUTME: Covers both PR notions, RPE and intensity averages, volume series, and distribution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 meetprep contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use meetprep::analysis::training_analytics::TrainingAnalyzer;
use meetprep::models::{CurrentStats, LiftType, TrainingEntry};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn session(lift: LiftType, day: &str, sets: u32, reps: u32, weight: f64) -> TrainingEntry {
    TrainingEntry::new(lift, date(day), sets, reps, weight)
}

fn stats() -> CurrentStats {
    CurrentStats {
        bodyweight: 80.0,
        squat_max: 140.0,
        bench_max: 100.0,
        deadlift_max: 180.0,
    }
}

#[test]
fn test_pr_by_estimated_1rm_prefers_the_highest_estimate() {
    let entries = vec![
        session(LiftType::Squat, "2026-07-01", 3, 5, 140.0),
        session(LiftType::Squat, "2026-07-08", 1, 3, 150.0),
        session(LiftType::Squat, "2026-07-15", 2, 8, 120.0),
    ];

    let prs = TrainingAnalyzer::personal_records(&entries);
    let pr = prs.squat.unwrap();
    assert!((pr.weight - 150.0).abs() < 1e-9);
    // Epley: 150 * (1 + 3/30)
    assert!((pr.estimated_1rm - 165.0).abs() < 1e-9);
    assert_eq!(pr.date, date("2026-07-08"));
    assert!(prs.bench.is_none());
    assert!(prs.deadlift.is_none());
}

#[test]
fn test_pr_tie_keeps_the_earlier_entry() {
    let entries = vec![
        session(LiftType::Bench, "2026-07-01", 1, 5, 100.0),
        session(LiftType::Bench, "2026-07-10", 1, 5, 100.0),
    ];

    let prs = TrainingAnalyzer::personal_records(&entries);
    assert_eq!(prs.bench.unwrap().date, date("2026-07-01"));
}

#[test]
fn test_raw_weight_pr_and_estimated_pr_can_disagree() {
    // A heavy single wins on raw weight; a 5-rep set at 140 wins on Epley
    let entries = vec![
        session(LiftType::Squat, "2026-07-01", 3, 5, 140.0),
        session(LiftType::Squat, "2026-07-08", 1, 1, 155.0),
    ];

    let raw = TrainingAnalyzer::raw_weight_prs(&entries);
    assert!((raw.squat - 155.0).abs() < 1e-9);

    let estimated = TrainingAnalyzer::personal_records(&entries);
    assert!((estimated.squat.unwrap().weight - 140.0).abs() < 1e-9);
}

#[test]
fn test_frequency_counts_sessions_per_lift() {
    let entries = vec![
        session(LiftType::Squat, "2026-07-01", 3, 5, 100.0),
        session(LiftType::Squat, "2026-07-03", 3, 5, 105.0),
        session(LiftType::Squat, "2026-07-05", 3, 5, 110.0),
        session(LiftType::Bench, "2026-07-01", 4, 6, 80.0),
        session(LiftType::Bench, "2026-07-04", 4, 6, 82.5),
        session(LiftType::Deadlift, "2026-07-02", 2, 3, 170.0),
    ];

    let frequency = TrainingAnalyzer::frequency(&entries);
    assert_eq!(frequency.per_lift.squat, 3);
    assert_eq!(frequency.per_lift.bench, 2);
    assert_eq!(frequency.per_lift.deadlift, 1);
    assert_eq!(frequency.total, 6);
}

#[test]
fn test_missing_rpe_counts_as_zero_in_averages() {
    let entries = vec![
        session(LiftType::Bench, "2026-07-01", 3, 5, 80.0).with_rpe(8.0),
        session(LiftType::Bench, "2026-07-03", 3, 5, 80.0),
    ];

    let analyzer = TrainingAnalyzer::new(stats());
    let intensity = analyzer.intensity(&entries);
    assert!((intensity.average_rpe - 4.0).abs() < 1e-9);
    assert!((intensity.rpe_per_lift.bench - 4.0).abs() < 1e-9);
    // No squat sessions at all averages to zero, not NaN
    assert!(intensity.rpe_per_lift.squat.abs() < f64::EPSILON);
}

#[test]
fn test_percent_of_max_averages_against_current_stats() {
    let entries = vec![
        session(LiftType::Bench, "2026-07-01", 1, 1, 75.0),
        session(LiftType::Bench, "2026-07-03", 1, 1, 85.0),
    ];

    let analyzer = TrainingAnalyzer::new(stats());
    let intensity = analyzer.intensity(&entries);
    // (75% + 85%) / 2 against the 100 kg bench max
    assert!((intensity.percent_of_max_per_lift.bench - 80.0).abs() < 1e-9);
}

#[test]
fn test_percent_of_max_with_zero_max_divides_by_one() {
    let entries = vec![session(LiftType::Squat, "2026-07-01", 1, 1, 100.0)];

    let analyzer = TrainingAnalyzer::new(CurrentStats::default());
    let intensity = analyzer.intensity(&entries);
    // The zero-max guard substitutes 1 as the divisor
    assert!((intensity.percent_of_max_per_lift.squat - 10000.0).abs() < 1e-9);
}

#[test]
fn test_volume_progression_groups_by_date_and_zero_fills() {
    let entries = vec![
        session(LiftType::Squat, "2026-07-01", 2, 5, 100.0),
        session(LiftType::Squat, "2026-07-01", 1, 5, 100.0),
        session(LiftType::Bench, "2026-07-01", 3, 8, 60.0),
        session(LiftType::Squat, "2026-07-03", 5, 5, 110.0),
    ];

    let progression = TrainingAnalyzer::volume_progression(&entries);
    assert_eq!(progression.len(), 2);

    let first = &progression[0];
    assert_eq!(first.date, date("2026-07-01"));
    assert!((first.volume.squat - 1500.0).abs() < 1e-9);
    assert!((first.volume.bench - 1440.0).abs() < 1e-9);
    assert!(first.volume.deadlift.abs() < f64::EPSILON);

    let second = &progression[1];
    assert_eq!(second.date, date("2026-07-03"));
    assert!((second.volume.squat - 2750.0).abs() < 1e-9);
}

#[test]
fn test_weekly_volume_buckets_by_monday() {
    // 2026-08-03 and 2026-08-10 are Mondays
    let entries = vec![
        session(LiftType::Squat, "2026-08-04", 1, 1, 100.0),
        session(LiftType::Deadlift, "2026-08-09", 1, 1, 200.0),
        session(LiftType::Squat, "2026-08-10", 1, 1, 120.0),
    ];

    let weekly = TrainingAnalyzer::weekly_volume(&entries);
    assert_eq!(weekly.len(), 2);

    assert_eq!(weekly[0].week_start, date("2026-08-03"));
    assert!((weekly[0].total - 300.0).abs() < 1e-9);
    assert!((weekly[0].volume.squat - 100.0).abs() < 1e-9);
    assert!((weekly[0].volume.deadlift - 200.0).abs() < 1e-9);

    assert_eq!(weekly[1].week_start, date("2026-08-10"));
    assert!((weekly[1].total - 120.0).abs() < 1e-9);
}

#[test]
fn test_lift_distribution_shares_the_current_total() {
    let analyzer = TrainingAnalyzer::new(stats());
    let distribution = analyzer.lift_distribution();
    assert!((distribution.squat - 140.0 / 420.0 * 100.0).abs() < 1e-9);
    assert!((distribution.bench - 100.0 / 420.0 * 100.0).abs() < 1e-9);
    assert!((distribution.deadlift - 180.0 / 420.0 * 100.0).abs() < 1e-9);

    let sum = distribution.squat + distribution.bench + distribution.deadlift;
    assert!((sum - 100.0).abs() < 1e-9);
}

#[test]
fn test_lift_distribution_with_zero_stats_is_all_zero() {
    let analyzer = TrainingAnalyzer::new(CurrentStats::default());
    let distribution = analyzer.lift_distribution();
    assert!(distribution.squat.abs() < f64::EPSILON);
    assert!(distribution.bench.abs() < f64::EPSILON);
    assert!(distribution.deadlift.abs() < f64::EPSILON);
}

#[test]
fn test_aggregate_over_no_entries_is_empty_but_total() {
    let analyzer = TrainingAnalyzer::new(stats());
    let analytics = analyzer.aggregate(&[]);

    assert_eq!(analytics.frequency.total, 0);
    assert!(analytics.prs_by_estimated_1rm.squat.is_none());
    assert!(analytics.prs_by_raw_weight.deadlift.abs() < f64::EPSILON);
    assert!(analytics.intensity.average_rpe.abs() < f64::EPSILON);
    assert!(analytics.volume_progression.is_empty());
    assert!(analytics.weekly_volume.is_empty());
    // Distribution reads the stats snapshot, not the entries
    assert!(analytics.lift_distribution.squat > 0.0);
}

#[test]
fn test_aggregate_composes_all_sections() {
    let entries = vec![
        session(LiftType::Squat, "2026-07-01", 3, 5, 100.0).with_rpe(7.5),
        session(LiftType::Bench, "2026-07-02", 3, 5, 80.0).with_rpe(8.0),
        session(LiftType::Deadlift, "2026-07-03", 2, 3, 170.0),
    ];

    let analyzer = TrainingAnalyzer::new(stats());
    let analytics = analyzer.aggregate(&entries);

    assert_eq!(analytics.frequency.total, 3);
    assert!(analytics.prs_by_estimated_1rm.squat.is_some());
    assert!(analytics.prs_by_estimated_1rm.bench.is_some());
    assert!(analytics.prs_by_estimated_1rm.deadlift.is_some());
    assert_eq!(analytics.volume_progression.len(), 3);
    // All three sessions land in the same calendar week
    assert_eq!(analytics.weekly_volume.len(), 1);
    // (7.5 + 8.0 + 0.0) / 3
    assert!((analytics.intensity.average_rpe - 15.5 / 3.0).abs() < 1e-9);
}
