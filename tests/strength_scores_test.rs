// ABOUTME: Integration tests for Wilks and DOTS strength score calculations
// ABOUTME: Covers zero guards, the bodyweight clamp, variant divergence, and level thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 meetprep contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use meetprep::analysis::strength::{
    calculate_dots, calculate_dots_approx, calculate_wilks, calculate_wilks_unclamped,
    StrengthLevel,
};
use meetprep::models::Sex;

#[test]
fn test_wilks_male_reference_value() {
    let score = calculate_wilks(80.0, 500.0, Sex::Male);
    assert!((score - 341.35).abs() < 0.01, "got {score}");
}

#[test]
fn test_wilks_female_reference_value() {
    let score = calculate_wilks(60.0, 300.0, Sex::Female);
    assert!((score - 334.47).abs() < 0.01, "got {score}");
}

#[test]
fn test_dots_male_reference_value() {
    let score = calculate_dots(100.0, 700.0, Sex::Male);
    assert!((score - 430.86).abs() < 0.01, "got {score}");
}

#[test]
fn test_dots_female_reference_value() {
    let score = calculate_dots(60.0, 300.0, Sex::Female);
    assert!((score - 332.56).abs() < 0.01, "got {score}");
}

#[test]
fn test_zero_and_negative_inputs_return_zero() {
    assert!(calculate_wilks(0.0, 500.0, Sex::Male).abs() < f64::EPSILON);
    assert!(calculate_wilks(80.0, 0.0, Sex::Male).abs() < f64::EPSILON);
    assert!(calculate_wilks(-5.0, 500.0, Sex::Female).abs() < f64::EPSILON);
    assert!(calculate_wilks_unclamped(0.0, 500.0, Sex::Male).abs() < f64::EPSILON);
    assert!(calculate_dots(80.0, -1.0, Sex::Male).abs() < f64::EPSILON);
    assert!(calculate_dots_approx(0.0, 500.0, Sex::Female).abs() < f64::EPSILON);
}

#[test]
fn test_wilks_clamps_heavy_bodyweights_to_the_cap() {
    // Above the cap every bodyweight evaluates the polynomial at the cap
    let at_cap = calculate_wilks(201.9, 600.0, Sex::Male);
    let above_cap = calculate_wilks(250.0, 600.0, Sex::Male);
    assert!((at_cap - above_cap).abs() < f64::EPSILON);

    let female_at_cap = calculate_wilks(154.53, 400.0, Sex::Female);
    let female_above = calculate_wilks(180.0, 400.0, Sex::Female);
    assert!((female_at_cap - female_above).abs() < f64::EPSILON);
}

#[test]
fn test_unclamped_wilks_diverges_above_the_cap() {
    let clamped = calculate_wilks(250.0, 600.0, Sex::Male);
    let unclamped = calculate_wilks_unclamped(250.0, 600.0, Sex::Male);
    assert!(
        (unclamped - clamped).abs() > 10.0,
        "clamped {clamped}, unclamped {unclamped}"
    );
}

#[test]
fn test_both_wilks_variants_agree_below_the_cap() {
    let clamped = calculate_wilks(80.0, 500.0, Sex::Male);
    let unclamped = calculate_wilks_unclamped(80.0, 500.0, Sex::Male);
    // The unclamped variant rounds to 2 decimals; below the cap that is the
    // only difference between them
    assert!((clamped - unclamped).abs() < 0.01);
}

#[test]
fn test_unclamped_wilks_is_rounded_to_two_decimals() {
    let score = calculate_wilks_unclamped(80.0, 500.0, Sex::Male);
    let rescaled = score * 100.0;
    assert!((rescaled - rescaled.round()).abs() < 1e-9, "got {score}");
}

#[test]
fn test_dots_polynomial_and_approximation_diverge() {
    // The approximation runs on a different scale than the polynomial; both
    // are kept as distinct surfaces
    let polynomial = calculate_dots(100.0, 700.0, Sex::Male);
    let approximate = calculate_dots_approx(100.0, 700.0, Sex::Male);
    assert!((approximate - 10.465).abs() < 0.01, "got {approximate}");
    assert!((polynomial - approximate).abs() > 100.0);
}

#[test]
fn test_strength_level_thresholds_are_inclusive() {
    assert_eq!(StrengthLevel::from_wilks(500.0), StrengthLevel::Elite);
    assert_eq!(StrengthLevel::from_wilks(499.99), StrengthLevel::Advanced);
    assert_eq!(StrengthLevel::from_wilks(400.0), StrengthLevel::Advanced);
    assert_eq!(StrengthLevel::from_wilks(300.0), StrengthLevel::Intermediate);
    assert_eq!(StrengthLevel::from_wilks(200.0), StrengthLevel::Novice);
    assert_eq!(StrengthLevel::from_wilks(199.99), StrengthLevel::Beginner);
    assert_eq!(StrengthLevel::from_wilks(0.0), StrengthLevel::Beginner);
}

#[test]
fn test_score_functions_are_idempotent() {
    let first = calculate_wilks(93.4, 612.5, Sex::Male);
    let second = calculate_wilks(93.4, 612.5, Sex::Male);
    assert_eq!(first.to_bits(), second.to_bits());

    let first = calculate_dots(71.2, 455.0, Sex::Female);
    let second = calculate_dots(71.2, 455.0, Sex::Female);
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_heavier_total_scores_higher_at_same_bodyweight() {
    let lighter = calculate_wilks(90.0, 500.0, Sex::Male);
    let heavier = calculate_wilks(90.0, 600.0, Sex::Male);
    assert!(heavier > lighter);

    let lighter = calculate_dots(90.0, 500.0, Sex::Male);
    let heavier = calculate_dots(90.0, 600.0, Sex::Male);
    assert!(heavier > lighter);
}
