// ABOUTME: Output formatting helpers for the meetprep CLI
// ABOUTME: Renders readiness, dashboard, score, and analytics reports as aligned text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 meetprep contributors

use meetprep::analysis::progress::lift_goal_progress;
use meetprep::analysis::readiness::ReadinessStatus;
use meetprep::analysis::strength::StrengthLevel;
use meetprep::analysis::training_analytics::TrainingAnalytics;
use meetprep::models::{LiftAttempts, LiftType, PowerliftingState, ReadinessScore};
use meetprep::state::StateSummary;
use meetprep::units::{format_weight, WeightUnit};

/// Print a section title with an underline
pub fn header(title: &str) {
    println!("{title}");
    println!("{}", "-".repeat(title.len()));
}

/// Print one aligned label/value row
pub fn row(label: &str, value: &str) {
    println!("  {label:<16} {value}");
}

/// Shorten a UUID for display
#[must_use]
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Print one lift's planned attempts
pub fn attempts_line(lift: LiftType, attempts: &LiftAttempts, unit: WeightUnit) {
    println!(
        "  {:<10} {} / {} / {}  (confidence {}/10)",
        lift.to_string(),
        format_weight(attempts.opener, unit),
        format_weight(attempts.second, unit),
        format_weight(attempts.third, unit),
        attempts.confidence
    );
}

/// Print a countdown line for the meet date
pub fn days_until_line(days: i64) {
    if days > 0 {
        println!("  {days} days until the meet");
    } else if days == 0 {
        println!("  Meet day!");
    } else {
        println!("  Meet was {} days ago", -days);
    }
}

/// Render the canonical readiness score and its component breakdown
pub fn render_readiness(score: &ReadinessScore, status: ReadinessStatus) {
    header("Meet Readiness");
    println!("  Total: {:.2} / 100 ({status})", score.total);
    println!("  {}", status.description());
    println!();

    let breakdown = &score.breakdown;
    row("Squat progress", &format!("{:.2}", breakdown.squat_progress));
    row("Bench progress", &format!("{:.2}", breakdown.bench_progress));
    row(
        "Deadlift progress",
        &format!("{:.2}", breakdown.deadlift_progress),
    );
    row(
        "Weight management",
        &format!("{:.2}", breakdown.weight_management),
    );
    row(
        "Equipment",
        &format!("{:.2}", breakdown.equipment_completion),
    );
}

/// Render the dashboard progress view
pub fn render_dashboard(state: &PowerliftingState, summary: &StateSummary) {
    header("Dashboard");
    println!("  Overall progress: {}%", summary.dashboard_readiness);
    if let Some(days) = summary.days_until_meet {
        days_until_line(days);
    }
    println!();

    for lift in LiftType::ALL {
        let progress = lift_goal_progress(
            state.current_stats.max_for(lift),
            state.meet_goals.attempts_for(lift).third,
        );
        row(&format!("{lift} goal"), &format!("{progress:.0}%"));
    }
    row(
        "Equipment",
        &format!("{}/{}", summary.equipment_checked, summary.equipment_total),
    );

    let unit = state.unit_preference;
    row("Total", &format_weight(summary.total, unit));
    row("Goal total", &format_weight(summary.goal_total, unit));
    row("Wilks", &format!("{:.2}", summary.wilks));
    row("DOTS", &format!("{:.2}", summary.dots));
    row("Readiness", &format!("{:.2}", summary.readiness));
}

/// Render the strength score view
pub fn render_scores(total: f64, wilks: f64, dots: f64, level: StrengthLevel, unit: WeightUnit) {
    header("Strength Scores");
    row("Total", &format_weight(total, unit));
    row("Wilks", &format!("{wilks:.2}"));
    row("DOTS", &format!("{dots:.2}"));
    row("Level", &level.to_string());
}

/// Render the full training analytics report
pub fn render_analytics(analytics: &TrainingAnalytics, days: u32) {
    header(&format!("Training Analytics (last {days} days)"));

    let frequency = &analytics.frequency;
    println!("  Sessions: {} total", frequency.total);
    for lift in LiftType::ALL {
        println!(
            "    {:<10} {}",
            lift.to_string(),
            frequency.per_lift.get(lift)
        );
    }

    println!();
    println!("  Personal records (by estimated 1RM):");
    for lift in LiftType::ALL {
        let line = analytics.prs_by_estimated_1rm.get(lift).as_ref().map_or_else(
            || "no sessions".to_owned(),
            |pr| {
                format!(
                    "{:.1} kg (est. 1RM {:.1} kg, {})",
                    pr.weight, pr.estimated_1rm, pr.date
                )
            },
        );
        println!("    {:<10} {line}", lift.to_string());
    }

    println!();
    let intensity = &analytics.intensity;
    println!("  Average RPE: {:.2}", intensity.average_rpe);
    for lift in LiftType::ALL {
        println!(
            "    {:<10} RPE {:.2}, {:.1}% of max",
            lift.to_string(),
            intensity.rpe_per_lift.get(lift),
            intensity.percent_of_max_per_lift.get(lift)
        );
    }

    if !analytics.weekly_volume.is_empty() {
        println!();
        println!("  Weekly volume:");
        for week in &analytics.weekly_volume {
            println!("    week of {}: {:.0} kg", week.week_start, week.total);
        }
    }

    println!();
    let distribution = &analytics.lift_distribution;
    println!(
        "  Lift distribution: squat {:.1}%, bench {:.1}%, deadlift {:.1}%",
        distribution.squat, distribution.bench, distribution.deadlift
    );
}
