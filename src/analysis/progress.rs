// ABOUTME: Dashboard progress: the alternate 80/15/5 readiness aggregate and lift-card progress
// ABOUTME: Compares summed totals against goal totals, unlike the per-lift readiness scorer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 meetprep contributors

//! # Dashboard Progress
//!
//! The dashboard's coarser readiness aggregate. Unlike the readiness scorer it
//! compares the summed current total against the summed goal total, ignores
//! attempt confidence, weighs components 80/15/5 and returns an integer. The
//! per-lift progress here caps at 100%, not the scorer's 120%. Both metrics
//! are displayed side by side and stay separate.

use crate::constants::dashboard;
use crate::models::{CurrentStats, EquipmentItem, MeetGoals, MeetInfo};

/// Dashboard readiness: 80% lift progress, 15% bodyweight, 5% equipment
///
/// Returns a whole-number percentage 0-100.
#[must_use]
pub fn dashboard_readiness(
    stats: &CurrentStats,
    goals: &MeetGoals,
    meet: &MeetInfo,
    checklist: &[EquipmentItem],
) -> u8 {
    let lift = lift_total_progress(stats, goals);
    let weight = bodyweight_progress(stats.bodyweight, meet.target_weight_class);
    let equipment = equipment_completion_percent(checklist);

    let score = lift.mul_add(
        dashboard::LIFT_WEIGHT,
        weight.mul_add(
            dashboard::BODYWEIGHT_WEIGHT,
            equipment * dashboard::EQUIPMENT_WEIGHT,
        ),
    );
    score.round() as u8
}

/// Percent of the goal total currently achieved, capped at 100
fn lift_total_progress(stats: &CurrentStats, goals: &MeetGoals) -> f64 {
    let goal_total = goals.goal_total();
    if goal_total > 0.0 {
        (stats.total() / goal_total * 100.0).min(100.0)
    } else {
        0.0
    }
}

/// Bodyweight progress toward making the target class
///
/// At or under the class scores 100; over it, the overshoot as a fraction of
/// the class is deducted, floored at 0.
fn bodyweight_progress(bodyweight: f64, target_class: f64) -> f64 {
    if bodyweight <= target_class {
        100.0
    } else {
        (100.0 - (bodyweight - target_class) / target_class * 100.0).max(0.0)
    }
}

/// Equipment checklist completion percent, 0 for an empty list
#[must_use]
pub fn equipment_completion_percent(checklist: &[EquipmentItem]) -> f64 {
    if checklist.is_empty() {
        return 0.0;
    }
    let checked = checklist.iter().filter(|item| item.checked).count();
    checked as f64 / checklist.len() as f64 * 100.0
}

/// Per-lift goal progress for lift cards: percent of the third attempt, capped at 100
///
/// Zero goal yields 0. This variant has no 120% headroom; the readiness
/// scorer's capped ratio is a different formula on purpose.
#[must_use]
pub fn lift_goal_progress(current_max: f64, goal_third: f64) -> f64 {
    if goal_third <= 0.0 {
        return 0.0;
    }
    (current_max / goal_third * 100.0).min(100.0)
}
