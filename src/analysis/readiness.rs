// ABOUTME: Competition readiness scoring with the canonical 70/20/10 weighting
// ABOUTME: Per-lift progress x confidence, bodyweight-vs-class band, checklist completion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 meetprep contributors

//! # Readiness Scoring
//!
//! The canonical meet-readiness percentage: up to 23.3 points per lift
//! (progress toward the third-attempt goal, capped at 120% and weighted by
//! attempt confidence), 20 points for bodyweight management, 10 for equipment
//! completion.
//!
//! Rounding is part of the contract: each breakdown part is rounded to 2
//! decimals independently, and the total is the clamped sum of those rounded
//! parts, re-rounded once to absorb float noise. Every path is total; zero
//! goals, zero confidence and empty checklists contribute 0 by guard.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use super::round2;
use crate::constants::{readiness, readiness_status};
use crate::models::{
    EquipmentItem, LiftAttempts, PowerliftingState, ReadinessBreakdown, ReadinessScore,
};

/// Calculator for the canonical readiness score
pub struct ReadinessCalculator;

impl ReadinessCalculator {
    /// Compute the readiness score for a state snapshot
    ///
    /// The total equals the clamped sum of the five rounded breakdown parts.
    #[must_use]
    pub fn calculate_readiness_score(state: &PowerliftingState) -> ReadinessScore {
        let stats = &state.current_stats;
        let goals = &state.meet_goals;

        let breakdown = ReadinessBreakdown {
            squat_progress: round2(Self::lift_score(stats.squat_max, &goals.squat)),
            bench_progress: round2(Self::lift_score(stats.bench_max, &goals.bench)),
            deadlift_progress: round2(Self::lift_score(stats.deadlift_max, &goals.deadlift)),
            weight_management: round2(Self::weight_score(
                stats.bodyweight,
                state.meet_info.target_weight_class,
            )),
            equipment_completion: round2(Self::equipment_score(&state.equipment_checklist)),
        };

        let sum = breakdown.squat_progress
            + breakdown.bench_progress
            + breakdown.deadlift_progress
            + breakdown.weight_management
            + breakdown.equipment_completion;

        ReadinessScore {
            total: round2(sum.clamp(0.0, readiness::TOTAL_MAX)),
            breakdown,
        }
    }

    /// One lift's points: progress ratio (capped at 1.2) x confidence x 23.3
    ///
    /// A zero third-attempt goal contributes 0 regardless of the current max.
    fn lift_score(current_max: f64, attempts: &LiftAttempts) -> f64 {
        if attempts.third <= 0.0 {
            return 0.0;
        }
        let progress_ratio = (current_max / attempts.third).min(readiness::PROGRESS_RATIO_CAP);
        let confidence_ratio = f64::from(attempts.confidence) / readiness::CONFIDENCE_DIVISOR;
        progress_ratio * confidence_ratio * readiness::LIFT_COMPONENT_SCALE
    }

    /// Bodyweight points: full 20 within 2 kg of the class, -2 per kg beyond
    ///
    /// Saturates at 0 rather than going negative.
    fn weight_score(bodyweight: f64, target_class: f64) -> f64 {
        let diff = (bodyweight - target_class).abs();
        if diff <= readiness::WEIGHT_TOLERANCE_KG {
            readiness::WEIGHT_COMPONENT_MAX
        } else {
            (diff - readiness::WEIGHT_TOLERANCE_KG)
                .mul_add(-readiness::WEIGHT_PENALTY_PER_KG, readiness::WEIGHT_COMPONENT_MAX)
                .max(0.0)
        }
    }

    /// Equipment points: checked / total * 10, 0 for an empty checklist
    fn equipment_score(checklist: &[EquipmentItem]) -> f64 {
        if checklist.is_empty() {
            return 0.0;
        }
        let checked = checklist.iter().filter(|item| item.checked).count();
        checked as f64 / checklist.len() as f64 * readiness::EQUIPMENT_COMPONENT_MAX
    }
}

/// Interpretation bucket for a readiness total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessStatus {
    /// 85 and above: peaked and ready to compete
    PeakReady,
    /// 70-84: preparation is on schedule
    OnTrack,
    /// 50-69: gaps remain in one or more areas
    NeedsWork,
    /// Below 50: preparation is behind
    OffTrack,
}

impl ReadinessStatus {
    /// Bucket a readiness total
    #[must_use]
    pub fn from_total(total: f64) -> Self {
        if total >= readiness_status::PEAK_READY_THRESHOLD {
            Self::PeakReady
        } else if total >= readiness_status::ON_TRACK_THRESHOLD {
            Self::OnTrack
        } else if total >= readiness_status::NEEDS_WORK_THRESHOLD {
            Self::NeedsWork
        } else {
            Self::OffTrack
        }
    }

    /// Human-readable interpretation
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::PeakReady => "Peaked and ready to compete",
            Self::OnTrack => "Preparation on schedule",
            Self::NeedsWork => "Focused work needed before the meet",
            Self::OffTrack => "Preparation behind schedule",
        }
    }
}

impl Display for ReadinessStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::PeakReady => write!(f, "peak ready"),
            Self::OnTrack => write!(f, "on track"),
            Self::NeedsWork => write!(f, "needs work"),
            Self::OffTrack => write!(f, "off track"),
        }
    }
}
