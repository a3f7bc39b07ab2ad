// ABOUTME: Training log aggregations: PRs, frequency, intensity, volume series, distribution
// ABOUTME: Reduces pre-filtered TrainingEntry lists; never reads the clock itself
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 meetprep contributors

//! # Training Analytics
//!
//! Reduces a list of training entries into the analytics surface. Entries
//! arrive already date-filtered by the log repository; every aggregation is
//! pure and deterministic over the given list.
//!
//! Two PR notions are tracked side by side: the best session by estimated 1RM
//! (Epley-derived when the entry carries none) and the heaviest raw weight
//! ever handled. Average RPE counts absent ratings as 0 in both numerator and
//! denominator, which lowers the average for unrated sessions; callers rely
//! on that behavior.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::{CurrentStats, LiftType, TrainingEntry};

/// A value per competition lift
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerLift<T> {
    /// Squat value
    pub squat: T,
    /// Bench press value
    pub bench: T,
    /// Deadlift value
    pub deadlift: T,
}

impl<T> PerLift<T> {
    /// Value for one lift
    #[must_use]
    pub const fn get(&self, lift: LiftType) -> &T {
        match lift {
            LiftType::Squat => &self.squat,
            LiftType::Bench => &self.bench,
            LiftType::Deadlift => &self.deadlift,
        }
    }

    /// Mutable value for one lift
    pub fn get_mut(&mut self, lift: LiftType) -> &mut T {
        match lift {
            LiftType::Squat => &mut self.squat,
            LiftType::Bench => &mut self.bench,
            LiftType::Deadlift => &mut self.deadlift,
        }
    }
}

/// Best session for one lift by estimated 1RM
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiftPr {
    /// Working weight of the best session in kg
    pub weight: f64,
    /// Estimated 1RM of the best session in kg
    pub estimated_1rm: f64,
    /// Date of the best session
    pub date: NaiveDate,
}

/// Session counts per lift and overall
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencySummary {
    /// Sessions per lift
    pub per_lift: PerLift<u32>,
    /// Total sessions in the window
    pub total: u32,
}

/// RPE and relative-intensity averages
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IntensitySummary {
    /// Average RPE across all entries, absent RPE counted as 0
    pub average_rpe: f64,
    /// Average RPE per lift, absent RPE counted as 0
    pub rpe_per_lift: PerLift<f64>,
    /// Average working weight as percent of the current max, per lift
    pub percent_of_max_per_lift: PerLift<f64>,
}

/// One charting point: total volume per lift on one training date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumePoint {
    /// Training date
    pub date: NaiveDate,
    /// Volume per lift in kg, 0 for lifts not trained that date
    pub volume: PerLift<f64>,
}

/// One calendar-week volume bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyVolume {
    /// Monday of the ISO week
    pub week_start: NaiveDate,
    /// Volume per lift in kg
    pub volume: PerLift<f64>,
    /// Grand total volume for the week in kg
    pub total: f64,
}

/// Full analytics over one window of training entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingAnalytics {
    /// Best session per lift by estimated 1RM, `None` when unseen in the window
    pub prs_by_estimated_1rm: PerLift<Option<LiftPr>>,
    /// Heaviest raw working weight per lift, 0 when unseen in the window
    pub prs_by_raw_weight: PerLift<f64>,
    /// Session counts
    pub frequency: FrequencySummary,
    /// RPE and relative-intensity averages
    pub intensity: IntensitySummary,
    /// Per-date volume series, ascending
    pub volume_progression: Vec<VolumePoint>,
    /// Per-week volume buckets, ascending
    pub weekly_volume: Vec<WeeklyVolume>,
    /// Percent share of each lift in the current maxes
    pub lift_distribution: PerLift<f64>,
}

/// Aggregator over a window of training entries
///
/// Holds the current stats snapshot for the relative-intensity and
/// distribution figures.
pub struct TrainingAnalyzer {
    current_stats: CurrentStats,
}

impl TrainingAnalyzer {
    /// Create an analyzer over a stats snapshot
    #[must_use]
    pub const fn new(current_stats: CurrentStats) -> Self {
        Self { current_stats }
    }

    /// Run every aggregation over one window of entries
    #[must_use]
    pub fn aggregate(&self, entries: &[TrainingEntry]) -> TrainingAnalytics {
        TrainingAnalytics {
            prs_by_estimated_1rm: Self::personal_records(entries),
            prs_by_raw_weight: Self::raw_weight_prs(entries),
            frequency: Self::frequency(entries),
            intensity: self.intensity(entries),
            volume_progression: Self::volume_progression(entries),
            weekly_volume: Self::weekly_volume(entries),
            lift_distribution: self.lift_distribution(),
        }
    }

    /// Best session per lift by estimated 1RM; earlier entries win ties
    #[must_use]
    pub fn personal_records(entries: &[TrainingEntry]) -> PerLift<Option<LiftPr>> {
        let mut prs = PerLift::<Option<LiftPr>>::default();
        for entry in entries {
            let best = prs.get_mut(entry.lift_type);
            let candidate = LiftPr {
                weight: entry.weight,
                estimated_1rm: entry.estimated_1rm(),
                date: entry.training_date,
            };
            let improved = best
                .as_ref()
                .is_none_or(|current| candidate.estimated_1rm > current.estimated_1rm);
            if improved {
                *best = Some(candidate);
            }
        }
        prs
    }

    /// Heaviest raw working weight per lift, 0 for lifts without entries
    #[must_use]
    pub fn raw_weight_prs(entries: &[TrainingEntry]) -> PerLift<f64> {
        let mut maxima = PerLift::<f64>::default();
        for entry in entries {
            let best = maxima.get_mut(entry.lift_type);
            *best = best.max(entry.weight);
        }
        maxima
    }

    /// Session counts per lift plus the overall total
    #[must_use]
    pub fn frequency(entries: &[TrainingEntry]) -> FrequencySummary {
        let mut per_lift = PerLift::<u32>::default();
        for entry in entries {
            *per_lift.get_mut(entry.lift_type) += 1;
        }
        FrequencySummary {
            total: per_lift.squat + per_lift.bench + per_lift.deadlift,
            per_lift,
        }
    }

    /// RPE and relative-intensity averages over one window
    #[must_use]
    pub fn intensity(&self, entries: &[TrainingEntry]) -> IntensitySummary {
        IntensitySummary {
            average_rpe: Self::average_rpe(entries),
            rpe_per_lift: PerLift {
                squat: Self::average_rpe_for(entries, LiftType::Squat),
                bench: Self::average_rpe_for(entries, LiftType::Bench),
                deadlift: Self::average_rpe_for(entries, LiftType::Deadlift),
            },
            percent_of_max_per_lift: PerLift {
                squat: self.average_percent_of_max(entries, LiftType::Squat),
                bench: self.average_percent_of_max(entries, LiftType::Bench),
                deadlift: self.average_percent_of_max(entries, LiftType::Deadlift),
            },
        }
    }

    /// Average RPE over all entries, absent ratings counted as 0
    fn average_rpe(entries: &[TrainingEntry]) -> f64 {
        if entries.is_empty() {
            return 0.0;
        }
        let sum: f64 = entries.iter().map(|entry| entry.rpe.unwrap_or(0.0)).sum();
        sum / entries.len() as f64
    }

    /// Average RPE for one lift, absent ratings counted as 0
    fn average_rpe_for(entries: &[TrainingEntry], lift: LiftType) -> f64 {
        let mut sum = 0.0;
        let mut count = 0_u32;
        for entry in entries.iter().filter(|entry| entry.lift_type == lift) {
            sum += entry.rpe.unwrap_or(0.0);
            count += 1;
        }
        if count == 0 {
            0.0
        } else {
            sum / f64::from(count)
        }
    }

    /// Average working weight as percent of the current max for one lift
    ///
    /// A zero current max substitutes 1 as the divisor rather than erroring.
    fn average_percent_of_max(&self, entries: &[TrainingEntry], lift: LiftType) -> f64 {
        let max = self.current_stats.max_for(lift);
        let divisor = if max <= 0.0 { 1.0 } else { max };
        let mut sum = 0.0;
        let mut count = 0_u32;
        for entry in entries.iter().filter(|entry| entry.lift_type == lift) {
            sum += entry.weight / divisor * 100.0;
            count += 1;
        }
        if count == 0 {
            0.0
        } else {
            sum / f64::from(count)
        }
    }

    /// One volume point per distinct training date, ascending, zero-filled
    #[must_use]
    pub fn volume_progression(entries: &[TrainingEntry]) -> Vec<VolumePoint> {
        let mut by_date: BTreeMap<NaiveDate, PerLift<f64>> = BTreeMap::new();
        for entry in entries {
            *by_date
                .entry(entry.training_date)
                .or_default()
                .get_mut(entry.lift_type) += entry.volume();
        }
        by_date
            .into_iter()
            .map(|(date, volume)| VolumePoint { date, volume })
            .collect()
    }

    /// Volume bucketed per calendar week (keyed by Monday), ascending
    #[must_use]
    pub fn weekly_volume(entries: &[TrainingEntry]) -> Vec<WeeklyVolume> {
        let mut by_week: BTreeMap<NaiveDate, PerLift<f64>> = BTreeMap::new();
        for entry in entries {
            let monday = entry.training_date.week(Weekday::Mon).first_day();
            *by_week.entry(monday).or_default().get_mut(entry.lift_type) += entry.volume();
        }
        by_week
            .into_iter()
            .map(|(week_start, volume)| WeeklyVolume {
                week_start,
                total: volume.squat + volume.bench + volume.deadlift,
                volume,
            })
            .collect()
    }

    /// Percent share of each lift in the current maxes, zeros when all are 0
    #[must_use]
    pub fn lift_distribution(&self) -> PerLift<f64> {
        let stats = &self.current_stats;
        let sum = stats.total();
        if sum <= 0.0 {
            return PerLift::default();
        }
        PerLift {
            squat: stats.squat_max / sum * 100.0,
            bench: stats.bench_max / sum * 100.0,
            deadlift: stats.deadlift_max / sum * 100.0,
        }
    }
}
