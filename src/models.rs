// ABOUTME: Core data models for powerlifting meet preparation
// ABOUTME: Defines lifts, attempts, goals, meet info, equipment, logs and the state snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 meetprep contributors

//! # Data Models
//!
//! Core value objects used throughout the crate. All models are plain data:
//! they serialize to snake_case JSON, weigh everything in kilograms, and own
//! no behavior beyond small derivations (totals, Epley estimates, attempt
//! suggestions). The analysis modules consume these as immutable snapshots.
//!
//! ## Core Models
//!
//! - `CurrentStats`: bodyweight and the three competition lift maxes
//! - `MeetGoals`: planned attempts per lift with a confidence rating
//! - `MeetInfo`: the active meet (date, target class, name, location)
//! - `EquipmentItem`: one checklist entry
//! - `WeightEntry` / `TrainingEntry`: append-only log rows
//! - `PowerliftingState`: the full persisted snapshot

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::estimation;
use crate::errors::AppError;
use crate::units::WeightUnit;

/// Athlete sex, selecting the coefficient table for score formulas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male coefficient tables
    #[default]
    Male,
    /// Female coefficient tables
    Female,
}

impl Display for Sex {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!("Invalid sex: {other}"))),
        }
    }
}

/// The three competition lifts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiftType {
    /// Back squat
    Squat,
    /// Bench press
    Bench,
    /// Deadlift
    Deadlift,
}

impl LiftType {
    /// All lifts in meet order
    pub const ALL: [Self; 3] = [Self::Squat, Self::Bench, Self::Deadlift];
}

impl Display for LiftType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Squat => write!(f, "Squat"),
            Self::Bench => write!(f, "Bench"),
            Self::Deadlift => write!(f, "Deadlift"),
        }
    }
}

impl FromStr for LiftType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "squat" | "sq" => Ok(Self::Squat),
            "bench" | "bench_press" | "bp" => Ok(Self::Bench),
            "deadlift" | "dl" => Ok(Self::Deadlift),
            other => Err(AppError::invalid_input(format!("Invalid lift type: {other}"))),
        }
    }
}

/// Current training maxes and bodyweight, all in kilograms
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentStats {
    /// Current bodyweight in kg
    pub bodyweight: f64,
    /// Current squat max in kg
    pub squat_max: f64,
    /// Current bench press max in kg
    pub bench_max: f64,
    /// Current deadlift max in kg
    pub deadlift_max: f64,
}

impl CurrentStats {
    /// Sum of the three lift maxes
    #[must_use]
    pub fn total(&self) -> f64 {
        self.squat_max + self.bench_max + self.deadlift_max
    }

    /// Current max for one lift
    #[must_use]
    pub const fn max_for(&self, lift: LiftType) -> f64 {
        match lift {
            LiftType::Squat => self.squat_max,
            LiftType::Bench => self.bench_max,
            LiftType::Deadlift => self.deadlift_max,
        }
    }

    /// Overwrite the max for one lift
    pub fn set_max(&mut self, lift: LiftType, value: f64) {
        match lift {
            LiftType::Squat => self.squat_max = value,
            LiftType::Bench => self.bench_max = value,
            LiftType::Deadlift => self.deadlift_max = value,
        }
    }
}

/// Planned attempts for one lift plus the athlete's confidence in the third
///
/// Confidence is rated 1-10 before the meet; 0 means no confidence and zeroes
/// the lift's readiness contribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiftAttempts {
    /// First attempt in kg
    pub opener: f64,
    /// Second attempt in kg
    pub second: f64,
    /// Third attempt (the goal) in kg
    pub third: f64,
    /// Confidence in hitting the third attempt, 1-10
    pub confidence: u8,
}

impl Default for LiftAttempts {
    fn default() -> Self {
        Self {
            opener: 0.0,
            second: 0.0,
            third: 0.0,
            confidence: 5,
        }
    }
}

impl LiftAttempts {
    /// Suggest attempts from a current max using standard meet percentages
    ///
    /// Opener at 91%, second at 97%, third at 102%, each rounded to the
    /// nearest 2.5 kg plate increment. Confidence starts at the default 5.
    #[must_use]
    pub fn suggested_from_max(max: f64) -> Self {
        Self {
            opener: round_to_plate(max * estimation::OPENER_FRACTION),
            second: round_to_plate(max * estimation::SECOND_ATTEMPT_FRACTION),
            third: round_to_plate(max * estimation::THIRD_ATTEMPT_FRACTION),
            ..Self::default()
        }
    }
}

/// Round a barbell load to the nearest competition plate increment
fn round_to_plate(kg: f64) -> f64 {
    (kg / estimation::PLATE_INCREMENT_KG).round() * estimation::PLATE_INCREMENT_KG
}

/// Goal attempts for exactly the three competition lifts
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MeetGoals {
    /// Squat attempts
    pub squat: LiftAttempts,
    /// Bench press attempts
    pub bench: LiftAttempts,
    /// Deadlift attempts
    pub deadlift: LiftAttempts,
}

impl MeetGoals {
    /// Attempts for one lift
    #[must_use]
    pub const fn attempts_for(&self, lift: LiftType) -> &LiftAttempts {
        match lift {
            LiftType::Squat => &self.squat,
            LiftType::Bench => &self.bench,
            LiftType::Deadlift => &self.deadlift,
        }
    }

    /// Mutable attempts for one lift
    pub fn attempts_for_mut(&mut self, lift: LiftType) -> &mut LiftAttempts {
        match lift {
            LiftType::Squat => &mut self.squat,
            LiftType::Bench => &mut self.bench,
            LiftType::Deadlift => &mut self.deadlift,
        }
    }

    /// Goal total: sum of the three third attempts
    #[must_use]
    pub fn goal_total(&self) -> f64 {
        self.squat.third + self.bench.third + self.deadlift.third
    }
}

/// The active meet the athlete is preparing for
///
/// One meet at a time; choosing among several registered meets is the
/// caller's concern and happens before this struct is populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeetInfo {
    /// Competition date, if scheduled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meet_date: Option<NaiveDate>,
    /// Target weight class in kg (0.0 until a meet is configured)
    pub target_weight_class: f64,
    /// Meet name
    pub meet_name: String,
    /// Venue location
    pub location: String,
}

impl MeetInfo {
    /// Days from `today` until the meet, negative once the meet has passed
    ///
    /// Takes the reference date as a parameter so callers own the clock.
    #[must_use]
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.meet_date.map(|date| (date - today).num_days())
    }
}

/// Checklist grouping for equipment items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EquipmentCategory {
    /// Required to step on the platform
    Essential,
    /// Allowed supportive gear
    Optional,
    /// Meet-day logistics
    MeetDay,
}

impl EquipmentCategory {
    /// Human-readable category label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Essential => "Essential",
            Self::Optional => "Optional",
            Self::MeetDay => "Meet Day",
        }
    }
}

impl Display for EquipmentCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Essential => write!(f, "essential"),
            Self::Optional => write!(f, "optional"),
            Self::MeetDay => write!(f, "meet-day"),
        }
    }
}

impl FromStr for EquipmentCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "essential" => Ok(Self::Essential),
            "optional" => Ok(Self::Optional),
            "meet-day" | "meet_day" | "meetday" => Ok(Self::MeetDay),
            other => Err(AppError::invalid_input(format!(
                "Invalid equipment category: {other}"
            ))),
        }
    }
}

/// One equipment checklist entry
///
/// Order in the checklist is insignificant for scoring; only the checked and
/// total counts feed the readiness formulas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    /// Stable unique id, assigned at creation
    pub id: String,
    /// Item name
    pub name: String,
    /// Whether the item is packed/ready
    pub checked: bool,
    /// Checklist grouping
    pub category: EquipmentCategory,
}

impl EquipmentItem {
    /// Create an unchecked item with a fresh id
    #[must_use]
    pub fn new(name: impl Into<String>, category: EquipmentCategory) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            checked: false,
            category,
        }
    }
}

/// One bodyweight log row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Date of the weigh-in
    pub date: NaiveDate,
    /// Bodyweight in kg
    pub weight: f64,
}

impl WeightEntry {
    /// Create a log row
    #[must_use]
    pub const fn new(date: NaiveDate, weight: f64) -> Self {
        Self { date, weight }
    }
}

/// One training session log row for a single lift
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingEntry {
    /// Which competition lift was trained
    pub lift_type: LiftType,
    /// Session date
    pub training_date: NaiveDate,
    /// Working sets performed
    pub sets: u32,
    /// Reps per set
    pub reps: u32,
    /// Working weight in kg
    pub weight: f64,
    /// Rated perceived exertion, 1-10
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpe: Option<f64>,
    /// Explicit session volume in kg, derived from sets x reps x weight when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    /// Explicit estimated 1RM in kg, derived via Epley when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_1rm: Option<f64>,
}

impl TrainingEntry {
    /// Create a log row with derived volume and 1RM left implicit
    #[must_use]
    pub const fn new(
        lift_type: LiftType,
        training_date: NaiveDate,
        sets: u32,
        reps: u32,
        weight: f64,
    ) -> Self {
        Self {
            lift_type,
            training_date,
            sets,
            reps,
            weight,
            rpe: None,
            volume: None,
            estimated_1rm: None,
        }
    }

    /// Attach an RPE rating
    #[must_use]
    pub fn with_rpe(mut self, rpe: f64) -> Self {
        self.rpe = Some(rpe);
        self
    }

    /// Session volume in kg: the stored value, or sets x reps x weight
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.volume
            .unwrap_or_else(|| f64::from(self.sets) * f64::from(self.reps) * self.weight)
    }

    /// Estimated 1RM in kg: the stored value, or Epley `weight * (1 + reps/30)`
    #[must_use]
    pub fn estimated_1rm(&self) -> f64 {
        self.estimated_1rm.unwrap_or_else(|| {
            self.weight
                .mul_add(f64::from(self.reps) / estimation::EPLEY_REP_DIVISOR, self.weight)
        })
    }
}

/// Readiness score component breakdown
///
/// Each part is rounded to 2 decimals independently; the total is the clamped
/// sum of these rounded parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadinessBreakdown {
    /// Squat progress points, 0 to 23.3 * 1.2
    pub squat_progress: f64,
    /// Bench progress points, 0 to 23.3 * 1.2
    pub bench_progress: f64,
    /// Deadlift progress points, 0 to 23.3 * 1.2
    pub deadlift_progress: f64,
    /// Weight management points, 0 to 20
    pub weight_management: f64,
    /// Equipment completion points, 0 to 10
    pub equipment_completion: f64,
}

/// Derived readiness score; computed on demand, never persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadinessScore {
    /// Total readiness, 0-100
    pub total: f64,
    /// Per-component points
    pub breakdown: ReadinessBreakdown,
}

/// The full persisted snapshot of an athlete's meet preparation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerliftingState {
    /// Athlete sex for score formulas
    pub sex: Sex,
    /// Preferred display unit
    pub unit_preference: WeightUnit,
    /// Current maxes and bodyweight
    pub current_stats: CurrentStats,
    /// Planned meet attempts
    pub meet_goals: MeetGoals,
    /// Active meet details
    pub meet_info: MeetInfo,
    /// Equipment checklist
    pub equipment_checklist: Vec<EquipmentItem>,
    /// Append-only bodyweight log
    pub weight_log: Vec<WeightEntry>,
}

impl Default for PowerliftingState {
    fn default() -> Self {
        Self {
            sex: Sex::default(),
            unit_preference: WeightUnit::default(),
            current_stats: CurrentStats::default(),
            meet_goals: MeetGoals::default(),
            meet_info: MeetInfo::default(),
            equipment_checklist: default_checklist(),
            weight_log: Vec::new(),
        }
    }
}

impl PowerliftingState {
    /// Checked and total equipment item counts
    #[must_use]
    pub fn equipment_progress(&self) -> (usize, usize) {
        let checked = self
            .equipment_checklist
            .iter()
            .filter(|item| item.checked)
            .count();
        (checked, self.equipment_checklist.len())
    }
}

/// The standard meet-prep checklist seeded into a fresh state
fn default_checklist() -> Vec<EquipmentItem> {
    let essential = ["Singlet", "Lifting shoes", "Belt", "T-shirt"];
    let optional = ["Knee sleeves", "Wrist wraps", "Deadlift socks", "Chalk"];
    let meet_day = [
        "Federation card",
        "Water bottle",
        "Snacks",
        "Warm-up clothes",
    ];

    essential
        .into_iter()
        .map(|name| EquipmentItem::new(name, EquipmentCategory::Essential))
        .chain(
            optional
                .into_iter()
                .map(|name| EquipmentItem::new(name, EquipmentCategory::Optional)),
        )
        .chain(
            meet_day
                .into_iter()
                .map(|name| EquipmentItem::new(name, EquipmentCategory::MeetDay)),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_state_seeds_standard_checklist() {
        let state = PowerliftingState::default();
        assert_eq!(state.equipment_checklist.len(), 12);
        assert_eq!(state.equipment_progress(), (0, 12));

        let essential = state
            .equipment_checklist
            .iter()
            .filter(|i| i.category == EquipmentCategory::Essential)
            .count();
        assert_eq!(essential, 4);
    }

    #[test]
    fn goal_total_sums_third_attempts() {
        let goals = MeetGoals {
            squat: LiftAttempts {
                third: 180.0,
                ..LiftAttempts::default()
            },
            bench: LiftAttempts {
                third: 120.0,
                ..LiftAttempts::default()
            },
            deadlift: LiftAttempts {
                third: 220.0,
                ..LiftAttempts::default()
            },
        };
        assert!((goals.goal_total() - 520.0).abs() < f64::EPSILON);
    }

    #[test]
    fn default_confidence_is_five() {
        assert_eq!(LiftAttempts::default().confidence, 5);
    }

    #[test]
    fn epley_estimate_derived_when_absent() {
        let entry = TrainingEntry::new(LiftType::Squat, date(2026, 3, 2), 3, 5, 100.0);
        assert!((entry.estimated_1rm() - 116.666_666_666_666_67).abs() < 1e-9);
        assert!((entry.volume() - 1500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn explicit_volume_and_1rm_take_precedence() {
        let mut entry = TrainingEntry::new(LiftType::Bench, date(2026, 3, 2), 5, 5, 80.0);
        entry.volume = Some(1234.0);
        entry.estimated_1rm = Some(95.0);
        assert!((entry.volume() - 1234.0).abs() < f64::EPSILON);
        assert!((entry.estimated_1rm() - 95.0).abs() < f64::EPSILON);
    }

    #[test]
    fn suggested_attempts_round_to_plate_increments() {
        let attempts = LiftAttempts::suggested_from_max(170.0);
        assert!((attempts.opener - 155.0).abs() < f64::EPSILON);
        assert!((attempts.second - 165.0).abs() < f64::EPSILON);
        assert!((attempts.third - 172.5).abs() < f64::EPSILON);
        assert_eq!(attempts.confidence, 5);
    }

    #[test]
    fn days_until_counts_from_given_reference() {
        let meet = MeetInfo {
            meet_date: Some(date(2026, 10, 3)),
            ..MeetInfo::default()
        };
        assert_eq!(meet.days_until(date(2026, 9, 3)), Some(30));
        assert_eq!(meet.days_until(date(2026, 10, 10)), Some(-7));
        assert_eq!(MeetInfo::default().days_until(date(2026, 9, 3)), None);
    }

    #[test]
    fn equipment_category_serializes_kebab_case() {
        let json = serde_json::to_string(&EquipmentCategory::MeetDay).unwrap();
        assert_eq!(json, "\"meet-day\"");
        let back: EquipmentCategory = serde_json::from_str("\"meet-day\"").unwrap();
        assert_eq!(back, EquipmentCategory::MeetDay);
    }
}
