// ABOUTME: Explicit state container owning the snapshot and its store
// ABOUTME: Every mutation persists immediately; analysis stays in pure functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 meetprep contributors

//! # State Container
//!
//! The application shell owns exactly one `StateContainer`. It wraps the
//! current [`PowerliftingState`] snapshot together with its [`Store`] and
//! persists after every mutation, so a crash never loses an acknowledged
//! change. There is no global state; anything that wants the snapshot
//! receives it (or this container) explicitly.
//!
//! The container's summary surface uses the unclamped 2-decimal Wilks and the
//! approximate DOTS variant. The scores view uses the clamped/polynomial
//! pair; the variants stay separate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::progress::dashboard_readiness;
use crate::analysis::readiness::ReadinessCalculator;
use crate::analysis::strength::{calculate_dots_approx, calculate_wilks_unclamped};
use crate::constants::analytics::WEIGHT_TREND_WINDOW;
use crate::errors::{AppError, AppResult};
use crate::models::{
    CurrentStats, EquipmentCategory, EquipmentItem, LiftAttempts, LiftType, MeetInfo,
    PowerliftingState, Sex, WeightEntry,
};
use crate::storage::Store;
use crate::units::WeightUnit;

/// Snapshot-derived figures for the summary surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateSummary {
    /// Current three-lift total in kg
    pub total: f64,
    /// Goal total (sum of third attempts) in kg
    pub goal_total: f64,
    /// Unclamped Wilks, rounded to 2 decimals
    pub wilks: f64,
    /// Approximate DOTS
    pub dots: f64,
    /// Canonical readiness total, 0-100
    pub readiness: f64,
    /// Dashboard readiness percentage, 0-100
    pub dashboard_readiness: u8,
    /// Days until the meet, negative once passed, `None` when unscheduled
    pub days_until_meet: Option<i64>,
    /// Checked equipment items
    pub equipment_checked: usize,
    /// Total equipment items
    pub equipment_total: usize,
}

/// Owns the state snapshot and persists it through a [`Store`]
pub struct StateContainer<S: Store> {
    state: PowerliftingState,
    store: S,
}

impl<S: Store> StateContainer<S> {
    /// Load the persisted snapshot, failing when the store is unreadable
    ///
    /// # Errors
    ///
    /// Propagates store read and parse failures.
    pub fn load(store: S) -> AppResult<Self> {
        let state = store.load()?.unwrap_or_default();
        Ok(Self { state, store })
    }

    /// Load the persisted snapshot, falling back to a fresh default state
    /// when the store cannot be read
    pub fn load_or_default(store: S) -> Self {
        let state = match store.load() {
            Ok(Some(state)) => state,
            Ok(None) => PowerliftingState::default(),
            Err(err) => {
                warn!(error = %err, "state could not be read, starting fresh");
                PowerliftingState::default()
            }
        };
        Self { state, store }
    }

    /// The current snapshot
    #[must_use]
    pub const fn state(&self) -> &PowerliftingState {
        &self.state
    }

    /// Overwrite the max for one lift
    ///
    /// # Errors
    ///
    /// Propagates store write failures.
    pub fn set_lift_max(&mut self, lift: LiftType, kg: f64) -> AppResult<()> {
        self.state.current_stats.set_max(lift, kg);
        info!(lift = %lift, kg, "lift max updated");
        self.persist()
    }

    /// Overwrite the current bodyweight without logging a weigh-in
    ///
    /// # Errors
    ///
    /// Propagates store write failures.
    pub fn set_bodyweight(&mut self, kg: f64) -> AppResult<()> {
        self.state.current_stats.bodyweight = kg;
        info!(kg, "bodyweight updated");
        self.persist()
    }

    /// Replace the full stats block
    ///
    /// # Errors
    ///
    /// Propagates store write failures.
    pub fn set_stats(&mut self, stats: CurrentStats) -> AppResult<()> {
        self.state.current_stats = stats;
        info!(total = stats.total(), "stats replaced");
        self.persist()
    }

    /// Replace the planned attempts for one lift
    ///
    /// # Errors
    ///
    /// Propagates store write failures.
    pub fn set_goal(&mut self, lift: LiftType, attempts: LiftAttempts) -> AppResult<()> {
        *self.state.meet_goals.attempts_for_mut(lift) = attempts;
        info!(lift = %lift, third = attempts.third, confidence = attempts.confidence, "goal updated");
        self.persist()
    }

    /// Replace the active meet details
    ///
    /// # Errors
    ///
    /// Propagates store write failures.
    pub fn set_meet_info(&mut self, meet: MeetInfo) -> AppResult<()> {
        info!(meet = %meet.meet_name, target_class = meet.target_weight_class, "meet updated");
        self.state.meet_info = meet;
        self.persist()
    }

    /// Set the athlete sex used by score formulas
    ///
    /// # Errors
    ///
    /// Propagates store write failures.
    pub fn set_sex(&mut self, sex: Sex) -> AppResult<()> {
        self.state.sex = sex;
        self.persist()
    }

    /// Set the preferred display unit
    ///
    /// # Errors
    ///
    /// Propagates store write failures.
    pub fn set_unit_preference(&mut self, unit: WeightUnit) -> AppResult<()> {
        self.state.unit_preference = unit;
        self.persist()
    }

    /// Append a weigh-in and make it the current bodyweight
    ///
    /// # Errors
    ///
    /// Propagates store write failures.
    pub fn log_weight(&mut self, date: NaiveDate, kg: f64) -> AppResult<()> {
        self.state.weight_log.push(WeightEntry::new(date, kg));
        self.state.current_stats.bodyweight = kg;
        info!(%date, kg, "weigh-in logged");
        self.persist()
    }

    /// The most recent weigh-ins in log order, up to the trend window
    #[must_use]
    pub fn weight_trend(&self) -> &[WeightEntry] {
        let log = &self.state.weight_log;
        let start = log.len().saturating_sub(WEIGHT_TREND_WINDOW);
        &log[start..]
    }

    /// Toggle one checklist item, returning its new checked value
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id; propagates store write
    /// failures.
    pub fn toggle_equipment(&mut self, id: &str) -> AppResult<bool> {
        let item = self
            .state
            .equipment_checklist
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| AppError::not_found(format!("equipment item {id}")))?;
        item.checked = !item.checked;
        let checked = item.checked;
        info!(id, checked, "equipment toggled");
        self.persist()?;
        Ok(checked)
    }

    /// Add a checklist item, returning its generated id
    ///
    /// # Errors
    ///
    /// Propagates store write failures.
    pub fn add_equipment(
        &mut self,
        name: impl Into<String>,
        category: EquipmentCategory,
    ) -> AppResult<String> {
        let item = EquipmentItem::new(name, category);
        let id = item.id.clone();
        info!(id = %id, name = %item.name, category = %item.category, "equipment added");
        self.state.equipment_checklist.push(item);
        self.persist()?;
        Ok(id)
    }

    /// Remove one checklist item
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id; propagates store write
    /// failures.
    pub fn remove_equipment(&mut self, id: &str) -> AppResult<()> {
        let before = self.state.equipment_checklist.len();
        self.state.equipment_checklist.retain(|item| item.id != id);
        if self.state.equipment_checklist.len() == before {
            return Err(AppError::not_found(format!("equipment item {id}")));
        }
        info!(id, "equipment removed");
        self.persist()
    }

    /// Snapshot-derived figures for the summary surface
    ///
    /// Uses the unclamped 2-decimal Wilks and the approximate DOTS variant.
    #[must_use]
    pub fn summary(&self, today: NaiveDate) -> StateSummary {
        let state = &self.state;
        let stats = &state.current_stats;
        let total = stats.total();
        let (equipment_checked, equipment_total) = state.equipment_progress();

        StateSummary {
            total,
            goal_total: state.meet_goals.goal_total(),
            wilks: calculate_wilks_unclamped(stats.bodyweight, total, state.sex),
            dots: calculate_dots_approx(stats.bodyweight, total, state.sex),
            readiness: ReadinessCalculator::calculate_readiness_score(state).total,
            dashboard_readiness: dashboard_readiness(
                stats,
                &state.meet_goals,
                &state.meet_info,
                &state.equipment_checklist,
            ),
            days_until_meet: state.meet_info.days_until(today),
            equipment_checked,
            equipment_total,
        }
    }

    fn persist(&self) -> AppResult<()> {
        self.store.save(&self.state)
    }
}
