// ABOUTME: Pure analysis functions over meet-prep state snapshots
// ABOUTME: Strength scores, readiness scoring, dashboard progress and training aggregations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 meetprep contributors

//! # Analysis
//!
//! Pure, total, deterministic scoring over immutable snapshots. Every function
//! here performs closed-form arithmetic and returns a value: no I/O, no clock
//! access, no shared state, no errors. Call sites may re-invoke them on every
//! refresh without coordination.
//!
//! Several metrics ship in deliberately duplicated variants (clamped and
//! unclamped Wilks, polynomial and approximate DOTS, 70/20/10 readiness and
//! 80/15/5 dashboard readiness, capped and uncapped lift progress). Different
//! display surfaces consume different variants; they must not be unified.

pub mod progress;
pub mod readiness;
pub mod strength;
pub mod training_analytics;

/// Round to the 2-decimal display precision shared by the score surfaces
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
