// ABOUTME: Main library entry point for the meetprep powerlifting toolkit
// ABOUTME: Exposes scoring, readiness, analytics, state, and storage modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 meetprep contributors

#![deny(unsafe_code)]

//! # meetprep
//!
//! Meet preparation tracking for powerlifters: bodyweight-adjusted strength
//! scores (Wilks and DOTS), a weighted meet readiness score, dashboard
//! progress figures, and training log analytics, all computed over a
//! JSON-persisted state snapshot.
//!
//! ## Features
//!
//! - **Strength scores**: Wilks and DOTS with classification into strength
//!   levels, plus the lighter summary variants (unclamped Wilks, approximate
//!   DOTS) used by the state container
//! - **Meet readiness**: weighted 70/20/10 breakdown across lift progress,
//!   weight management, and equipment completion
//! - **Training analytics**: personal records, frequency, intensity, volume
//!   progression, and weekly volume over a window of logged sessions
//! - **Explicit state**: one container object owning the snapshot and its
//!   store, persisting after every mutation
//!
//! ## Example
//!
//! ```rust
//! use meetprep::analysis::strength::{calculate_wilks, StrengthLevel};
//! use meetprep::models::Sex;
//!
//! let wilks = calculate_wilks(93.0, 600.0, Sex::Male);
//! let level = StrengthLevel::from_wilks(wilks);
//! println!("Wilks {wilks:.2} ({level})");
//! ```

/// Strength scores, readiness, dashboard progress, and training analytics
pub mod analysis;

/// Environment-driven runtime configuration
pub mod config;

/// Scoring coefficients and thresholds with their sources
pub mod constants;

/// Unified error handling system with standard error codes
pub mod errors;

/// Structured logging setup built on `tracing`
pub mod logging;

/// Domain models and the persisted state snapshot
pub mod models;

/// State container persisting after every mutation
pub mod state;

/// State snapshot and training log persistence
pub mod storage;

/// Weight unit conversion and formatting
pub mod units;
