// ABOUTME: Wilks and DOTS strength scores with strength-level bucketing
// ABOUTME: Carries two Wilks variants and two DOTS variants feeding different display surfaces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 meetprep contributors

//! Bodyweight-adjusted strength scores.
//!
//! Two scoring families, each in two variants:
//!
//! - [`calculate_wilks`] clamps bodyweight to the published table range and
//!   returns the raw score; [`calculate_wilks_unclamped`] skips the clamp and
//!   rounds to 2 decimals. The scores view uses the former, the state summary
//!   the latter.
//! - [`calculate_dots`] evaluates the official 4th-degree polynomial;
//!   [`calculate_dots_approx`] is the single-factor allometric shortcut. They
//!   produce different numbers and both stay public.
//!
//! All functions are total: non-positive bodyweight or total returns `0.0`.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use super::round2;
use crate::constants::{dots, strength_levels, wilks};
use crate::models::Sex;

/// Evaluate an ascending-power polynomial at `x` (Horner form)
fn polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients
        .iter()
        .rev()
        .fold(0.0, |acc, coefficient| acc.mul_add(x, *coefficient))
}

/// Wilks score with bodyweight clamped to the published table range
///
/// `total * 500 / p(bw)` over the 5th-degree denominator polynomial, with
/// bodyweight capped at 201.9 kg (male) or 154.53 kg (female). Beyond the cap
/// the polynomial leaves its validated range, so heavier bodyweights score as
/// if at the cap. Returns `0.0` when bodyweight or total is non-positive.
#[must_use]
pub fn calculate_wilks(bodyweight: f64, total: f64, sex: Sex) -> f64 {
    if bodyweight <= 0.0 || total <= 0.0 {
        return 0.0;
    }
    let (coefficients, cap) = match sex {
        Sex::Male => (&wilks::MALE_COEFFICIENTS, wilks::MALE_BODYWEIGHT_CAP_KG),
        Sex::Female => (&wilks::FEMALE_COEFFICIENTS, wilks::FEMALE_BODYWEIGHT_CAP_KG),
    };
    total * wilks::NUMERATOR / polynomial(coefficients, bodyweight.min(cap))
}

/// Wilks score without the bodyweight clamp, rounded to 2 decimals
///
/// Same coefficient tables as [`calculate_wilks`], no cap, `round(x*100)/100`
/// applied to the result. The state summary surface uses this variant; keep it
/// distinct from the clamped one.
#[must_use]
pub fn calculate_wilks_unclamped(bodyweight: f64, total: f64, sex: Sex) -> f64 {
    if bodyweight <= 0.0 || total <= 0.0 {
        return 0.0;
    }
    let coefficients = match sex {
        Sex::Male => &wilks::MALE_COEFFICIENTS,
        Sex::Female => &wilks::FEMALE_COEFFICIENTS,
    };
    round2(total * wilks::NUMERATOR / polynomial(coefficients, bodyweight))
}

/// DOTS score over the official 4th-degree polynomial, no bodyweight clamp
#[must_use]
pub fn calculate_dots(bodyweight: f64, total: f64, sex: Sex) -> f64 {
    if bodyweight <= 0.0 || total <= 0.0 {
        return 0.0;
    }
    let coefficients = match sex {
        Sex::Male => &dots::MALE_COEFFICIENTS,
        Sex::Female => &dots::FEMALE_COEFFICIENTS,
    };
    total * dots::NUMERATOR / polynomial(coefficients, bodyweight)
}

/// Single-factor DOTS approximation: `total * factor / bodyweight^0.75`
///
/// A different scale from [`calculate_dots`]; the quick summary surface uses
/// it as-is.
#[must_use]
pub fn calculate_dots_approx(bodyweight: f64, total: f64, sex: Sex) -> f64 {
    if bodyweight <= 0.0 || total <= 0.0 {
        return 0.0;
    }
    let factor = match sex {
        Sex::Male => dots::MALE_SIMPLE_FACTOR,
        Sex::Female => dots::FEMALE_SIMPLE_FACTOR,
    };
    total * factor / bodyweight.powf(dots::BODYWEIGHT_EXPONENT)
}

/// Strength classification on the Wilks scale, highest qualifying bucket wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLevel {
    /// Wilks below 200
    Beginner,
    /// Wilks 200-299
    Novice,
    /// Wilks 300-399
    Intermediate,
    /// Wilks 400-499
    Advanced,
    /// Wilks 500 and above
    Elite,
}

impl StrengthLevel {
    /// Classify a Wilks score
    #[must_use]
    pub fn from_wilks(wilks_score: f64) -> Self {
        if wilks_score >= strength_levels::ELITE_THRESHOLD {
            Self::Elite
        } else if wilks_score >= strength_levels::ADVANCED_THRESHOLD {
            Self::Advanced
        } else if wilks_score >= strength_levels::INTERMEDIATE_THRESHOLD {
            Self::Intermediate
        } else if wilks_score >= strength_levels::NOVICE_THRESHOLD {
            Self::Novice
        } else {
            Self::Beginner
        }
    }

    /// Presentation color tag for this level
    #[must_use]
    pub const fn color_tag(&self) -> &'static str {
        match self {
            Self::Beginner => "gray",
            Self::Novice => "orange",
            Self::Intermediate => "green",
            Self::Advanced => "blue",
            Self::Elite => "purple",
        }
    }
}

impl Display for StrengthLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Beginner => write!(f, "Beginner"),
            Self::Novice => write!(f, "Novice"),
            Self::Intermediate => write!(f, "Intermediate"),
            Self::Advanced => write!(f, "Advanced"),
            Self::Elite => write!(f, "Elite"),
        }
    }
}
