// ABOUTME: Weight unit types and kg/lbs conversion helpers
// ABOUTME: Kilograms are canonical everywhere; display units apply only at presentation boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 meetprep contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::units::LBS_PER_KG;
use crate::errors::AppError;

/// Display unit for weights
///
/// All stored weights are kilograms. The unit preference only affects
/// formatting and user-facing conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms (canonical storage unit)
    #[default]
    Kg,
    /// Pounds
    Lbs,
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kg => write!(f, "kg"),
            Self::Lbs => write!(f, "lbs"),
        }
    }
}

impl FromStr for WeightUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kg" | "kgs" | "kilograms" => Ok(Self::Kg),
            "lb" | "lbs" | "pounds" => Ok(Self::Lbs),
            other => Err(AppError::invalid_input(format!(
                "Unknown weight unit: {other}"
            ))),
        }
    }
}

/// Convert a weight between display units, rounded to 2 decimals
#[must_use]
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    let converted = match (from, to) {
        (WeightUnit::Kg, WeightUnit::Lbs) => value * LBS_PER_KG,
        (WeightUnit::Lbs, WeightUnit::Kg) => value / LBS_PER_KG,
        _ => value,
    };
    (converted * 100.0).round() / 100.0
}

/// Format a canonical kilogram weight in the preferred display unit
#[must_use]
pub fn format_weight(kg: f64, unit: WeightUnit) -> String {
    match unit {
        WeightUnit::Kg => format!("{kg:.1} kg"),
        WeightUnit::Lbs => format!("{:.1} lbs", kg * LBS_PER_KG),
    }
}
