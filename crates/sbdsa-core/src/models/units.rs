// ABOUTME: Weight unit tag with exact kilogram/pound conversion
// ABOUTME: Used by plate configurations and by display callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SBD SA Platform

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Conversion constants
mod conversion {
    /// Kilograms per avoirdupois pound (exact by definition)
    pub const KG_PER_LB: f64 = 0.453_592_37;
}

/// Unit a weight value is expressed in.
///
/// The platform stores and computes in kilograms (the South African default);
/// pounds appear only in the American plate configuration and in display
/// preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    /// Kilograms; the platform default
    #[default]
    Kg,
    /// Avoirdupois pounds
    Lb,
}

impl WeightUnit {
    /// Unit suffix for display ("kg" / "lb")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Lb => "lb",
        }
    }

    /// Convert `value` from this unit into `to`.
    ///
    /// Uses the exact pound definition (0.45359237 kg), so converting a value
    /// to the other unit and back returns the original value to within one
    /// floating-point rounding step.
    #[must_use]
    pub fn convert(self, value: f64, to: Self) -> f64 {
        match (self, to) {
            (Self::Kg, Self::Kg) | (Self::Lb, Self::Lb) => value,
            (Self::Kg, Self::Lb) => value / conversion::KG_PER_LB,
            (Self::Lb, Self::Kg) => value * conversion::KG_PER_LB,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(Self::Kg),
            "lb" | "lbs" | "pound" | "pounds" => Ok(Self::Lb),
            other => Err(AppError::invalid_input(format!(
                "Unknown weight unit: '{other}'. Valid options: kg, lb"
            ))),
        }
    }
}
