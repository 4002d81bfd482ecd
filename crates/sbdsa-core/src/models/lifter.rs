// ABOUTME: Lifter attribute enums shared across the calculation crates
// ABOUTME: Gender selects scoring coefficient sets; Equipment selects the lifting class
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SBD SA Platform

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifter gender.
///
/// Scoring formulas (Wilks, GL points) carry separate fixed coefficient sets
/// per gender; the value strictly selects one set, with no interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male coefficient sets
    Male,
    /// Female coefficient sets
    Female,
}

impl Gender {
    /// Canonical lowercase name, as used in the platform's JSON vocabulary
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender: '{other}'. Valid options: male, female"
            ))),
        }
    }
}

/// Equipment class of a lift.
///
/// Raw (no supportive gear) and equipped (supportive suits/shirts) totals are
/// ranked separately; GL points apply a larger coefficient to equipped lifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    /// No supportive equipment (belts and sleeves allowed); the platform's default competition class
    #[default]
    Raw,
    /// Supportive single-ply or multi-ply equipment
    Equipped,
}

impl Equipment {
    /// Canonical lowercase name, as used in the platform's JSON vocabulary
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Equipped => "equipped",
        }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Equipment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw" | "classic" => Ok(Self::Raw),
            "equipped" | "single-ply" | "multi-ply" => Ok(Self::Equipped),
            other => Err(AppError::invalid_input(format!(
                "Unknown equipment class: '{other}'. Valid options: raw, equipped"
            ))),
        }
    }
}
