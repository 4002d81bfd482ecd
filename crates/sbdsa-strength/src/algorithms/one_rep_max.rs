// ABOUTME: One-rep-max estimation formulas for strength assessment
// ABOUTME: Implements Brzycki, Epley, Lombardi, O'Connor, Lander, and averaged models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SBD SA Platform

use sbdsa_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// One-rep-max estimation formula selection
///
/// Different formulas for estimating the maximum single-repetition lift from a
/// sub-maximal `weight x reps` performance:
///
/// - `Brzycki`: inverse-linear decay in `(37 - reps)`, the commercial-gym standard
/// - `Epley`: linear bonus of `reps / 30`
/// - `Lombardi`: power-law curve in `reps^0.10`
/// - `OConnor`: linear bonus of `reps / 40`, conservative at high reps
/// - `Lander`: percentage-based linear decay
/// - `Average`: arithmetic mean of the four classical estimates
///
/// All formulas return the lifted weight unchanged at one rep and diverge by a
/// few percent as reps climb, reflecting the different lifter populations each
/// was tuned against.
///
/// # Scientific References
///
/// - Brzycki, M. (1993). "Strength testing - predicting a one-rep max from reps-to-fatigue." *Journal of Physical Education, Recreation & Dance*, 64(1), 88-90.
/// - Epley, B. (1985). "Poundage chart." *Boyd Epley Workout*. Lincoln, NE: Body Enterprises.
/// - Lombardi, V.P. (1989). "Beginning Weight Training: The Safe and Effective Way." Dubuque, IA: W.C. Brown.
/// - O'Connor, B., Simmons, J., & O'Shea, P. (1989). "Weight Training Today." St. Paul, MN: West Publishing.
/// - Lander, J. (1985). "Maximums based on reps." *National Strength and Conditioning Association Journal*, 6(6), 60-61.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OneRepMaxFormula {
    /// Brzycki formula
    ///
    /// Formula: `1RM = weight x 36 / (37 - reps)`
    ///
    /// Models strength loss as inversely proportional to `(37 - reps)`.
    /// Rep counts above 36 are capped there, where the denominator reaches zero.
    ///
    /// Pros: Well-validated in the 2-10 rep range, the default in most gym software
    /// Cons: Overestimates sharply past 10 reps
    #[default]
    Brzycki,

    /// Epley formula
    ///
    /// Formula: `1RM = weight x (1 + reps / 30)`
    ///
    /// Adds one thirtieth of the lifted weight per rep performed.
    ///
    /// Pros: Simple, defined for any rep count
    /// Cons: Reads slightly high at very low reps compared to Brzycki
    Epley,

    /// Lombardi formula
    ///
    /// Formula: `1RM = weight x reps^0.10`
    ///
    /// Power-law relationship between reps and relative load.
    ///
    /// Pros: Grows slowly, usable for high-rep endurance sets
    /// Cons: Underestimates in the 3-8 rep range where most testing happens
    Lombardi,

    /// O'Connor formula
    ///
    /// Formula: `1RM = weight x (1 + reps / 40)`
    ///
    /// Linear like Epley but with a gentler slope.
    ///
    /// Pros: Conservative estimates, suited to novice lifters
    /// Cons: Reads low against meet results for trained lifters
    OConnor,

    /// Lander formula
    ///
    /// Formula: `1RM = weight x 100 / (101.3 - 2.67123 x reps)`
    ///
    /// Percentage-of-max linear decay. Rep counts above 37 are capped there,
    /// just before the denominator reaches zero.
    ///
    /// Pros: Close to Brzycki in the moderate-rep range with published validation
    /// Cons: Same sharp divergence at high reps
    Lander,

    /// Average of the classical estimates
    ///
    /// Arithmetic mean of the Brzycki, Epley, Lombardi, and O'Connor estimates,
    /// rounded to the nearest kilogram. Smooths out the individual formulas'
    /// population biases.
    Average,
}

impl OneRepMaxFormula {
    /// Estimate the one-rep max for a `weight_kg x reps` set.
    ///
    /// # Returns
    ///
    /// Estimated one-rep max in kilograms, rounded to the nearest whole
    /// kilogram. Two fixed points hold for every formula:
    ///
    /// - `reps == 1` returns `weight_kg` exactly, unrounded: a single max is
    ///   its own maximum, not an estimate.
    /// - `reps <= 0` (or a non-finite or non-positive weight) returns the
    ///   `0.0` sentinel; callers must treat a zero result as "not estimable",
    ///   never as a zero-strength measurement.
    ///
    /// # Example
    ///
    /// ```
    /// use sbdsa_strength::algorithms::OneRepMaxFormula;
    ///
    /// let one_rm = OneRepMaxFormula::Brzycki.estimate(100.0, 5);
    /// assert!((one_rm - 113.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn estimate(self, weight_kg: f64, reps: i32) -> f64 {
        if !weight_kg.is_finite() || weight_kg <= 0.0 || reps <= 0 {
            debug!(
                formula = self.name(),
                weight_kg, reps, "Set is outside the estimable domain, returning zero sentinel"
            );
            return 0.0;
        }

        if reps == 1 {
            return weight_kg;
        }

        let estimate = match self {
            Self::Brzycki => Self::brzycki(weight_kg, reps),
            Self::Epley => Self::epley(weight_kg, reps),
            Self::Lombardi => Self::lombardi(weight_kg, reps),
            Self::OConnor => Self::oconnor(weight_kg, reps),
            Self::Lander => Self::lander(weight_kg, reps),
            Self::Average => {
                let sum: f64 = [Self::Brzycki, Self::Epley, Self::Lombardi, Self::OConnor]
                    .iter()
                    .map(|formula| formula.estimate(weight_kg, reps))
                    .sum();
                sum / 4.0
            }
        };

        estimate.round()
    }

    /// Inverse-linear decay; denominator hits zero at 37 reps, so reps cap at 36
    fn brzycki(weight_kg: f64, reps: i32) -> f64 {
        let reps_f = f64::from(reps.min(36));
        weight_kg * 36.0 / (37.0 - reps_f)
    }

    /// Linear bonus of one thirtieth of the weight per rep
    fn epley(weight_kg: f64, reps: i32) -> f64 {
        weight_kg * (1.0 + f64::from(reps) / 30.0)
    }

    /// Power-law curve in reps
    fn lombardi(weight_kg: f64, reps: i32) -> f64 {
        weight_kg * f64::from(reps).powf(0.1)
    }

    /// Linear bonus of one fortieth of the weight per rep
    fn oconnor(weight_kg: f64, reps: i32) -> f64 {
        weight_kg * (1.0 + f64::from(reps) / 40.0)
    }

    /// Percentage-based decay; denominator hits zero near 38 reps, so reps cap at 37
    fn lander(weight_kg: f64, reps: i32) -> f64 {
        let reps_f = f64::from(reps.min(37));
        100.0 * weight_kg / 2.671_23_f64.mul_add(-reps_f, 101.3)
    }

    /// Get formula name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Brzycki => "brzycki",
            Self::Epley => "epley",
            Self::Lombardi => "lombardi",
            Self::OConnor => "o_connor",
            Self::Lander => "lander",
            Self::Average => "average",
        }
    }

    /// Get formula description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Brzycki => "Brzycki inverse-linear estimate, the commercial-gym standard",
            Self::Epley => "Epley linear estimate, defined for any rep count",
            Self::Lombardi => "Lombardi power-law estimate for high-rep sets",
            Self::OConnor => "O'Connor conservative linear estimate",
            Self::Lander => "Lander percentage-based estimate",
            Self::Average => "Arithmetic mean of the four classical estimates",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(self) -> &'static str {
        match self {
            Self::Brzycki => "1RM = weight x 36 / (37 - reps)",
            Self::Epley => "1RM = weight x (1 + reps / 30)",
            Self::Lombardi => "1RM = weight x reps^0.10",
            Self::OConnor => "1RM = weight x (1 + reps / 40)",
            Self::Lander => "1RM = weight x 100 / (101.3 - 2.67123 x reps)",
            Self::Average => "1RM = mean(Brzycki, Epley, Lombardi, O'Connor)",
        }
    }
}

impl fmt::Display for OneRepMaxFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OneRepMaxFormula {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "brzycki" => Ok(Self::Brzycki),
            "epley" => Ok(Self::Epley),
            "lombardi" => Ok(Self::Lombardi),
            "o_connor" | "oconnor" | "o'connor" => Ok(Self::OConnor),
            "lander" => Ok(Self::Lander),
            "average" | "avg" | "mean" => Ok(Self::Average),
            other => Err(AppError::invalid_input(format!(
                "Unknown one-rep-max formula: '{other}'. Valid options: brzycki, epley, lombardi, o_connor, lander, average"
            ))),
        }
    }
}
