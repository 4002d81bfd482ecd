// ABOUTME: Strength calculation algorithm selections
// ABOUTME: Contains OneRepMaxFormula and PointsFormula enum-dispatched strategies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SBD SA Platform

/// One-rep-max estimation formulas
pub mod one_rep_max;

/// Bodyweight-normalized scoring formulas
pub mod points;

pub use one_rep_max::OneRepMaxFormula;
pub use points::PointsFormula;
