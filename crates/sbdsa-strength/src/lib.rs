// ABOUTME: Strength calculation library for the SBD SA platform
// ABOUTME: One-rep-max estimation, training percentages, plate loading, and scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SBD SA Platform

#![deny(unsafe_code)]

//! # SBD SA Strength
//!
//! Pure calculation library behind the platform's powerlifting analytics:
//! one-rep-max estimation, training-percentage prescription, plate-loading
//! decomposition, and bodyweight-normalized scoring. The four groups are
//! independent leaves composed only by the caller; every operation is a
//! one-shot pure computation with no shared state, safe to invoke from any
//! number of threads without synchronization.
//!
//! ## Modules
//!
//! - **algorithms**: Enum-dispatched formula strategies (`OneRepMaxFormula`, `PointsFormula`)
//! - **percentages**: Fixed 55%-95% training ladder from a one-rep max
//! - **plates**: Greedy barbell loading against a rack or a bounded inventory

/// Enum-dispatched calculation formulas (one-rep max, scoring)
pub mod algorithms;

/// Training-percentage ladder generation
pub mod percentages;

/// Greedy plate-loading solver for racks and bounded inventories
pub mod plates;
