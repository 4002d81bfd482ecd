// ABOUTME: Core data models for the SBD SA powerlifting platform
// ABOUTME: Re-exports Gender, Equipment, WeightUnit, and competition classification types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SBD SA Platform

//! # Data Models
//!
//! Shared domain types used throughout the calculation crates and by the
//! surrounding application.
//!
//! ## Design Principles
//!
//! - **Plain data**: no entity owns persistence; everything is transient call input
//! - **Serializable**: all types share the platform's JSON vocabulary
//!   (`"male"`, `"raw"`, `"kg"`, ...)
//! - **Closed sets**: competition classifications are fixed enums, not open strings
//!
//! ## Core Models
//!
//! - [`Gender`]: coefficient selection for scoring formulas
//! - [`Equipment`]: raw vs. equipped lifting class
//! - [`WeightUnit`]: kilogram/pound unit tag with exact conversion
//! - [`AgeCategory`], [`weight_class`]: IPF-derived competition classification

// Domain modules
mod competition;
mod lifter;
mod units;

// Re-export all public types for convenience
pub use competition::{weight_class, AgeCategory};
pub use lifter::{Equipment, Gender};
pub use units::WeightUnit;
