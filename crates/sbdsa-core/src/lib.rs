// ABOUTME: Core types and constants for the SBD SA strength platform
// ABOUTME: Foundation crate with error handling, lifter models, and competition classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SBD SA Platform

#![deny(unsafe_code)]

//! # SBD SA Core
//!
//! Foundation crate providing shared types for the SBD SA strength platform.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and HTTP-ready responses
//! - **models**: Lifter vocabulary (`Gender`, `Equipment`), weight units, and competition classification

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Core data models (`Gender`, `Equipment`, `WeightUnit`, weight classes, age categories)
pub mod models;
