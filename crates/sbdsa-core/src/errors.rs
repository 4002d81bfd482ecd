// ABOUTME: Unified error handling for the SBD SA calculation libraries
// ABOUTME: Defines ErrorCode, AppError, AppResult, and the REST error envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SBD SA Platform

//! # Unified Error Handling
//!
//! Centralized error types shared by every calculation crate. The backend
//! maps these onto HTTP responses via [`ErrorCode::http_status`] and the
//! [`ErrorResponse`] envelope; library callers usually only inspect
//! [`AppError::code`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes produced by the calculation core.
///
/// The numeric code space matches the platform-wide convention
/// (3000-3999 validation). Pure calculations can only fail on bad input,
/// so the taxonomy is deliberately narrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Input is invalid (non-positive bodyweight, negative total, NaN, unknown enum spelling)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Input is syntactically valid but outside the supported range of a formula
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            // 400 Bad Request
            Self::InvalidInput | Self::ValueOutOfRange => 400,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
        }
    }
}

/// Unified error type for the calculation libraries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside a formula's supported range
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Error response format shared with the REST backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Payload of an [`ErrorResponse`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
            },
        }
    }
}
