// ABOUTME: Error types for nutrition computation and application-level reporting
// ABOUTME: NutritionError for engine failures, AppError/ErrorCode for callers rendering them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! The engine fails fast with a [`NutritionError`] whenever its inputs break a
//! precondition. Callers that need a uniform shape (the CLI, a host UI layer)
//! convert it into an [`AppError`] carrying a stable [`ErrorCode`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use thiserror::Error;

/// Typed failures raised by the pure nutrition computations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NutritionError {
    /// A meal item's unit index is outside the referenced food's unit list
    #[error("food '{food_id}' has no unit at index {unit_index} ({unit_count} units declared)")]
    InvalidUnitReference {
        /// Food the meal item points at
        food_id: String,
        /// Requested unit index
        unit_index: usize,
        /// Number of units the food declares
        unit_count: usize,
    },

    /// A unit definition (or conversion factor) is zero, negative, or not finite
    #[error("food '{food_id}' unit {unit_index} has non-positive amount {amount}")]
    NonPositiveUnitFactor {
        /// Food owning the unit (empty when the factor was passed directly)
        food_id: String,
        /// Index of the offending unit
        unit_index: usize,
        /// The rejected factor
        amount: f64,
    },

    /// A numeric input is NaN, infinite, or negative where that is disallowed
    #[error("invalid numeric input for {field}: {value}")]
    InvalidNumericInput {
        /// Name of the rejected field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A meal item references a food that the catalog does not contain
    #[error("food '{food_id}' not found in catalog")]
    UnknownFood {
        /// The unresolved food id
        food_id: String,
    },

    /// A food record is structurally invalid
    #[error("food '{food_id}' is invalid: {reason}")]
    InvalidFood {
        /// The rejected food
        food_id: String,
        /// What is wrong with it
        reason: String,
    },
}

impl NutritionError {
    /// Reject a non-finite or negative value for `field`
    #[must_use]
    pub const fn invalid_numeric(field: &'static str, value: f64) -> Self {
        Self::InvalidNumericInput { field, value }
    }

    /// Reject a conversion factor that was supplied without a food context
    #[must_use]
    pub fn bare_factor(amount: f64) -> Self {
        Self::NonPositiveUnitFactor {
            food_id: String::new(),
            unit_index: 0,
            amount,
        }
    }

    /// Whether this failure stems from a broken unit reference or unit factor
    #[must_use]
    pub const fn is_unit_fault(&self) -> bool {
        matches!(
            self,
            Self::InvalidUnitReference { .. } | Self::NonPositiveUnitFactor { .. }
        )
    }
}

/// Check that `value` is finite and not negative
///
/// # Errors
///
/// Returns `NutritionError::InvalidNumericInput` naming `field` otherwise
pub fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64, NutritionError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(NutritionError::invalid_numeric(field, value))
    }
}

/// Standard error codes surfaced to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Generic invalid input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Unit index or unit factor is unusable
    #[serde(rename = "INVALID_UNIT_REFERENCE")]
    InvalidUnitReference = 3001,
    /// Non-finite or out-of-range number
    #[serde(rename = "INVALID_NUMERIC_INPUT")]
    InvalidNumericInput = 3002,

    // Resource Management (4000-4999)
    /// Referenced resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Configuration (6000-6999)
    /// Configuration failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// File could not be read or written
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Data serialization/deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidUnitReference => "The selected unit is not valid for this food",
            Self::InvalidNumericInput => "A numeric value is missing, infinite, or negative",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for application entry points
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional structured context
    pub details: Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Value::Null,
            source: None,
        }
    }

    /// Add details to the error
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<NutritionError> for AppError {
    fn from(error: NutritionError) -> Self {
        let code = match &error {
            NutritionError::InvalidUnitReference { .. }
            | NutritionError::NonPositiveUnitFactor { .. } => ErrorCode::InvalidUnitReference,
            NutritionError::InvalidNumericInput { .. } => ErrorCode::InvalidNumericInput,
            NutritionError::UnknownFood { .. } => ErrorCode::ResourceNotFound,
            NutritionError::InvalidFood { .. } => ErrorCode::InvalidInput,
        };
        let message = error.to_string();
        Self::new(code, message).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::new(ErrorCode::StorageError, error.to_string()).with_source(error)
    }
}

/// Serializable error payload for hosts that render failures
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub details: Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            code: error.code,
            message: error.message,
            details: error.details,
        }
    }
}
