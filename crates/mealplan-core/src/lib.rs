// ABOUTME: Core types and constants for the meal-plan nutrition engine
// ABOUTME: Foundation crate with error handling, nutrition models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Plan Core
//!
//! Foundation crate providing shared types and constants for the meal-plan
//! nutrition engine. The computation crate builds on these types; this crate
//! holds no logic beyond validation and simple arithmetic on the models.
//!
//! ## Modules
//!
//! - **errors**: `NutritionError` for engine failures, `AppError`/`ErrorCode` for callers
//! - **constants**: Rounding policy, calorie densities, and allocation constants
//! - **models**: Foods, unit definitions, meal items, meal slots, nutrition vectors

/// Unified error handling with standard error codes
pub mod errors;

/// Engine constants organized by domain
pub mod constants;

/// Core data models (Food, `MealItem`, `MealSlot`, `NutritionVector`, `DietArchetype`)
pub mod models;
