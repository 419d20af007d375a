// ABOUTME: Main library entry point for the meal-plan nutrition engine
// ABOUTME: Unit conversion, nutrition aggregation, and diet-ratio target allocation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Plan Engine
//!
//! Computation core of a meal planner. Given a catalog of foods and the items a
//! user placed on a calendar, the engine answers:
//!
//! - how much of each nutrient a meal item, meal, day, or week contains
//! - how an amount changes when the user switches the unit of an item
//! - how many grams of carbs, protein, and fat a diet archetype requires for a
//!   daily calorie goal
//!
//! ## Architecture
//!
//! - **Models** (`mealplan-core`): foods, unit tables, meal items, nutrition vectors
//! - **Intelligence**: pure computation over immutable snapshots
//! - **Config**: calorie-target and meal-split settings with env overrides
//! - **Input**: JSON loading of catalogs and plans for the CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use mealplan_engine::intelligence::allocate_targets;
//! use mealplan_engine::models::DietArchetype;
//!
//! let targets = allocate_targets(2000.0, DietArchetype::Anything)?;
//! assert_eq!(targets.carbs_grams, 194);
//! # Ok::<(), mealplan_engine::errors::NutritionError>(())
//! ```

/// Configuration management
pub mod config;

/// JSON loading of food catalogs and meal plans
pub mod input;

/// Nutrition computation: conversion, aggregation, ratios, allocation
pub mod intelligence;

/// Structured logging setup
pub mod logging;

// Re-export the foundation crate modules so callers need a single dependency
pub use mealplan_core::{constants, errors, models};
