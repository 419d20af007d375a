// ABOUTME: Meal-plan nutrition computation and diet-ratio allocation engine
// ABOUTME: Pure functions over immutable snapshots of foods, meal items, and plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Engine
//!
//! Components, leaf to root:
//!
//! - `rounding` - shared normalization applied before values are surfaced
//! - `conversion` - unit rescaling and per-item nutrition contribution
//! - `aggregation` - totals per item list, slot, day, and plan
//! - `diet_ratio` - archetype to macro calorie-share table
//! - `allocation` - minimum macro grams per day and per meal
//! - `nutrition_calculator` - daily calorie target from physical stats
//!
//! None of these hold state. Inputs are borrowed immutably and every call
//! returns freshly computed values, so hosts can recompute on every update.

/// Nutrition aggregation across items, slots, days, and plans
pub mod aggregation;
/// Daily and per-meal macro target allocation
pub mod allocation;
/// Unit rescaling and nutrition contribution
pub mod conversion;
/// Diet archetype macro ratio table
pub mod diet_ratio;
/// Calorie target from physical stats
pub mod nutrition_calculator;
/// Rounding and threshold policy
pub mod rounding;

pub use aggregation::{
    aggregate, aggregate_by_slot, aggregate_day, aggregate_iter, aggregate_plan, aggregate_slots,
    macro_calorie_breakdown, summarize_day, total_calories, DaySummary, MacroBreakdown,
};
pub use allocation::{
    allocate_meal_targets, allocate_targets, allocate_targets_for_label, available_calories,
    target_progress, Macro, MacroAllocation, MacroProgress,
};
pub use conversion::{
    change_unit, contribution_of, item_contribution, rescale_for_display, rescale_on_unit_change,
};
pub use diet_ratio::{ratio_for, ratio_for_label, MacroRatio, DIET_RATIO_TABLE};
pub use nutrition_calculator::{
    calculate_bmr, calculate_tdee, daily_calorie_target, ActivityLevel, PhysicalStats, Sex,
    WeightGoal,
};
pub use rounding::{approx_eq, normalize, normalize_vector};
