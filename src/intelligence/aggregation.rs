// ABOUTME: Nutrition aggregation over meal items, meal slots, days, and whole plans
// ABOUTME: Sums per-item contributions; plan summaries are computed in parallel with rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition aggregation
//!
//! Every total in the engine comes from [`aggregate_iter`]: item, slot, day and
//! plan totals as well as [`total_calories`] are views over the same summation,
//! so they cannot drift apart. Aggregation is order independent; display order
//! of items never changes a total beyond floating-point tolerance.
//!
//! An invalid item aborts the whole aggregation with its typed error. Items are
//! never skipped or counted as zero.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use mealplan_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use mealplan_core::errors::NutritionError;
use mealplan_core::models::{MealItem, MealPlanDay, MealSlot, NutritionVector};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::conversion::item_contribution;
use super::rounding::{normalize, normalize_vector};

/// Sum the contributions of any sequence of meal items
///
/// # Errors
///
/// Returns the first item's validation failure
pub fn aggregate_iter<'a>(
    items: impl IntoIterator<Item = &'a MealItem>,
) -> Result<NutritionVector, NutritionError> {
    items.into_iter().map(item_contribution).sum()
}

/// Sum the contributions of a list of meal items; empty input yields the zero vector
///
/// # Errors
///
/// Returns the first item's validation failure
pub fn aggregate(items: &[MealItem]) -> Result<NutritionVector, NutritionError> {
    aggregate_iter(items)
}

/// Total calories of a list of meal items
///
/// # Errors
///
/// See [`aggregate`]
pub fn total_calories(items: &[MealItem]) -> Result<f64, NutritionError> {
    aggregate(items).map(|total| total.calories)
}

/// Aggregate the union of all slots (breakfast, lunch, dinner, and any extra slots)
///
/// # Errors
///
/// See [`aggregate`]
pub fn aggregate_slots(
    slots: &BTreeMap<MealSlot, Vec<MealItem>>,
) -> Result<NutritionVector, NutritionError> {
    aggregate_iter(slots.values().flatten())
}

/// Aggregate every item placed on a day
///
/// # Errors
///
/// See [`aggregate`]
pub fn aggregate_day(day: &MealPlanDay) -> Result<NutritionVector, NutritionError> {
    aggregate_slots(&day.slots)
}

/// Per-slot totals of a day
///
/// # Errors
///
/// See [`aggregate`]
pub fn aggregate_by_slot(
    day: &MealPlanDay,
) -> Result<BTreeMap<MealSlot, NutritionVector>, NutritionError> {
    day.slots
        .iter()
        .map(|(slot, items)| aggregate(items).map(|total| (*slot, total)))
        .collect()
}

/// Normalized per-slot and per-day totals, ready for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DaySummary {
    /// Calendar date
    pub date: NaiveDate,
    /// Totals per slot
    pub slots: BTreeMap<MealSlot, NutritionVector>,
    /// Day total
    pub total: NutritionVector,
}

/// Summarize a single day
///
/// The day total is the sum of the unrounded slot totals; rounding happens
/// only on the way out.
///
/// # Errors
///
/// See [`aggregate`]
pub fn summarize_day(day: &MealPlanDay) -> Result<DaySummary, NutritionError> {
    let by_slot = aggregate_by_slot(day)?;
    let total: NutritionVector = by_slot.values().sum();

    debug!(
        date = %day.date,
        slots = by_slot.len(),
        calories = total.calories,
        "Aggregated meal plan day"
    );

    Ok(DaySummary {
        date: day.date,
        slots: by_slot
            .into_iter()
            .map(|(slot, vector)| (slot, normalize_vector(&vector)))
            .collect(),
        total: normalize_vector(&total),
    })
}

/// Summarize every day of a plan, in input order
///
/// Days are independent, so they are computed in parallel.
///
/// # Errors
///
/// Returns a failure from any day
pub fn aggregate_plan(days: &[MealPlanDay]) -> Result<Vec<DaySummary>, NutritionError> {
    days.par_iter().map(summarize_day).collect()
}

/// Share of macro calories coming from each macro, in percent
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroBreakdown {
    /// Carbohydrates as percentage of macro calories
    pub carbs_percent: f64,
    /// Protein as percentage of macro calories
    pub protein_percent: f64,
    /// Fat as percentage of macro calories
    pub fat_percent: f64,
}

/// Percentage split of macro calories for a total; all zero when there are none
#[must_use]
pub fn macro_calorie_breakdown(total: &NutritionVector) -> MacroBreakdown {
    let carbs_kcal = total.carbs * KCAL_PER_GRAM_CARBS;
    let protein_kcal = total.proteins * KCAL_PER_GRAM_PROTEIN;
    let fat_kcal = total.fats * KCAL_PER_GRAM_FAT;
    let macro_kcal = carbs_kcal + protein_kcal + fat_kcal;

    if macro_kcal <= 0.0 || !macro_kcal.is_finite() {
        return MacroBreakdown::default();
    }

    MacroBreakdown {
        carbs_percent: normalize(carbs_kcal / macro_kcal * 100.0),
        protein_percent: normalize(protein_kcal / macro_kcal * 100.0),
        fat_percent: normalize(fat_kcal / macro_kcal * 100.0),
    }
}
