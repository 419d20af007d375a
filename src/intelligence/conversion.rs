// ABOUTME: Unit conversion for meal items using each food's declared unit table
// ABOUTME: Rescales amounts on unit change and scales nutrition to an actual quantity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unit conversion
//!
//! A food declares its nutrition per one reference unit and an ordered table of
//! unit definitions, each with a strictly positive scale factor. This module is
//! the single place where amounts are converted between units and where a
//! food's nutrition is scaled to the quantity placed on the plan.

use mealplan_core::errors::{ensure_non_negative, NutritionError};
use mealplan_core::models::{MealItem, NutritionVector};
use tracing::debug;

use super::rounding::normalize;

fn ensure_positive_factor(factor: f64) -> Result<f64, NutritionError> {
    if factor.is_finite() && factor > 0.0 {
        Ok(factor)
    } else {
        Err(NutritionError::bare_factor(factor))
    }
}

/// Rescale an amount so it keeps representing the same quantity after the
/// selected unit changes
///
/// Formula: `new_amount = new_unit_factor * current_amount / current_unit_factor`
///
/// The result keeps full precision; use [`rescale_for_display`] when the value
/// is about to be shown.
///
/// # Errors
///
/// Returns `NonPositiveUnitFactor` if either factor is not strictly positive and
/// finite, and `InvalidNumericInput` for a negative or non-finite amount
pub fn rescale_on_unit_change(
    current_amount: f64,
    current_unit_factor: f64,
    new_unit_factor: f64,
) -> Result<f64, NutritionError> {
    let current_amount = ensure_non_negative("amount", current_amount)?;
    let current_unit_factor = ensure_positive_factor(current_unit_factor)?;
    let new_unit_factor = ensure_positive_factor(new_unit_factor)?;

    Ok((new_unit_factor * current_amount) / current_unit_factor)
}

/// [`rescale_on_unit_change`] followed by the rounding policy
///
/// # Errors
///
/// See [`rescale_on_unit_change`]
pub fn rescale_for_display(
    current_amount: f64,
    current_unit_factor: f64,
    new_unit_factor: f64,
) -> Result<f64, NutritionError> {
    rescale_on_unit_change(current_amount, current_unit_factor, new_unit_factor).map(normalize)
}

/// Nutrition contributed by `amount` of a food whose nutrition is expressed per
/// `conversion_factor` (the reference unit's amount)
///
/// Formula: `nutrition[k] * amount / conversion_factor` for every nutrient `k`
///
/// # Errors
///
/// Returns `NonPositiveUnitFactor` for a zero, negative, or non-finite factor
/// (never `Infinity`/`NaN`), and `InvalidNumericInput` for a bad amount
pub fn contribution_of(
    nutrition_per_reference_unit: &NutritionVector,
    amount: f64,
    conversion_factor: f64,
) -> Result<NutritionVector, NutritionError> {
    let amount = ensure_non_negative("amount", amount)?;
    let conversion_factor = ensure_positive_factor(conversion_factor)?;

    Ok(nutrition_per_reference_unit.map(|value| value * amount / conversion_factor))
}

/// Nutrition contributed by one meal item
///
/// The item's amount is first rescaled from its selected unit onto the
/// reference unit, so the result does not depend on which unit is shown.
/// An item that points at a missing unit is a data-integrity fault, not a
/// zero contribution.
///
/// # Errors
///
/// Returns `InvalidUnitReference`, `NonPositiveUnitFactor`, or `InvalidNumericInput`
pub fn item_contribution(item: &MealItem) -> Result<NutritionVector, NutritionError> {
    item.validate()?;
    let selected_factor = item.food.unit_factor(item.unit)?;
    let reference_factor = item.food.reference_factor()?;
    let reference_amount = rescale_on_unit_change(item.amount, selected_factor, reference_factor)?;

    contribution_of(&item.food.nutrition, reference_amount, reference_factor)
}

/// New meal item with `new_unit` selected and the amount rescaled to match
///
/// The input item is left untouched.
///
/// # Errors
///
/// Returns `InvalidUnitReference` / `NonPositiveUnitFactor` when either the
/// current or the new unit is unusable, and `InvalidNumericInput` for a bad amount
pub fn change_unit(item: &MealItem, new_unit: usize) -> Result<MealItem, NutritionError> {
    let current_factor = item.food.unit_factor(item.unit)?;
    let new_factor = item.food.unit_factor(new_unit)?;
    let amount = rescale_on_unit_change(item.amount, current_factor, new_factor)?;

    debug!(
        food_id = %item.food.id,
        from_unit = item.unit,
        to_unit = new_unit,
        amount,
        "Rescaled meal item for unit change"
    );

    Ok(MealItem {
        food: item.food.clone(),
        amount,
        unit: new_unit,
    })
}
