// ABOUTME: Macro target allocation from a daily calorie target and a diet archetype
// ABOUTME: Daily and per-meal minimum grams, plus progress of a day's totals against them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Target allocation
//!
//! Converts a daily calorie target into minimum gram targets per macro:
//!
//! 1. reserve [`MICRONUTRIENT_CALORIE_RESERVE_RATIO`] of the calories,
//! 2. split the rest by the archetype's ratio row,
//! 3. divide by the macro's energy density and round half away from zero.
//!
//! The results are floors ("at least N g"), never exact prescriptions.

use std::collections::BTreeMap;
use std::fmt;

use mealplan_core::constants::allocation::MICRONUTRIENT_CALORIE_RESERVE_RATIO;
use mealplan_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use mealplan_core::errors::{ensure_non_negative, NutritionError};
use mealplan_core::models::{DietArchetype, MealSlot, NutritionVector};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::diet_ratio::{ratio_for, MacroRatio};
use super::rounding::normalize;
use crate::config::MealSplitConfig;

/// Calorie-bearing macronutrient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Macro {
    /// Carbohydrate
    Carbs,
    /// Protein
    Protein,
    /// Fat
    Fat,
}

impl Macro {
    /// All macros in display order
    pub const ALL: [Self; 3] = [Self::Carbs, Self::Protein, Self::Fat];

    /// Kilocalories per gram
    #[must_use]
    pub const fn kcal_per_gram(self) -> f64 {
        match self {
            Self::Carbs => KCAL_PER_GRAM_CARBS,
            Self::Protein => KCAL_PER_GRAM_PROTEIN,
            Self::Fat => KCAL_PER_GRAM_FAT,
        }
    }

    /// Share of this macro in a ratio row
    #[must_use]
    pub const fn share(self, ratio: &MacroRatio) -> f64 {
        match self {
            Self::Carbs => ratio.carbs,
            Self::Protein => ratio.protein,
            Self::Fat => ratio.fat,
        }
    }

    /// Grams of this macro in a nutrition total
    #[must_use]
    pub const fn grams_in(self, total: &NutritionVector) -> f64 {
        match self {
            Self::Carbs => total.carbs,
            Self::Protein => total.proteins,
            Self::Fat => total.fats,
        }
    }

    /// Lowercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Carbs => "carbs",
            Self::Protein => "protein",
            Self::Fat => "fat",
        }
    }
}

impl fmt::Display for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum recommended grams per macro
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroAllocation {
    /// Minimum grams of carbohydrate
    pub carbs_grams: u32,
    /// Minimum grams of protein
    pub protein_grams: u32,
    /// Minimum grams of fat
    pub fat_grams: u32,
}

impl MacroAllocation {
    /// Target grams of one macro
    #[must_use]
    pub const fn grams(&self, nutrient: Macro) -> u32 {
        match nutrient {
            Macro::Carbs => self.carbs_grams,
            Macro::Protein => self.protein_grams,
            Macro::Fat => self.fat_grams,
        }
    }

    /// Human-readable minimum phrasing
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "at least {}g carbs, {}g protein, {}g fat",
            self.carbs_grams, self.protein_grams, self.fat_grams
        )
    }
}

/// Calories left for macros once the micronutrient reserve is taken out
#[must_use]
pub fn available_calories(daily_calories: f64) -> f64 {
    daily_calories * (1.0 - MICRONUTRIENT_CALORIE_RESERVE_RATIO)
}

/// Rounded grams of one macro; targets that do not fit a `u32` are rejected
/// against the daily calories they came from
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn grams_for(
    daily_calories: f64,
    available: f64,
    ratio: &MacroRatio,
    nutrient: Macro,
) -> Result<u32, NutritionError> {
    let grams = (available * nutrient.share(ratio) / nutrient.kcal_per_gram()).round();
    if !(0.0..=f64::from(u32::MAX)).contains(&grams) {
        return Err(NutritionError::invalid_numeric("daily_calories", daily_calories));
    }
    Ok(grams as u32)
}

/// Minimum grams per macro for a day
///
/// # Errors
///
/// Returns `InvalidNumericInput` when `daily_calories` is negative, not finite,
/// or so large that a gram target overflows
pub fn allocate_targets(
    daily_calories: f64,
    archetype: DietArchetype,
) -> Result<MacroAllocation, NutritionError> {
    let daily_calories = ensure_non_negative("daily_calories", daily_calories)?;
    let ratio = ratio_for(archetype);
    let available = available_calories(daily_calories);

    let allocation = MacroAllocation {
        carbs_grams: grams_for(daily_calories, available, &ratio, Macro::Carbs)?,
        protein_grams: grams_for(daily_calories, available, &ratio, Macro::Protein)?,
        fat_grams: grams_for(daily_calories, available, &ratio, Macro::Fat)?,
    };

    debug!(
        daily_calories,
        archetype = %archetype,
        carbs_g = allocation.carbs_grams,
        protein_g = allocation.protein_grams,
        fat_g = allocation.fat_grams,
        "Allocated macro targets"
    );

    Ok(allocation)
}

/// [`allocate_targets`] for a string-keyed archetype; unknown labels use `Anything`
///
/// # Errors
///
/// See [`allocate_targets`]
pub fn allocate_targets_for_label(
    daily_calories: f64,
    archetype: &str,
) -> Result<MacroAllocation, NutritionError> {
    allocate_targets(daily_calories, DietArchetype::from_str_lossy(archetype))
}

/// Split the daily calories across meal slots and allocate each slot
///
/// Slots with a zero proportion are left out.
///
/// # Errors
///
/// See [`allocate_targets`]
pub fn allocate_meal_targets(
    daily_calories: f64,
    archetype: DietArchetype,
    split: &MealSplitConfig,
) -> Result<BTreeMap<MealSlot, MacroAllocation>, NutritionError> {
    let daily_calories = ensure_non_negative("daily_calories", daily_calories)?;

    split
        .proportions()
        .into_iter()
        .map(|(slot, proportion)| {
            allocate_targets(daily_calories * proportion, archetype).map(|alloc| (slot, alloc))
        })
        .collect()
}

/// Progress of actual intake against one macro minimum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroProgress {
    /// Macro being tracked
    pub nutrient: Macro,
    /// Minimum grams
    pub target_grams: u32,
    /// Grams planned (normalized)
    pub actual_grams: f64,
    /// Grams still needed to reach the minimum (normalized, never negative)
    pub remaining_grams: f64,
    /// Whether the minimum is reached
    pub met: bool,
}

/// Compare a nutrition total against macro minimums
#[must_use]
pub fn target_progress(total: &NutritionVector, targets: &MacroAllocation) -> Vec<MacroProgress> {
    Macro::ALL
        .into_iter()
        .map(|nutrient| {
            let target = f64::from(targets.grams(nutrient));
            let actual = normalize(nutrient.grams_in(total));
            MacroProgress {
                nutrient,
                target_grams: targets.grams(nutrient),
                actual_grams: actual,
                remaining_grams: normalize((target - actual).max(0.0)),
                met: actual >= target,
            }
        })
        .collect()
}
