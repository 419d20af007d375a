// ABOUTME: Daily calorie target derived from a user's physical stats
// ABOUTME: Mifflin-St Jeor BMR, activity-factor TDEE, and weight-goal adjustment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Turns the physical stats entered in the nutrition settings into the daily
//! calorie target consumed by target allocation.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use mealplan_core::constants::limits::{
    MAX_AGE_YEARS, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE_YEARS, MIN_BMR_KCAL,
};
use mealplan_core::errors::NutritionError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ActivityFactorsConfig, BmrConfig, NutritionConfig};

/// Sex used by the BMR equation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male constant (+5)
    Male,
    /// Female constant (-161)
    Female,
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    ModeratelyActive,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extra active (hard training 2x/day)
    ExtraActive,
}

/// Weight goal applied on top of maintenance calories
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeightGoal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    #[default]
    Maintain,
    /// Caloric surplus
    Gain,
}

/// Physical stats entered by the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PhysicalStats {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age: u32,
    /// Sex for the BMR constant
    pub sex: Sex,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
}

fn ensure_in_range(field: &'static str, value: f64, max: f64) -> Result<f64, NutritionError> {
    if value.is_finite() && value > 0.0 && value <= max {
        Ok(value)
    } else {
        Err(NutritionError::invalid_numeric(field, value))
    }
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
///
/// The result is floored at 1000 kcal/day.
///
/// # Errors
///
/// Returns `InvalidNumericInput` if weight, height, or age is out of range, or
/// if the configured coefficients produce a non-finite value
pub fn calculate_bmr(stats: &PhysicalStats, config: &BmrConfig) -> Result<f64, NutritionError> {
    let weight_kg = ensure_in_range("weight_kg", stats.weight_kg, MAX_WEIGHT_KG)?;
    let height_cm = ensure_in_range("height_cm", stats.height_cm, MAX_HEIGHT_CM)?;
    if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&stats.age) {
        return Err(NutritionError::invalid_numeric(
            "age",
            f64::from(stats.age),
        ));
    }

    let sex_constant = match stats.sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    let bmr = config.msj_age_coef.mul_add(
        f64::from(stats.age),
        config
            .msj_weight_coef
            .mul_add(weight_kg, config.msj_height_coef * height_cm),
    ) + sex_constant;
    if !bmr.is_finite() {
        return Err(NutritionError::invalid_numeric("bmr", bmr));
    }

    Ok(bmr.max(MIN_BMR_KCAL))
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x activity factor
///
/// # Errors
///
/// Returns `InvalidNumericInput` if BMR is not positive and finite, or if the
/// configured activity factor makes the result non-finite
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> Result<f64, NutritionError> {
    if !bmr.is_finite() || bmr <= 0.0 {
        return Err(NutritionError::invalid_numeric("bmr", bmr));
    }

    let activity_factor = match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::LightlyActive => config.lightly_active,
        ActivityLevel::ModeratelyActive => config.moderately_active,
        ActivityLevel::VeryActive => config.very_active,
        ActivityLevel::ExtraActive => config.extra_active,
    };

    let tdee = bmr * activity_factor;
    if !tdee.is_finite() {
        return Err(NutritionError::invalid_numeric("activity_factor", activity_factor));
    }
    Ok(tdee)
}

/// Daily calorie target for a user's stats and weight goal
///
/// TDEE plus the configured goal adjustment, never below the configured
/// minimum, rounded to whole kilocalories.
///
/// # Errors
///
/// See [`calculate_bmr`] and [`calculate_tdee`]; also returns
/// `InvalidNumericInput` when the goal adjustment or minimum is not finite
pub fn daily_calorie_target(
    stats: &PhysicalStats,
    goal: WeightGoal,
    config: &NutritionConfig,
) -> Result<f64, NutritionError> {
    let bmr = calculate_bmr(stats, &config.bmr)?;
    let tdee = calculate_tdee(bmr, stats.activity_level, &config.activity_factors)?;

    let adjustment = match goal {
        WeightGoal::Lose => config.goal_adjustments.lose_kcal,
        WeightGoal::Maintain => 0.0,
        WeightGoal::Gain => config.goal_adjustments.gain_kcal,
    };
    let minimum = config.goal_adjustments.minimum_daily_kcal;
    if !minimum.is_finite() {
        return Err(NutritionError::invalid_numeric("minimum_daily_kcal", minimum));
    }
    // f64::max would silently prefer the minimum over a NaN target
    let adjusted = tdee + adjustment;
    if !adjusted.is_finite() {
        return Err(NutritionError::invalid_numeric("daily_calories", adjusted));
    }
    let target = adjusted.max(minimum).round();

    debug!(bmr, tdee, ?goal, target, "Computed daily calorie target");

    Ok(target)
}
