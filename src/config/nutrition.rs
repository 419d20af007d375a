// ABOUTME: Nutrition configuration for calorie targets and per-meal allocation
// ABOUTME: Configures BMR coefficients, activity factors, weight goals, and meal split proportions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle` et al. (2010) - Exercise Physiology

use mealplan_core::constants::allocation::PROPORTION_TOLERANCE;
use mealplan_core::models::{DietArchetype, MealSlot};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Nutrition configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie adjustments per weight goal
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Share of daily calories per meal slot
    pub meal_split: MealSplitConfig,
    /// Archetype used when the user has not picked one
    pub default_diet: DietArchetype,
}

/// BMR (Basal Metabolic Rate) calculation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

/// Calorie adjustment applied to maintenance calories per weight goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Adjustment when losing weight (kcal/day, negative)
    pub lose_kcal: f64,
    /// Adjustment when gaining weight (kcal/day, positive)
    pub gain_kcal: f64,
    /// Lowest daily target ever produced (kcal/day)
    pub minimum_daily_kcal: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            lose_kcal: -500.0,
            gain_kcal: 300.0,
            minimum_daily_kcal: 1200.0,
        }
    }
}

/// Share of the daily calorie target assigned to each meal slot
///
/// Proportions must each lie in 0.0-1.0 and add up to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSplitConfig {
    /// Breakfast share (default 0.30)
    pub breakfast: f64,
    /// Lunch share (default 0.35)
    pub lunch: f64,
    /// Dinner share (default 0.35)
    pub dinner: f64,
    /// Snack share (default 0.0)
    #[serde(default)]
    pub snack: f64,
    /// Dessert share (default 0.0)
    #[serde(default)]
    pub dessert: f64,
}

impl Default for MealSplitConfig {
    fn default() -> Self {
        Self {
            breakfast: 0.30,
            lunch: 0.35,
            dinner: 0.35,
            snack: 0.0,
            dessert: 0.0,
        }
    }
}

impl MealSplitConfig {
    const fn entries(&self) -> [(MealSlot, f64); 5] {
        [
            (MealSlot::Breakfast, self.breakfast),
            (MealSlot::Lunch, self.lunch),
            (MealSlot::Dinner, self.dinner),
            (MealSlot::Snack, self.snack),
            (MealSlot::Dessert, self.dessert),
        ]
    }

    /// Slots with a non-zero share, in day order
    #[must_use]
    pub fn proportions(&self) -> Vec<(MealSlot, f64)> {
        self.entries()
            .into_iter()
            .filter(|(_, share)| *share > 0.0)
            .collect()
    }

    /// Validate that every share is within 0.0-1.0 and that they sum to 1.0
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a share outside 0.0-1.0 and
    /// `ConfigError::InvalidWeights` when the shares do not add up to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (slot, share) in self.entries() {
            if !(0.0..=1.0).contains(&share) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{slot} share must be between 0.0 and 1.0, got {share}"
                )));
            }
        }

        let sum: f64 = self.entries().iter().map(|(_, share)| share).sum();
        if (sum - 1.0).abs() > PROPORTION_TOLERANCE {
            return Err(ConfigError::InvalidWeights(format!(
                "meal split shares must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

impl NutritionConfig {
    const fn numeric_settings(&self) -> [(&'static str, f64); 13] {
        let bmr = &self.bmr;
        let factors = &self.activity_factors;
        let goals = &self.goal_adjustments;
        [
            ("bmr.msj_weight_coef", bmr.msj_weight_coef),
            ("bmr.msj_height_coef", bmr.msj_height_coef),
            ("bmr.msj_age_coef", bmr.msj_age_coef),
            ("bmr.msj_male_constant", bmr.msj_male_constant),
            ("bmr.msj_female_constant", bmr.msj_female_constant),
            ("activity_factors.sedentary", factors.sedentary),
            ("activity_factors.lightly_active", factors.lightly_active),
            ("activity_factors.moderately_active", factors.moderately_active),
            ("activity_factors.very_active", factors.very_active),
            ("activity_factors.extra_active", factors.extra_active),
            ("goal_adjustments.lose_kcal", goals.lose_kcal),
            ("goal_adjustments.gain_kcal", goals.gain_kcal),
            ("goal_adjustments.minimum_daily_kcal", goals.minimum_daily_kcal),
        ]
    }

    /// Validate the nutrition configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a NaN or infinite setting,
    /// otherwise the first failed range or ordering check
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Range comparisons below are all false for NaN
        if let Some((name, value)) = self
            .numeric_settings()
            .into_iter()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(ConfigError::ValueOutOfRange(format!(
                "{name} must be a finite number, got {value}"
            )));
        }

        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive".to_owned(),
            ));
        }

        let factors = &self.activity_factors;
        if factors.sedentary < 1.0 || factors.extra_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5".to_owned(),
            ));
        }
        if factors.sedentary >= factors.lightly_active
            || factors.lightly_active >= factors.moderately_active
            || factors.moderately_active >= factors.very_active
            || factors.very_active >= factors.extra_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        let goals = &self.goal_adjustments;
        if goals.lose_kcal > 0.0 || goals.gain_kcal < 0.0 {
            return Err(ConfigError::InvalidRange(
                "lose adjustment must be <= 0 and gain adjustment must be >= 0",
            ));
        }
        if goals.minimum_daily_kcal <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "minimum daily calories must be positive".to_owned(),
            ));
        }

        self.meal_split.validate()
    }
}
