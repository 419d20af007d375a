// ABOUTME: Planner configuration loaded from defaults and environment overrides
// ABOUTME: Provides a validated global instance and the nutrition sub-configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planner Configuration Module
//!
//! Configuration is resolved in two layers:
//!
//! 1. Environment variables (highest priority), e.g.
//!    ```bash
//!    export MEALPLAN_DEFAULT_DIET=keto
//!    export MEALPLAN_MEAL_SPLIT_BREAKFAST=0.25
//!    ```
//! 2. Default values
//!
//! The result is validated before use.

/// Configuration error types
pub mod error;
/// Nutrition configuration (BMR, activity, goals, meal split)
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MealSplitConfig, NutritionConfig,
};

use mealplan_core::models::DietArchetype;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PLANNER_CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

/// Main planner configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Configuration for calorie targets and meal allocation
    pub nutrition: NutritionConfig,
}

impl PlannerConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planner config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first failed check
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let nutrition = &mut self.nutrition;

        // Meal split overrides
        Self::apply_env_var("MEALPLAN_MEAL_SPLIT_BREAKFAST", &mut nutrition.meal_split.breakfast)?;
        Self::apply_env_var("MEALPLAN_MEAL_SPLIT_LUNCH", &mut nutrition.meal_split.lunch)?;
        Self::apply_env_var("MEALPLAN_MEAL_SPLIT_DINNER", &mut nutrition.meal_split.dinner)?;
        Self::apply_env_var("MEALPLAN_MEAL_SPLIT_SNACK", &mut nutrition.meal_split.snack)?;
        Self::apply_env_var("MEALPLAN_MEAL_SPLIT_DESSERT", &mut nutrition.meal_split.dessert)?;

        // Goal overrides
        Self::apply_env_var("MEALPLAN_GOAL_LOSE_KCAL", &mut nutrition.goal_adjustments.lose_kcal)?;
        Self::apply_env_var("MEALPLAN_GOAL_GAIN_KCAL", &mut nutrition.goal_adjustments.gain_kcal)?;
        Self::apply_env_var(
            "MEALPLAN_MINIMUM_DAILY_KCAL",
            &mut nutrition.goal_adjustments.minimum_daily_kcal,
        )?;

        // Activity factor overrides
        Self::apply_env_var(
            "MEALPLAN_ACTIVITY_SEDENTARY",
            &mut nutrition.activity_factors.sedentary,
        )?;
        Self::apply_env_var(
            "MEALPLAN_ACTIVITY_LIGHTLY_ACTIVE",
            &mut nutrition.activity_factors.lightly_active,
        )?;
        Self::apply_env_var(
            "MEALPLAN_ACTIVITY_MODERATELY_ACTIVE",
            &mut nutrition.activity_factors.moderately_active,
        )?;
        Self::apply_env_var(
            "MEALPLAN_ACTIVITY_VERY_ACTIVE",
            &mut nutrition.activity_factors.very_active,
        )?;
        Self::apply_env_var(
            "MEALPLAN_ACTIVITY_EXTRA_ACTIVE",
            &mut nutrition.activity_factors.extra_active,
        )?;

        // Diet archetype: strict here, a typo in deployment config should not pass silently
        if let Ok(label) = env::var("MEALPLAN_DEFAULT_DIET") {
            nutrition.default_diet = DietArchetype::parse(&label)
                .ok_or_else(|| ConfigError::Parse(format!("Invalid diet archetype: {label}")))?;
        }

        Ok(self)
    }
}
