// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Rounding policy, calorie densities, and allocation constants for the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by the part of the engine that consumes them.

/// Shared numeric normalization applied before values are compared or displayed
pub mod rounding {
    /// Distance from an integer under which a value snaps to that integer
    pub const EPSILON: f64 = 1e-6;
    /// Decimal places kept for non-integral values
    pub const DECIMALS: i32 = 3;
    /// Magnitude above which decimal rounding is skipped (`value * 10^DECIMALS`
    /// would no longer be exactly representable)
    pub const DECIMAL_ROUNDING_LIMIT: f64 = 1e12;
}

/// Energy density of the calorie-bearing macros
pub mod energy {
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Kilocalories per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Daily target allocation
pub mod allocation {
    /// Share of daily calories reserved for micronutrients and never allocated to macros
    pub const MICRONUTRIENT_CALORIE_RESERVE_RATIO: f64 = 0.03;
    /// Tolerance used when checking that proportion tables add up
    pub const PROPORTION_TOLERANCE: f64 = 1e-6;
}

/// Input limits for physical stats
pub mod limits {
    /// Maximum accepted body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 300.0;
    /// Maximum accepted height (cm)
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Minimum age the Mifflin-St Jeor equation is validated for
    pub const MIN_AGE_YEARS: u32 = 10;
    /// Maximum accepted age
    pub const MAX_AGE_YEARS: u32 = 120;
    /// Floor applied to computed BMR (kcal/day)
    pub const MIN_BMR_KCAL: f64 = 1000.0;
}
