// ABOUTME: Shared numeric normalization applied before values are compared or displayed
// ABOUTME: Snaps near-integers and rounds everything else to a fixed number of decimals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Rounding / threshold policy
//!
//! Every value surfaced by the engine goes through [`normalize`] so that
//! floating-point noise (`4.000000001`) never shows up or breaks equality.
//! The function is idempotent, which matters because hosts re-apply it on
//! every recomputation (e.g. each unit-change rescale).

use mealplan_core::constants::rounding::{DECIMALS, DECIMAL_ROUNDING_LIMIT, EPSILON};
use mealplan_core::models::NutritionVector;

/// Normalize a computed value for display or comparison
///
/// - Non-finite values are returned unchanged; rejecting them is the caller's job.
/// - Values within [`EPSILON`] of an integer snap to that integer.
/// - Anything else is rounded half away from zero to [`DECIMALS`] places.
#[must_use]
pub fn normalize(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let nearest_integer = value.round();
    if (value - nearest_integer).abs() < EPSILON {
        return nearest_integer;
    }

    if value.abs() >= DECIMAL_ROUNDING_LIMIT {
        return value;
    }

    let scale = 10_f64.powi(DECIMALS);
    (value * scale).round() / scale
}

/// Normalize every nutrient of a vector
#[must_use]
pub fn normalize_vector(vector: &NutritionVector) -> NutritionVector {
    vector.map(normalize)
}

/// Whether two values are equal once both are normalized
#[must_use]
#[allow(clippy::float_cmp)] // both sides sit on the same decimal grid after normalize
pub fn approx_eq(a: f64, b: f64) -> bool {
    normalize(a) == normalize(b)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_snaps_within_epsilon() {
        assert_eq!(normalize(4.000_000_001), 4.0);
        assert_eq!(normalize(3.999_999_9), 4.0);
        assert_eq!(normalize(-2.000_000_5), -2.0);
    }

    #[test]
    fn test_rounds_to_three_decimals() {
        assert_eq!(normalize(0.02), 0.02);
        assert_eq!(normalize(1.234_56), 1.235);
        assert_eq!(normalize(121.25), 121.25);
        assert_eq!(normalize(-1.234_56), -1.235);
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert!(normalize(f64::NAN).is_nan());
        assert_eq!(normalize(f64::INFINITY), f64::INFINITY);
        assert_eq!(normalize(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn test_huge_values_untouched() {
        let huge = 1.5e13 + 0.25;
        assert_eq!(normalize(huge), huge);
    }
}
