// ABOUTME: Integration tests for unit rescaling and per-item nutrition contribution
// ABOUTME: Covers round trips, zero and negative factors, and invalid unit references
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use mealplan_engine::constants::rounding::EPSILON;
use mealplan_engine::errors::NutritionError;
use mealplan_engine::intelligence::{
    change_unit, contribution_of, item_contribution, rescale_for_display, rescale_on_unit_change,
};
use mealplan_engine::models::{MealItem, UnitDefinition};

mod common;

// ============================================================================
// RESCALE ON UNIT CHANGE
// ============================================================================

#[test]
fn test_rescale_serving_to_gram_inversion() {
    common::init_test_logging();

    let raw = rescale_on_unit_change(2.0, 100.0, 1.0).unwrap();
    common::assert_close(raw, 0.02, 1e-12);

    let shown = rescale_for_display(2.0, 100.0, 1.0).unwrap();
    assert!((shown - 0.02).abs() < f64::EPSILON);
}

#[test]
fn test_rescale_same_factor_keeps_amount() {
    let amount = rescale_on_unit_change(3.75, 28.35, 28.35).unwrap();
    common::assert_close(amount, 3.75, 1e-12);
}

#[test]
fn test_rescale_round_trip_within_epsilon() {
    let factors = [1.0, 13.5, 28.35, 100.0, 182.0, 0.25, 1000.0];
    let amounts = [0.0, 0.5, 1.0, 2.0, 7.3, 150.0, 1234.567];

    for &a in &factors {
        for &b in &factors {
            for &amount in &amounts {
                let there = rescale_on_unit_change(amount, a, b).unwrap();
                let back = rescale_on_unit_change(there, b, a).unwrap();
                assert!(
                    (back - amount).abs() < EPSILON,
                    "{amount} via {a} -> {b} -> {a} came back as {back}"
                );
            }
        }
    }
}

#[test]
fn test_rescale_rejects_zero_current_factor() {
    let err = rescale_on_unit_change(2.0, 0.0, 1.0).unwrap_err();
    assert!(err.is_unit_fault());
}

#[test]
fn test_rescale_rejects_bad_new_factor() {
    assert!(rescale_on_unit_change(2.0, 1.0, 0.0).unwrap_err().is_unit_fault());
    assert!(rescale_on_unit_change(2.0, 1.0, -5.0).unwrap_err().is_unit_fault());
    assert!(rescale_on_unit_change(2.0, 1.0, f64::NAN).unwrap_err().is_unit_fault());
}

#[test]
fn test_rescale_rejects_bad_amount() {
    for amount in [-1.0, f64::NAN, f64::INFINITY] {
        let err = rescale_on_unit_change(amount, 1.0, 1.0).unwrap_err();
        assert!(
            matches!(err, NutritionError::InvalidNumericInput { field: "amount", .. }),
            "unexpected error for {amount}: {err:?}"
        );
    }
}

// ============================================================================
// CONTRIBUTION
// ============================================================================

#[test]
fn test_contribution_per_100g_basis() {
    let apple = common::apple();
    let contribution = contribution_of(&apple.nutrition, 150.0, 100.0).unwrap();

    common::assert_close(contribution.calories, 78.0, 1e-9);
    common::assert_close(contribution.carbs, 20.7, 1e-9);
    common::assert_close(contribution.sugar, 15.6, 1e-9);
}

#[test]
fn test_contribution_zero_factor_is_error_not_infinity() {
    let apple = common::apple();
    let err = contribution_of(&apple.nutrition, 150.0, 0.0).unwrap_err();
    assert!(err.is_unit_fault());
}

#[test]
fn test_contribution_zero_amount_is_zero_vector() {
    let apple = common::apple();
    let contribution = contribution_of(&apple.nutrition, 0.0, 100.0).unwrap();
    assert!(contribution.iter().all(|(_, value)| value == 0.0));
}

#[test]
fn test_item_contribution_in_non_gram_reference_unit() {
    let mut apple = common::apple();
    // Nutrition declared per medium apple instead of per 100 g
    apple.reference_unit = 2;

    let one_apple = MealItem::new(apple.clone(), 182.0, 2);
    common::assert_close(item_contribution(&one_apple).unwrap().calories, 52.0, 1e-9);

    // 364 in the "100 g" unit rescales to two medium apples
    let two_apples = MealItem::new(apple, 364.0, 0);
    common::assert_close(item_contribution(&two_apples).unwrap().calories, 189.28, 1e-9);
}

#[test]
fn test_item_contribution_unchanged_by_unit_change() {
    let item = MealItem::new(common::apple(), 150.0, 0);
    let before = item_contribution(&item).unwrap();
    common::assert_close(before.calories, 78.0, 1e-9);

    for unit in [2, 1, 0] {
        let moved = change_unit(&item, unit).unwrap();
        let after = item_contribution(&moved).unwrap();
        common::assert_vectors_close(&after, &before, 1e-9);
    }

    // 273 medium-apple units carry the same nutrition as 150 in the reference unit
    assert!((change_unit(&item, 2).unwrap().amount - 273.0).abs() < EPSILON);
}

#[test]
fn test_item_contribution_rejects_missing_unit() {
    let item = MealItem::new(common::apple(), 1.0, 9);
    let err = item_contribution(&item).unwrap_err();

    match err {
        NutritionError::InvalidUnitReference {
            food_id,
            unit_index,
            unit_count,
        } => {
            assert_eq!(food_id, "apple");
            assert_eq!(unit_index, 9);
            assert_eq!(unit_count, 3);
        }
        other => panic!("expected InvalidUnitReference, got {other:?}"),
    }
}

#[test]
fn test_item_contribution_rejects_zero_factor_unit() {
    let mut apple = common::apple();
    apple.units.push(UnitDefinition::new(0.0, "broken"));
    let item = MealItem::new(apple, 1.0, 0);

    let err = item_contribution(&item).unwrap_err();
    assert!(matches!(
        err,
        NutritionError::NonPositiveUnitFactor { unit_index: 3, .. }
    ));
}

#[test]
fn test_item_contribution_rejects_negative_amount() {
    let item = MealItem::new(common::apple(), -10.0, 0);
    assert!(matches!(
        item_contribution(&item).unwrap_err(),
        NutritionError::InvalidNumericInput { .. }
    ));
}

// ============================================================================
// CHANGE UNIT
// ============================================================================

#[test]
fn test_change_unit_returns_new_item() {
    let original = MealItem::new(common::apple(), 2.0, 0);
    let changed = change_unit(&original, 1).unwrap();

    assert_eq!(changed.unit, 1);
    common::assert_close(changed.amount, 0.02, 1e-12);
    // Original is untouched
    assert_eq!(original.unit, 0);
    common::assert_close(original.amount, 2.0, 0.0);
}

#[test]
fn test_change_unit_round_trip() {
    let original = MealItem::new(common::oats(), 60.0, 0);
    let piece = change_unit(&original, 2).unwrap();
    let back = change_unit(&piece, 0).unwrap();

    assert_eq!(back.unit, 0);
    assert!((back.amount - 60.0).abs() < EPSILON);
}

#[test]
fn test_change_unit_to_missing_unit_fails() {
    let original = MealItem::new(common::apple(), 2.0, 0);
    let err = change_unit(&original, 7).unwrap_err();
    assert!(matches!(
        err,
        NutritionError::InvalidUnitReference { unit_index: 7, .. }
    ));
}

#[test]
fn test_with_amount_leaves_original_untouched() {
    let original = MealItem::new(common::apple(), 150.0, 0);
    let doubled = original.with_amount(300.0);

    assert_eq!(original.amount, 150.0);
    assert_eq!(doubled.unit, original.unit);
    common::assert_close(item_contribution(&doubled).unwrap().calories, 156.0, 1e-9);
    common::assert_close(item_contribution(&original).unwrap().calories, 78.0, 1e-9);
}
