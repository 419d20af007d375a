// ABOUTME: Integration tests for nutrition aggregation over items, slots, days, and plans
// ABOUTME: Verifies order independence, slot associativity, and fail-fast on invalid items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use std::slice;

use chrono::Days;
use mealplan_engine::errors::NutritionError;
use mealplan_engine::intelligence::{
    aggregate, aggregate_by_slot, aggregate_day, aggregate_plan, aggregate_slots,
    item_contribution, macro_calorie_breakdown, normalize_vector, summarize_day, total_calories,
};
use mealplan_engine::models::{MealItem, MealPlanDay, MealSlot, Nutrient, NutritionVector};

mod common;

// ============================================================================
// ITEM LISTS
// ============================================================================

#[test]
fn test_empty_list_yields_zero_for_every_key() {
    common::init_test_logging();

    let total = aggregate(&[]).unwrap();
    assert_eq!(total, NutritionVector::zero());

    let json = serde_json::to_value(total).unwrap();
    for nutrient in Nutrient::ALL {
        assert_eq!(json[nutrient.key()], 0.0, "{nutrient} missing or non-zero");
    }
}

#[test]
fn test_single_item_equals_its_contribution() {
    let item = common::grams_of(common::apple(), 150.0);
    let total = aggregate(slice::from_ref(&item)).unwrap();
    assert_eq!(total, item_contribution(&item).unwrap());
    common::assert_close(total.calories, 78.0, 1e-9);
}

#[test]
fn test_order_independence() {
    let mut items = common::lunch();
    items.extend(common::breakfast());
    items.extend(common::dinner());
    let reference = aggregate(&items).unwrap();

    // Every rotation and the reversed order must agree
    for shift in 0..items.len() {
        let mut rotated = items.clone();
        rotated.rotate_left(shift);
        common::assert_vectors_close(&aggregate(&rotated).unwrap(), &reference, 1e-9);
    }
    items.reverse();
    common::assert_vectors_close(&aggregate(&items).unwrap(), &reference, 1e-9);
}

#[test]
fn test_total_calories_matches_aggregate() {
    let items = common::lunch();
    let expected = 165.0 * 1.5 + 130.0 * 2.0 + 884.0 * 0.1;

    let calories = total_calories(&items).unwrap();
    common::assert_close(calories, expected, 1e-9);
    assert_eq!(calories, aggregate(&items).unwrap().calories);
}

#[test]
fn test_invalid_item_aborts_aggregation() {
    let mut items = common::breakfast();
    items.push(MealItem::new(common::apple(), 1.0, 42));

    let err = aggregate(&items).unwrap_err();
    assert!(matches!(
        err,
        NutritionError::InvalidUnitReference { unit_index: 42, .. }
    ));
    assert!(total_calories(&items).is_err());
}

#[test]
fn test_non_finite_amount_aborts_aggregation() {
    let items = vec![common::grams_of(common::apple(), f64::NAN)];
    assert!(matches!(
        aggregate(&items).unwrap_err(),
        NutritionError::InvalidNumericInput { .. }
    ));
}

// ============================================================================
// SLOTS AND DAYS
// ============================================================================

#[test]
fn test_day_equals_sum_of_slots() {
    let day = common::sample_day();
    let per_slot = aggregate(&common::breakfast()).unwrap()
        + aggregate(&common::lunch()).unwrap()
        + aggregate(&common::dinner()).unwrap();

    common::assert_vectors_close(&aggregate_day(&day).unwrap(), &per_slot, 1e-9);
    common::assert_vectors_close(&aggregate_slots(&day.slots).unwrap(), &per_slot, 1e-9);
}

#[test]
fn test_extra_slots_are_included_in_day_total() {
    let snack = vec![common::grams_of(common::apple(), 100.0)];
    let day = common::sample_day().with_slot(MealSlot::Snack, snack);

    let without_snack = aggregate_day(&common::sample_day()).unwrap();
    let with_snack = aggregate_day(&day).unwrap();
    common::assert_close(with_snack.calories - without_snack.calories, 52.0, 1e-9);
}

#[test]
fn test_empty_day_is_zero() {
    let day = MealPlanDay::new(common::sample_date());
    assert_eq!(aggregate_day(&day).unwrap(), NutritionVector::zero());
    assert!(day.items(MealSlot::Lunch).is_empty());
}

#[test]
fn test_aggregate_by_slot_keeps_slot_order() {
    let by_slot = aggregate_by_slot(&common::sample_day()).unwrap();
    let slots: Vec<MealSlot> = by_slot.keys().copied().collect();
    assert_eq!(slots, MealSlot::PRIMARY.to_vec());

    common::assert_close(
        by_slot[&MealSlot::Breakfast].calories,
        389.0 * 0.6 + 52.0 * 1.5,
        1e-9,
    );
}

#[test]
fn test_summarize_day_is_normalized() {
    let summary = summarize_day(&common::sample_day()).unwrap();
    let raw_total = aggregate_day(&common::sample_day()).unwrap();

    assert_eq!(summary.date, common::sample_date());
    assert_eq!(summary.total, normalize_vector(&raw_total));
    assert_eq!(summary.slots.len(), 3);
}

// ============================================================================
// PLANS
// ============================================================================

#[test]
fn test_aggregate_plan_preserves_input_order() {
    let days: Vec<MealPlanDay> = (0..14)
        .map(|offset| {
            let mut day = common::sample_day();
            day.date = common::sample_date()
                .checked_add_days(Days::new(offset))
                .unwrap();
            if offset % 2 == 1 {
                day.slots.remove(&MealSlot::Dinner);
            }
            day
        })
        .collect();

    let summaries = aggregate_plan(&days).unwrap();
    assert_eq!(summaries.len(), days.len());
    for (day, summary) in days.iter().zip(&summaries) {
        assert_eq!(summary, &summarize_day(day).unwrap());
    }
}

#[test]
fn test_aggregate_plan_fails_on_any_bad_day() {
    let mut bad = common::sample_day();
    bad.slots
        .entry(MealSlot::Lunch)
        .or_default()
        .push(MealItem::new(common::rice(), 1.0, 5));

    let days = vec![common::sample_day(), bad, common::sample_day()];
    assert!(aggregate_plan(&days).is_err());
}

// ============================================================================
// MACRO CALORIE BREAKDOWN
// ============================================================================

#[test]
fn test_macro_breakdown_percentages() {
    let total = common::per_100g(0.0, 100.0, 50.0, 20.0);
    // 400 + 200 + 180 = 780 macro kcal
    let breakdown = macro_calorie_breakdown(&total);

    common::assert_close(breakdown.carbs_percent, 51.282, 1e-9);
    common::assert_close(breakdown.protein_percent, 25.641, 1e-9);
    common::assert_close(breakdown.fat_percent, 23.077, 1e-9);
}

#[test]
fn test_macro_breakdown_of_zero_total() {
    let breakdown = macro_calorie_breakdown(&NutritionVector::zero());
    assert_eq!(breakdown.carbs_percent, 0.0);
    assert_eq!(breakdown.protein_percent, 0.0);
    assert_eq!(breakdown.fat_percent, 0.0);
}
