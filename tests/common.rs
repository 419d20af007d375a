// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging plus sample foods, meal items, and plan days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `mealplan_engine`
//!
//! Foods follow the usual label conventions: nutrition is declared per
//! 100 g and the first unit (`100 g`) is the reference unit.

use std::collections::BTreeMap;
use std::env;
use std::sync::Once;

use chrono::NaiveDate;
use mealplan_engine::models::{
    Food, MealItem, MealPlanDay, MealSlot, NutritionVector, UnitDefinition,
};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Assert two floats are within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} within {tolerance}, got {actual}"
    );
}

/// Assert every nutrient of two vectors is within `tolerance`
pub fn assert_vectors_close(actual: &NutritionVector, expected: &NutritionVector, tolerance: f64) {
    for ((nutrient, a), (_, e)) in actual.iter().zip(expected.iter()) {
        assert!(
            (a - e).abs() <= tolerance,
            "{nutrient}: expected {e} within {tolerance}, got {a}"
        );
    }
}

/// Per-100 g nutrition helper
pub fn per_100g(calories: f64, carbs: f64, proteins: f64, fats: f64) -> NutritionVector {
    NutritionVector {
        calories,
        carbs,
        proteins,
        fats,
        ..NutritionVector::zero()
    }
}

/// Units shared by the sample foods: 100 g (reference), 1 g, and one piece
fn gram_units(piece_grams: f64, piece_label: &str) -> Vec<UnitDefinition> {
    vec![
        UnitDefinition::new(100.0, "100 g"),
        UnitDefinition::new(1.0, "g"),
        UnitDefinition::new(piece_grams, piece_label),
    ]
}

pub fn apple() -> Food {
    let mut nutrition = per_100g(52.0, 13.8, 0.3, 0.2);
    nutrition.fiber = 2.4;
    nutrition.sugar = 10.4;
    nutrition.sodium = 1.0;
    Food::new("apple", "Apple", nutrition, gram_units(182.0, "medium apple"))
}

pub fn oats() -> Food {
    let mut nutrition = per_100g(389.0, 66.3, 16.9, 6.9);
    nutrition.fiber = 10.6;
    nutrition.sodium = 2.0;
    Food::new("oats", "Rolled oats", nutrition, gram_units(40.0, "cup"))
}

pub fn chicken_breast() -> Food {
    let mut nutrition = per_100g(165.0, 0.0, 31.0, 3.6);
    nutrition.sodium = 74.0;
    nutrition.cholesterol = 85.0;
    Food::new(
        "chicken_breast",
        "Chicken breast",
        nutrition,
        gram_units(120.0, "fillet"),
    )
}

pub fn olive_oil() -> Food {
    Food::new(
        "olive_oil",
        "Olive oil",
        per_100g(884.0, 0.0, 0.0, 100.0),
        gram_units(13.5, "tbsp"),
    )
}

pub fn rice() -> Food {
    let mut nutrition = per_100g(130.0, 28.2, 2.7, 0.3);
    nutrition.sodium = 1.0;
    Food::new("rice", "Cooked white rice", nutrition, gram_units(158.0, "cup"))
}

pub fn catalog_foods() -> Vec<Food> {
    vec![apple(), oats(), chicken_breast(), olive_oil(), rice()]
}

/// A meal item of `grams` grams (amount expressed against the 100 g reference)
pub fn grams_of(food: Food, grams: f64) -> MealItem {
    MealItem::new(food, grams, 0)
}

pub fn breakfast() -> Vec<MealItem> {
    vec![grams_of(oats(), 60.0), grams_of(apple(), 150.0)]
}

pub fn lunch() -> Vec<MealItem> {
    vec![
        grams_of(chicken_breast(), 150.0),
        grams_of(rice(), 200.0),
        grams_of(olive_oil(), 10.0),
    ]
}

pub fn dinner() -> Vec<MealItem> {
    vec![
        grams_of(chicken_breast(), 120.0),
        grams_of(rice(), 150.0),
        grams_of(apple(), 100.0),
    ]
}

pub fn sample_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

pub fn sample_day() -> MealPlanDay {
    MealPlanDay::new(sample_date())
        .with_slot(MealSlot::Breakfast, breakfast())
        .with_slot(MealSlot::Lunch, lunch())
        .with_slot(MealSlot::Dinner, dinner())
}

pub fn sample_slots() -> BTreeMap<MealSlot, Vec<MealItem>> {
    sample_day().slots
}
