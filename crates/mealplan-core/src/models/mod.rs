// ABOUTME: Core data models for the meal-plan nutrition engine
// ABOUTME: Re-exports food, meal, diet, and nutrition vector types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Diet archetype labels
pub mod diet;
/// Food catalog records and unit tables
pub mod food;
/// Meal items, slots, and plan days
pub mod meal;
/// Nutrition vectors and nutrient keys
pub mod nutrition;

pub use diet::DietArchetype;
pub use food::{Food, FoodCatalog, UnitDefinition};
pub use meal::{MealItem, MealItemRef, MealPlanDay, MealPlanDayRef, MealSlot};
pub use nutrition::{Nutrient, NutritionVector};
