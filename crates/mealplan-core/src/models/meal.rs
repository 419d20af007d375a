// ABOUTME: Meal plan structures placed on the calendar
// ABOUTME: MealSlot, MealItem, MealItemRef, and MealPlanDay definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::food::{Food, FoodCatalog};
use crate::errors::{ensure_non_negative, NutritionError};

/// Slot of the day a meal item is placed in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Dessert
    Dessert,
}

impl MealSlot {
    /// The primary three-meal day structure
    pub const PRIMARY: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Parse a meal slot from string, `None` for unrecognized labels
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Some(Self::Breakfast),
            "lunch" => Some(Self::Lunch),
            "dinner" => Some(Self::Dinner),
            "snack" | "snacks" => Some(Self::Snack),
            "dessert" | "desserts" => Some(Self::Dessert),
            _ => None,
        }
    }

    /// Lowercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
            Self::Dessert => "dessert",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One food instance placed into a meal slot
///
/// Holds an immutable snapshot of the food. Edits produce new items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealItem {
    /// Referenced food
    pub food: Food,
    /// Chosen amount (may be fractional, never negative)
    pub amount: f64,
    /// Index of the selected unit in `food.units`
    pub unit: usize,
}

impl MealItem {
    /// Create a meal item
    #[must_use]
    pub const fn new(food: Food, amount: f64, unit: usize) -> Self {
        Self { food, amount, unit }
    }

    /// Copy of this item with a different amount (same unit)
    #[must_use]
    pub fn with_amount(&self, amount: f64) -> Self {
        Self {
            food: self.food.clone(),
            amount,
            unit: self.unit,
        }
    }

    /// Check the amount, the referenced food, and the selected unit
    ///
    /// # Errors
    ///
    /// Returns `InvalidNumericInput` for a bad amount, the errors of
    /// [`Food::validate`], and the unit errors of [`Food::unit`] for a bad
    /// selected unit
    pub fn validate(&self) -> Result<(), NutritionError> {
        ensure_non_negative("amount", self.amount)?;
        self.food.validate()?;
        self.food.unit(self.unit)?;
        Ok(())
    }
}

/// Catalog-referencing form of a meal item, as stored by the data layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealItemRef {
    /// Catalog id of the food
    pub food_id: String,
    /// Chosen amount
    pub amount: f64,
    /// Selected unit index
    pub unit: usize,
}

impl MealItemRef {
    /// Resolve against a catalog snapshot into a self-contained [`MealItem`]
    ///
    /// # Errors
    ///
    /// Returns `UnknownFood` for an id missing from the catalog
    pub fn resolve(&self, catalog: &FoodCatalog) -> Result<MealItem, NutritionError> {
        let food = catalog.get(&self.food_id)?;
        Ok(MealItem::new(food.clone(), self.amount, self.unit))
    }
}

/// One calendar day of a meal plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealPlanDay {
    /// Calendar date
    pub date: NaiveDate,
    /// Items per slot, in display order
    #[serde(default)]
    pub slots: BTreeMap<MealSlot, Vec<MealItem>>,
}

impl MealPlanDay {
    /// Empty day
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            slots: BTreeMap::new(),
        }
    }

    /// Builder-style helper setting the items of one slot
    #[must_use]
    pub fn with_slot(mut self, slot: MealSlot, items: Vec<MealItem>) -> Self {
        self.slots.insert(slot, items);
        self
    }

    /// Items of one slot (empty when the slot has none)
    #[must_use]
    pub fn items(&self, slot: MealSlot) -> &[MealItem] {
        self.slots.get(&slot).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Catalog-referencing form of a day, as stored by the data layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealPlanDayRef {
    /// Calendar date
    pub date: NaiveDate,
    /// Item references per slot
    #[serde(default)]
    pub slots: BTreeMap<MealSlot, Vec<MealItemRef>>,
}

impl MealPlanDayRef {
    /// Resolve every item against a catalog snapshot
    ///
    /// # Errors
    ///
    /// Returns the first unresolved food id
    pub fn resolve(&self, catalog: &FoodCatalog) -> Result<MealPlanDay, NutritionError> {
        let mut slots = BTreeMap::new();
        for (slot, refs) in &self.slots {
            let items = refs
                .iter()
                .map(|item| item.resolve(catalog))
                .collect::<Result<Vec<_>, _>>()?;
            slots.insert(*slot, items);
        }
        Ok(MealPlanDay {
            date: self.date,
            slots,
        })
    }
}
