// ABOUTME: Food catalog records with declared unit tables
// ABOUTME: Food, UnitDefinition, and the id-keyed FoodCatalog snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::nutrition::NutritionVector;
use crate::errors::NutritionError;

/// One entry of a food's unit table (e.g. `100 g`, `1 cup`, `1 serving`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnitDefinition {
    /// Scale factor of this unit; strictly positive
    pub amount: f64,
    /// Display label
    pub description: String,
}

impl UnitDefinition {
    /// Create a unit definition
    pub fn new(amount: f64, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }
}

/// Nutritional profile of a consumable item, read-only to the engine
///
/// `nutrition` is expressed per one reference unit, i.e. per
/// `units[reference_unit].amount`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Food {
    /// Catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Nutrition per reference unit
    pub nutrition: NutritionVector,
    /// Ordered unit table
    pub units: Vec<UnitDefinition>,
    /// Index of the unit the nutrition vector is expressed against
    #[serde(default)]
    pub reference_unit: usize,
}

impl Food {
    /// Create a food whose first unit is the reference unit
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        nutrition: NutritionVector,
        units: Vec<UnitDefinition>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            nutrition,
            units,
            reference_unit: 0,
        }
    }

    /// Look up a unit, failing with a typed error when the index is out of range
    /// or the unit's factor is not strictly positive
    ///
    /// # Errors
    ///
    /// Returns `InvalidUnitReference` or `NonPositiveUnitFactor`
    pub fn unit(&self, index: usize) -> Result<&UnitDefinition, NutritionError> {
        let unit = self
            .units
            .get(index)
            .ok_or_else(|| NutritionError::InvalidUnitReference {
                food_id: self.id.clone(),
                unit_index: index,
                unit_count: self.units.len(),
            })?;

        if unit.amount.is_finite() && unit.amount > 0.0 {
            Ok(unit)
        } else {
            Err(NutritionError::NonPositiveUnitFactor {
                food_id: self.id.clone(),
                unit_index: index,
                amount: unit.amount,
            })
        }
    }

    /// Factor of a valid unit
    ///
    /// # Errors
    ///
    /// See [`Food::unit`]
    pub fn unit_factor(&self, index: usize) -> Result<f64, NutritionError> {
        self.unit(index).map(|unit| unit.amount)
    }

    /// Conversion factor of the reference unit
    ///
    /// # Errors
    ///
    /// See [`Food::unit`]
    pub fn reference_factor(&self) -> Result<f64, NutritionError> {
        self.unit_factor(self.reference_unit)
    }

    /// Check every structural precondition the engine relies on
    ///
    /// # Errors
    ///
    /// Returns `InvalidFood` for an empty unit table, `InvalidNumericInput` for a
    /// NaN, infinite, or negative nutrition value, and the unit errors of
    /// [`Food::unit`] for bad unit entries
    pub fn validate(&self) -> Result<(), NutritionError> {
        if self.units.is_empty() {
            return Err(NutritionError::InvalidFood {
                food_id: self.id.clone(),
                reason: "unit list is empty".to_owned(),
            });
        }
        for index in 0..self.units.len() {
            self.unit(index)?;
        }
        self.reference_factor()?;

        if let Some((nutrient, value)) = self.nutrition.first_invalid() {
            return Err(NutritionError::invalid_numeric(nutrient.key(), value));
        }
        Ok(())
    }
}

/// Id-keyed snapshot of the food catalog supplied by the data layer
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: HashMap<String, Food>,
}

impl FoodCatalog {
    /// Build a catalog, validating every food
    ///
    /// # Errors
    ///
    /// Returns the first validation failure
    pub fn from_foods(foods: impl IntoIterator<Item = Food>) -> Result<Self, NutritionError> {
        let mut catalog = Self::default();
        for food in foods {
            food.validate()?;
            catalog.foods.insert(food.id.clone(), food);
        }
        Ok(catalog)
    }

    /// Find a food by id
    ///
    /// # Errors
    ///
    /// Returns `UnknownFood` when the id is not in the catalog
    pub fn get(&self, food_id: &str) -> Result<&Food, NutritionError> {
        self.foods
            .get(food_id)
            .ok_or_else(|| NutritionError::UnknownFood {
                food_id: food_id.to_owned(),
            })
    }

    /// Number of foods
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
