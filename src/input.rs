// ABOUTME: JSON loading of food catalogs and meal plans from disk
// ABOUTME: Resolves food-id references into validated meal plan snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::errors::{AppError, AppResult};
use crate::models::{Food, FoodCatalog, MealPlanDay, MealPlanDayRef};

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}", path.display())).with_source(e)
    })?;
    Ok(serde_json::from_str(&raw)?)
}

/// Load a food catalog from a JSON array of foods
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or holds an
/// invalid food or a duplicated food id
pub fn load_catalog(path: &Path) -> AppResult<FoodCatalog> {
    let foods: Vec<Food> = read_json(path)?;
    let count = foods.len();
    let catalog = FoodCatalog::from_foods(foods)?;
    if catalog.len() != count {
        return Err(AppError::invalid_input(format!(
            "Catalog {} contains duplicate food ids",
            path.display()
        )));
    }

    info!(path = %path.display(), foods = catalog.len(), "Loaded food catalog");
    Ok(catalog)
}

/// Load a meal plan from a JSON array of days referencing foods by id
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if a referenced
/// food is missing from the catalog
pub fn load_plan(path: &Path, catalog: &FoodCatalog) -> AppResult<Vec<MealPlanDay>> {
    let days: Vec<MealPlanDayRef> = read_json(path)?;
    let plan = days
        .iter()
        .map(|day| day.resolve(catalog))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(path = %path.display(), days = plan.len(), "Resolved meal plan");
    Ok(plan)
}
