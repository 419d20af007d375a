// ABOUTME: Macro target command for mealplan-cli
// ABOUTME: Prints minimum daily macro grams and the optional per-meal split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use mealplan_engine::config::PlannerConfig;
use mealplan_engine::errors::AppResult;
use mealplan_engine::intelligence::{
    allocate_meal_targets, allocate_targets, available_calories, normalize, ratio_for,
    MacroAllocation, MacroRatio,
};
use mealplan_engine::models::{DietArchetype, MealSlot};
use serde::Serialize;
use tracing::info;

use super::resolve_diet;
use crate::helpers::display::{allocation_line, emit, rule, OutputFormat};

type Result<T> = AppResult<T>;

#[derive(Serialize)]
struct TargetsReport {
    daily_calories: f64,
    available_calories: f64,
    diet: DietArchetype,
    ratio: MacroRatio,
    daily: MacroAllocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    per_meal: Option<BTreeMap<MealSlot, MacroAllocation>>,
}

/// Allocate macro targets for a calorie goal
pub fn run(calories: f64, diet: Option<&str>, per_meal: bool, format: OutputFormat) -> Result<()> {
    let archetype = resolve_diet(diet);
    info!(calories, diet = %archetype, "Allocating macro targets");

    let daily = allocate_targets(calories, archetype)?;
    let per_meal = if per_meal {
        let split = &PlannerConfig::global().nutrition.meal_split;
        Some(allocate_meal_targets(calories, archetype, split)?)
    } else {
        None
    };

    let report = TargetsReport {
        daily_calories: calories,
        available_calories: normalize(available_calories(calories)),
        diet: archetype,
        ratio: ratio_for(archetype),
        daily,
        per_meal,
    };

    emit(&report, format, render)
}

fn render(report: &TargetsReport) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{} diet, {} kcal ({} kcal for macros)",
            report.diet, report.daily_calories, report.available_calories
        ),
        format!(
            "Ratio: {:.0}% carbs, {:.0}% protein, {:.0}% fat ({:.0}% flexible)",
            report.ratio.carbs * 100.0,
            report.ratio.protein * 100.0,
            report.ratio.fat * 100.0,
            report.ratio.flexible_share() * 100.0
        ),
        rule(60),
        allocation_line("daily", &report.daily),
    ];

    if let Some(per_meal) = &report.per_meal {
        lines.extend(
            per_meal
                .iter()
                .map(|(slot, allocation)| allocation_line(slot.as_str(), allocation)),
        );
    }
    lines
}
