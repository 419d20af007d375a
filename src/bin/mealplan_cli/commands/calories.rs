// ABOUTME: Calorie target command for mealplan-cli
// ABOUTME: Derives BMR, TDEE, and a daily calorie target from physical stats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealplan_engine::config::PlannerConfig;
use mealplan_engine::errors::AppResult;
use mealplan_engine::intelligence::{
    allocate_targets, calculate_bmr, calculate_tdee, daily_calorie_target, normalize,
    MacroAllocation, PhysicalStats, WeightGoal,
};
use mealplan_engine::models::DietArchetype;
use serde::Serialize;

use super::resolve_diet;
use crate::helpers::display::{allocation_line, emit, OutputFormat};

#[derive(Serialize)]
struct CaloriesReport {
    stats: PhysicalStats,
    goal: WeightGoal,
    bmr: f64,
    tdee: f64,
    daily_calories: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    targets: Option<(DietArchetype, MacroAllocation)>,
}

/// Compute the daily calorie target, optionally followed by macro targets
pub fn run(
    stats: PhysicalStats,
    goal: WeightGoal,
    diet: Option<&str>,
    format: OutputFormat,
) -> AppResult<()> {
    let config = &PlannerConfig::global().nutrition;
    let bmr = calculate_bmr(&stats, &config.bmr)?;
    let tdee = calculate_tdee(bmr, stats.activity_level, &config.activity_factors)?;
    let daily_calories = daily_calorie_target(&stats, goal, config)?;

    let targets = match diet {
        Some(label) => {
            let archetype = resolve_diet(Some(label));
            Some((archetype, allocate_targets(daily_calories, archetype)?))
        }
        None => None,
    };

    let report = CaloriesReport {
        stats,
        goal,
        bmr: normalize(bmr),
        tdee: normalize(tdee),
        daily_calories,
        targets,
    };

    emit(&report, format, |r| {
        let mut lines = vec![
            format!("BMR:   {} kcal", r.bmr),
            format!("TDEE:  {} kcal", r.tdee),
            format!("Daily: {} kcal ({:?})", r.daily_calories, r.goal),
        ];
        if let Some((archetype, allocation)) = &r.targets {
            lines.push(allocation_line(archetype.as_str(), allocation));
        }
        lines
    })
}
