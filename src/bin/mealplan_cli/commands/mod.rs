// ABOUTME: Re-exports command modules for mealplan-cli
// ABOUTME: Provides the targets, summary, rescale, and calories commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod calories;
pub mod rescale;
pub mod summary;
pub mod targets;

use mealplan_engine::config::PlannerConfig;
use mealplan_engine::models::DietArchetype;

/// Archetype from a label, or the configured default when none is given
pub fn resolve_diet(label: Option<&str>) -> DietArchetype {
    label.map_or(
        PlannerConfig::global().nutrition.default_diet,
        DietArchetype::from_str_lossy,
    )
}
