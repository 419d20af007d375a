// ABOUTME: Meal plan summary command for mealplan-cli
// ABOUTME: Loads a catalog and plan, prints per-slot and per-day totals and target progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use mealplan_engine::errors::AppResult;
use mealplan_engine::input::{load_catalog, load_plan};
use mealplan_engine::intelligence::{
    aggregate_plan, allocate_targets, macro_calorie_breakdown, target_progress, DaySummary,
    MacroAllocation, MacroBreakdown, MacroProgress,
};
use serde::Serialize;
use tracing::info;

use super::resolve_diet;
use crate::helpers::display::{
    allocation_line, emit, nutrition_lines, progress_lines, rule, OutputFormat,
};

type Result<T> = AppResult<T>;

#[derive(Serialize)]
struct DayReport {
    #[serde(flatten)]
    summary: DaySummary,
    macro_breakdown: MacroBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    progress: Option<Vec<MacroProgress>>,
}

#[derive(Serialize)]
struct SummaryReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    targets: Option<MacroAllocation>,
    days: Vec<DayReport>,
}

/// Summarize a meal plan file against a food catalog file
pub fn run(
    catalog_path: &Path,
    plan_path: &Path,
    calories: Option<f64>,
    diet: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let plan = load_plan(plan_path, &catalog)?;
    let summaries = aggregate_plan(&plan)?;
    info!(days = summaries.len(), "Summarized meal plan");

    let targets = calories
        .map(|kcal| allocate_targets(kcal, resolve_diet(diet)))
        .transpose()?;

    let days = summaries
        .into_iter()
        .map(|summary| DayReport {
            macro_breakdown: macro_calorie_breakdown(&summary.total),
            progress: targets.as_ref().map(|t| target_progress(&summary.total, t)),
            summary,
        })
        .collect();

    emit(&SummaryReport { targets, days }, format, render)
}

fn render(report: &SummaryReport) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(targets) = &report.targets {
        lines.push(allocation_line("targets", targets));
    }

    for day in &report.days {
        lines.push(rule(60));
        lines.push(day.summary.date.format("%A %Y-%m-%d").to_string());
        for (slot, totals) in &day.summary.slots {
            lines.push(format!("  {slot}"));
            lines.extend(nutrition_lines(totals, "    "));
        }
        lines.push("  day total".to_owned());
        lines.extend(nutrition_lines(&day.summary.total, "    "));

        let breakdown = &day.macro_breakdown;
        lines.push(format!(
            "  macro calories: {}% carbs, {}% protein, {}% fat",
            breakdown.carbs_percent, breakdown.protein_percent, breakdown.fat_percent
        ));
        if let Some(progress) = &day.progress {
            lines.extend(progress_lines(progress, "  "));
        }
    }
    lines
}
