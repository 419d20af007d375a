// ABOUTME: Output formatting helpers for mealplan-cli
// ABOUTME: Emits reports as pretty JSON or as aligned text tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use clap::ValueEnum;
use mealplan_engine::errors::AppResult;
use mealplan_engine::intelligence::{MacroAllocation, MacroProgress};
use mealplan_engine::models::{Nutrient, NutritionVector};
use serde::Serialize;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Print a report in the selected format
pub fn emit<T: Serialize>(
    report: &T,
    format: OutputFormat,
    render_text: impl FnOnce(&T) -> Vec<String>,
) -> AppResult<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            for line in render_text(report) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

pub fn rule(width: usize) -> String {
    "=".repeat(width)
}

/// One line per nutrient, indented
pub fn nutrition_lines(vector: &NutritionVector, indent: &str) -> Vec<String> {
    vector
        .iter()
        .map(|(nutrient, value)| {
            format!(
                "{indent}{:<12} {value:>10}{}",
                nutrient.key(),
                unit_of(nutrient)
            )
        })
        .collect()
}

const fn unit_of(nutrient: Nutrient) -> &'static str {
    match nutrient {
        Nutrient::Calories => " kcal",
        Nutrient::Sodium | Nutrient::Cholesterol => " mg",
        _ => " g",
    }
}

pub fn allocation_line(label: &str, allocation: &MacroAllocation) -> String {
    format!("{label:<12} {}", allocation.describe())
}

pub fn progress_lines(progress: &[MacroProgress], indent: &str) -> Vec<String> {
    progress
        .iter()
        .map(|p| {
            let status = if p.met { "met" } else { "short" };
            format!(
                "{indent}{:<8} {:>8} / {:>5} g  ({status}, {} g remaining)",
                p.nutrient.as_str(),
                p.actual_grams,
                p.target_grams,
                p.remaining_grams
            )
        })
        .collect()
}
