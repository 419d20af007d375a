// ABOUTME: Unit rescale command for mealplan-cli
// ABOUTME: Prints the amount that keeps the same quantity after a unit change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealplan_engine::errors::AppResult;
use mealplan_engine::intelligence::rescale_for_display;
use serde::Serialize;

use crate::helpers::display::{emit, OutputFormat};

#[derive(Serialize)]
struct RescaleReport {
    amount: f64,
    from_factor: f64,
    to_factor: f64,
    rescaled_amount: f64,
}

/// Rescale an amount between two unit factors
pub fn run(amount: f64, from: f64, to: f64, format: OutputFormat) -> AppResult<()> {
    let report = RescaleReport {
        amount,
        from_factor: from,
        to_factor: to,
        rescaled_amount: rescale_for_display(amount, from, to)?,
    };

    emit(&report, format, |r| {
        vec![format!(
            "{} (unit factor {}) = {} (unit factor {})",
            r.amount, r.from_factor, r.rescaled_amount, r.to_factor
        )]
    })
}
