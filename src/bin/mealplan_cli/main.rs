// ABOUTME: Meal-plan CLI - command-line front-end for the nutrition engine
// ABOUTME: Computes macro targets, plan summaries, unit rescaling, and calorie targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Minimum macros for a 2000 kcal Keto day, split per meal
//! mealplan-cli targets --calories 2000 --diet keto --per-meal
//!
//! # Per-slot and per-day totals for a plan, with progress against targets
//! mealplan-cli summary --catalog foods.json --plan week.json --calories 2000
//!
//! # Amount after switching from a 100 g unit to a 1 g unit
//! mealplan-cli rescale --amount 2 --from 100 --to 1
//!
//! # Daily calorie target from physical stats
//! mealplan-cli calories --weight-kg 70 --height-cm 175 --age 30 --sex male \
//!     --activity moderately-active --goal lose
//!
//! # Any command as JSON
//! mealplan-cli --format json targets --calories 1800
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mealplan_engine::errors::{AppError, AppResult};
use mealplan_engine::logging::LoggingConfig;
use tracing::debug;

use helpers::display::OutputFormat;
use helpers::stats::{ActivityArg, GoalArg, SexArg};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "mealplan-cli",
    about = "Meal plan nutrition engine CLI",
    long_about = "Computes nutrition totals for meal plans and minimum macro targets for diet archetypes."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, value_enum, global = true, default_value = "text")]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Minimum macro grams for a daily calorie goal
    Targets {
        /// Daily calorie goal (kcal)
        #[arg(long)]
        calories: f64,

        /// Diet archetype label (defaults to the configured diet)
        #[arg(long)]
        diet: Option<String>,

        /// Also split the targets across meal slots
        #[arg(long)]
        per_meal: bool,
    },

    /// Nutrition totals per slot and per day for a meal plan
    Summary {
        /// JSON array of foods
        #[arg(long)]
        catalog: PathBuf,

        /// JSON array of plan days referencing foods by id
        #[arg(long)]
        plan: PathBuf,

        /// Daily calorie goal for progress reporting
        #[arg(long)]
        calories: Option<f64>,

        /// Diet archetype label used with --calories
        #[arg(long)]
        diet: Option<String>,
    },

    /// Rescale an amount when the selected unit changes
    Rescale {
        /// Current amount
        #[arg(long)]
        amount: f64,

        /// Scale factor of the current unit
        #[arg(long)]
        from: f64,

        /// Scale factor of the new unit
        #[arg(long)]
        to: f64,
    },

    /// Daily calorie target from physical stats
    Calories {
        /// Body weight in kilograms
        #[arg(long)]
        weight_kg: f64,

        /// Height in centimeters
        #[arg(long)]
        height_cm: f64,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Sex for the BMR equation
        #[arg(long, value_enum)]
        sex: SexArg,

        /// Activity level
        #[arg(long, value_enum, default_value = "sedentary")]
        activity: ActivityArg,

        /// Weight goal
        #[arg(long, value_enum, default_value = "maintain")]
        goal: GoalArg,

        /// Also allocate macro targets for this diet archetype
        #[arg(long)]
        diet: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    debug!(format = ?cli.format, "Meal plan CLI");

    match cli.command {
        Command::Targets {
            calories,
            diet,
            per_meal,
        } => commands::targets::run(calories, diet.as_deref(), per_meal, cli.format),
        Command::Summary {
            catalog,
            plan,
            calories,
            diet,
        } => commands::summary::run(&catalog, &plan, calories, diet.as_deref(), cli.format),
        Command::Rescale { amount, from, to } => {
            commands::rescale::run(amount, from, to, cli.format)
        }
        Command::Calories {
            weight_kg,
            height_cm,
            age,
            sex,
            activity,
            goal,
            diet,
        } => commands::calories::run(
            helpers::stats::physical_stats(weight_kg, height_cm, age, sex, activity),
            goal.into(),
            diet.as_deref(),
            cli.format,
        ),
    }
}
