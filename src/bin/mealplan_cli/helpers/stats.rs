// ABOUTME: Command-line value enums for physical stats
// ABOUTME: Maps clap arguments onto the engine's stats types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use clap::ValueEnum;
use mealplan_engine::intelligence::{ActivityLevel, PhysicalStats, Sex, WeightGoal};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SexArg {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ActivityArg {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GoalArg {
    Lose,
    Maintain,
    Gain,
}

impl From<SexArg> for Sex {
    fn from(arg: SexArg) -> Self {
        match arg {
            SexArg::Male => Self::Male,
            SexArg::Female => Self::Female,
        }
    }
}

impl From<ActivityArg> for ActivityLevel {
    fn from(arg: ActivityArg) -> Self {
        match arg {
            ActivityArg::Sedentary => Self::Sedentary,
            ActivityArg::LightlyActive => Self::LightlyActive,
            ActivityArg::ModeratelyActive => Self::ModeratelyActive,
            ActivityArg::VeryActive => Self::VeryActive,
            ActivityArg::ExtraActive => Self::ExtraActive,
        }
    }
}

impl From<GoalArg> for WeightGoal {
    fn from(arg: GoalArg) -> Self {
        match arg {
            GoalArg::Lose => Self::Lose,
            GoalArg::Maintain => Self::Maintain,
            GoalArg::Gain => Self::Gain,
        }
    }
}

pub fn physical_stats(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: SexArg,
    activity: ActivityArg,
) -> PhysicalStats {
    PhysicalStats {
        weight_kg,
        height_cm,
        age,
        sex: sex.into(),
        activity_level: activity.into(),
    }
}
