// ABOUTME: Static macro calorie-share table per diet archetype
// ABOUTME: Read-only lookup consumed by daily and per-meal target allocation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealplan_core::models::DietArchetype;
use serde::{Deserialize, Serialize};

/// Calorie share of each macro for one archetype
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroRatio {
    /// Share of calories from carbohydrates
    pub carbs: f64,
    /// Share of calories from protein
    pub protein: f64,
    /// Share of calories from fat
    pub fat: f64,
}

impl MacroRatio {
    const fn new(carbs: f64, protein: f64, fat: f64) -> Self {
        Self {
            carbs,
            protein,
            fat,
        }
    }

    /// Total share assigned to the three macros
    #[must_use]
    pub fn allocated_share(&self) -> f64 {
        self.carbs + self.protein + self.fat
    }

    /// Share left unassigned, free to land on any macro above the minimums
    #[must_use]
    pub fn flexible_share(&self) -> f64 {
        1.0 - self.allocated_share()
    }
}

/// Archetype to ratio table
///
/// The rows sum to 0.85-0.90: targets derived from them are minimums, and the
/// remainder is intentionally left flexible.
pub const DIET_RATIO_TABLE: [(DietArchetype, MacroRatio); 6] = [
    (DietArchetype::Anything, MacroRatio::new(0.40, 0.25, 0.25)),
    (DietArchetype::Keto, MacroRatio::new(0.10, 0.25, 0.55)),
    (DietArchetype::Mediterranean, MacroRatio::new(0.35, 0.25, 0.25)),
    (DietArchetype::Paleo, MacroRatio::new(0.20, 0.35, 0.30)),
    (DietArchetype::Vegan, MacroRatio::new(0.50, 0.15, 0.20)),
    (DietArchetype::Vegetarian, MacroRatio::new(0.45, 0.20, 0.20)),
];

/// Macro ratio of an archetype
#[must_use]
pub const fn ratio_for(archetype: DietArchetype) -> MacroRatio {
    match archetype {
        DietArchetype::Anything => DIET_RATIO_TABLE[0].1,
        DietArchetype::Keto => DIET_RATIO_TABLE[1].1,
        DietArchetype::Mediterranean => DIET_RATIO_TABLE[2].1,
        DietArchetype::Paleo => DIET_RATIO_TABLE[3].1,
        DietArchetype::Vegan => DIET_RATIO_TABLE[4].1,
        DietArchetype::Vegetarian => DIET_RATIO_TABLE[5].1,
    }
}

/// Macro ratio for a string label; unknown labels use the `Anything` row
#[must_use]
pub fn ratio_for_label(label: &str) -> MacroRatio {
    ratio_for(DietArchetype::from_str_lossy(label))
}
