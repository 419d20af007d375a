// ABOUTME: Diet archetype labels offered in the nutrition settings
// ABOUTME: Lossy parsing falls back to Anything for unrecognized labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Named diet pattern with an associated macro ratio
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DietArchetype {
    /// No restriction; balanced default
    #[default]
    Anything,
    /// Very low carb, high fat
    Keto,
    /// Mediterranean pattern
    Mediterranean,
    /// Paleolithic pattern, high protein
    Paleo,
    /// Plant-only, high carb
    Vegan,
    /// No meat, high carb
    Vegetarian,
}

impl DietArchetype {
    /// Every archetype
    pub const ALL: [Self; 6] = [
        Self::Anything,
        Self::Keto,
        Self::Mediterranean,
        Self::Paleo,
        Self::Vegan,
        Self::Vegetarian,
    ];

    /// Strict parse (case-insensitive), `None` for unrecognized labels
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "anything" => Some(Self::Anything),
            "keto" => Some(Self::Keto),
            "mediterranean" => Some(Self::Mediterranean),
            "paleo" => Some(Self::Paleo),
            "vegan" => Some(Self::Vegan),
            "vegetarian" => Some(Self::Vegetarian),
            _ => None,
        }
    }

    /// Parse archetype from string, falling back to `Anything` for unknown labels
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            warn!(label = s, "Unknown diet archetype, falling back to Anything");
            Self::Anything
        })
    }

    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anything => "Anything",
            Self::Keto => "Keto",
            Self::Mediterranean => "Mediterranean",
            Self::Paleo => "Paleo",
            Self::Vegan => "Vegan",
            Self::Vegetarian => "Vegetarian",
        }
    }
}

impl fmt::Display for DietArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
