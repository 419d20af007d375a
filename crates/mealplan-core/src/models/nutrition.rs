// ABOUTME: Fixed-shape nutrition vector and nutrient keys
// ABOUTME: Element-wise arithmetic used by contribution scaling and aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Nutrient dimension of a [`NutritionVector`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Energy (kcal)
    Calories,
    /// Carbohydrates (g)
    Carbs,
    /// Protein (g)
    Proteins,
    /// Fat (g)
    Fats,
    /// Dietary fiber (g)
    Fiber,
    /// Sodium (mg)
    Sodium,
    /// Cholesterol (mg)
    Cholesterol,
    /// Sugar (g)
    Sugar,
}

impl Nutrient {
    /// Every nutrient key, in serialization order
    pub const ALL: [Self; 8] = [
        Self::Calories,
        Self::Carbs,
        Self::Proteins,
        Self::Fats,
        Self::Fiber,
        Self::Sodium,
        Self::Cholesterol,
        Self::Sugar,
    ];

    /// Serialized key name
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Carbs => "carbs",
            Self::Proteins => "proteins",
            Self::Fats => "fats",
            Self::Fiber => "fiber",
            Self::Sodium => "sodium",
            Self::Cholesterol => "cholesterol",
            Self::Sugar => "sugar",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Amount of each nutrient, either per reference unit of a food or as a total
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionVector {
    /// Energy (kcal)
    #[serde(default)]
    pub calories: f64,
    /// Carbohydrates (g)
    #[serde(default)]
    pub carbs: f64,
    /// Protein (g)
    #[serde(default)]
    pub proteins: f64,
    /// Fat (g)
    #[serde(default)]
    pub fats: f64,
    /// Dietary fiber (g)
    #[serde(default)]
    pub fiber: f64,
    /// Sodium (mg)
    #[serde(default)]
    pub sodium: f64,
    /// Cholesterol (mg)
    #[serde(default)]
    pub cholesterol: f64,
    /// Sugar (g)
    #[serde(default)]
    pub sugar: f64,
}

impl NutritionVector {
    /// The zero vector
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            calories: 0.0,
            carbs: 0.0,
            proteins: 0.0,
            fats: 0.0,
            fiber: 0.0,
            sodium: 0.0,
            cholesterol: 0.0,
            sugar: 0.0,
        }
    }

    /// Value of a single nutrient
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Carbs => self.carbs,
            Nutrient::Proteins => self.proteins,
            Nutrient::Fats => self.fats,
            Nutrient::Fiber => self.fiber,
            Nutrient::Sodium => self.sodium,
            Nutrient::Cholesterol => self.cholesterol,
            Nutrient::Sugar => self.sugar,
        }
    }

    /// Apply `f` to every nutrient, producing a new vector
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            calories: f(self.calories),
            carbs: f(self.carbs),
            proteins: f(self.proteins),
            fats: f(self.fats),
            fiber: f(self.fiber),
            sodium: f(self.sodium),
            cholesterol: f(self.cholesterol),
            sugar: f(self.sugar),
        }
    }

    /// Multiply every nutrient by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        self.map(|value| value * factor)
    }

    /// Iterate `(nutrient, value)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        Nutrient::ALL.into_iter().map(|n| (n, self.get(n)))
    }

    /// First nutrient that is NaN, infinite, or negative
    #[must_use]
    pub fn first_invalid(&self) -> Option<(Nutrient, f64)> {
        self.iter().find(|(_, value)| !value.is_finite() || *value < 0.0)
    }
}

impl Add for NutritionVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            carbs: self.carbs + rhs.carbs,
            proteins: self.proteins + rhs.proteins,
            fats: self.fats + rhs.fats,
            fiber: self.fiber + rhs.fiber,
            sodium: self.sodium + rhs.sodium,
            cholesterol: self.cholesterol + rhs.cholesterol,
            sugar: self.sugar + rhs.sugar,
        }
    }
}

impl AddAssign for NutritionVector {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for NutritionVector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Self> for NutritionVector {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
