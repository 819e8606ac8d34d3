// ABOUTME: Summed nutrition values derived from a set of meal entries
// ABOUTME: Field-wise addition, Sum support and uniform per-nutrient access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// The four tracked quantities
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Energy (kcal)
    Calories,
    /// Protein (g)
    Protein,
    /// Carbohydrates (g)
    Carbs,
    /// Fat (g)
    Fats,
}

impl Nutrient {
    /// Every nutrient, in display order
    pub const ALL: [Self; 4] = [Self::Calories, Self::Protein, Self::Carbs, Self::Fats];

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Calories => "Calories",
            Self::Protein => "Protein",
            Self::Carbs => "Carbs",
            Self::Fats => "Fats",
        }
    }

    /// Display unit
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Calories => "cal",
            Self::Protein | Self::Carbs | Self::Fats => "g",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sum of calories and macros over a set of meals
///
/// Always recomputed from the meal set, never persisted. Values keep full
/// precision; rounding for display is a presentation concern.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionTotals {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

impl NutritionTotals {
    /// All-zero totals (the identity for `+`)
    pub const ZERO: Self = Self {
        calories: 0.0,
        protein_g: 0.0,
        carbs_g: 0.0,
        fat_g: 0.0,
    };

    /// Create totals from the four components
    #[must_use]
    pub const fn new(calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    /// Value of a single nutrient
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein_g,
            Nutrient::Carbs => self.carbs_g,
            Nutrient::Fats => self.fat_g,
        }
    }

    /// Build totals by evaluating `f` for each nutrient
    #[must_use]
    pub fn from_fn(mut f: impl FnMut(Nutrient) -> f64) -> Self {
        Self {
            calories: f(Nutrient::Calories),
            protein_g: f(Nutrient::Protein),
            carbs_g: f(Nutrient::Carbs),
            fat_g: f(Nutrient::Fats),
        }
    }

    /// True when nothing has been logged
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Add for NutritionTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein_g: self.protein_g + rhs.protein_g,
            carbs_g: self.carbs_g + rhs.carbs_g,
            fat_g: self.fat_g + rhs.fat_g,
        }
    }
}

impl AddAssign for NutritionTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for NutritionTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for NutritionTotals {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
