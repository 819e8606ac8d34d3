// ABOUTME: Daily calorie and macronutrient target model
// ABOUTME: Owned by the profile/settings subsystem and passed by value into aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{default_goals, energy};
use crate::models::totals::Nutrient;
use serde::{Deserialize, Serialize};

/// Daily calorie and macro goal
///
/// Consistency between `calories` and the macros is checked by the goal
/// calculator's validator, never enforced here: a manually edited target may
/// be inconsistent and it is up to the caller whether to accept it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyTarget {
    /// Calories (kcal/day)
    pub calories: i32,
    /// Protein (g/day)
    pub protein_g: f64,
    /// Carbohydrates (g/day)
    pub carbs_g: f64,
    /// Fat (g/day)
    pub fat_g: f64,
}

impl DailyTarget {
    /// Create a target from its four components
    #[must_use]
    pub const fn new(calories: i32, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    /// Calories implied by the macros using Atwater factors (4/4/9)
    #[must_use]
    pub fn macro_calories(&self) -> f64 {
        self.fat_g.mul_add(
            energy::KCAL_PER_G_FAT,
            self.protein_g
                .mul_add(energy::KCAL_PER_G_PROTEIN, self.carbs_g * energy::KCAL_PER_G_CARBS),
        )
    }

    /// Value of a single nutrient
    #[must_use]
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => f64::from(self.calories),
            Nutrient::Protein => self.protein_g,
            Nutrient::Carbs => self.carbs_g,
            Nutrient::Fats => self.fat_g,
        }
    }
}

impl Default for DailyTarget {
    /// Goals shown before the user has completed profile setup
    fn default() -> Self {
        Self::new(
            default_goals::CALORIES,
            default_goals::PROTEIN_G,
            default_goals::CARBS_G,
            default_goals::FAT_G,
        )
    }
}
