// ABOUTME: Meal logging models for food intake tracking
// ABOUTME: MealType, immutable MealEntry and the validated NewMealEntry request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::meal_defaults;
use crate::errors::{AppError, AppResult};
use crate::models::totals::NutritionTotals;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Type of meal
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    #[default]
    #[serde(other)]
    Other,
}

impl MealType {
    /// Stable identifier used in serialized form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logged food instance
///
/// Created once when a meal is logged and never mutated afterwards; the only
/// lifecycle event is explicit removal by the meal-log store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealEntry {
    /// Unique identifier
    pub id: Uuid,
    /// Food name as logged
    pub name: String,
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Meal category
    #[serde(default)]
    pub meal_type: MealType,
    /// Portion label, e.g. `"100g"`
    #[serde(default = "default_portion")]
    pub portion: String,
    /// Number of servings the nutrient values already account for
    #[serde(default = "default_servings")]
    pub servings: f64,
    /// When the meal was logged
    pub logged_at: DateTime<Utc>,
}

fn default_portion() -> String {
    meal_defaults::PORTION.to_owned()
}

const fn default_servings() -> f64 {
    meal_defaults::SERVINGS
}

impl MealEntry {
    /// Calendar day (UTC) the meal belongs to
    #[must_use]
    pub fn meal_date(&self) -> NaiveDate {
        self.logged_at.date_naive()
    }

    /// This entry's contribution to daily totals
    #[must_use]
    pub const fn nutrition(&self) -> NutritionTotals {
        NutritionTotals::new(self.calories, self.protein_g, self.carbs_g, self.fat_g)
    }
}

/// A meal as submitted by the logging form, before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewMealEntry {
    /// Food name
    pub name: String,
    /// Calories (kcal)
    #[serde(default)]
    pub calories: f64,
    /// Protein (g)
    #[serde(default)]
    pub protein_g: f64,
    /// Carbohydrates (g)
    #[serde(default)]
    pub carbs_g: f64,
    /// Fat (g)
    #[serde(default)]
    pub fat_g: f64,
    /// Meal category
    #[serde(default)]
    pub meal_type: MealType,
    /// Portion label
    #[serde(default)]
    pub portion: Option<String>,
    /// Servings
    #[serde(default)]
    pub servings: Option<f64>,
}

impl NewMealEntry {
    /// Validate the request and turn it into an immutable [`MealEntry`]
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank name, a negative or non-finite
    /// nutrient value, or non-positive servings
    pub fn validate(self, logged_at: DateTime<Utc>) -> AppResult<MealEntry> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::missing_field("name"));
        }

        for (field, value) in [
            ("calories", self.calories),
            ("protein_g", self.protein_g),
            ("carbs_g", self.carbs_g),
            ("fat_g", self.fat_g),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::invalid_input(format!(
                    "{field} must be a non-negative number, got {value}"
                ))
                .with_details(serde_json::json!({ "field": field })));
            }
        }

        let servings = self.servings.unwrap_or(meal_defaults::SERVINGS);
        if !servings.is_finite() || servings <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "servings must be greater than zero, got {servings}"
            )));
        }

        let portion = self
            .portion
            .map(|p| p.trim().to_owned())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(default_portion);

        Ok(MealEntry {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
            meal_type: self.meal_type,
            portion,
            servings,
            logged_at,
        })
    }
}
