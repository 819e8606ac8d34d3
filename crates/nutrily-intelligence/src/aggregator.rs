// ABOUTME: Reduction of logged meals into daily totals, remaining amounts and progress
// ABOUTME: Pure functions plus a DailyReport that derives everything from one snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Aggregator
//!
//! All functions here are pure: they borrow the meal entries, never mutate
//! them, and return fresh values. The caller supplies meals already scoped to
//! one calendar day.

use crate::config::InsightThresholdsConfig;
use crate::insights::{derive_insights, Insight};
use nutrily_core::models::{DailyTarget, MealEntry, MealType, Nutrient, NutritionTotals};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Percent of target reached per nutrient
///
/// `None` means the percent is undefined because the target for that
/// nutrient is zero (or negative). Values are not capped at 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroProgress {
    /// Calories percent of target
    pub calories: Option<f64>,
    /// Protein percent of target
    pub protein: Option<f64>,
    /// Carbs percent of target
    pub carbs: Option<f64>,
    /// Fat percent of target
    pub fats: Option<f64>,
}

impl MacroProgress {
    /// Percent for a single nutrient
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fats => self.fats,
        }
    }

    /// `(nutrient, percent)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, Option<f64>)> + '_ {
        Nutrient::ALL.into_iter().map(|n| (n, self.get(n)))
    }
}

/// Percent of `target` that `consumed` represents, `None` for a non-positive target
#[must_use]
pub fn percent_of(consumed: f64, target: f64) -> Option<f64> {
    (target > 0.0).then(|| (consumed / target) * 100.0)
}

/// Sum calories and macros across meals
///
/// Empty input yields all-zero totals; order does not matter.
#[must_use]
pub fn aggregate<'a, I>(meals: I) -> NutritionTotals
where
    I: IntoIterator<Item = &'a MealEntry>,
{
    meals.into_iter().map(MealEntry::nutrition).sum()
}

/// Amount left to reach the target, never negative
///
/// Over-consumption reports zero remaining rather than a deficit.
#[must_use]
pub fn remaining(totals: &NutritionTotals, target: &DailyTarget) -> NutritionTotals {
    NutritionTotals::from_fn(|n| (target.get(n) - totals.get(n)).max(0.0))
}

/// Uncapped percent of target per nutrient
#[must_use]
pub fn progress_percent(totals: &NutritionTotals, target: &DailyTarget) -> MacroProgress {
    let pct = |n| percent_of(totals.get(n), target.get(n));

    MacroProgress {
        calories: pct(Nutrient::Calories),
        protein: pct(Nutrient::Protein),
        carbs: pct(Nutrient::Carbs),
        fats: pct(Nutrient::Fats),
    }
}

/// Totals per meal category; categories with no entries are absent
#[must_use]
pub fn totals_by_meal_type<'a, I>(meals: I) -> BTreeMap<MealType, NutritionTotals>
where
    I: IntoIterator<Item = &'a MealEntry>,
{
    let mut by_type: BTreeMap<MealType, NutritionTotals> = BTreeMap::new();
    for meal in meals {
        *by_type.entry(meal.meal_type).or_default() += meal.nutrition();
    }
    by_type
}

/// Everything derived for one day from a single (meals, target) snapshot
#[derive(Debug, Clone, Serialize)]
pub struct DailyReport {
    /// Target the day is measured against
    pub target: DailyTarget,
    /// Sum of the day's meals
    pub totals: NutritionTotals,
    /// Amount left per nutrient
    pub remaining: NutritionTotals,
    /// Uncapped progress per nutrient
    pub progress: MacroProgress,
    /// Advisory insights in rule order
    pub insights: Vec<Insight>,
    /// Number of meals in the snapshot
    pub meal_count: usize,
}

impl DailyReport {
    /// Build a report, aggregating the meals exactly once
    #[must_use]
    pub fn build(
        meals: &[MealEntry],
        target: DailyTarget,
        thresholds: &InsightThresholdsConfig,
    ) -> Self {
        let totals = aggregate(meals);

        Self {
            target,
            totals,
            remaining: remaining(&totals, &target),
            progress: progress_percent(&totals, &target),
            insights: derive_insights(&totals, &target, thresholds),
            meal_count: meals.len(),
        }
    }
}
