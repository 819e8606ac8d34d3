// ABOUTME: Meal history reductions: logged dates, per-date entries and daily summaries
// ABOUTME: Backs the calendar view; per-day totals are reduced on the rayon pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::aggregator::aggregate;
use chrono::NaiveDate;
use nutrily_core::models::{MealEntry, NutritionTotals};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Totals for one calendar day of the log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySummary {
    /// Calendar day (UTC)
    pub date: NaiveDate,
    /// Number of meals logged that day
    pub meal_count: usize,
    /// Sum of that day's meals
    pub totals: NutritionTotals,
}

/// Distinct days with at least one logged meal
#[must_use]
pub fn meal_dates(meals: &[MealEntry]) -> BTreeSet<NaiveDate> {
    meals.iter().map(MealEntry::meal_date).collect()
}

/// Entries logged on `date`, oldest first
#[must_use]
pub fn meals_on(meals: &[MealEntry], date: NaiveDate) -> Vec<&MealEntry> {
    let mut day: Vec<&MealEntry> = meals.iter().filter(|m| m.meal_date() == date).collect();
    day.sort_by_key(|m| m.logged_at);
    day
}

/// One summary per logged day, ascending by date
#[must_use]
pub fn daily_summaries(meals: &[MealEntry]) -> Vec<DailySummary> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&MealEntry>> = BTreeMap::new();
    for meal in meals {
        by_date.entry(meal.meal_date()).or_default().push(meal);
    }

    // BTreeMap iteration is ordered and collect on an indexed parallel iterator keeps it
    by_date
        .into_iter()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|(date, day)| DailySummary {
            date,
            meal_count: day.len(),
            totals: aggregate(day.iter().copied()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use nutrily_core::models::{MealType, NewMealEntry};

    fn meal(day: u32, hour: u32, calories: f64) -> MealEntry {
        NewMealEntry {
            name: format!("meal-{day}-{hour}"),
            calories,
            protein_g: 10.0,
            meal_type: MealType::Snack,
            ..NewMealEntry::default()
        }
        .validate(Utc.with_ymd_and_hms(2025, 6, day, hour, 0, 0).unwrap())
        .unwrap()
    }

    #[test]
    fn test_meals_on_filters_and_orders() {
        let meals = vec![meal(2, 18, 300.0), meal(1, 9, 100.0), meal(2, 7, 200.0)];
        let day = meals_on(&meals, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());

        let calories: Vec<f64> = day.iter().map(|m| m.calories).collect();
        assert_eq!(calories, vec![200.0, 300.0]);
    }

    #[test]
    fn test_summaries_are_sorted_by_date() {
        let meals = vec![meal(3, 12, 500.0), meal(1, 8, 250.0), meal(3, 19, 700.0)];
        let summaries = daily_summaries(&meals);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(summaries[1].meal_count, 2);
        assert!((summaries[1].totals.calories - 1200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_meals_no_dates() {
        assert!(meal_dates(&[]).is_empty());
        assert!(daily_summaries(&[]).is_empty());
    }
}
