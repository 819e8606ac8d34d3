// ABOUTME: Integration tests for per-date meal history reductions
// ABOUTME: Covers logged dates, per-day entries and the daily summary list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use nutrily::intelligence::{aggregate, daily_summaries, meal_dates, meals_on};
use nutrily::models::NutritionTotals;

mod common;

use common::{at, meal};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}

#[test]
fn test_meal_dates_are_distinct_and_sorted() {
    let meals = vec![
        meal(100.0, 1.0, 1.0, 1.0, at(5, 9)),
        meal(100.0, 1.0, 1.0, 1.0, at(2, 9)),
        meal(100.0, 1.0, 1.0, 1.0, at(5, 20)),
    ];
    let dates: Vec<NaiveDate> = meal_dates(&meals).into_iter().collect();

    assert_eq!(dates, vec![day(2), day(5)]);
}

#[test]
fn test_meals_on_a_day_without_entries() {
    let meals = vec![meal(100.0, 1.0, 1.0, 1.0, at(5, 9))];
    assert!(meals_on(&meals, day(6)).is_empty());
}

#[test]
fn test_meals_at_day_boundary_use_utc_date() {
    let meals = vec![
        meal(100.0, 1.0, 1.0, 1.0, at(5, 23)),
        meal(200.0, 1.0, 1.0, 1.0, at(6, 0)),
    ];

    assert_eq!(meals_on(&meals, day(5)).len(), 1);
    assert!((meals_on(&meals, day(6))[0].calories - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_summaries_add_up_to_whole_log() {
    let meals: Vec<_> = (1..=10)
        .map(|i| meal(f64::from(i) * 50.0, 10.0, 20.0, 5.0, at(i % 4 + 1, 8 + i)))
        .collect();
    let summaries = daily_summaries(&meals);

    assert_eq!(summaries.len(), 4);
    assert_eq!(summaries.iter().map(|s| s.meal_count).sum::<usize>(), 10);

    let from_days: NutritionTotals = summaries.iter().map(|s| s.totals).sum();
    let whole = aggregate(&meals);
    assert!((from_days.calories - whole.calories).abs() < 1e-9);
    assert!((from_days.fat_g - whole.fat_g).abs() < 1e-9);
    assert!(summaries.windows(2).all(|w| w[0].date < w[1].date));
}
