// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Quiet logging plus profile, meal and service builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `nutrily`

use chrono::{DateTime, TimeZone, Utc};
use nutrily::config::AppConfig;
use nutrily::database_plugins::InMemoryDatabase;
use nutrily::models::{
    ActivityLevel, BiologicalSex, MealEntry, MealType, NewMealEntry, UserProfile, WeightGoal,
};
use nutrily::services::{DashboardService, MealLogService, ProfileService};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// 30-year-old moderately active male, 180 cm, 80 kg, maintaining
pub fn reference_profile() -> UserProfile {
    UserProfile {
        age: 30,
        sex: BiologicalSex::Male,
        height_cm: 180.0,
        weight_kg: 80.0,
        activity_level: ActivityLevel::Moderate,
        goal: WeightGoal::Maintain,
        dietary_restrictions: None,
    }
}

/// UTC timestamp on 2025-06-`day` at `hour`:00
pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, day, hour, 0, 0).unwrap()
}

/// Unvalidated meal with the given macros
pub fn new_meal(
    name: &str,
    meal_type: MealType,
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
) -> NewMealEntry {
    NewMealEntry {
        name: name.to_owned(),
        calories,
        protein_g,
        carbs_g,
        fat_g,
        meal_type,
        ..NewMealEntry::default()
    }
}

/// Validated meal logged at `logged_at`
pub fn meal(
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    logged_at: DateTime<Utc>,
) -> MealEntry {
    new_meal("Test meal", MealType::Snack, calories, protein_g, carbs_g, fat_g)
        .validate(logged_at)
        .unwrap()
}

/// All three services sharing one in-memory database
pub struct TestServices {
    pub database: InMemoryDatabase,
    pub config: Arc<AppConfig>,
    pub profiles: ProfileService<InMemoryDatabase>,
    pub meals: MealLogService<InMemoryDatabase>,
    pub dashboards: DashboardService<InMemoryDatabase>,
}

/// Build services over a fresh database with `config`
pub fn services_with(config: AppConfig) -> TestServices {
    init_test_logging();
    let database = InMemoryDatabase::new();
    let config = Arc::new(config);
    TestServices {
        profiles: ProfileService::new(database.clone(), Arc::clone(&config)),
        meals: MealLogService::new(database.clone()),
        dashboards: DashboardService::new(database.clone(), Arc::clone(&config)),
        database,
        config,
    }
}

/// Build services with default configuration
pub fn services() -> TestServices {
    services_with(AppConfig::default())
}
