// ABOUTME: Storage abstraction for profiles, daily targets and logged meals
// ABOUTME: Async provider trait so services do not depend on a concrete backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::models::{DailyTarget, MealEntry, UserProfile};
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

/// In-memory provider backed by concurrent maps
pub mod memory;

pub use memory::InMemoryDatabase;

/// Core storage abstraction trait
///
/// Implementations scope meals by calendar day (UTC) in [`Self::meals_for_date`]
/// so the aggregation code never filters by date itself.
#[async_trait]
pub trait DatabaseProvider: Send + Sync + Clone {
    // ================================
    // Profiles & Targets
    // ================================

    /// Get the stored profile for a user
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>>;

    /// Insert or replace a user's profile
    async fn upsert_profile(&self, user_id: Uuid, profile: &UserProfile) -> AppResult<()>;

    /// Get the stored daily target for a user
    async fn get_daily_target(&self, user_id: Uuid) -> AppResult<Option<DailyTarget>>;

    /// Insert or replace a user's daily target
    async fn upsert_daily_target(&self, user_id: Uuid, target: &DailyTarget) -> AppResult<()>;

    // ================================
    // Meal Log
    // ================================

    /// Store a validated meal entry
    async fn insert_meal(&self, user_id: Uuid, meal: &MealEntry) -> AppResult<()>;

    /// Meals logged on `date`, oldest first
    async fn meals_for_date(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Vec<MealEntry>>;

    /// Every meal a user has logged, oldest first
    async fn all_meals(&self, user_id: Uuid) -> AppResult<Vec<MealEntry>>;

    /// Delete a meal; returns whether it existed
    async fn delete_meal(&self, user_id: Uuid, meal_id: Uuid) -> AppResult<bool>;
}
