// ABOUTME: DashMap-backed DatabaseProvider used by the CLI and tests
// ABOUTME: Shared via Arc so clones see the same data across tasks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::DatabaseProvider;
use crate::errors::AppResult;
use crate::models::{DailyTarget, MealEntry, UserProfile};
use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Tables {
    profiles: DashMap<Uuid, UserProfile>,
    targets: DashMap<Uuid, DailyTarget>,
    meals: DashMap<Uuid, Vec<MealEntry>>,
}

/// In-memory storage keyed by user id
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    tables: Arc<Tables>,
}

impl InMemoryDatabase {
    /// Create an empty database
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of meals stored for a user
    #[must_use]
    pub fn meal_count(&self, user_id: Uuid) -> usize {
        self.tables.meals.get(&user_id).map_or(0, |m| m.len())
    }
}

#[async_trait]
impl DatabaseProvider for InMemoryDatabase {
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        Ok(self.tables.profiles.get(&user_id).map(|p| p.value().clone()))
    }

    async fn upsert_profile(&self, user_id: Uuid, profile: &UserProfile) -> AppResult<()> {
        self.tables.profiles.insert(user_id, profile.clone());
        Ok(())
    }

    async fn get_daily_target(&self, user_id: Uuid) -> AppResult<Option<DailyTarget>> {
        Ok(self.tables.targets.get(&user_id).map(|t| *t.value()))
    }

    async fn upsert_daily_target(&self, user_id: Uuid, target: &DailyTarget) -> AppResult<()> {
        self.tables.targets.insert(user_id, *target);
        Ok(())
    }

    async fn insert_meal(&self, user_id: Uuid, meal: &MealEntry) -> AppResult<()> {
        let mut meals = self.tables.meals.entry(user_id).or_default();
        let position = meals.partition_point(|m| m.logged_at <= meal.logged_at);
        meals.insert(position, meal.clone());
        debug!(user_id = %user_id, meal_id = %meal.id, "Stored meal");
        Ok(())
    }

    async fn meals_for_date(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Vec<MealEntry>> {
        Ok(self.tables.meals.get(&user_id).map_or_else(Vec::new, |meals| {
            meals
                .iter()
                .filter(|m| m.meal_date() == date)
                .cloned()
                .collect()
        }))
    }

    async fn all_meals(&self, user_id: Uuid) -> AppResult<Vec<MealEntry>> {
        Ok(self
            .tables
            .meals
            .get(&user_id)
            .map_or_else(Vec::new, |meals| meals.value().clone()))
    }

    async fn delete_meal(&self, user_id: Uuid, meal_id: Uuid) -> AppResult<bool> {
        let Some(mut meals) = self.tables.meals.get_mut(&user_id) else {
            return Ok(false);
        };
        let before = meals.len();
        meals.retain(|m| m.id != meal_id);
        Ok(meals.len() != before)
    }
}
