// ABOUTME: Meal logging service: validates submitted meals and records them
// ABOUTME: Entries are immutable once stored; removal is by id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database_plugins::DatabaseProvider;
use crate::errors::{AppError, AppResult};
use crate::models::{MealEntry, NewMealEntry};
use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

/// Records and removes meals
#[derive(Clone)]
pub struct MealLogService<D: DatabaseProvider> {
    database: D,
}

impl<D: DatabaseProvider> MealLogService<D> {
    /// Create a service over `database`
    #[must_use]
    pub const fn new(database: D) -> Self {
        Self { database }
    }

    /// Log a meal at the current time
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput`/`MissingRequiredField` for a bad entry and
    /// storage errors from the provider
    pub async fn log_meal(&self, user_id: Uuid, meal: NewMealEntry) -> AppResult<MealEntry> {
        self.log_meal_at(user_id, meal, Utc::now()).await
    }

    /// Log a meal with an explicit timestamp
    ///
    /// # Errors
    ///
    /// Same as [`Self::log_meal`]
    pub async fn log_meal_at(
        &self,
        user_id: Uuid,
        meal: NewMealEntry,
        logged_at: DateTime<Utc>,
    ) -> AppResult<MealEntry> {
        let entry = meal.validate(logged_at)?;
        self.database.insert_meal(user_id, &entry).await?;
        info!(
            user_id = %user_id,
            meal_id = %entry.id,
            meal_type = %entry.meal_type,
            calories = entry.calories,
            "Meal logged"
        );
        Ok(entry)
    }

    /// Remove a previously logged meal
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the user has no meal with that id
    pub async fn remove_meal(&self, user_id: Uuid, meal_id: Uuid) -> AppResult<()> {
        if !self.database.delete_meal(user_id, meal_id).await? {
            return Err(AppError::not_found(format!("Meal {meal_id}")));
        }
        info!(user_id = %user_id, meal_id = %meal_id, "Meal removed");
        Ok(())
    }
}
