// ABOUTME: JSON nutrition log files read by the command-line tool
// ABOUTME: Loads a profile, an optional target and timestamped meals into a storage provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition log file format
//!
//! ```json
//! {
//!   "profile": { "age": 30, "sex": "male", "height_cm": 180, "weight_kg": 80,
//!                "activity_level": "moderate", "goal": "maintain" },
//!   "meals": [
//!     { "name": "Oatmeal", "calories": 150, "protein_g": 5, "carbs_g": 27,
//!       "fat_g": 3, "meal_type": "breakfast", "logged_at": "2025-06-01T08:00:00Z" }
//!   ]
//! }
//! ```
//!
//! A stored `target` wins over one derived from `profile`; with neither, the
//! dashboard falls back to the default goals.

use crate::config::AppConfig;
use crate::database_plugins::DatabaseProvider;
use crate::errors::{AppError, AppResult};
use crate::models::{DailyTarget, NewMealEntry, UserProfile};
use crate::services::MealLogService;
use chrono::{DateTime, Utc};
use nutrily_intelligence::compute_daily_target;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};
use uuid::Uuid;

/// A meal as written in a log file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedMeal {
    /// When the meal was eaten
    pub logged_at: DateTime<Utc>,
    /// Meal contents
    #[serde(flatten)]
    pub meal: NewMealEntry,
}

/// Contents of a nutrition log file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionLogFile {
    /// Profile used to derive a target when none is stored
    #[serde(default)]
    pub profile: Option<UserProfile>,
    /// Explicit daily target
    #[serde(default)]
    pub target: Option<DailyTarget>,
    /// Logged meals in any order
    #[serde(default)]
    pub meals: Vec<LoggedMeal>,
}

impl NutritionLogFile {
    /// Parse a log file from JSON text
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` for malformed JSON or unknown field values
    pub fn parse(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a log file
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be read and
    /// `SerializationError` if it is not a valid log file
    pub async fn load(path: &Path) -> AppResult<Self> {
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::storage(format!("Cannot read {}: {e}", path.display())).with_source(e)
        })?;
        let file = Self::parse(&json)?;
        debug!(
            path = %path.display(),
            meals = file.meals.len(),
            has_profile = file.profile.is_some(),
            has_target = file.target.is_some(),
            "Loaded nutrition log"
        );
        Ok(file)
    }

    /// Store the file's contents for `user_id`
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` for an unusable profile, `InvalidInput` for a
    /// bad meal entry, and storage errors from the provider
    pub async fn import_into<D: DatabaseProvider>(
        self,
        database: &D,
        user_id: Uuid,
        config: &AppConfig,
    ) -> AppResult<()> {
        // Derive before storing so a rejected profile leaves nothing behind
        let derived = self
            .profile
            .as_ref()
            .map(|profile| compute_daily_target(profile, &config.nutrition))
            .transpose()?;
        if let Some(profile) = &self.profile {
            database.upsert_profile(user_id, profile).await?;
        }
        if let Some(target) = self.target.or(derived) {
            database.upsert_daily_target(user_id, &target).await?;
        }

        let meal_log = MealLogService::new(database.clone());
        let count = self.meals.len();
        for logged in self.meals {
            meal_log
                .log_meal_at(user_id, logged.meal, logged.logged_at)
                .await?;
        }
        info!(user_id = %user_id, meals = count, "Imported nutrition log");
        Ok(())
    }
}
