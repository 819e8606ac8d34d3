// ABOUTME: Profile setup and daily target updates
// ABOUTME: Derives targets from profiles and applies the macro consistency policy before storing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::AppConfig;
use crate::database_plugins::DatabaseProvider;
use crate::errors::{AppError, AppResult};
use crate::models::{DailyTarget, ProfileForm, UserProfile};
use nutrily_intelligence::{
    compute_daily_target, validate_macro_calorie_consistency, MacroConsistency,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Result of completing profile setup
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSetup {
    /// Parsed profile as stored
    pub profile: UserProfile,
    /// Derived daily target as stored
    pub target: DailyTarget,
    /// Whether the derived target's macros add up to its calories
    pub consistency: MacroConsistency,
}

/// Profile and target management
#[derive(Clone)]
pub struct ProfileService<D: DatabaseProvider> {
    database: D,
    config: Arc<AppConfig>,
}

impl<D: DatabaseProvider> ProfileService<D> {
    /// Create a service over `database`
    #[must_use]
    pub const fn new(database: D, config: Arc<AppConfig>) -> Self {
        Self { database, config }
    }

    /// Parse the setup form, derive a target and store both
    ///
    /// A derived target is stored even if it fails the consistency check,
    /// because the mismatch comes from rounding the formula, not user input.
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` or `MissingRequiredField` for a bad form and
    /// storage errors from the provider
    pub async fn complete_setup(&self, user_id: Uuid, form: ProfileForm) -> AppResult<ProfileSetup> {
        let profile = form.into_profile()?;
        let target = compute_daily_target(&profile, &self.config.nutrition)?;
        let consistency = validate_macro_calorie_consistency(
            &target,
            self.config.nutrition.target_derivation.macro_tolerance_kcal,
        );
        if !consistency.consistent {
            warn!(
                user_id = %user_id,
                calories = target.calories,
                computed_calories = consistency.computed_calories,
                delta_kcal = consistency.delta_kcal,
                "Derived target macros do not match calories"
            );
        }

        self.database.upsert_profile(user_id, &profile).await?;
        self.database.upsert_daily_target(user_id, &target).await?;
        info!(
            user_id = %user_id,
            calories = target.calories,
            protein_g = target.protein_g,
            carbs_g = target.carbs_g,
            fat_g = target.fat_g,
            "Profile setup completed"
        );

        Ok(ProfileSetup {
            profile,
            target,
            consistency,
        })
    }

    /// Store a manually edited target
    ///
    /// # Errors
    ///
    /// Returns `InconsistentTarget` when the macros miss the calories by more
    /// than the tolerance and enforcement is enabled; storage errors otherwise
    pub async fn update_target(
        &self,
        user_id: Uuid,
        target: DailyTarget,
    ) -> AppResult<MacroConsistency> {
        let consistency = validate_macro_calorie_consistency(
            &target,
            self.config.nutrition.target_derivation.macro_tolerance_kcal,
        );

        if !consistency.consistent {
            if self.config.targets.enforce_target_consistency {
                return Err(AppError::inconsistent_target(
                    target.calories,
                    consistency.computed_calories,
                    consistency.delta_kcal,
                ));
            }
            warn!(
                user_id = %user_id,
                calories = target.calories,
                computed_calories = consistency.computed_calories,
                delta_kcal = consistency.delta_kcal,
                "Saving target whose macros do not match calories"
            );
        }

        self.database.upsert_daily_target(user_id, &target).await?;
        info!(user_id = %user_id, calories = target.calories, "Daily target updated");
        Ok(consistency)
    }

    /// Stored profile, if setup has been completed
    ///
    /// # Errors
    ///
    /// Returns storage errors from the provider
    pub async fn profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        self.database.get_profile(user_id).await
    }
}
