// ABOUTME: Dashboard assembly: one day's report, per-meal-type breakdown and history
// ABOUTME: Reads meals and target once per request so all derived numbers agree
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::AppConfig;
use crate::database_plugins::DatabaseProvider;
use crate::errors::AppResult;
use crate::models::{MealEntry, MealType, NutritionTotals};
use chrono::NaiveDate;
use nutrily_intelligence::{
    daily_summaries, totals_by_meal_type, validate_macro_calorie_consistency, DailyReport,
    DailySummary, MacroConsistency,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Everything shown on the dashboard for one day
#[derive(Debug, Clone, Serialize)]
pub struct DailyDashboard {
    /// Day the dashboard describes
    pub date: NaiveDate,
    /// Whether `report.target` is the built-in default rather than a stored target
    pub using_default_target: bool,
    /// Totals, remaining, progress and insights
    pub report: DailyReport,
    /// Totals per meal category
    pub by_meal_type: BTreeMap<MealType, NutritionTotals>,
    /// Consistency of the target the day is measured against
    pub target_consistency: MacroConsistency,
    /// The day's meals, oldest first
    pub meals: Vec<MealEntry>,
}

/// Builds dashboards and history from stored data
#[derive(Clone)]
pub struct DashboardService<D: DatabaseProvider> {
    database: D,
    config: Arc<AppConfig>,
}

impl<D: DatabaseProvider> DashboardService<D> {
    /// Create a service over `database`
    #[must_use]
    pub const fn new(database: D, config: Arc<AppConfig>) -> Self {
        Self { database, config }
    }

    /// Dashboard for one calendar day
    ///
    /// Falls back to the configured default target when the user has not
    /// completed profile setup.
    ///
    /// # Errors
    ///
    /// Returns storage errors from the provider
    pub async fn daily_dashboard(&self, user_id: Uuid, date: NaiveDate) -> AppResult<DailyDashboard> {
        let meals = self.database.meals_for_date(user_id, date).await?;
        let stored = self.database.get_daily_target(user_id).await?;
        let using_default_target = stored.is_none();
        let target = stored.unwrap_or(self.config.targets.default_target);

        let report = DailyReport::build(&meals, target, &self.config.nutrition.insights);
        let by_meal_type = totals_by_meal_type(&meals);
        let target_consistency = validate_macro_calorie_consistency(
            &target,
            self.config.nutrition.target_derivation.macro_tolerance_kcal,
        );

        debug!(
            user_id = %user_id,
            %date,
            meal_count = report.meal_count,
            calories = report.totals.calories,
            insights = report.insights.len(),
            using_default_target,
            "Built daily dashboard"
        );

        Ok(DailyDashboard {
            date,
            using_default_target,
            report,
            by_meal_type,
            target_consistency,
            meals,
        })
    }

    /// Per-day summaries of the user's whole log, ascending by date
    ///
    /// # Errors
    ///
    /// Returns storage errors from the provider
    pub async fn history(&self, user_id: Uuid) -> AppResult<Vec<DailySummary>> {
        let meals = self.database.all_meals(user_id).await?;
        let summaries = daily_summaries(&meals);
        info!(
            user_id = %user_id,
            meals = meals.len(),
            days = summaries.len(),
            "Built meal history"
        );
        Ok(summaries)
    }
}
