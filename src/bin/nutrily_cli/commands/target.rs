// ABOUTME: Target commands for nutrily-cli
// ABOUTME: Derives a daily target from profile flags and checks macro/calorie consistency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::emit;
use nutrily::config::AppConfig;
use nutrily::database_plugins::InMemoryDatabase;
use nutrily::errors::AppResult;
use nutrily::formatters::{render_consistency, render_target, OutputFormat};
use nutrily::intelligence::{macro_split, validate_macro_calorie_consistency, MacroPercentages};
use nutrily::models::{DailyTarget, ProfileForm};
use nutrily::services::{ProfileService, ProfileSetup};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[derive(Serialize)]
struct TargetOutput {
    #[serde(flatten)]
    setup: ProfileSetup,
    macro_split: Option<MacroPercentages>,
}

/// Build the setup form from raw flag values
pub fn form(
    age: String,
    sex: String,
    height_cm: String,
    weight_kg: String,
    activity: String,
    goal: String,
) -> ProfileForm {
    ProfileForm {
        age: Some(age),
        sex: Some(sex),
        height_cm: Some(height_cm),
        weight_kg: Some(weight_kg),
        activity_level: Some(activity),
        goal: Some(goal),
        dietary_restrictions: None,
    }
}

/// Derive and print a daily target
pub async fn compute(
    config: &Arc<AppConfig>,
    form: ProfileForm,
    format: OutputFormat,
) -> AppResult<()> {
    let profiles = ProfileService::new(InMemoryDatabase::new(), Arc::clone(config));
    let setup = profiles.complete_setup(Uuid::nil(), form).await?;
    info!(calories = setup.target.calories, "Computed target");

    let output = TargetOutput {
        macro_split: macro_split(&setup.target),
        setup,
    };
    emit(&output, format, |o| {
        render_target(&o.setup.target, o.macro_split.as_ref(), &o.setup.consistency)
    })
}

/// Check and print the consistency of a hand-entered target
pub fn validate(
    config: &AppConfig,
    calories: i32,
    protein: f64,
    carbs: f64,
    fats: f64,
    tolerance: Option<f64>,
    format: OutputFormat,
) -> AppResult<()> {
    let target = DailyTarget::new(calories, protein, carbs, fats);
    let tolerance =
        tolerance.unwrap_or(config.nutrition.target_derivation.macro_tolerance_kcal);
    let consistency = validate_macro_calorie_consistency(&target, tolerance);
    emit(&consistency, format, render_consistency)
}
