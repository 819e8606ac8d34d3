// ABOUTME: Daily target derivation from a user profile using Mifflin-St Jeor BMR
// ABOUTME: Calorie goal adjustment, fixed macro split and macro/calorie consistency validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal Calculator
//!
//! Turns a [`UserProfile`] into a [`DailyTarget`]:
//!
//! 1. BMR via Mifflin-St Jeor
//! 2. TDEE = BMR x activity factor, rounded to whole kcal
//! 3. +/- goal adjustment (no safety floor is applied)
//! 4. protein from body weight, fat as a share of calories, carbs from the remainder
//!
//! Carbs are not clamped: very low calorie goals with a high protein floor
//! yield a negative carb target, which the consistency validator and callers
//! are expected to surface.
//!
//! # Reference
//!
//! Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//! *American Journal of Clinical Nutrition*, 51(2), 241-247.
//! <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::{
    ActivityFactorsConfig, BmrConfig, NutritionConfig, TargetDerivationConfig,
};
use nutrily_core::constants::energy;
use nutrily_core::errors::{AppError, AppResult};
use nutrily_core::models::{ActivityLevel, DailyTarget, UserProfile, WeightGoal};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Outcome of [`validate_macro_calorie_consistency`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroConsistency {
    /// Whether the macros match the stated calories within tolerance
    pub consistent: bool,
    /// `protein*4 + carbs*4 + fat*9`
    pub computed_calories: f64,
    /// Absolute gap between computed and stated calories
    pub delta_kcal: f64,
}

/// Share of macro-derived calories from each macronutrient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroPercentages {
    /// Protein as percentage of total calories
    pub protein_percent: f64,
    /// Carbohydrates as percentage of total calories
    pub carbs_percent: f64,
    /// Fat as percentage of total calories
    pub fat_percent: f64,
}

/// Round half up (towards positive infinity on `.5`)
///
/// Differs from [`f64::round`] only for negative halves: `-2.5` becomes `-2`.
/// Targets computed elsewhere in the product use this convention, so carbs on
/// the negative edge must round the same way.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    // `value + 0.5` can itself round up (0.49999999999999994 + 0.5 == 1.0),
    // while `value - floor(value)` is exact
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Men: +5
/// - Women: -161
///
/// The profile is assumed valid; no minimum BMR is enforced.
#[must_use]
pub fn calculate_mifflin_st_jeor(profile: &UserProfile, config: &BmrConfig) -> f64 {
    let weight_component = config.msj_weight_coef * profile.weight_kg;
    let height_component = config.msj_height_coef * profile.height_cm;
    let age_component = config.msj_age_coef * f64::from(profile.age);

    weight_component + height_component + age_component + config.sex_constant(profile.sex)
}

/// Maintenance calories: `round(bmr x activity factor)`
///
/// # Errors
///
/// Returns `InvalidProfile` when the result does not fit a whole-kcal target,
/// which only happens for absurd body measurements
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<i32> {
    let maintenance = round_half_up(bmr * config.factor(activity_level));
    if !maintenance.is_finite()
        || maintenance < f64::from(i32::MIN)
        || maintenance > f64::from(i32::MAX)
    {
        return Err(AppError::invalid_profile(
            "weight_kg",
            format!("measurements yield {maintenance} kcal/day, outside any usable target"),
        ));
    }
    Ok(maintenance as i32)
}

/// Apply the weight-goal deficit or surplus
///
/// # Errors
///
/// Returns `InvalidProfile` if the adjusted goal overflows a whole-kcal target
pub fn apply_goal_adjustment(
    maintenance_kcal: i32,
    goal: WeightGoal,
    config: &TargetDerivationConfig,
) -> AppResult<i32> {
    let adjusted = match goal {
        WeightGoal::Lose => maintenance_kcal.checked_sub(config.goal_adjustment_kcal),
        WeightGoal::Maintain => Some(maintenance_kcal),
        WeightGoal::Gain => maintenance_kcal.checked_add(config.goal_adjustment_kcal),
    };
    adjusted.ok_or_else(|| {
        AppError::invalid_profile(
            "goal",
            format!("adjusting {maintenance_kcal} kcal/day for goal {goal:?} overflows"),
        )
    })
}

/// Split a calorie goal into protein, carbs and fat grams
///
/// Returns `(protein_g, carbs_g, fat_g)`, each rounded to whole grams.
#[must_use]
pub fn split_macros(
    calories: i32,
    weight_kg: f64,
    config: &TargetDerivationConfig,
) -> (f64, f64, f64) {
    let calories = f64::from(calories);
    let protein_g = round_half_up(weight_kg * config.protein_g_per_kg);
    let fat_g = round_half_up(calories * config.fat_calorie_share / energy::KCAL_PER_G_FAT);
    let remainder_kcal = fat_g.mul_add(
        -energy::KCAL_PER_G_FAT,
        protein_g.mul_add(-energy::KCAL_PER_G_PROTEIN, calories),
    );
    let carbs_g = round_half_up(remainder_kcal / energy::KCAL_PER_G_CARBS);

    (protein_g, carbs_g, fat_g)
}

/// Compute the recommended daily target for a profile
///
/// # Errors
///
/// Returns `InvalidProfile` if any numeric profile field is zero, negative or
/// not finite, or if the measurements are too large for a whole-kcal target;
/// no target is built from such input.
pub fn compute_daily_target(
    profile: &UserProfile,
    config: &NutritionConfig,
) -> AppResult<DailyTarget> {
    profile.validate()?;

    let bmr = calculate_mifflin_st_jeor(profile, &config.bmr);
    let maintenance = calculate_tdee(bmr, profile.activity_level, &config.activity_factors)?;
    let calories = apply_goal_adjustment(maintenance, profile.goal, &config.target_derivation)?;
    let (protein_g, carbs_g, fat_g) =
        split_macros(calories, profile.weight_kg, &config.target_derivation);

    debug!(
        bmr,
        maintenance,
        calories,
        protein_g,
        carbs_g,
        fat_g,
        activity = %profile.activity_level,
        "Computed daily target"
    );
    if carbs_g < 0.0 {
        warn!(
            calories,
            protein_g,
            fat_g,
            carbs_g,
            "Protein and fat exceed the calorie goal; carb target is negative"
        );
    }

    Ok(DailyTarget::new(calories, protein_g, carbs_g, fat_g))
}

/// Check that a target's macros add up to its calories
///
/// Total: never fails, whatever the target contains.
#[must_use]
pub fn validate_macro_calorie_consistency(
    target: &DailyTarget,
    tolerance_kcal: f64,
) -> MacroConsistency {
    let computed_calories = target.macro_calories();
    let delta_kcal = (computed_calories - f64::from(target.calories)).abs();

    MacroConsistency {
        consistent: delta_kcal <= tolerance_kcal,
        computed_calories,
        delta_kcal,
    }
}

/// Macro calorie shares of a target, `None` when its macros carry no energy
#[must_use]
pub fn macro_split(target: &DailyTarget) -> Option<MacroPercentages> {
    let total_kcal = target.macro_calories();
    if total_kcal <= 0.0 {
        return None;
    }

    Some(MacroPercentages {
        protein_percent: (target.protein_g * energy::KCAL_PER_G_PROTEIN / total_kcal) * 100.0,
        carbs_percent: (target.carbs_g * energy::KCAL_PER_G_CARBS / total_kcal) * 100.0,
        fat_percent: (target.fat_g * energy::KCAL_PER_G_FAT / total_kcal) * 100.0,
    })
}
