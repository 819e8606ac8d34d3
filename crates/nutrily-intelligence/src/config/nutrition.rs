// ABOUTME: Nutrition configuration for daily target derivation and insight rules
// ABOUTME: Configures BMR coefficients, activity factors, macro split and insight thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use nutrily_core::constants::{
    activity_factors, insight_thresholds, mifflin_st_jeor, targets,
};
use nutrily_core::models::{ActivityLevel, BiologicalSex};
use serde::{Deserialize, Serialize};

/// Mifflin-St Jeor BMR coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161)
    pub msj_female_constant: f64,
}

impl BmrConfig {
    /// Sex-specific constant
    #[must_use]
    pub const fn sex_constant(&self, sex: BiologicalSex) -> f64 {
        match sex {
            BiologicalSex::Male => self.msj_male_constant,
            BiologicalSex::Female => self.msj_female_constant,
        }
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: mifflin_st_jeor::WEIGHT_COEF,
            msj_height_coef: mifflin_st_jeor::HEIGHT_COEF,
            msj_age_coef: mifflin_st_jeor::AGE_COEF,
            msj_male_constant: mifflin_st_jeor::MALE_CONSTANT,
            msj_female_constant: mifflin_st_jeor::FEMALE_CONSTANT,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (physical job or twice-daily training): 1.9
    pub very_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: activity_factors::SEDENTARY,
            light: activity_factors::LIGHT,
            moderate: activity_factors::MODERATE,
            active: activity_factors::ACTIVE,
            very_active: activity_factors::VERY_ACTIVE,
        }
    }
}

/// Calorie adjustment and macro split used when deriving a target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetDerivationConfig {
    /// Deficit for `lose`, surplus for `gain` (kcal/day)
    pub goal_adjustment_kcal: i32,
    /// Protein per kg of body weight (g/kg)
    pub protein_g_per_kg: f64,
    /// Share of calories from fat (0.0-1.0)
    pub fat_calorie_share: f64,
    /// Tolerance for the macro/calorie consistency check (kcal)
    pub macro_tolerance_kcal: f64,
}

impl Default for TargetDerivationConfig {
    fn default() -> Self {
        Self {
            goal_adjustment_kcal: targets::GOAL_ADJUSTMENT_KCAL,
            protein_g_per_kg: targets::PROTEIN_G_PER_KG,
            fat_calorie_share: targets::FAT_CALORIE_SHARE,
            macro_tolerance_kcal: targets::MACRO_TOLERANCE_KCAL,
        }
    }
}

/// Percent-of-target thresholds for daily insights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightThresholdsConfig {
    /// Calories below this percent emit `LowEnergy` (50)
    pub low_energy_percent: f64,
    /// Protein above this percent emits `ProteinGoalNear` (80)
    pub protein_near_percent: f64,
}

impl Default for InsightThresholdsConfig {
    fn default() -> Self {
        Self {
            low_energy_percent: insight_thresholds::LOW_ENERGY_PERCENT,
            protein_near_percent: insight_thresholds::PROTEIN_NEAR_PERCENT,
        }
    }
}
