// ABOUTME: Application constants for energy densities, default goals and thresholds
// ABOUTME: Single source of truth for numbers shared by calculator, aggregator and services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application constants organized by domain

/// Atwater energy factors (kcal per gram)
pub mod energy {
    /// Protein: 4 kcal/g
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Carbohydrate: 4 kcal/g
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Mifflin-St Jeor (1990) coefficients
pub mod mifflin_st_jeor {
    /// Weight coefficient (per kg)
    pub const WEIGHT_COEF: f64 = 10.0;
    /// Height coefficient (per cm)
    pub const HEIGHT_COEF: f64 = 6.25;
    /// Age coefficient (per year)
    pub const AGE_COEF: f64 = -5.0;
    /// Male constant
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Female constant
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// TDEE activity multipliers
pub mod activity_factors {
    /// Little or no exercise
    pub const SEDENTARY: f64 = 1.2;
    /// Light exercise 1-3 days/week
    pub const LIGHT: f64 = 1.375;
    /// Moderate exercise 3-5 days/week
    pub const MODERATE: f64 = 1.55;
    /// Hard exercise 6-7 days/week
    pub const ACTIVE: f64 = 1.725;
    /// Very hard exercise or physical job
    pub const VERY_ACTIVE: f64 = 1.9;
}

/// Target derivation constants
pub mod targets {
    /// Daily calorie deficit for `lose` and surplus for `gain`
    pub const GOAL_ADJUSTMENT_KCAL: i32 = 500;
    /// Protein grams per kg of body weight (about 1 g per lb)
    pub const PROTEIN_G_PER_KG: f64 = 2.2;
    /// Share of daily calories assigned to fat
    pub const FAT_CALORIE_SHARE: f64 = 0.25;
    /// Allowed gap between stated calories and macro-derived calories
    pub const MACRO_TOLERANCE_KCAL: f64 = 50.0;
}

/// Goals used before a user has completed profile setup
pub mod default_goals {
    /// Default calories (kcal/day)
    pub const CALORIES: i32 = 2000;
    /// Default protein (g/day)
    pub const PROTEIN_G: f64 = 150.0;
    /// Default carbohydrates (g/day)
    pub const CARBS_G: f64 = 250.0;
    /// Default fat (g/day)
    pub const FAT_G: f64 = 65.0;
}

/// Insight rule thresholds (percent of target)
pub mod insight_thresholds {
    /// Calories below this percent of target trigger `LowEnergy`
    pub const LOW_ENERGY_PERCENT: f64 = 50.0;
    /// Protein above this percent of target triggers `ProteinGoalNear`
    pub const PROTEIN_NEAR_PERCENT: f64 = 80.0;
}

/// Meal logging defaults
pub mod meal_defaults {
    /// Portion label used when the logger leaves it blank
    pub const PORTION: &str = "100g";
    /// Servings used when the logger leaves it blank
    pub const SERVINGS: f64 = 1.0;
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Main service name
    pub const NUTRILY: &str = "nutrily";
    /// Command-line tool
    pub const NUTRILY_CLI: &str = "nutrily-cli";
}
